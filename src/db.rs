pub mod crud;
pub use crud::{Crud, InsertedId, Table, TableRecord, TableRow};
pub mod service_order_repo;
pub use service_order_repo::ServiceOrderRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
pub mod seed;

/// Migrações embutidas no binário (pasta `migrations/`).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
