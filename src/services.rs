pub mod client_service;
pub use client_service::ClientService;
pub mod phone_service;
pub use phone_service::PhoneService;
pub mod service_service;
pub use service_service::ServiceService;
pub mod service_order_service;
pub use service_order_service::ServiceOrderService;
pub mod order_link_service;
pub use order_link_service::OrderLinkService;
pub mod report_service;
pub use report_service::ReportService;
