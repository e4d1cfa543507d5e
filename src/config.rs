// src/config.rs

use std::{env, str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::db::{Crud, ReportRepository, ServiceOrderRepository};
use crate::services::{
    ClientService, OrderLinkService, PhoneService, ReportService, ServiceOrderService,
    ServiceService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub client_service: ClientService,
    pub phone_service: PhoneService,
    pub service_service: ServiceService,
    pub service_order_service: ServiceOrderService,
    pub order_link_service: OrderLinkService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.sqlite3".to_string());

        // foreign_keys precisa ser ligado por conexão no SQLite, senão as
        // constraints referenciais do esquema não valem nada.
        let options = SqliteConnectOptions::from_str(&database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool))
    }

    /// Monta o grafo de dependências a partir de uma pool já criada. Os
    /// testes usam este caminho com uma pool em memória.
    pub fn with_pool(db_pool: SqlitePool) -> Self {
        let crud = Crud::new(db_pool.clone());
        let order_repo = ServiceOrderRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());

        Self {
            client_service: ClientService::new(crud.clone()),
            phone_service: PhoneService::new(crud.clone()),
            service_service: ServiceService::new(crud.clone(), report_repo.clone()),
            service_order_service: ServiceOrderService::new(crud.clone(), order_repo),
            order_link_service: OrderLinkService::new(crud),
            report_service: ReportService::new(report_repo),
            db_pool,
        }
    }
}
