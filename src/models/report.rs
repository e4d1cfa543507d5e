// src/models/report.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::service_order::ServiceOrder;

/// Visão achatada de uma ordem de serviço com os dados do cliente e do
/// aparelho já juntados.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderView {
    pub id: i64,
    pub client: String,
    pub email: String,
    pub cpf: String,
    pub model: String,
    pub canceled: bool,
    #[sqlx(rename = "beginDate")]
    pub begin_date: NaiveDate,
    #[sqlx(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

/// Um serviço vinculado a uma ordem, com tipo e preço.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderServiceItem {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
}

/// Ranking de popularidade: quantas ordens usaram cada serviço.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceRank {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub service_type: String,
    pub quantity: i64,
}

/// Total de ordens por cliente (clientes sem ordem entram com zero).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClientOrderTotal {
    pub name: String,
    #[sqlx(rename = "OS")]
    #[serde(rename = "OS")]
    pub orders: i64,
}

/// Ordens concluídas dentro de um período, com o total junto.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodOrderTotal {
    pub total: i64,
    pub service_orders: Vec<ServiceOrder>,
}

/// Rendimento de um serviço no período (ordens concluídas × preço).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceRevenue {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub service_type: String,
    #[sqlx(rename = "Rendimento")]
    #[serde(rename = "Rendimento")]
    pub revenue: f64,
}

/// Duração média (em dias) das ordens concluídas que usaram o serviço.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceDuration {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub service_type: String,
    #[sqlx(rename = "averageDuration")]
    #[serde(rename = "averageDuration")]
    pub average_duration: f64,
}

/// Média escalar devolvida pelos relatórios de valor/quantidade.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AverageResult {
    pub average: f64,
}

/// Parâmetros de período (`beginDate`/`endDate`) das rotas de relatório.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    pub begin_date: String,
    pub end_date: String,
}
