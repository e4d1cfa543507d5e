// src/models/service_order.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::db::crud::{Table, TableRecord, TableRow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: i64,
    #[sqlx(rename = "idClient")]
    pub id_client: i64,
    #[sqlx(rename = "idPhone")]
    pub id_phone: i64,
    // Remoção de ServiceOrder é um soft delete: a linha fica, cancelada.
    pub canceled: bool,
    #[sqlx(rename = "beginDate")]
    pub begin_date: NaiveDate,
    #[sqlx(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

impl TableRow for ServiceOrder {
    const TABLE: Table = Table::ServiceOrder;
}

/// Conteúdo gravável do insert de uma ordem (`canceled` e `endDate` ficam
/// nos defaults do esquema).
#[derive(Debug, Clone)]
pub struct NewServiceOrder {
    pub id_client: i64,
    pub id_phone: i64,
    pub begin_date: NaiveDate,
}

impl TableRecord for NewServiceOrder {
    const TABLE: Table = Table::ServiceOrder;
    const COLUMNS: &'static [&'static str] = &["idClient", "idPhone", "beginDate"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.id_client)
            .bind(self.id_phone)
            .bind(self.begin_date)
    }
}

/// Conteúdo gravável do update de uma ordem. `endDate` entra aqui porque é
/// assim que uma ordem é concluída.
#[derive(Debug, Clone)]
pub struct ServiceOrderChanges {
    pub id_client: i64,
    pub id_phone: i64,
    pub begin_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl TableRecord for ServiceOrderChanges {
    const TABLE: Table = Table::ServiceOrder;
    const COLUMNS: &'static [&'static str] = &["idClient", "idPhone", "beginDate", "endDate"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.id_client)
            .bind(self.id_phone)
            .bind(self.begin_date)
            .bind(self.end_date)
    }
}

/// Marca o cancelamento (`canceled = true`) via o update genérico.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOrderCanceledFlag {
    pub canceled: bool,
}

impl TableRecord for ServiceOrderCanceledFlag {
    const TABLE: Table = Table::ServiceOrder;
    const COLUMNS: &'static [&'static str] = &["canceled"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.canceled)
    }
}

/// Linha da tabela de ligação ServiceOrderHasService. Sem chave primária
/// própria, então o mesmo struct serve de leitura e de escrita.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderHasService {
    #[sqlx(rename = "idServiceOrder")]
    pub id_service_order: i64,
    #[sqlx(rename = "idService")]
    pub id_service: i64,
}

impl TableRow for ServiceOrderHasService {
    const TABLE: Table = Table::ServiceOrderHasService;
}

impl TableRecord for ServiceOrderHasService {
    const TABLE: Table = Table::ServiceOrderHasService;
    const COLUMNS: &'static [&'static str] = &["idServiceOrder", "idService"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.id_service_order).bind(self.id_service)
    }
}

// ---------------------------------------------------------------------------
//  Payloads HTTP
// ---------------------------------------------------------------------------

/// Payload do POST /serviceOrder.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderPayload {
    pub id_client: i64,
    pub id_phone: i64,
    pub services: Vec<i64>,
    pub begin_date: String,
}

/// Payload do PUT /serviceOrder.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceOrder {
    pub id: i64,
    pub id_client: i64,
    pub id_phone: i64,
    pub begin_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Payload do PUT /serviceOrderHasService (troca o par de chaves).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderLink {
    pub old_id_service_order: i64,
    pub old_id_service: i64,
    pub id_service_order: i64,
    pub id_service: i64,
}
