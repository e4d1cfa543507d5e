// src/models/service.rs

use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::db::crud::{Table, TableRecord, TableRow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
    // Remoção de Service é um soft delete: a linha fica, com a flag ligada.
    pub deleted: bool,
}

impl TableRow for Service {
    const TABLE: Table = Table::Service;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
}

impl TableRecord for NewService {
    const TABLE: Table = Table::Service;
    const COLUMNS: &'static [&'static str] = &["type", "price"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.service_type.as_str()).bind(self.price)
    }
}

/// Marca o soft delete (`deleted = true`) via o update genérico.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDeletedFlag {
    pub deleted: bool,
}

impl TableRecord for ServiceDeletedFlag {
    const TABLE: Table = Table::Service;
    const COLUMNS: &'static [&'static str] = &["deleted"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.deleted)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateService {
    pub id: i64,
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
}
