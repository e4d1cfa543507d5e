// src/models/client.rs

use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::db::crud::{Table, TableRecord, TableRow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
}

impl TableRow for Client {
    const TABLE: Table = Table::Client;
}

/// Conteúdo gravável de um Client (insert e update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub cpf: String,
}

impl TableRecord for NewClient {
    const TABLE: Table = Table::Client;
    const COLUMNS: &'static [&'static str] = &["name", "email", "cpf"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.name.as_str())
            .bind(self.email.as_str())
            .bind(self.cpf.as_str())
    }
}

/// Payload do PUT /client.
#[derive(Debug, Deserialize)]
pub struct UpdateClient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
}
