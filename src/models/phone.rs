// src/models/phone.rs

use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::db::crud::{Table, TableRecord, TableRow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Phone {
    pub id: i64,
    pub model: String,
}

impl TableRow for Phone {
    const TABLE: Table = Table::Phone;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPhone {
    pub model: String,
}

impl TableRecord for NewPhone {
    const TABLE: Table = Table::Phone;
    const COLUMNS: &'static [&'static str] = &["model"];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.model.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePhone {
    pub id: i64,
    pub model: String,
}
