// Infraestrutura compartilhada dos testes de integração: banco SQLite em
// memória, migrado e populado com as fixtures de desenvolvimento.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use assistencia_backend::db::{self, seed};

pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("URL do banco em memória")
        .foreign_keys(true);

    // Uma única conexão persistente: cada conexão :memory: nova seria um
    // banco vazio diferente.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("pool em memória");

    db::MIGRATOR.run(&pool).await.expect("migrações");
    seed::run(&pool).await.expect("fixtures");
    pool
}
