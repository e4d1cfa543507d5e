// src/db/crud.rs

use serde::Serialize;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{Executor, Sqlite};

use crate::common::error::AppError;

/// Conjunto fechado de tabelas do domínio.
///
/// Substitui o despacho por nome-de-tabela-em-string: cada operação genérica
/// recebe um descritor tipado, e o esquema de cada tabela fica amarrado em
/// tempo de compilação via [`TableRecord`] / [`TableRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Client,
    Phone,
    Service,
    ServiceOrder,
    ServiceOrderHasService,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Client => "Client",
            Table::Phone => "Phone",
            Table::Service => "Service",
            Table::ServiceOrder => "ServiceOrder",
            Table::ServiceOrderHasService => "ServiceOrderHasService",
        }
    }
}

/// Conteúdo gravável em uma tabela: colunas na ordem em que `bind` as liga.
pub trait TableRecord {
    const TABLE: Table;
    const COLUMNS: &'static [&'static str];

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;
}

/// Linha legível de uma tabela (projeção completa, `SELECT *`).
pub trait TableRow: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: Table;
}

/// Id gerado por um insert.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InsertedId {
    pub id: i64,
}

/// A fachada genérica de acesso a dados usada por todos os módulos de
/// entidade. É o único componente que fala diretamente com o banco.
///
/// A pool é injetada na construção — nada de conexão global compartilhada —
/// então os testes criam instâncias isoladas em memória.
#[derive(Clone)]
pub struct Crud {
    pool: SqlitePool,
}

impl Crud {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // =========================================================================
    //  Escritas (transacionais; `force_rollback` é a válvula de escape dos
    //  testes para verificar o rollback sem sujar o estado persistido)
    // =========================================================================

    /// Insere uma linha e devolve o id gerado.
    pub async fn insert<R: TableRecord>(
        &self,
        content: &R,
        force_rollback: bool,
    ) -> Result<InsertedId, AppError> {
        let mut tx = self.pool.begin().await?;
        let inserted = Self::insert_with(&mut *tx, content).await?;
        if force_rollback {
            tx.rollback().await?;
        } else {
            tx.commit().await?;
        }
        Ok(inserted)
    }

    /// Variante que roda dentro de um executor fornecido pelo chamador, para
    /// operações de múltiplos passos dentro de uma única transação.
    pub async fn insert_with<'e, R, E>(executor: E, content: &R) -> Result<InsertedId, AppError>
    where
        R: TableRecord,
        E: Executor<'e, Database = Sqlite>,
    {
        let columns = R::COLUMNS.join(", ");
        let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE.name(),
            columns,
            placeholders
        );

        let result = content
            .bind(sqlx::query(&sql))
            .execute(executor)
            .await
            .map_err(|e| {
                tracing::debug!("insert em {} falhou: {}", R::TABLE.name(), e);
                AppError::CouldNotInsert
            })?;

        Ok(InsertedId {
            id: result.last_insert_rowid(),
        })
    }

    /// Remove por chave primária. Devolve o número de linhas afetadas.
    pub async fn remove(
        &self,
        table: Table,
        id: i64,
        force_rollback: bool,
    ) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let sql = format!("DELETE FROM {} WHERE id = ?", table.name());

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::debug!("remove em {} falhou: {}", table.name(), e);
                AppError::CouldNotRemove
            })?;

        if force_rollback {
            tx.rollback().await?;
        } else {
            tx.commit().await?;
        }
        Ok(result.rows_affected())
    }

    /// Remove por par de chaves (tabelas de ligação sem chave primária).
    pub async fn remove_no_primary(
        &self,
        table: Table,
        id_1: i64,
        id_2: i64,
        field_1: &str,
        field_2: &str,
        force_rollback: bool,
    ) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND {} = ?",
            table.name(),
            field_1,
            field_2
        );

        let result = sqlx::query(&sql)
            .bind(id_1)
            .bind(id_2)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::debug!("remove em {} falhou: {}", table.name(), e);
                AppError::CouldNotRemove
            })?;

        if force_rollback {
            tx.rollback().await?;
        } else {
            tx.commit().await?;
        }
        Ok(result.rows_affected())
    }

    /// Atualiza por chave primária. Devolve o número de linhas afetadas.
    pub async fn update<R: TableRecord>(
        &self,
        id: i64,
        content: &R,
        force_rollback: bool,
    ) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let affected = Self::update_with(&mut *tx, id, content).await?;
        if force_rollback {
            tx.rollback().await?;
        } else {
            tx.commit().await?;
        }
        Ok(affected)
    }

    pub async fn update_with<'e, R, E>(executor: E, id: i64, content: &R) -> Result<u64, AppError>
    where
        R: TableRecord,
        E: Executor<'e, Database = Sqlite>,
    {
        let assignments = R::COLUMNS
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", R::TABLE.name(), assignments);

        let result = content
            .bind(sqlx::query(&sql))
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| {
                tracing::debug!("update em {} falhou: {}", R::TABLE.name(), e);
                AppError::CouldNotUpdate
            })?;

        Ok(result.rows_affected())
    }

    /// Atualiza por par de chaves (tabelas de ligação sem chave primária).
    pub async fn update_no_primary<R: TableRecord>(
        &self,
        id_1: i64,
        id_2: i64,
        field_1: &str,
        field_2: &str,
        content: &R,
        force_rollback: bool,
    ) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let assignments = R::COLUMNS
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ? AND {} = ?",
            R::TABLE.name(),
            assignments,
            field_1,
            field_2
        );

        let result = content
            .bind(sqlx::query(&sql))
            .bind(id_1)
            .bind(id_2)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::debug!("update em {} falhou: {}", R::TABLE.name(), e);
                AppError::CouldNotUpdate
            })?;

        if force_rollback {
            tx.rollback().await?;
        } else {
            tx.commit().await?;
        }
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  Leituras (nunca transacionais; erros do banco são repassados)
    // =========================================================================

    /// Devolve todas as linhas da tabela.
    pub async fn find<R: TableRow>(&self) -> Result<Vec<R>, AppError> {
        let sql = format!("SELECT * FROM {}", R::TABLE.name());
        Ok(sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?)
    }

    /// Busca por chave primária. Ausência é `None`, nunca erro.
    pub async fn find_one<R: TableRow>(&self, id: i64) -> Result<Option<R>, AppError> {
        Self::find_one_with(&self.pool, id).await
    }

    pub async fn find_one_with<'e, R, E>(executor: E, id: i64) -> Result<Option<R>, AppError>
    where
        R: TableRow,
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("SELECT * FROM {} WHERE id = ?", R::TABLE.name());
        Ok(sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?)
    }

    /// Busca por par de chaves (tabelas de ligação sem chave primária).
    pub async fn find_one_no_primary<R: TableRow>(
        &self,
        id_1: i64,
        id_2: i64,
        field_1: &str,
        field_2: &str,
    ) -> Result<Option<R>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ? AND {} = ?",
            R::TABLE.name(),
            field_1,
            field_2
        );
        Ok(sqlx::query_as::<_, R>(&sql)
            .bind(id_1)
            .bind(id_2)
            .fetch_optional(&self.pool)
            .await?)
    }
}
