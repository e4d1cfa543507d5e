// src/db/report_repo.rs

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use crate::{
    common::error::AppError,
    models::report::{ClientOrderTotal, ServiceDuration, ServiceRank, ServiceRevenue},
    models::service_order::ServiceOrder,
};

/// Agregados de relatório computados direto em SQL, sem materializar os
/// objetos por entidade no meio do caminho.
#[derive(Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Top 5 serviços por quantidade de ordens. Empates são resolvidos pelo
    /// id do serviço, a ordem estável que o SQLite nos dá aqui.
    pub async fn find_rank_service_by_model(&self) -> Result<Vec<ServiceRank>, AppError> {
        let rank = sqlx::query_as::<_, ServiceRank>(
            r#"
            SELECT s.id, s.type, COUNT(h.idServiceOrder) AS quantity
            FROM Service s
            JOIN ServiceOrderHasService h ON h.idService = s.id
            GROUP BY s.id, s.type
            ORDER BY quantity DESC, s.id
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rank)
    }

    /// Uma linha por cliente com a contagem de ordens (zero incluso).
    pub async fn total_service_order_by_client(&self) -> Result<Vec<ClientOrderTotal>, AppError> {
        let totals = sqlx::query_as::<_, ClientOrderTotal>(
            r#"
            SELECT c.name, COUNT(so.id) AS OS
            FROM Client c
            LEFT JOIN ServiceOrder so ON so.idClient = c.id
            GROUP BY c.id, c.name
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    /// Ordens concluídas dentro do período (limites inclusivos). Ordens sem
    /// `endDate` ficam de fora: não há como caberem num "entre".
    pub async fn total_service_order_by_period(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ServiceOrder>, AppError> {
        let orders = sqlx::query_as::<_, ServiceOrder>(
            r#"
            SELECT *
            FROM ServiceOrder
            WHERE beginDate >= ?
              AND endDate IS NOT NULL
              AND endDate <= ?
            ORDER BY id
            "#,
        )
        .bind(begin)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Rendimento por serviço no período: ordens concluídas que usaram o
    /// serviço × preço. Serviço sem uso no período rende 0, não some.
    pub async fn total_value_from_services_by_period(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ServiceRevenue>, AppError> {
        let revenues = sqlx::query_as::<_, ServiceRevenue>(
            r#"
            SELECT s.id, s.type, COUNT(so.id) * s.price AS Rendimento
            FROM Service s
            LEFT JOIN ServiceOrderHasService h ON h.idService = s.id
            LEFT JOIN ServiceOrder so
                ON so.id = h.idServiceOrder
               AND so.beginDate >= ?
               AND so.endDate IS NOT NULL
               AND so.endDate <= ?
            GROUP BY s.id, s.type, s.price
            ORDER BY s.id
            "#,
        )
        .bind(begin)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(revenues)
    }

    /// Média, entre todos os serviços, do valor em ordens ABERTAS no período
    /// (exposição de receita em andamento, não o total concluído acima).
    pub async fn average_value_from_services_order_by_period(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64, AppError> {
        let average = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT AVG(valor)
            FROM (
                SELECT COUNT(so.id) * s.price AS valor
                FROM Service s
                LEFT JOIN ServiceOrderHasService h ON h.idService = s.id
                LEFT JOIN ServiceOrder so
                    ON so.id = h.idServiceOrder
                   AND so.beginDate >= ?
                   AND so.beginDate <= ?
                   AND so.endDate IS NULL
                GROUP BY s.id, s.price
            ) AS uso
            "#,
        )
        .bind(begin)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(average.unwrap_or(0.0))
    }

    /// Razão entre usos de serviço em ordens abertas no período e o total de
    /// ordens iniciadas na janela. Denominador zero devolve 0.
    pub async fn average_service_order_quantity_by_period(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64, AppError> {
        let usages = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM ServiceOrderHasService h
            JOIN ServiceOrder so ON so.id = h.idServiceOrder
            WHERE so.endDate IS NULL
              AND so.beginDate >= ?
              AND so.beginDate <= ?
            "#,
        )
        .bind(begin)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        let orders = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM ServiceOrder
            WHERE beginDate >= ? AND beginDate <= ?
            "#,
        )
        .bind(begin)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        if orders == 0 {
            return Ok(0.0);
        }
        Ok(usages as f64 / orders as f64)
    }

    /// Duração média em dias, por serviço, das ordens já concluídas que o
    /// usaram. Serviço sem ordem concluída não aparece no resultado.
    pub async fn average_service_duration(&self) -> Result<Vec<ServiceDuration>, AppError> {
        let durations = sqlx::query_as::<_, ServiceDuration>(
            r#"
            SELECT s.id, s.type,
                   AVG(julianday(so.endDate) - julianday(so.beginDate)) AS averageDuration
            FROM Service s
            JOIN ServiceOrderHasService h ON h.idService = s.id
            JOIN ServiceOrder so ON so.id = h.idServiceOrder
            WHERE so.endDate IS NOT NULL
            GROUP BY s.id, s.type
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(durations)
    }
}
