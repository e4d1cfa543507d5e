// src/db/service_order_repo.rs

use sqlx::sqlite::SqlitePool;

use crate::{
    common::error::AppError,
    models::report::{OrderServiceItem, ServiceOrderView},
};

/// Leituras juntadas de ordens de serviço (ordem ⋈ cliente ⋈ aparelho).
#[derive(Clone)]
pub struct ServiceOrderRepository {
    pool: SqlitePool,
}

impl ServiceOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Todas as ordens, com nome/email/cpf do cliente e modelo do aparelho.
    pub async fn find_service_order(&self) -> Result<Vec<ServiceOrderView>, AppError> {
        let orders = sqlx::query_as::<_, ServiceOrderView>(
            r#"
            SELECT
                so.id,
                c.name AS client,
                c.email,
                c.cpf,
                p.model,
                so.canceled,
                so.beginDate,
                so.endDate
            FROM ServiceOrder so
            JOIN Client c ON c.id = so.idClient
            JOIN Phone p ON p.id = so.idPhone
            ORDER BY so.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Uma ordem pelo id, na mesma visão achatada. Ausência é `None`.
    pub async fn find_one_service_order(
        &self,
        id: i64,
    ) -> Result<Option<ServiceOrderView>, AppError> {
        let order = sqlx::query_as::<_, ServiceOrderView>(
            r#"
            SELECT
                so.id,
                c.name AS client,
                c.email,
                c.cpf,
                p.model,
                so.canceled,
                so.beginDate,
                so.endDate
            FROM ServiceOrder so
            JOIN Client c ON c.id = so.idClient
            JOIN Phone p ON p.id = so.idPhone
            WHERE so.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Serviços vinculados a uma ordem, com tipo e preço para relatório.
    pub async fn find_service_by_order_service(
        &self,
        id: i64,
    ) -> Result<Vec<OrderServiceItem>, AppError> {
        let services = sqlx::query_as::<_, OrderServiceItem>(
            r#"
            SELECT s.id, s.type, s.price
            FROM ServiceOrderHasService h
            JOIN Service s ON s.id = h.idService
            WHERE h.idServiceOrder = ?
            ORDER BY s.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }
}
