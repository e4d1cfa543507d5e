// src/services/order_link_service.rs

use crate::{
    common::error::AppError,
    db::{Crud, InsertedId, Table},
    models::service::Service,
    models::service_order::{ServiceOrder, ServiceOrderHasService},
};

// Os dois campos que fazem as vezes de chave na tabela de ligação.
const FIELD_ORDER: &str = "idServiceOrder";
const FIELD_SERVICE: &str = "idService";

/// Módulo de entidade da tabela de ligação ServiceOrderHasService, toda
/// operada pelas variantes sem chave primária do acessor.
#[derive(Clone)]
pub struct OrderLinkService {
    crud: Crud,
}

impl OrderLinkService {
    pub fn new(crud: Crud) -> Self {
        Self { crud }
    }

    pub async fn insert(
        &self,
        id_service_order: i64,
        id_service: i64,
    ) -> Result<InsertedId, AppError> {
        if self
            .crud
            .find_one::<ServiceOrder>(id_service_order)
            .await?
            .is_none()
        {
            return Err(AppError::Referential("invalid service order id".into()));
        }
        if self.crud.find_one::<Service>(id_service).await?.is_none() {
            return Err(AppError::Referential("invalid service id".into()));
        }

        let link = ServiceOrderHasService {
            id_service_order,
            id_service,
        };
        self.crud.insert(&link, false).await
    }

    pub async fn remove(&self, id_service_order: i64, id_service: i64) -> Result<u64, AppError> {
        self.crud
            .remove_no_primary(
                Table::ServiceOrderHasService,
                id_service_order,
                id_service,
                FIELD_ORDER,
                FIELD_SERVICE,
                false,
            )
            .await
    }

    pub async fn find(&self) -> Result<Vec<ServiceOrderHasService>, AppError> {
        self.crud.find::<ServiceOrderHasService>().await
    }

    pub async fn find_one(
        &self,
        id_service_order: i64,
        id_service: i64,
    ) -> Result<Option<ServiceOrderHasService>, AppError> {
        self.crud
            .find_one_no_primary::<ServiceOrderHasService>(
                id_service_order,
                id_service,
                FIELD_ORDER,
                FIELD_SERVICE,
            )
            .await
    }

    pub async fn update(
        &self,
        old_id_service_order: i64,
        old_id_service: i64,
        id_service_order: i64,
        id_service: i64,
    ) -> Result<u64, AppError> {
        let link = ServiceOrderHasService {
            id_service_order,
            id_service,
        };
        self.crud
            .update_no_primary(
                old_id_service_order,
                old_id_service,
                FIELD_ORDER,
                FIELD_SERVICE,
                &link,
                false,
            )
            .await
    }
}
