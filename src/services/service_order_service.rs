// src/services/service_order_service.rs

use crate::{
    common::dates::normalize_date,
    common::error::AppError,
    db::{Crud, InsertedId, ServiceOrderRepository},
    models::client::Client,
    models::phone::Phone,
    models::report::{OrderServiceItem, ServiceOrderView},
    models::service::Service,
    models::service_order::{
        NewServiceOrder, ServiceOrder, ServiceOrderCanceledFlag, ServiceOrderChanges,
        ServiceOrderHasService,
    },
};

#[derive(Clone)]
pub struct ServiceOrderService {
    crud: Crud,
    repo: ServiceOrderRepository,
}

impl ServiceOrderService {
    pub fn new(crud: Crud, repo: ServiceOrderRepository) -> Self {
        Self { crud, repo }
    }

    /// Abre uma ordem de serviço com sua lista de serviços.
    ///
    /// As checagens referenciais vêm antes de qualquer escrita — aparelho
    /// primeiro, depois cliente — e a ordem mais seus vínculos entram numa
    /// única transação: se qualquer id de serviço for inválido, nada persiste.
    pub async fn insert(
        &self,
        id_client: i64,
        id_phone: i64,
        services: &[i64],
        begin_date: &str,
    ) -> Result<InsertedId, AppError> {
        let begin_date = normalize_date(begin_date)?;

        let phone: Option<Phone> = Crud::find_one_with(self.crud.pool(), id_phone).await?;
        if phone.is_none() {
            return Err(AppError::Referential("phone doesn't exist".into()));
        }
        let client: Option<Client> = Crud::find_one_with(self.crud.pool(), id_client).await?;
        if client.is_none() {
            return Err(AppError::Referential("client doesn't exist".into()));
        }

        let mut tx = self.crud.pool().begin().await?;

        let new_order = NewServiceOrder {
            id_client,
            id_phone,
            begin_date,
        };
        let inserted = Crud::insert_with(&mut *tx, &new_order).await?;

        for &id_service in services {
            let service: Option<Service> = Crud::find_one_with(&mut *tx, id_service).await?;
            if service.is_none() {
                // O drop da transação desfaz a ordem já inserida.
                return Err(AppError::Referential(
                    "could not insert, invalid service".into(),
                ));
            }
            let link = ServiceOrderHasService {
                id_service_order: inserted.id,
                id_service,
            };
            Crud::insert_with(&mut *tx, &link).await?;
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Soft delete: marca a ordem como cancelada e mantém a linha.
    pub async fn remove(&self, id: i64) -> Result<u64, AppError> {
        if self.crud.find_one::<ServiceOrder>(id).await?.is_none() {
            return Err(AppError::Referential("invalid service order id".into()));
        }
        self.crud
            .update(id, &ServiceOrderCanceledFlag { canceled: true }, false)
            .await
    }

    /// Todas as ordens na visão achatada (cliente + aparelho juntados).
    pub async fn find(&self) -> Result<Vec<ServiceOrderView>, AppError> {
        self.repo.find_service_order().await
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<ServiceOrderView>, AppError> {
        self.repo.find_one_service_order(id).await
    }

    /// Serviços vinculados a uma ordem, com tipo e preço.
    pub async fn services(&self, id: i64) -> Result<Vec<OrderServiceItem>, AppError> {
        self.repo.find_service_by_order_service(id).await
    }

    /// Atualiza a ordem; `end_date` presente conclui a ordem.
    pub async fn update(
        &self,
        id: i64,
        id_client: i64,
        id_phone: i64,
        begin_date: &str,
        end_date: Option<&str>,
    ) -> Result<u64, AppError> {
        let begin_date = normalize_date(begin_date)?;
        let end_date = end_date.map(normalize_date).transpose()?;

        let changes = ServiceOrderChanges {
            id_client,
            id_phone,
            begin_date,
            end_date,
        };
        self.crud.update(id, &changes, false).await
    }
}
