// src/services/service_service.rs

use crate::{
    common::error::AppError,
    db::{Crud, InsertedId, ReportRepository},
    models::report::ServiceRank,
    models::service::{NewService, Service, ServiceDeletedFlag},
    models::upload::BulkReport,
};

#[derive(Clone)]
pub struct ServiceService {
    crud: Crud,
    reports: ReportRepository,
}

impl ServiceService {
    pub fn new(crud: Crud, reports: ReportRepository) -> Self {
        Self { crud, reports }
    }

    pub async fn insert(&self, service_type: &str, price: f64) -> Result<InsertedId, AppError> {
        if service_type.is_empty() {
            return Err(AppError::Validation("service type must not be empty".into()));
        }
        let new_service = NewService {
            service_type: service_type.to_owned(),
            price,
        };
        self.crud.insert(&new_service, false).await
    }

    pub async fn insert_many(&self, services: Vec<NewService>) -> BulkReport {
        let mut report = BulkReport {
            inserted: 0,
            failed: 0,
        };
        for service in &services {
            match self.insert(&service.service_type, service.price).await {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    tracing::warn!("carga de serviço falhou: {}", e);
                    report.failed += 1;
                }
            }
        }
        report
    }

    /// Soft delete: liga a flag `deleted` e mantém a linha recuperável.
    pub async fn remove(&self, id: i64) -> Result<u64, AppError> {
        if self.crud.find_one::<Service>(id).await?.is_none() {
            return Err(AppError::Referential("invalid service id".into()));
        }
        self.crud
            .update(id, &ServiceDeletedFlag { deleted: true }, false)
            .await
    }

    pub async fn find(&self) -> Result<Vec<Service>, AppError> {
        self.crud.find::<Service>().await
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Service>, AppError> {
        self.crud.find_one::<Service>(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        service_type: &str,
        price: f64,
    ) -> Result<u64, AppError> {
        let new_service = NewService {
            service_type: service_type.to_owned(),
            price,
        };
        self.crud.update(id, &new_service, false).await
    }

    pub async fn find_rank_service_by_model(&self) -> Result<Vec<ServiceRank>, AppError> {
        self.reports.find_rank_service_by_model().await
    }
}
