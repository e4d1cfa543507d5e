// src/services/phone_service.rs

use crate::{
    common::error::AppError,
    db::{Crud, InsertedId, Table},
    models::phone::{NewPhone, Phone},
    models::upload::BulkReport,
};

#[derive(Clone)]
pub struct PhoneService {
    crud: Crud,
}

impl PhoneService {
    pub fn new(crud: Crud) -> Self {
        Self { crud }
    }

    pub async fn insert(&self, model: &str, force_rollback: bool) -> Result<InsertedId, AppError> {
        if model.is_empty() {
            return Err(AppError::Validation("phone model must not be empty".into()));
        }
        let new_phone = NewPhone {
            model: model.to_owned(),
        };
        self.crud.insert(&new_phone, force_rollback).await
    }

    pub async fn insert_many(&self, phones: Vec<NewPhone>) -> BulkReport {
        let mut report = BulkReport {
            inserted: 0,
            failed: 0,
        };
        for phone in &phones {
            match self.insert(&phone.model, false).await {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    tracing::warn!("carga de aparelho falhou: {}", e);
                    report.failed += 1;
                }
            }
        }
        report
    }

    pub async fn remove(&self, id: i64, force_rollback: bool) -> Result<u64, AppError> {
        self.crud.remove(Table::Phone, id, force_rollback).await
    }

    pub async fn find(&self) -> Result<Vec<Phone>, AppError> {
        self.crud.find::<Phone>().await
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Phone>, AppError> {
        self.crud.find_one::<Phone>(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        model: &str,
        force_rollback: bool,
    ) -> Result<u64, AppError> {
        let new_phone = NewPhone {
            model: model.to_owned(),
        };
        self.crud.update(id, &new_phone, force_rollback).await
    }
}
