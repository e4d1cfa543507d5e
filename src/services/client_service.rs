// src/services/client_service.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    common::error::AppError,
    db::{Crud, InsertedId, Table},
    models::client::{Client, NewClient},
    models::upload::BulkReport,
};

// O mesmo padrão simples do contrato: algo@algo.dominio
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("regex de e-mail válida"));

#[derive(Clone)]
pub struct ClientService {
    crud: Crud,
}

impl ClientService {
    pub fn new(crud: Crud) -> Self {
        Self { crud }
    }

    // Validação toda antes de qualquer chamada ao banco, com curto-circuito
    // imediato no primeiro problema.
    fn validate(name: &str, email: &str, cpf: &str) -> Result<(), AppError> {
        if cpf.len() != 11 {
            return Err(AppError::Validation("invalid cpf size".into()));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(AppError::Validation("invalid email".into()));
        }
        if name.is_empty() {
            return Err(AppError::Validation("client name must not be empty".into()));
        }
        Ok(())
    }

    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        cpf: &str,
        force_rollback: bool,
    ) -> Result<InsertedId, AppError> {
        Self::validate(name, email, cpf)?;
        let new_client = NewClient {
            name: name.to_owned(),
            email: email.to_owned(),
            cpf: cpf.to_owned(),
        };
        self.crud.insert(&new_client, force_rollback).await
    }

    /// Ponto de entrada em lote do colaborador de upload: insere N linhas e
    /// relata quantas entraram e quantas falharam.
    pub async fn insert_many(&self, clients: Vec<NewClient>) -> BulkReport {
        let mut report = BulkReport {
            inserted: 0,
            failed: 0,
        };
        for client in &clients {
            match self
                .insert(&client.name, &client.email, &client.cpf, false)
                .await
            {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    tracing::warn!("carga de cliente falhou: {}", e);
                    report.failed += 1;
                }
            }
        }
        report
    }

    // Client é removido de verdade (hard delete), diferente de Service e
    // ServiceOrder.
    pub async fn remove(&self, id: i64, force_rollback: bool) -> Result<u64, AppError> {
        self.crud.remove(Table::Client, id, force_rollback).await
    }

    pub async fn find(&self) -> Result<Vec<Client>, AppError> {
        self.crud.find::<Client>().await
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Client>, AppError> {
        self.crud.find_one::<Client>(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        cpf: &str,
        force_rollback: bool,
    ) -> Result<u64, AppError> {
        let new_client = NewClient {
            name: name.to_owned(),
            email: email.to_owned(),
            cpf: cpf.to_owned(),
        };
        self.crud.update(id, &new_client, force_rollback).await
    }
}
