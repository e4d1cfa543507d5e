use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
//
// Disciplina única de propagação: toda operação devolve `Result<_, AppError>`.
// "Não encontrado" nunca é erro — é coleção vazia / `None`.
#[derive(Debug, Error)]
pub enum AppError {
    // Entrada malformada, rejeitada antes de qualquer chamada ao banco.
    #[error("{0}")]
    Validation(String),

    // Entidade referenciada não existe (ex: "client doesn't exist").
    #[error("{0}")]
    Referential(String),

    // Violações de constraint normalizadas para as strings fixas do contrato.
    #[error("could not insert")]
    CouldNotInsert,

    #[error("could not remove")]
    CouldNotRemove,

    #[error("could not update")]
    CouldNotUpdate,

    // Erros do banco no caminho de leitura são repassados como estão.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Toda falha de validação ou de banco vira 400 com payload de erro,
        // conforme o contrato da camada HTTP.
        if let AppError::Database(ref e) = self {
            tracing::error!("Erro de banco de dados: {}", e);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
