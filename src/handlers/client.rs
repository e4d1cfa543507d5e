// src/handlers/client.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::client::{NewClient, UpdateClient},
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.client_service.find().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.client_service.find_one(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewClient>,
) -> Result<impl IntoResponse, AppError> {
    let inserted = state
        .client_service
        .insert(&payload.name, &payload.email, &payload.cpf, false)
        .await?;
    Ok(Json(inserted))
}

pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateClient>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .client_service
        .update(
            payload.id,
            &payload.name,
            &payload.email,
            &payload.cpf,
            false,
        )
        .await?;
    Ok(Json(affected))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.client_service.remove(id, false).await?))
}

// POST /api/clients — entrada em lote usada pelo colaborador de upload.
pub async fn bulk(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewClient>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.client_service.insert_many(payload).await))
}
