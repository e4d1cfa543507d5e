// src/handlers/service.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::service::{NewService, UpdateService},
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_service.find().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_service.find_one(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewService>,
) -> Result<impl IntoResponse, AppError> {
    let inserted = state
        .service_service
        .insert(&payload.service_type, payload.price)
        .await?;
    Ok(Json(inserted))
}

pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateService>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .service_service
        .update(payload.id, &payload.service_type, payload.price)
        .await?;
    Ok(Json(affected))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_service.remove(id).await?))
}

pub async fn bulk(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewService>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_service.insert_many(payload).await))
}
