// src/handlers/phone.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::phone::{NewPhone, UpdatePhone},
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.phone_service.find().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.phone_service.find_one(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewPhone>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.phone_service.insert(&payload.model, false).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePhone>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .phone_service
        .update(payload.id, &payload.model, false)
        .await?;
    Ok(Json(affected))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.phone_service.remove(id, false).await?))
}

pub async fn bulk(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewPhone>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.phone_service.insert_many(payload).await))
}
