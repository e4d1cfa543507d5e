// src/handlers/service_order.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::service_order::{ServiceOrderPayload, UpdateOrderLink, UpdateServiceOrder},
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_order_service.find().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_order_service.find_one(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ServiceOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    let inserted = state
        .service_order_service
        .insert(
            payload.id_client,
            payload.id_phone,
            &payload.services,
            &payload.begin_date,
        )
        .await?;
    Ok(Json(inserted))
}

pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateServiceOrder>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .service_order_service
        .update(
            payload.id,
            payload.id_client,
            payload.id_phone,
            &payload.begin_date,
            payload.end_date.as_deref(),
        )
        .await?;
    Ok(Json(affected))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_order_service.remove(id).await?))
}

// GET /api/serviceOrder/{id}/services — serviços vinculados à ordem.
pub async fn services(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service_order_service.services(id).await?))
}

// ---------------------------------------------------------------------------
//  Tabela de ligação ServiceOrderHasService (chave composta nos paths)
// ---------------------------------------------------------------------------

pub async fn list_links(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.order_link_service.find().await?))
}

pub async fn get_link(
    State(state): State<AppState>,
    Path((id_service_order, id_service)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let link = state
        .order_link_service
        .find_one(id_service_order, id_service)
        .await?;
    Ok(Json(link))
}

pub async fn create_link(
    State(state): State<AppState>,
    Json(payload): Json<crate::models::service_order::ServiceOrderHasService>,
) -> Result<impl IntoResponse, AppError> {
    let inserted = state
        .order_link_service
        .insert(payload.id_service_order, payload.id_service)
        .await?;
    Ok(Json(inserted))
}

pub async fn update_link(
    State(state): State<AppState>,
    Json(payload): Json<UpdateOrderLink>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .order_link_service
        .update(
            payload.old_id_service_order,
            payload.old_id_service,
            payload.id_service_order,
            payload.id_service,
        )
        .await?;
    Ok(Json(affected))
}

pub async fn remove_link(
    State(state): State<AppState>,
    Path((id_service_order, id_service)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .order_link_service
        .remove(id_service_order, id_service)
        .await?;
    Ok(Json(affected))
}
