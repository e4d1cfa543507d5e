// src/handlers/report.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::report::{AverageResult, PeriodQuery},
};

// GET /api/rankServiceByModel
pub async fn rank_service_by_model(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.report_service.rank_service_by_model().await?))
}

// GET /api/totalServiceOrderByClient
pub async fn total_service_order_by_client(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let totals = state.report_service.total_service_order_by_client().await?;
    Ok(Json(totals))
}

// GET /api/totalServiceOrderByPeriod?beginDate=...&endDate=...
pub async fn total_service_order_by_period(
    State(state): State<AppState>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let total = state
        .report_service
        .total_service_order_by_period(&period.begin_date, &period.end_date)
        .await?;
    Ok(Json(total))
}

// GET /api/totalValueFromServicesByPeriod?beginDate=...&endDate=...
pub async fn total_value_from_services_by_period(
    State(state): State<AppState>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let revenues = state
        .report_service
        .total_value_from_services_by_period(&period.begin_date, &period.end_date)
        .await?;
    Ok(Json(revenues))
}

// GET /api/averageValueFromServicesOrderByPeriod?beginDate=...&endDate=...
pub async fn average_value_from_services_order_by_period(
    State(state): State<AppState>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let average = state
        .report_service
        .average_value_from_services_order_by_period(&period.begin_date, &period.end_date)
        .await?;
    Ok(Json(AverageResult { average }))
}

// GET /api/averageServiceOrderQuantityByPeriod?beginDate=...&endDate=...
pub async fn average_service_order_quantity_by_period(
    State(state): State<AppState>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let average = state
        .report_service
        .average_service_order_quantity_by_period(&period.begin_date, &period.end_date)
        .await?;
    Ok(Json(AverageResult { average }))
}

// GET /api/averageServiceDuration
pub async fn average_service_duration(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.report_service.average_service_duration().await?))
}
