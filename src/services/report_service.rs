// src/services/report_service.rs

use crate::{
    common::dates::normalize_date,
    common::error::AppError,
    db::ReportRepository,
    models::report::{
        ClientOrderTotal, PeriodOrderTotal, ServiceDuration, ServiceRank, ServiceRevenue,
    },
};

/// Fachada dos relatórios: normaliza as datas do período e delega os
/// agregados ao repositório.
#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    pub async fn rank_service_by_model(&self) -> Result<Vec<ServiceRank>, AppError> {
        self.repo.find_rank_service_by_model().await
    }

    pub async fn total_service_order_by_client(&self) -> Result<Vec<ClientOrderTotal>, AppError> {
        self.repo.total_service_order_by_client().await
    }

    pub async fn total_service_order_by_period(
        &self,
        begin_date: &str,
        end_date: &str,
    ) -> Result<PeriodOrderTotal, AppError> {
        let begin = normalize_date(begin_date)?;
        let end = normalize_date(end_date)?;
        let service_orders = self.repo.total_service_order_by_period(begin, end).await?;
        Ok(PeriodOrderTotal {
            total: service_orders.len() as i64,
            service_orders,
        })
    }

    pub async fn total_value_from_services_by_period(
        &self,
        begin_date: &str,
        end_date: &str,
    ) -> Result<Vec<ServiceRevenue>, AppError> {
        let begin = normalize_date(begin_date)?;
        let end = normalize_date(end_date)?;
        self.repo
            .total_value_from_services_by_period(begin, end)
            .await
    }

    pub async fn average_value_from_services_order_by_period(
        &self,
        begin_date: &str,
        end_date: &str,
    ) -> Result<f64, AppError> {
        let begin = normalize_date(begin_date)?;
        let end = normalize_date(end_date)?;
        self.repo
            .average_value_from_services_order_by_period(begin, end)
            .await
    }

    pub async fn average_service_order_quantity_by_period(
        &self,
        begin_date: &str,
        end_date: &str,
    ) -> Result<f64, AppError> {
        let begin = normalize_date(begin_date)?;
        let end = normalize_date(end_date)?;
        self.repo
            .average_service_order_quantity_by_period(begin, end)
            .await
    }

    pub async fn average_service_duration(&self) -> Result<Vec<ServiceDuration>, AppError> {
        self.repo.average_service_duration().await
    }
}
