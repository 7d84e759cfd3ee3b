use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::{ApiResponse, Meta};

// ============================================================================
// Summary
// ============================================================================

/// Get report counts per status
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_summary(
    _session: AdminSession,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, AppError> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

// ============================================================================
// Reports
// ============================================================================

/// List reports with status filter and sort order
#[utoipa::path(
    get,
    path = "/api/dashboard/reports",
    tag = "Dashboard",
    params(DashboardQueryParams),
    responses(
        (status = 200, description = "Filtered and sorted reports", body = ApiResponse<Vec<DashboardReportDto>>),
        (status = 400, description = "Unknown status or sort value"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_reports(
    _session: AdminSession,
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<DashboardQueryParams>,
) -> Result<Json<ApiResponse<Vec<DashboardReportDto>>>, AppError> {
    let (reports, total) = service.list_reports(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

/// Get report detail by tracking ID
#[utoipa::path(
    get,
    path = "/api/dashboard/reports/{tracking_id}",
    tag = "Dashboard",
    params(
        ("tracking_id" = String, Path, description = "Tracking ID")
    ),
    responses(
        (status = 200, description = "Report detail", body = ApiResponse<DashboardReportDetailDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_report(
    _session: AdminSession,
    State(service): State<Arc<DashboardService>>,
    Path(tracking_id): Path<String>,
) -> Result<Json<ApiResponse<DashboardReportDetailDto>>, AppError> {
    let report = service.get_report(&tracking_id).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

/// Manually set a report's status
#[utoipa::path(
    patch,
    path = "/api/dashboard/reports/{tracking_id}/status",
    tag = "Dashboard",
    params(
        ("tracking_id" = String, Path, description = "Tracking ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<DashboardReportDetailDto>),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_report_status(
    _session: AdminSession,
    State(service): State<Arc<DashboardService>>,
    Path(tracking_id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<DashboardReportDetailDto>>, AppError> {
    let report = service.update_status(&tracking_id, dto.status).await?;
    let message = format!("Status set to {}", report.status);
    Ok(Json(ApiResponse::success(Some(report), Some(message), None)))
}
