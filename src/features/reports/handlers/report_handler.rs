use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{CreateReportDto, SubmissionResponseDto, TrackingResultDto};
use crate::features::reports::services::ReportService;
use crate::shared::types::ApiResponse;

/// Submit a crime report
///
/// Public endpoint. Returns the tracking ID the reporter uses to follow up.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionResponseDto>>)> {
    dto.validate()?;

    let submission = service.submit(dto).await?;
    let message = format!(
        "Report submitted. Your identity remains completely {}.",
        if submission.anonymous {
            "anonymous"
        } else {
            "confidential"
        }
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(submission), Some(message), None)),
    ))
}

/// Track a report by its tracking ID
///
/// The ID is matched case-insensitively and surrounding whitespace is ignored.
#[utoipa::path(
    get,
    path = "/api/track/{tracking_id}",
    params(
        ("tracking_id" = String, Path, description = "Tracking ID, e.g. SL123456ABC123")
    ),
    responses(
        (status = 200, description = "Report status", body = ApiResponse<TrackingResultDto>),
        (status = 400, description = "Empty tracking ID"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn track_report(
    State(service): State<Arc<ReportService>>,
    Path(tracking_id): Path<String>,
) -> Result<Json<ApiResponse<TrackingResultDto>>> {
    let result = service.track(&tracking_id).await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}
