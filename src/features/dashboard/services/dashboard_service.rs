use std::cmp::Reverse;
use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::*;
use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;
use crate::shared::validation::normalize_tracking_id;

/// Service for the admin dashboard over the report catalog
pub struct DashboardService {
    repository: Arc<dyn ReportRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    /// Count reports per status across the whole catalog
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let reports = self.repository.list().await?;
        let count = |status: ReportStatus| reports.iter().filter(|r| r.status == status).count();

        Ok(DashboardSummaryDto {
            total_reports: reports.len() as i64,
            pending: count(ReportStatus::Pending) as i64,
            under_review: count(ReportStatus::UnderReview) as i64,
            resolved: count(ReportStatus::Resolved) as i64,
        })
    }

    /// List reports filtered by status and sorted as requested
    pub async fn list_reports(
        &self,
        params: &DashboardQueryParams,
    ) -> Result<(Vec<DashboardReportDto>, i64)> {
        let reports = self.repository.list().await?;
        let reports = filter_and_sort(reports, params.status, params.sort_by);
        let total = reports.len() as i64;

        Ok((reports.into_iter().map(Into::into).collect(), total))
    }

    /// Get the detail view of a single report
    pub async fn get_report(&self, tracking_id: &str) -> Result<DashboardReportDetailDto> {
        let tracking_id = normalize_tracking_id(tracking_id);
        self.repository
            .find(&tracking_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::not_found(format!("Report '{}' not found", tracking_id)))
    }

    /// Set a report's status; applied immediately with no audit trail
    pub async fn update_status(
        &self,
        tracking_id: &str,
        status: ReportStatus,
    ) -> Result<DashboardReportDetailDto> {
        let tracking_id = normalize_tracking_id(tracking_id);
        let today = Utc::now().date_naive();
        let report = self
            .repository
            .update_status(&tracking_id, status, today)
            .await?;

        tracing::info!(
            "Report status updated: tracking_id={}, status={}",
            report.tracking_id,
            report.status
        );

        Ok(report.into())
    }
}

/// Apply the dashboard filter, then a stable descending sort
fn filter_and_sort(
    reports: Vec<Report>,
    filter: StatusFilter,
    sort_by: DashboardSortBy,
) -> Vec<Report> {
    let mut reports: Vec<Report> = reports
        .into_iter()
        .filter(|r| filter.matches(r.status))
        .collect();

    // sort_by_key is stable: ties keep catalog order
    match sort_by {
        DashboardSortBy::Date => reports.sort_by_key(|r| Reverse(r.submitted_date)),
        DashboardSortBy::Priority => reports.sort_by_key(|r| Reverse(r.priority_rank())),
    }

    reports
}
