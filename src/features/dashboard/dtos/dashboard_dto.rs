use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::models::{CrimeCategory, Priority, Report, ReportStatus, Reporter};

// ============================================================================
// Query params
// ============================================================================

/// Status filter for the dashboard list; `All` passes every report through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    Resolved,
}

impl StatusFilter {
    pub fn matches(&self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ReportStatus::Pending,
            StatusFilter::UnderReview => status == ReportStatus::UnderReview,
            StatusFilter::Resolved => status == ReportStatus::Resolved,
        }
    }
}

/// Sort order for the dashboard list (both descending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSortBy {
    /// Newest submission first
    #[default]
    Date,
    /// High, then Medium, then Low, then unprioritized
    Priority,
}

/// Query params for listing dashboard reports
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DashboardQueryParams {
    /// Filter by status: All, Pending, Under Review, Resolved (default: All)
    #[serde(default)]
    #[param(value_type = Option<String>, example = "Under Review")]
    pub status: StatusFilter,
    /// Sort by `date` or `priority` (default: date)
    #[serde(default)]
    #[param(value_type = Option<String>, example = "priority")]
    pub sort_by: DashboardSortBy,
}

// ============================================================================
// Report DTOs for Dashboard
// ============================================================================

/// Dashboard row for a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReportDto {
    pub tracking_id: String,
    pub category: CrimeCategory,
    pub location: String,
    pub description: String,
    pub status: ReportStatus,
    pub priority: Option<Priority>,
    pub submitted_date: NaiveDate,
}

impl From<Report> for DashboardReportDto {
    fn from(r: Report) -> Self {
        Self {
            tracking_id: r.tracking_id,
            category: r.category,
            location: r.location,
            description: r.description,
            status: r.status,
            priority: r.priority,
            submitted_date: r.submitted_date,
        }
    }
}

/// Detail panel view of a report, including reporter identity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReportDetailDto {
    pub tracking_id: String,
    pub category: CrimeCategory,
    pub location: String,
    pub description: String,
    pub status: ReportStatus,
    pub priority: Option<Priority>,
    pub submitted_date: NaiveDate,
    pub last_updated: NaiveDate,
    pub details: Option<String>,
    pub city: Option<String>,
    pub station: Option<String>,
    pub reporter: Option<Reporter>,
    pub attachments: Option<String>,
}

impl From<Report> for DashboardReportDetailDto {
    fn from(r: Report) -> Self {
        Self {
            tracking_id: r.tracking_id,
            category: r.category,
            location: r.location,
            description: r.description,
            status: r.status,
            priority: r.priority,
            submitted_date: r.submitted_date,
            last_updated: r.last_updated,
            details: r.details,
            city: r.city,
            station: r.station,
            reporter: r.reporter,
            attachments: r.attachments,
        }
    }
}

/// Request DTO for a manual status change
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

// ============================================================================
// Summary
// ============================================================================

/// Report counts per status across the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_reports: i64,
    pub pending: i64,
    pub under_review: i64,
    pub resolved: i64,
}
