use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::regions::RegionService;
use crate::features::reports::dtos::{CreateReportDto, SubmissionResponseDto, TrackingResultDto};
use crate::features::reports::models::{CreateReportSubmission, Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;
use crate::features::reports::services::tracking_id::{generate_tracking_id, is_valid_tracking_id};
use crate::shared::constants::{
    ATTACHMENT_SEPARATOR, MAX_TRACKING_ID_ATTEMPTS, TRACKING_MISS_HINTS,
};
use crate::shared::validation::normalize_tracking_id;

/// Service for public report submission and tracking
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    regions: Arc<RegionService>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>, regions: Arc<RegionService>) -> Self {
        Self {
            repository,
            regions,
        }
    }

    /// Submit a new report and make it queryable by its tracking ID
    ///
    /// Expects `dto` to have passed field validation already.
    pub async fn submit(&self, dto: CreateReportDto) -> Result<SubmissionResponseDto> {
        self.regions.ensure_station_in_city(&dto.city, &dto.station)?;

        let anonymous = dto.anonymous;
        let submission = CreateReportSubmission {
            category: dto.category,
            reporter: dto.reporter(),
            attachments: join_attachments(&dto.attachments),
            city: dto.city,
            station: dto.station,
            location: dto.location.trim().to_string(),
            description: dto.description.trim().to_string(),
        };

        let report = self.insert_with_fresh_id(submission).await?;

        tracing::info!(
            "Report submitted: tracking_id={}, category={}, anonymous={}",
            report.tracking_id,
            report.category,
            anonymous
        );

        Ok(SubmissionResponseDto {
            tracking_id: report.tracking_id,
            anonymous,
            status: report.status,
            submitted_date: report.submitted_date,
        })
    }

    /// Insert under a newly generated ID, regenerating on collision
    async fn insert_with_fresh_id(&self, submission: CreateReportSubmission) -> Result<Report> {
        let today = Utc::now().date_naive();

        for attempt in 1..=MAX_TRACKING_ID_ATTEMPTS {
            let report = Report {
                tracking_id: generate_tracking_id(),
                category: submission.category,
                location: submission.location.clone(),
                description: submission.description.clone(),
                status: ReportStatus::Pending,
                priority: None,
                submitted_date: today,
                last_updated: today,
                details: None,
                city: Some(submission.city.clone()),
                station: Some(submission.station.clone()),
                reporter: submission.reporter.clone(),
                attachments: submission.attachments.clone(),
            };

            match self.repository.insert(report).await {
                Ok(report) => return Ok(report),
                Err(AppError::Conflict(msg)) => {
                    tracing::warn!("Tracking ID collision (attempt {}): {}", attempt, msg);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::Internal(format!(
            "Could not allocate a unique tracking ID after {} attempts",
            MAX_TRACKING_ID_ATTEMPTS
        )))
    }

    /// Look up a report by a user-supplied tracking ID
    ///
    /// The ID is trimmed and upper-cased, then matched exactly.
    pub async fn track(&self, raw_id: &str) -> Result<TrackingResultDto> {
        let tracking_id = normalize_tracking_id(raw_id);
        if tracking_id.is_empty() {
            return Err(AppError::BadRequest("Tracking ID is required".to_string()));
        }

        // Malformed IDs can never match a stored record
        let report = if is_valid_tracking_id(&tracking_id) {
            self.repository.find(&tracking_id).await?
        } else {
            None
        };

        match report {
            Some(report) => Ok(report.into()),
            None => {
                tracing::debug!("Tracking lookup miss: {}", tracking_id);
                Err(AppError::NotFound {
                    message: format!(
                        "We couldn't find a report with the ID {}. Please check the ID and try again.",
                        tracking_id
                    ),
                    hints: Some(TRACKING_MISS_HINTS.iter().map(|h| h.to_string()).collect()),
                })
            }
        }
    }
}

/// Join attachment names into a single display string
fn join_attachments(names: &[String]) -> Option<String> {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(ATTACHMENT_SEPARATOR))
    }
}
