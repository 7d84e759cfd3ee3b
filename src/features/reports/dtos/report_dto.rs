use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::reports::models::{CrimeCategory, Report, ReportStatus, Reporter};
use crate::shared::validation::is_present;

fn default_anonymous() -> bool {
    true
}

/// Request DTO for submitting a crime report
///
/// Name and phone number are only required when `anonymous` is false.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_reporter_identity", skip_on_field_errors = false))]
pub struct CreateReportDto {
    pub category: CrimeCategory,

    /// City ID from the region catalog
    #[validate(custom(function = "required_text", message = "City is required"))]
    pub city: String,

    /// Station ID belonging to the chosen city
    #[validate(custom(function = "required_text", message = "Police station is required"))]
    pub station: String,

    #[validate(custom(function = "required_text", message = "Location is required"))]
    pub location: String,

    #[validate(custom(function = "required_text", message = "Description is required"))]
    pub description: String,

    /// Attachment file names (display only, never uploaded)
    #[serde(default)]
    pub attachments: Vec<String>,

    /// Report without identifying details (default: true)
    #[serde(default = "default_anonymous")]
    pub anonymous: bool,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub national_id: Option<String>,
}

fn required_text(value: &str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(ValidationError::new("required"))
    }
}

fn validate_reporter_identity(dto: &CreateReportDto) -> Result<(), ValidationError> {
    if dto.anonymous {
        return Ok(());
    }

    let has = |field: &Option<String>| field.as_deref().map(is_present).unwrap_or(false);

    if !has(&dto.full_name) {
        return Err(ValidationError::new("full_name_required")
            .with_message("Full name is required for named reports".into()));
    }
    if !has(&dto.phone_number) {
        return Err(ValidationError::new("phone_number_required")
            .with_message("Phone number is required for named reports".into()));
    }

    Ok(())
}

impl CreateReportDto {
    /// Reporter identity for named mode; always `None` for anonymous reports
    pub fn reporter(&self) -> Option<Reporter> {
        if self.anonymous {
            return None;
        }

        Some(Reporter {
            full_name: self.full_name.clone().unwrap_or_default().trim().to_string(),
            phone_number: self
                .phone_number
                .clone()
                .unwrap_or_default()
                .trim()
                .to_string(),
            national_id: self
                .national_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

/// Confirmation returned after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponseDto {
    pub tracking_id: String,
    pub anonymous: bool,
    pub status: ReportStatus,
    pub submitted_date: NaiveDate,
}

/// One step of the public tracking timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStageDto {
    pub label: String,
    pub completed: bool,
}

/// Public tracking view of a report
///
/// Reporter identity and attachments are deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResultDto {
    pub tracking_id: String,
    pub category: CrimeCategory,
    pub location: String,
    pub status: ReportStatus,
    pub submitted_date: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timeline: Vec<TimelineStageDto>,
}

impl TimelineStageDto {
    fn new(label: &str, completed: bool) -> Self {
        Self {
            label: label.to_string(),
            completed,
        }
    }

    /// Three-stage timeline derived purely from the current status
    pub fn for_status(status: ReportStatus) -> Vec<TimelineStageDto> {
        vec![
            Self::new("Submitted", true),
            Self::new("Initial Review", status != ReportStatus::Pending),
            Self::new("Investigation", status == ReportStatus::Resolved),
        ]
    }
}

impl From<Report> for TrackingResultDto {
    fn from(r: Report) -> Self {
        Self {
            timeline: TimelineStageDto::for_status(r.status),
            tracking_id: r.tracking_id,
            category: r.category,
            location: r.location,
            status: r.status,
            submitted_date: r.submitted_date,
            last_updated: r.last_updated,
            details: r.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::StreetName;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn anonymous_dto() -> CreateReportDto {
        CreateReportDto {
            category: CrimeCategory::Theft,
            city: "dhaka".to_string(),
            station: "motijheel".to_string(),
            location: StreetName().fake(),
            description: Sentence(3..8).fake(),
            attachments: Vec::new(),
            anonymous: true,
            full_name: None,
            phone_number: None,
            national_id: None,
        }
    }

    #[test]
    fn test_anonymous_dto_is_valid() {
        assert!(anonymous_dto().validate().is_ok());
    }

    #[test]
    fn test_blank_required_fields_are_rejected() {
        let dto = CreateReportDto {
            location: "   ".to_string(),
            description: String::new(),
            ..anonymous_dto()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("location"));
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("city"));
    }

    #[test]
    fn test_named_mode_requires_name_and_phone() {
        let dto = CreateReportDto {
            anonymous: false,
            full_name: Some(Name().fake()),
            ..anonymous_dto()
        };
        assert!(dto.validate().is_err());

        let dto = CreateReportDto {
            phone_number: Some("01700000000".to_string()),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_named_mode_skips_phone_format_checks() {
        let dto = CreateReportDto {
            anonymous: false,
            full_name: Some("Rahim".to_string()),
            phone_number: Some("not-a-number".to_string()),
            national_id: Some("??".to_string()),
            ..anonymous_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_reporter_dropped_in_anonymous_mode() {
        let dto = CreateReportDto {
            full_name: Some("Rahim".to_string()),
            phone_number: Some("01700000000".to_string()),
            ..anonymous_dto()
        };
        assert_eq!(dto.reporter(), None);
    }

    #[test]
    fn test_reporter_blank_national_id_is_none() {
        let dto = CreateReportDto {
            anonymous: false,
            full_name: Some(" Rahim ".to_string()),
            phone_number: Some("01700000000".to_string()),
            national_id: Some("  ".to_string()),
            ..anonymous_dto()
        };
        let reporter = dto.reporter().unwrap();
        assert_eq!(reporter.full_name, "Rahim");
        assert_eq!(reporter.national_id, None);
    }

    #[test]
    fn test_anonymous_defaults_to_true() {
        let dto: CreateReportDto = serde_json::from_value(serde_json::json!({
            "category": "Fraud",
            "city": "sylhet",
            "station": "osmani_nagar",
            "location": "Zindabazar",
            "description": "Fake invoice"
        }))
        .unwrap();
        assert!(dto.anonymous);
        assert!(dto.attachments.is_empty());
    }

    #[test]
    fn test_timeline_for_each_status() {
        let completed = |status| -> Vec<bool> {
            TimelineStageDto::for_status(status)
                .into_iter()
                .map(|s| s.completed)
                .collect()
        };
        assert_eq!(completed(ReportStatus::Pending), vec![true, false, false]);
        assert_eq!(completed(ReportStatus::UnderReview), vec![true, true, false]);
        assert_eq!(completed(ReportStatus::Resolved), vec![true, true, true]);

        let labels: Vec<String> = TimelineStageDto::for_status(ReportStatus::Pending)
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["Submitted", "Initial Review", "Investigation"]);
    }
}
