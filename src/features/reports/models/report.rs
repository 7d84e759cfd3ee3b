use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Report status as shown to reporters and admins
///
/// The set is unordered: the dashboard may move a report between any two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReportStatus {
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    Resolved,
}

impl ReportStatus {
    #[cfg(test)]
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::UnderReview,
        ReportStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report priority, only used for dashboard ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: higher ranks sort first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// Crime category of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CrimeCategory {
    Theft,
    Harassment,
    Cybercrime,
    Violence,
    Fraud,
    Robbery,
    Assault,
    #[serde(rename = "Vehicle Theft")]
    VehicleTheft,
    Other,
}

impl CrimeCategory {
    pub const ALL: [CrimeCategory; 9] = [
        CrimeCategory::Theft,
        CrimeCategory::Harassment,
        CrimeCategory::Cybercrime,
        CrimeCategory::Violence,
        CrimeCategory::Fraud,
        CrimeCategory::Robbery,
        CrimeCategory::Assault,
        CrimeCategory::VehicleTheft,
        CrimeCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrimeCategory::Theft => "Theft",
            CrimeCategory::Harassment => "Harassment",
            CrimeCategory::Cybercrime => "Cybercrime",
            CrimeCategory::Violence => "Violence",
            CrimeCategory::Fraud => "Fraud",
            CrimeCategory::Robbery => "Robbery",
            CrimeCategory::Assault => "Assault",
            CrimeCategory::VehicleTheft => "Vehicle Theft",
            CrimeCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for CrimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity supplied by a reporter who chose named mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reporter {
    pub full_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

/// Catalog record for a single crime report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub tracking_id: String,
    pub category: CrimeCategory,
    pub location: String,
    pub description: String,
    pub status: ReportStatus,
    pub priority: Option<Priority>,
    pub submitted_date: NaiveDate,
    pub last_updated: NaiveDate,
    /// Status note shown on the tracking view
    pub details: Option<String>,
    pub city: Option<String>,
    pub station: Option<String>,
    pub reporter: Option<Reporter>,
    /// Attachment file names joined for display; nothing is uploaded
    pub attachments: Option<String>,
}

impl Report {
    /// Dashboard priority rank, with unprioritized reports ranked last
    pub fn priority_rank(&self) -> u8 {
        self.priority.map(|p| p.rank()).unwrap_or(0)
    }
}

/// Data for inserting a freshly submitted report
#[derive(Debug)]
pub struct CreateReportSubmission {
    pub category: CrimeCategory,
    pub city: String,
    pub station: String,
    pub location: String,
    pub description: String,
    pub reporter: Option<Reporter>,
    pub attachments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::UnderReview).unwrap(),
            "\"Under Review\""
        );
        let parsed: ReportStatus = serde_json::from_str("\"Resolved\"").unwrap();
        assert_eq!(parsed, ReportStatus::Resolved);
        assert!(serde_json::from_str::<ReportStatus>("\"Closed\"").is_err());
        assert!(serde_json::from_str::<ReportStatus>("\"under review\"").is_err());
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        assert!(serde_json::from_str::<Priority>("\"Urgent\"").is_err());
    }

    #[test]
    fn test_category_display_matches_wire_name() {
        for category in CrimeCategory::ALL {
            let wire = serde_json::to_string(&category).unwrap();
            assert_eq!(wire, format!("\"{}\"", category));
        }
    }
}
