use chrono::NaiveDate;

use crate::features::reports::models::{CrimeCategory, Priority, Report, ReportStatus};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    tracking_id: &str,
    category: CrimeCategory,
    location: &str,
    description: &str,
    status: ReportStatus,
    priority: Priority,
    submitted_date: NaiveDate,
    last_updated: NaiveDate,
    details: Option<&str>,
) -> Report {
    Report {
        tracking_id: tracking_id.to_string(),
        category,
        location: location.to_string(),
        description: description.to_string(),
        status,
        priority: Some(priority),
        submitted_date,
        last_updated,
        details: details.map(str::to_string),
        city: None,
        station: None,
        reporter: None,
        attachments: None,
    }
}

/// Demo reports loaded into the catalog at startup
pub fn seed_reports() -> Vec<Report> {
    vec![
        seeded(
            "SL123456ABC123",
            CrimeCategory::Theft,
            "Downtown Shopping District",
            "Reported shoplifting incident at main store",
            ReportStatus::UnderReview,
            Priority::Medium,
            day(2024, 1, 15),
            day(2024, 1, 16),
            Some("Report has been verified and assigned to investigation team."),
        ),
        seeded(
            "SL987654XYZ789",
            CrimeCategory::Harassment,
            "Community Park",
            "Verbal harassment incident",
            ReportStatus::Pending,
            Priority::High,
            day(2024, 1, 17),
            day(2024, 1, 17),
            Some("Your report has been received and is pending initial review."),
        ),
        seeded(
            "SL456789DEF456",
            CrimeCategory::Cybercrime,
            "Online",
            "Phishing email attack reported",
            ReportStatus::Resolved,
            Priority::High,
            day(2024, 1, 10),
            day(2024, 1, 14),
            Some("Investigation completed. Evidence has been forwarded to relevant authorities."),
        ),
        seeded(
            "SL111111GHI111",
            CrimeCategory::VehicleTheft,
            "Residential Area - Oak Street",
            "Car stolen from driveway",
            ReportStatus::UnderReview,
            Priority::High,
            day(2024, 1, 16),
            day(2024, 1, 16),
            None,
        ),
        seeded(
            "SL222222JKL222",
            CrimeCategory::Fraud,
            "Online - E-commerce",
            "Unauthorized charges on account",
            ReportStatus::Pending,
            Priority::Medium,
            day(2024, 1, 17),
            day(2024, 1, 17),
            None,
        ),
        seeded(
            "SL333333MNO333",
            CrimeCategory::Robbery,
            "Gas Station - Highway 101",
            "Armed robbery incident",
            ReportStatus::Resolved,
            Priority::High,
            day(2024, 1, 12),
            day(2024, 1, 12),
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::TRACKING_ID_REGEX;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_well_formed() {
        let reports = seed_reports();
        let ids: HashSet<&str> = reports.iter().map(|r| r.tracking_id.as_str()).collect();
        assert_eq!(ids.len(), reports.len());
        assert!(reports
            .iter()
            .all(|r| TRACKING_ID_REGEX.is_match(&r.tracking_id)));
    }

    #[test]
    fn test_seed_dates_are_consistent() {
        for report in seed_reports() {
            assert!(report.last_updated >= report.submitted_date);
            assert_ne!(report.submitted_date, NaiveDate::default());
        }
    }
}
