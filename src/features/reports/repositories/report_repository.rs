use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportStatus};

/// Storage seam for the report catalog
///
/// Lookup, submission and the dashboard all go through this trait so the
/// in-memory catalog can be swapped for a real backend.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Exact-match lookup by tracking ID
    async fn find(&self, tracking_id: &str) -> Result<Option<Report>>;

    /// All reports in insertion order
    async fn list(&self) -> Result<Vec<Report>>;

    /// Set a report's status and stamp its last-updated date
    async fn update_status(
        &self,
        tracking_id: &str,
        status: ReportStatus,
        updated_on: NaiveDate,
    ) -> Result<Report>;

    /// Add a new report; fails with `Conflict` if the tracking ID is taken
    async fn insert(&self, report: Report) -> Result<Report>;
}

/// Process-local catalog; state lives until the process exits
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportRepository {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
        }
    }

    /// Catalog pre-populated with the demo reports
    pub fn seeded() -> Self {
        Self::new(super::seed::seed_reports())
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn find(&self, tracking_id: &str) -> Result<Option<Report>> {
        let reports = self.reports.read().await;
        Ok(reports
            .iter()
            .find(|r| r.tracking_id == tracking_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Report>> {
        Ok(self.reports.read().await.clone())
    }

    async fn update_status(
        &self,
        tracking_id: &str,
        status: ReportStatus,
        updated_on: NaiveDate,
    ) -> Result<Report> {
        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.tracking_id == tracking_id)
            .ok_or_else(|| AppError::not_found(format!("Report '{}' not found", tracking_id)))?;

        report.status = status;
        report.last_updated = updated_on;

        Ok(report.clone())
    }

    async fn insert(&self, report: Report) -> Result<Report> {
        let mut reports = self.reports.write().await;
        if reports.iter().any(|r| r.tracking_id == report.tracking_id) {
            return Err(AppError::Conflict(format!(
                "Tracking ID '{}' already exists",
                report.tracking_id
            )));
        }

        reports.push(report.clone());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_find_is_exact_match() {
        let repo = InMemoryReportRepository::seeded();

        assert!(repo.find("SL123456ABC123").await.unwrap().is_some());
        assert!(repo.find("sl123456abc123").await.unwrap().is_none());
        assert!(repo.find("SL123456").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_status_touches_only_target() {
        let repo = InMemoryReportRepository::seeded();
        let before = repo.list().await.unwrap();

        let updated = repo
            .update_status("SL987654XYZ789", ReportStatus::Resolved, date("2024-02-01"))
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Resolved);
        assert_eq!(updated.last_updated, date("2024-02-01"));

        let after = repo.list().await.unwrap();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.tracking_id == "SL987654XYZ789" {
                assert_eq!(new.status, ReportStatus::Resolved);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let repo = InMemoryReportRepository::seeded();
        let err = repo
            .update_status("SL000000AAAAAA", ReportStatus::Pending, date("2024-02-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let repo = InMemoryReportRepository::seeded();
        let existing = repo.find("SL456789DEF456").await.unwrap().unwrap();

        let err = repo.insert(existing).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_insert_appends_in_order() {
        let repo = InMemoryReportRepository::new(Vec::new());
        let mut report = crate::features::reports::repositories::seed_reports().remove(0);
        report.tracking_id = "SL000001AAAAAA".to_string();
        repo.insert(report.clone()).await.unwrap();
        report.tracking_id = "SL000002BBBBBB".to_string();
        repo.insert(report).await.unwrap();

        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.tracking_id)
            .collect();
        assert_eq!(ids, vec!["SL000001AAAAAA", "SL000002BBBBBB"]);
    }
}
