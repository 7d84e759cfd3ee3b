mod report_repository;
mod seed;

pub use report_repository::{InMemoryReportRepository, ReportRepository};
#[cfg(test)]
pub use seed::seed_reports;
