mod report;

pub use report::{CreateReportSubmission, CrimeCategory, Priority, Report, ReportStatus, Reporter};
