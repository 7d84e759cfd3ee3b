mod report_service;
pub mod tracking_id;

pub use report_service::ReportService;
