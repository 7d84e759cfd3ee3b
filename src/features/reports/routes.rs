use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create public report routes (submission and tracking)
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", post(handlers::submit_report))
        .route("/api/track/{tracking_id}", get(handlers::track_report))
        .with_state(service)
}
