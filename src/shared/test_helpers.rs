#[cfg(test)]
use crate::core::config::AdminConfig;
#[cfg(test)]
use crate::core::middleware;
#[cfg(test)]
use crate::features::auth::SessionService;
#[cfg(test)]
use crate::features::regions::RegionService;
#[cfg(test)]
use crate::features::reports::{InMemoryReportRepository, ReportService};
#[cfg(test)]
use axum::{http::HeaderValue, Router};
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

/// Report service over a freshly seeded catalog, plus the catalog itself
#[cfg(test)]
pub fn report_service() -> (Arc<ReportService>, Arc<InMemoryReportRepository>) {
    let repository = Arc::new(InMemoryReportRepository::seeded());
    let service = Arc::new(ReportService::new(
        repository.clone(),
        Arc::new(RegionService::new()),
    ));
    (service, repository)
}

/// Valid anonymous submission payload as the portal form sends it
#[cfg(test)]
pub fn sample_submission() -> serde_json::Value {
    serde_json::json!({
        "category": "Theft",
        "city": "dhaka",
        "station": "motijheel",
        "location": "Motijheel C/A, near Shapla Chattar",
        "description": "Mobile phone snatched from a rickshaw passenger",
        "anonymous": true
    })
}

/// Session service with the default demo credentials and no login delay
#[cfg(test)]
pub fn session_service() -> Arc<SessionService> {
    Arc::new(SessionService::new(AdminConfig {
        login_delay: Duration::ZERO,
        ..AdminConfig::default()
    }))
}

#[cfg(test)]
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

/// Guard a router with the admin session middleware
#[cfg(test)]
pub fn with_session(router: Router, service: Arc<SessionService>) -> Router {
    router.route_layer(axum::middleware::from_fn_with_state(
        service,
        middleware::session_middleware,
    ))
}
