use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create admin dashboard routes
///
/// Must be mounted behind the session middleware.
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        // Summary
        .route("/api/dashboard/summary", get(handlers::get_summary))
        // Reports listing and detail panel
        .route("/api/dashboard/reports", get(handlers::list_reports))
        .route(
            "/api/dashboard/reports/{tracking_id}",
            get(handlers::get_report),
        )
        .route(
            "/api/dashboard/reports/{tracking_id}/status",
            patch(handlers::update_report_status),
        )
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::routes as auth_routes;
    use crate::features::reports::InMemoryReportRepository;
    use crate::shared::test_helpers::{bearer, session_service, with_session};
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let sessions = session_service();
        let repository = Arc::new(InMemoryReportRepository::seeded());
        let dashboard = Arc::new(DashboardService::new(repository));

        let protected = Router::new()
            .merge(auth_routes::protected_routes(Arc::clone(&sessions)))
            .merge(routes(dashboard));

        let app = Router::new()
            .merge(auth_routes::public_routes(Arc::clone(&sessions)))
            .merge(with_session(protected, sessions));
        TestServer::new(app).unwrap()
    }

    async fn login(server: &TestServer) -> String {
        let body: Value = server
            .post("/api/auth/login")
            .json(&json!({ "username": "admin", "password": "password123" }))
            .await
            .json();
        body["data"]["token"].as_str().unwrap().to_string()
    }

    fn tracking_ids(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["trackingId"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_dashboard_requires_login_and_logout_revokes() {
        let server = server();

        server
            .get("/api/dashboard/reports")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let token = login(&server).await;
        server
            .get("/api/dashboard/reports")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .assert_status_ok();

        server
            .post("/api/auth/logout")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .assert_status_ok();

        server
            .get("/api/dashboard/reports")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bare_flag_value_is_not_a_session() {
        let server = server();
        server
            .get("/api/dashboard/summary")
            .add_header(header::AUTHORIZATION, bearer("true"))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_filter_and_sort_query() {
        let server = server();
        let token = login(&server).await;

        let body: Value = server
            .get("/api/dashboard/reports")
            .add_query_param("status", "Under Review")
            .add_query_param("sort_by", "priority")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(
            tracking_ids(&body),
            vec!["SL111111GHI111", "SL123456ABC123"]
        );

        let body: Value = server
            .get("/api/dashboard/reports")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .json();
        assert_eq!(body["meta"]["total"], 6);
        assert_eq!(tracking_ids(&body)[0], "SL987654XYZ789");
    }

    #[tokio::test]
    async fn test_unknown_status_filter_rejected() {
        let server = server();
        let token = login(&server).await;

        server
            .get("/api/dashboard/reports")
            .add_query_param("status", "Closed")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_status_from_detail_panel() {
        let server = server();
        let token = login(&server).await;

        let response = server
            .patch("/api/dashboard/reports/SL987654XYZ789/status")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "status": "Under Review" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "Under Review");

        let summary: Value = server
            .get("/api/dashboard/summary")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .json();
        assert_eq!(summary["data"]["pending"], 1);
        assert_eq!(summary["data"]["underReview"], 3);
        assert_eq!(summary["data"]["resolved"], 2);

        let other: Value = server
            .get("/api/dashboard/reports/SL222222JKL222")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .json();
        assert_eq!(other["data"]["status"], "Pending");
    }

    #[tokio::test]
    async fn test_update_status_rejects_unknown_value() {
        let server = server();
        let token = login(&server).await;

        server
            .patch("/api/dashboard/reports/SL987654XYZ789/status")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "status": "Closed" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_report() {
        let server = server();
        let token = login(&server).await;

        server
            .get("/api/dashboard/reports/SL000000AAAAAA")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
