use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/cities", get(handlers::list_cities))
        .route(
            "/api/regions/cities/{city_id}/stations",
            get(handlers::list_stations),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(RegionService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_cities() {
        let response = server().get("/api/regions/cities").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["data"][0]["id"], "dhaka");
        assert_eq!(body["data"][0]["nameInBengali"], "ঢাকা");
        assert_eq!(body["data"][0]["stations"][0]["area"], "Motijheel, Paltan");
    }

    #[tokio::test]
    async fn test_list_stations_unknown_city() {
        let response = server().get("/api/regions/cities/khulna/stations").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_list_stations() {
        let response = server().get("/api/regions/cities/sylhet/stations").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["kotwali_sylhet", "osmani_nagar"]);
    }
}
