use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_list_categories() {
        let server = TestServer::new(routes(Arc::new(CategoryService::new()))).unwrap();
        let response = server.get("/api/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 9);
        assert_eq!(data[0]["value"], "Theft");
        assert_eq!(data[0]["displayOrder"], 1);
        assert!(data.iter().any(|c| c["value"] == "Vehicle Theft"));
    }
}
