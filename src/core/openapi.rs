use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::logout,
        auth::handlers::get_session,
        // Regions
        regions_handlers::list_cities,
        regions_handlers::list_stations,
        // Categories (public)
        categories_handlers::list_categories,
        // Reports (public)
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::track_report,
        // Dashboard (admin)
        dashboard_handlers::dashboard_handler::get_summary,
        dashboard_handlers::dashboard_handler::list_reports,
        dashboard_handlers::dashboard_handler::get_report,
        dashboard_handlers::dashboard_handler::update_report_status,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::dtos::LoginRequestDto,
            auth::dtos::SessionTokenDto,
            auth::dtos::SessionStatusDto,
            ApiResponse<auth::dtos::SessionTokenDto>,
            ApiResponse<auth::dtos::SessionStatusDto>,
            // Regions
            regions_dtos::CityResponseDto,
            regions_dtos::StationResponseDto,
            ApiResponse<Vec<regions_dtos::CityResponseDto>>,
            ApiResponse<Vec<regions_dtos::StationResponseDto>>,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Reports
            reports_models::ReportStatus,
            reports_models::Priority,
            reports_models::CrimeCategory,
            reports_models::Reporter,
            reports_dtos::CreateReportDto,
            reports_dtos::SubmissionResponseDto,
            reports_dtos::TimelineStageDto,
            reports_dtos::TrackingResultDto,
            ApiResponse<reports_dtos::SubmissionResponseDto>,
            ApiResponse<reports_dtos::TrackingResultDto>,
            // Dashboard
            dashboard_dtos::StatusFilter,
            dashboard_dtos::DashboardSortBy,
            dashboard_dtos::DashboardReportDto,
            dashboard_dtos::DashboardReportDetailDto,
            dashboard_dtos::UpdateReportStatusDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            ApiResponse<Vec<dashboard_dtos::DashboardReportDto>>,
            ApiResponse<dashboard_dtos::DashboardReportDetailDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin login and session management"),
        (name = "regions", description = "Cities and police stations (public)"),
        (name = "categories", description = "Crime categories (public)"),
        (name = "reports", description = "Crime report submission and tracking (public)"),
        (name = "Dashboard", description = "Admin dashboard for reviewing reports"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "SafeLine API",
        version = "0.1.0",
        description = "API documentation for SafeLine",
    )
)]
pub struct ApiDoc;

/// Adds the admin session bearer scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("Opaque session token")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/session",
            "/api/regions/cities",
            "/api/regions/cities/{city_id}/stations",
            "/api/categories",
            "/api/reports",
            "/api/track/{tracking_id}",
            "/api/dashboard/summary",
            "/api/dashboard/reports",
            "/api/dashboard/reports/{tracking_id}",
            "/api/dashboard/reports/{tracking_id}/status",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer_auth")));
    }
}
