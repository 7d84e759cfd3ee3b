use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginRequestDto, SessionStatusDto, SessionTokenDto};
use crate::features::auth::model::AdminSession;
use crate::features::auth::services::SessionService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Login with the admin demo credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<SessionTokenDto>),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<SessionService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<SessionTokenDto>>> {
    let session = service.login(&dto.username, &dto.password).await?;
    Ok(Json(ApiResponse::success(Some(session), None, None)))
}

/// End the current admin session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn logout(
    session: AdminSession,
    State(service): State<Arc<SessionService>>,
) -> Result<Json<ApiResponse<()>>> {
    service.logout(&session.token).await;
    Ok(Json(ApiResponse::success(
        None,
        Some("Logged out".to_string()),
        None,
    )))
}

/// Check whether the bearer token belongs to a live admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Session is active", body = ApiResponse<SessionStatusDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_session(_session: AdminSession) -> Result<Json<ApiResponse<SessionStatusDto>>> {
    Ok(Json(ApiResponse::success(
        Some(SessionStatusDto {
            authenticated: true,
        }),
        None,
        None,
    )))
}
