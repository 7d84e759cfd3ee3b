use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for admin login
///
/// Fields are compared verbatim; no trimming or format rules apply.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

/// Response DTO for a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokenDto {
    /// Opaque session token
    pub token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Session lifetime in seconds
    pub expires_in: i64,
}

/// Response DTO for the session check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusDto {
    pub authenticated: bool,
}
