use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admin session attached to a request by the session middleware
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminSession {
    /// Bearer token the request was authenticated with
    #[serde(skip_serializing)]
    pub token: String,
}
