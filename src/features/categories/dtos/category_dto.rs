use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::CrimeCategory;

/// Response DTO for a crime category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    /// Value to send back in a report submission
    pub value: CrimeCategory,
    pub display_order: i32,
}
