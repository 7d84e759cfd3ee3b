use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::reports::models::CrimeCategory;

/// Service for crime category operations
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// List all crime categories in form order
    pub fn list(&self) -> Vec<CategoryResponseDto> {
        CrimeCategory::ALL
            .iter()
            .zip(1..)
            .map(|(category, order)| CategoryResponseDto {
                value: *category,
                display_order: order,
            })
            .collect()
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
