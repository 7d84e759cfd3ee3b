use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{CityResponseDto, StationResponseDto};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all cities with their police stations
#[utoipa::path(
    get,
    path = "/api/regions/cities",
    responses(
        (status = 200, description = "List of cities", body = ApiResponse<Vec<CityResponseDto>>),
    ),
    tag = "regions"
)]
pub async fn list_cities(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let dtos: Vec<CityResponseDto> = service.list_cities().iter().map(Into::into).collect();
    let total = dtos.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// List the police stations of a city
#[utoipa::path(
    get,
    path = "/api/regions/cities/{city_id}/stations",
    params(
        ("city_id" = String, Path, description = "City ID, e.g. dhaka")
    ),
    responses(
        (status = 200, description = "Stations in the city", body = ApiResponse<Vec<StationResponseDto>>),
        (status = 404, description = "City not found")
    ),
    tag = "regions"
)]
pub async fn list_stations(
    State(service): State<Arc<RegionService>>,
    Path(city_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<StationResponseDto>>>> {
    let stations = service.list_stations(&city_id)?;
    let dtos: Vec<StationResponseDto> = stations.iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
