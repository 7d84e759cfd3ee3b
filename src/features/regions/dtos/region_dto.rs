use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::{City, Station};

/// Response DTO for a police station
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationResponseDto {
    pub id: String,
    pub name: String,
    pub area: String,
}

impl From<&Station> for StationResponseDto {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.to_string(),
            area: station.area.to_string(),
        }
    }
}

/// Response DTO for a city with its stations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    pub id: String,
    pub name: String,
    pub name_in_bengali: String,
    pub stations: Vec<StationResponseDto>,
}

impl From<&City> for CityResponseDto {
    fn from(city: &City) -> Self {
        Self {
            id: city.id.to_string(),
            name: city.name.to_string(),
            name_in_bengali: city.name_in_bengali.to_string(),
            stations: city.stations.iter().map(Into::into).collect(),
        }
    }
}
