use crate::core::error::{AppError, Result};
use crate::features::regions::models::{City, Station, CITIES};

/// Service for the city and police station catalog
pub struct RegionService {
    cities: &'static [City],
}

impl RegionService {
    pub fn new() -> Self {
        Self { cities: CITIES }
    }

    /// List all cities in catalog order
    pub fn list_cities(&self) -> &'static [City] {
        self.cities
    }

    /// Get a city by ID
    pub fn get_city(&self, city_id: &str) -> Result<&'static City> {
        self.cities
            .iter()
            .find(|c| c.id == city_id)
            .ok_or_else(|| AppError::not_found(format!("City '{}' not found", city_id)))
    }

    /// List the stations of a city
    pub fn list_stations(&self, city_id: &str) -> Result<&'static [Station]> {
        Ok(self.get_city(city_id)?.stations)
    }

    /// Reject a city/station pair the submission form could not have produced
    pub fn ensure_station_in_city(&self, city_id: &str, station_id: &str) -> Result<()> {
        let city = self
            .cities
            .iter()
            .find(|c| c.id == city_id)
            .ok_or_else(|| AppError::Validation(vec![format!("Unknown city '{}'", city_id)]))?;

        if city.station(station_id).is_none() {
            return Err(AppError::Validation(vec![format!(
                "Police station '{}' does not belong to {}",
                station_id, city.name
            )]));
        }

        Ok(())
    }
}

impl Default for RegionService {
    fn default() -> Self {
        Self::new()
    }
}
