//! City and police station catalog.
//!
//! The submission form picks a city first and then one of that city's
//! stations; a submission naming a station outside its city is rejected.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/cities` | List cities with their stations |
//! | GET | `/api/regions/cities/{city_id}/stations` | List stations of one city |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
