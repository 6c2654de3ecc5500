use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::geo::Coordinates;

/// Database model for a registered school.
///
/// Coordinates are plain `f64`: a school only exists once geocoding succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A school ranked by distance from a search origin (not persisted)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub school: School,
    /// Kilometers from the search origin
    pub distance: f64,
}

/// Outcome of a nearest-schools search
#[derive(Debug, Clone)]
pub struct SchoolSearch {
    /// Location text as the user typed it
    pub location: String,
    /// Geocoded search origin
    pub origin: Coordinates,
    /// Ascending by distance
    pub results: Vec<SearchResult>,
}
