use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::schools::models::{School, SchoolSearch, SearchResult};
use crate::shared::geo::Coordinates;

/// Request DTO for registering a school.
///
/// Accepted both as a URL-encoded form (HTML page) and as JSON (API).
/// Missing fields deserialize to empty strings so that validation, not the
/// extractor, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    #[serde(default)]
    #[validate(regex(path = *crate::shared::validation::NOT_BLANK_REGEX, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(regex(path = *crate::shared::validation::NOT_BLANK_REGEX, message = "Street is required"))]
    pub street: String,

    #[serde(default)]
    #[validate(regex(path = *crate::shared::validation::NOT_BLANK_REGEX, message = "City is required"))]
    pub city: String,

    #[serde(default)]
    #[validate(regex(path = *crate::shared::validation::NOT_BLANK_REGEX, message = "State is required"))]
    pub state: String,

    #[serde(default)]
    #[validate(regex(path = *crate::shared::validation::NOT_BLANK_REGEX, message = "Country is required"))]
    pub country: String,
}

impl CreateSchoolDto {
    /// Full postal address in fixed order: street, city, state, country
    pub fn full_address(&self) -> String {
        [&self.street, &self.city, &self.state, &self.country]
            .iter()
            .map(|part| part.trim())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Query params for the nearest-schools search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchSchoolsQuery {
    /// Free-text location to search around
    pub location: Option<String>,
}

/// Response DTO for a school
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponseDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<School> for SchoolResponseDto {
    fn from(s: School) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
        }
    }
}

/// Response DTO for a school ranked by distance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolSearchResultDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the search origin in kilometers
    pub distance: f64,
}

impl From<SearchResult> for SchoolSearchResultDto {
    fn from(r: SearchResult) -> Self {
        Self {
            id: r.school.id,
            name: r.school.name,
            address: r.school.address,
            latitude: r.school.latitude,
            longitude: r.school.longitude,
            distance: r.distance,
        }
    }
}

/// Response DTO for a nearest-schools search
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolSearchResponseDto {
    pub location: String,
    pub origin: Coordinates,
    pub schools: Vec<SchoolSearchResultDto>,
}

impl From<SchoolSearch> for SchoolSearchResponseDto {
    fn from(s: SchoolSearch) -> Self {
        Self {
            location: s.location,
            origin: s.origin,
            schools: s.results.into_iter().map(Into::into).collect(),
        }
    }
}
