//! Mapbox forward-geocoding client
//!
//! Calls `GET /geocoding/v5/mapbox.places/{query}.json?limit=1` and extracts the
//! top feature's `[longitude, latitude]` pair.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};

use super::Geocoder;
use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::shared::geo::Coordinates;

/// Mapbox geocoding response (GeoJSON FeatureCollection)
#[derive(Debug, Deserialize)]
pub struct MapboxResponse {
    #[serde(default)]
    pub features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
pub struct MapboxFeature {
    #[serde(default)]
    pub place_name: Option<String>,
    pub geometry: MapboxGeometry,
}

#[derive(Debug, Deserialize)]
pub struct MapboxGeometry {
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

impl MapboxFeature {
    fn coordinates(&self) -> Option<Coordinates> {
        match self.geometry.coordinates.as_slice() {
            [longitude, latitude, ..] => Some(Coordinates::new(*latitude, *longitude)),
            _ => None,
        }
    }
}

/// Geocoder backed by the Mapbox Geocoding API
pub struct MapboxGeocoder {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("SchoolLocator/1.0")
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn forward_geocode(&self, query: &str) -> Result<Coordinates> {
        let url = self.search_url(query);
        debug!("Geocoding '{}' -> {}", query, url);

        let response = self
            .client
            .get(&url)
            .query(&[("access_token", self.access_token.as_str()), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                error!("Mapbox request failed: {:?}", e);
                AppError::GeocodeService(format!("Mapbox request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Mapbox returned status: {}", status);
            return Err(AppError::GeocodeService(format!(
                "Mapbox returned status {}",
                status
            )));
        }

        let body: MapboxResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Mapbox response: {:?}", e);
            AppError::GeocodeService(format!("Failed to parse Mapbox response: {}", e))
        })?;

        let Some(feature) = body.features.into_iter().next() else {
            debug!("Mapbox returned no features for '{}'", query);
            return Err(AppError::GeocodeNotFound(query.to_string()));
        };

        let coordinates = feature.coordinates().ok_or_else(|| {
            AppError::GeocodeService("Mapbox feature has no coordinate pair".to_string())
        })?;

        debug!(
            "Geocoded '{}' to {:?} ({})",
            query,
            coordinates,
            feature.place_name.as_deref().unwrap_or("-")
        );

        Ok(coordinates)
    }
}
