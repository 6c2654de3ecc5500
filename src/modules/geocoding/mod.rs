//! Geocoding module
//!
//! Resolves free-text addresses to coordinates through an external
//! forward-geocoding service.

mod mapbox_client;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::shared::geo::Coordinates;

pub use mapbox_client::MapboxGeocoder;

/// Forward geocoding: free-text address to the best-match coordinate pair.
///
/// # Errors
///
/// * `GeocodeNotFound` - the service answered with zero matches
/// * `GeocodeService` - the call itself failed (network, auth, quota, bad body)
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn forward_geocode(&self, query: &str) -> Result<Coordinates>;
}
