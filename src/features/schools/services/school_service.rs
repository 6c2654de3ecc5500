use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::schools::dtos::CreateSchoolDto;
use crate::features::schools::models::{School, SchoolSearch, SearchResult};
use crate::features::schools::services::SchoolRepository;
use crate::modules::geocoding::Geocoder;
use crate::shared::geo::Coordinates;
use crate::shared::validation;

/// Service for registering schools and ranking them by distance
pub struct SchoolService {
    repository: Arc<dyn SchoolRepository>,
    geocoder: Arc<dyn Geocoder>,
}

impl SchoolService {
    pub fn new(repository: Arc<dyn SchoolRepository>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            repository,
            geocoder,
        }
    }

    /// List every registered school
    pub async fn list(&self) -> Result<Vec<School>> {
        self.repository.list_all().await
    }

    /// Validate, geocode and persist a new school.
    ///
    /// Nothing is written unless geocoding produced coordinates.
    pub async fn register(&self, dto: CreateSchoolDto) -> Result<School> {
        dto.validate().map_err(|e| {
            AppError::InvalidRequest(validation::error_messages(&e).join("; "))
        })?;

        let address = dto.full_address();
        let id = Uuid::new_v4();

        let coordinates = self
            .geocoder
            .forward_geocode(&address)
            .await
            .map_err(|e| match e {
                AppError::GeocodeNotFound(_) => {
                    AppError::InvalidRequest("Invalid address: unable to geocode.".to_string())
                }
                other => other,
            })?;

        let school = School {
            id,
            name: dto.name.trim().to_string(),
            address,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        };

        self.repository.insert(&school).await?;

        tracing::info!(
            "Registered school {} ({}) at {:?}",
            school.id,
            school.name,
            coordinates
        );

        Ok(school)
    }

    /// Geocode `location` and return every school ranked by distance from it
    pub async fn search(&self, location: Option<&str>) -> Result<SchoolSearch> {
        let raw = location.unwrap_or_default();
        let query = raw.trim();
        if query.is_empty() {
            return Err(AppError::InvalidRequest("Location is required.".to_string()));
        }

        let origin = self
            .geocoder
            .forward_geocode(query)
            .await
            .map_err(|e| match e {
                AppError::GeocodeNotFound(_) => AppError::InvalidRequest(
                    "No geocoding results found for this location.".to_string(),
                ),
                other => other,
            })?;

        let schools = self.repository.list_all().await?;
        tracing::debug!(
            "Ranking {} schools around '{}' ({:?})",
            schools.len(),
            query,
            origin
        );

        Ok(SchoolSearch {
            location: raw.to_string(),
            origin,
            results: rank_by_distance(origin, schools),
        })
    }
}

/// Attach the distance from `origin` to every school and sort ascending.
///
/// The sort is stable, so equidistant schools keep their input order.
pub fn rank_by_distance(origin: Coordinates, schools: Vec<School>) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = schools
        .into_iter()
        .map(|school| {
            let distance = origin.distance_km(&school.coordinates());
            SearchResult { school, distance }
        })
        .collect();

    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        school, school_service, InMemorySchoolRepository, StubGeocoder,
    };
    use fake::Fake;

    fn cupertino_dto() -> CreateSchoolDto {
        CreateSchoolDto {
            name: "Test School".to_string(),
            street: "1 Infinite Loop".to_string(),
            city: "Cupertino".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_persists_composed_address_and_coordinates() {
        let (service, repository, geocoder) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::found(37.33, -122.03),
        );

        let created = service.register(cupertino_dto()).await.unwrap();

        let stored = repository.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], created);
        assert_eq!(stored[0].name, "Test School");
        assert_eq!(stored[0].address, "1 Infinite Loop, Cupertino, CA, USA");
        assert_eq!(stored[0].latitude, 37.33);
        assert_eq!(stored[0].longitude, -122.03);
        assert_eq!(geocoder.queries(), vec!["1 Infinite Loop, Cupertino, CA, USA"]);
    }

    #[tokio::test]
    async fn test_register_generates_unique_ids() {
        let (service, repository, _) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::found(37.33, -122.03),
        );

        let first = service.register(cupertino_dto()).await.unwrap();
        let second = service.register(cupertino_dto()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repository.stored().len(), 2);
    }

    #[tokio::test]
    async fn test_register_unresolvable_address_skips_insert() {
        let (service, repository, _) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::not_found(),
        );

        let result = service.register(cupertino_dto()).await;

        assert!(
            matches!(result, Err(AppError::InvalidRequest(ref msg)) if msg == "Invalid address: unable to geocode.")
        );
        assert_eq!(repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_register_geocoding_fault_propagates_without_insert() {
        let (service, repository, _) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::failing(),
        );

        let result = service.register(cupertino_dto()).await;

        assert!(matches!(result, Err(AppError::GeocodeService(_))));
        assert_eq!(repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_register_missing_fields_never_geocodes() {
        let (service, repository, geocoder) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::found(37.33, -122.03),
        );
        let dto = CreateSchoolDto {
            city: "  ".to_string(),
            country: String::new(),
            ..cupertino_dto()
        };

        let result = service.register(dto).await;

        match result {
            Err(AppError::InvalidRequest(msg)) => {
                assert_eq!(msg, "City is required; Country is required");
            }
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
        assert!(geocoder.queries().is_empty());
        assert_eq!(repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_register_storage_fault_propagates() {
        let (service, repository, _) = school_service(
            InMemorySchoolRepository::failing(),
            StubGeocoder::found(37.33, -122.03),
        );

        let result = service.register(cupertino_dto()).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(repository.insert_calls(), 1);
    }

    #[tokio::test]
    async fn test_search_missing_or_blank_location_skips_geocoding() {
        let (service, _, geocoder) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::found(0.0, 0.0),
        );

        for location in [None, Some(""), Some("   ")] {
            let result = service.search(location).await;
            assert!(
                matches!(result, Err(AppError::InvalidRequest(ref msg)) if msg == "Location is required.")
            );
        }
        assert!(geocoder.queries().is_empty());
    }

    #[tokio::test]
    async fn test_search_ranks_nearest_first() {
        let far = school("Far", 0.0, 3.0);
        let near = school("Near", 0.0, 1.0);
        let here = school("Here", 0.0, 0.0);
        let (service, _, geocoder) = school_service(
            InMemorySchoolRepository::with_schools(vec![far, near, here]),
            StubGeocoder::found(0.0, 0.0),
        );

        let search = service.search(Some(" Null Island ")).await.unwrap();

        let names: Vec<_> = search
            .results
            .iter()
            .map(|r| r.school.name.as_str())
            .collect();
        assert_eq!(names, vec!["Here", "Near", "Far"]);
        assert_eq!(search.results[0].distance, 0.0);
        assert!((search.results[1].distance - 111.19).abs() < 0.01);
        assert_eq!(search.location, " Null Island ");
        assert_eq!(search.origin, Coordinates::new(0.0, 0.0));
        assert_eq!(geocoder.queries(), vec!["Null Island"]);
    }

    #[tokio::test]
    async fn test_search_unknown_location_is_invalid_request() {
        let (service, _, _) = school_service(
            InMemorySchoolRepository::with_schools(vec![school("A", 1.0, 1.0)]),
            StubGeocoder::not_found(),
        );

        let result = service.search(Some("Atlantis")).await;

        assert!(
            matches!(result, Err(AppError::InvalidRequest(ref msg)) if msg == "No geocoding results found for this location.")
        );
    }

    #[tokio::test]
    async fn test_search_faults_propagate() {
        let (service, _, _) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::failing(),
        );
        assert!(matches!(
            service.search(Some("Cupertino")).await,
            Err(AppError::GeocodeService(_))
        ));

        let (service, _, _) = school_service(
            InMemorySchoolRepository::failing(),
            StubGeocoder::found(0.0, 0.0),
        );
        assert!(matches!(
            service.search(Some("Cupertino")).await,
            Err(AppError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_search_with_no_schools_is_empty() {
        let (service, _, _) = school_service(
            InMemorySchoolRepository::default(),
            StubGeocoder::found(10.0, 10.0),
        );

        let search = service.search(Some("Anywhere")).await.unwrap();

        assert!(search.results.is_empty());
    }

    #[test]
    fn test_rank_by_distance_sorted_and_complete() {
        for _ in 0..20 {
            let count: usize = (0..40).fake();
            let schools: Vec<School> = (0..count)
                .map(|i| {
                    school(
                        &format!("School {}", i),
                        (-90.0f64..90.0).fake::<f64>(),
                        (-180.0f64..180.0).fake::<f64>(),
                    )
                })
                .collect();
            let origin = Coordinates::new((-90.0f64..90.0).fake(), (-180.0f64..180.0).fake());

            let ranked = rank_by_distance(origin, schools);

            assert_eq!(ranked.len(), count);
            assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
        }
    }

    #[test]
    fn test_rank_by_distance_ties_keep_input_order() {
        // Both one degree of longitude from the origin, on opposite sides
        let east = school("East", 0.0, 1.0);
        let west = school("West", 0.0, -1.0);
        let origin = Coordinates::new(0.0, 0.0);

        let ranked = rank_by_distance(origin, vec![east.clone(), west.clone()]);
        assert_eq!(ranked[0].school, east);
        assert_eq!(ranked[1].school, west);

        let ranked = rank_by_distance(origin, vec![west.clone(), east.clone()]);
        assert_eq!(ranked[0].school, west);
        assert_eq!(ranked[1].school, east);
    }

    #[tokio::test]
    async fn test_list_twice_without_writes_is_stable() {
        let (service, _, _) = school_service(
            InMemorySchoolRepository::with_schools(vec![
                school("A", 1.0, 1.0),
                school("B", 2.0, 2.0),
            ]),
            StubGeocoder::found(0.0, 0.0),
        );

        let mut first = service.list().await.unwrap();
        let mut second = service.list().await.unwrap();
        first.sort_by_key(|s| s.id);
        second.sort_by_key(|s| s.id);

        assert_eq!(first, second);
    }
}
