//! In-memory stand-ins for the external collaborators, shared by unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::School;
use crate::features::schools::services::{SchoolRepository, SchoolService};
use crate::modules::geocoding::Geocoder;
use crate::shared::geo::Coordinates;

#[derive(Debug, Clone, Copy)]
enum StubAnswer {
    Found(Coordinates),
    NotFound,
    Fail,
}

/// Geocoder returning a fixed answer and recording every query
pub struct StubGeocoder {
    answer: StubAnswer,
    queries: Mutex<Vec<String>>,
}

impl StubGeocoder {
    pub fn found(latitude: f64, longitude: f64) -> Self {
        Self::with_answer(StubAnswer::Found(Coordinates::new(latitude, longitude)))
    }

    pub fn not_found() -> Self {
        Self::with_answer(StubAnswer::NotFound)
    }

    pub fn failing() -> Self {
        Self::with_answer(StubAnswer::Fail)
    }

    fn with_answer(answer: StubAnswer) -> Self {
        Self {
            answer,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn forward_geocode(&self, query: &str) -> Result<Coordinates> {
        self.queries.lock().unwrap().push(query.to_string());
        match self.answer {
            StubAnswer::Found(coordinates) => Ok(coordinates),
            StubAnswer::NotFound => Err(AppError::GeocodeNotFound(query.to_string())),
            StubAnswer::Fail => Err(AppError::GeocodeService("quota exceeded".to_string())),
        }
    }
}

/// Vec-backed repository counting inserts
#[derive(Default)]
pub struct InMemorySchoolRepository {
    schools: Mutex<Vec<School>>,
    insert_calls: AtomicUsize,
    fail: bool,
}

impl InMemorySchoolRepository {
    pub fn with_schools(schools: Vec<School>) -> Self {
        Self {
            schools: Mutex::new(schools),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<School> {
        self.schools.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn list_all(&self) -> Result<Vec<School>> {
        if self.fail {
            return Err(AppError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(self.schools.lock().unwrap().clone())
    }

    async fn insert(&self, school: &School) -> Result<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Storage(sqlx::Error::PoolTimedOut));
        }
        self.schools.lock().unwrap().push(school.clone());
        Ok(())
    }
}

pub fn school(name: &str, latitude: f64, longitude: f64) -> School {
    School {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: format!("{} address", name),
        latitude,
        longitude,
    }
}

/// Service wired to the given stubs, returned alongside them for assertions
pub fn school_service(
    repository: InMemorySchoolRepository,
    geocoder: StubGeocoder,
) -> (
    Arc<SchoolService>,
    Arc<InMemorySchoolRepository>,
    Arc<StubGeocoder>,
) {
    let repository = Arc::new(repository);
    let geocoder = Arc::new(geocoder);
    let service = Arc::new(SchoolService::new(
        Arc::clone(&repository) as Arc<dyn SchoolRepository>,
        Arc::clone(&geocoder) as Arc<dyn Geocoder>,
    ));
    (service, repository, geocoder)
}
