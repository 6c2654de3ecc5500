//! School registry and nearest-school search.
//!
//! Schools are registered with a structured postal address that is geocoded
//! before being stored; searches geocode a free-text location and rank every
//! school by great-circle distance from it.
//!
//! ## Pages
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | List all schools |
//! | GET | `/addSchool` | Registration form |
//! | POST | `/addSchool` | Register a school, redirect to `/` |
//! | GET | `/school/search?location=` | Schools nearest to a location |
//!
//! ## API
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/schools` | List all schools |
//! | POST | `/api/schools` | Register a school |
//! | GET | `/api/schools/search?location=` | Schools nearest to a location |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PgSchoolRepository, SchoolService};
