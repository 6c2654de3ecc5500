mod school_repository;
mod school_service;

pub use school_repository::{PgSchoolRepository, SchoolRepository};
pub use school_service::SchoolService;
