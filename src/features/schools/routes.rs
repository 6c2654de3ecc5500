use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::schools::handlers::{page_handler, school_handler};
use crate::features::schools::services::SchoolService;

/// HTML pages and JSON API for the schools feature
pub fn routes(service: Arc<SchoolService>) -> Router {
    Router::new()
        // Pages
        .route("/", get(page_handler::index))
        .route(
            "/addSchool",
            get(page_handler::new_school_form).post(page_handler::add_school),
        )
        .route("/school/search", get(page_handler::search))
        // API
        .route("/api/schools/search", get(school_handler::search_schools))
        .route(
            "/api/schools",
            get(school_handler::list_schools).post(school_handler::create_school),
        )
        .with_state(service)
}
