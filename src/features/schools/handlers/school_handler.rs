use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::schools::dtos::{
    CreateSchoolDto, SchoolResponseDto, SchoolSearchResponseDto, SearchSchoolsQuery,
};
use crate::features::schools::services::SchoolService;
use crate::shared::types::{ApiResponse, Meta};

/// List all registered schools
#[utoipa::path(
    get,
    path = "/api/schools",
    responses(
        (status = 200, description = "List of schools", body = ApiResponse<Vec<SchoolResponseDto>>),
        (status = 500, description = "Storage failure")
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(service): State<Arc<SchoolService>>,
) -> Result<Json<ApiResponse<Vec<SchoolResponseDto>>>> {
    let schools: Vec<SchoolResponseDto> =
        service.list().await?.into_iter().map(Into::into).collect();
    let meta = Meta {
        total: schools.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(schools), None, Some(meta))))
}

/// Register a school
///
/// The address is composed from the structured fields and geocoded before
/// anything is stored.
#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School registered", body = ApiResponse<SchoolResponseDto>),
        (status = 400, description = "Missing field or address could not be resolved"),
        (status = 500, description = "Geocoding or storage failure")
    ),
    tag = "schools"
)]
pub async fn create_school(
    State(service): State<Arc<SchoolService>>,
    AppJson(dto): AppJson<CreateSchoolDto>,
) -> Result<(StatusCode, Json<ApiResponse<SchoolResponseDto>>)> {
    let school = service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(school.into()),
            Some("School added successfully".to_string()),
            None,
        )),
    ))
}

/// Find schools nearest to a location
///
/// Returns every school ordered by great-circle distance from the geocoded
/// location.
#[utoipa::path(
    get,
    path = "/api/schools/search",
    params(SearchSchoolsQuery),
    responses(
        (status = 200, description = "Schools ranked by distance", body = ApiResponse<SchoolSearchResponseDto>),
        (status = 400, description = "Location missing or not found"),
        (status = 500, description = "Geocoding or storage failure")
    ),
    tag = "schools"
)]
pub async fn search_schools(
    State(service): State<Arc<SchoolService>>,
    AppQuery(query): AppQuery<SearchSchoolsQuery>,
) -> Result<Json<ApiResponse<SchoolSearchResponseDto>>> {
    let search = service.search(query.location.as_deref()).await?;
    let meta = Meta {
        total: search.results.len() as i64,
    };
    Ok(Json(ApiResponse::success(
        Some(search.into()),
        None,
        Some(meta),
    )))
}
