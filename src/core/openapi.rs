use utoipa::{Modify, OpenApi};

use crate::features::schools::{dtos as schools_dtos, handlers::school_handler};
use crate::shared::geo::Coordinates;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        school_handler::list_schools,
        school_handler::create_school,
        school_handler::search_schools,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Coordinates,
            // Schools
            schools_dtos::CreateSchoolDto,
            schools_dtos::SchoolResponseDto,
            schools_dtos::SchoolSearchResultDto,
            schools_dtos::SchoolSearchResponseDto,
            ApiResponse<Vec<schools_dtos::SchoolResponseDto>>,
            ApiResponse<schools_dtos::SchoolResponseDto>,
            ApiResponse<schools_dtos::SchoolSearchResponseDto>,
        )
    ),
    tags(
        (name = "schools", description = "School registry and nearest-school search"),
    ),
    info(
        title = "School Locator API",
        version = "0.1.0",
        description = "Register schools and find the ones nearest to you",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
