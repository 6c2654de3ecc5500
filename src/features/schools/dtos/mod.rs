mod school_dto;

pub use school_dto::{
    CreateSchoolDto, SchoolResponseDto, SchoolSearchResponseDto, SchoolSearchResultDto,
    SearchSchoolsQuery,
};
