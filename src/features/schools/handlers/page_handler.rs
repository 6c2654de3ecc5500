use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use minijinja::context;

use crate::core::error::PageError;
use crate::core::extractor::{AppForm, PageQuery};
use crate::features::schools::dtos::{CreateSchoolDto, SearchSchoolsQuery};
use crate::features::schools::services::SchoolService;
use crate::shared::views::render_view;

type PageResult<T> = std::result::Result<T, PageError>;

/// `GET /` - all schools
pub async fn index(State(service): State<Arc<SchoolService>>) -> PageResult<Html<String>> {
    let schools = service.list().await?;
    let html = render_view("index.html", context! { schools => schools })?;
    Ok(Html(html))
}

/// `GET /addSchool`
pub async fn new_school_form() -> PageResult<Html<String>> {
    Ok(Html(render_view("new.html", context! {})?))
}

/// `POST /addSchool` - register, then back to the list
pub async fn add_school(
    State(service): State<Arc<SchoolService>>,
    AppForm(dto): AppForm<CreateSchoolDto>,
) -> PageResult<Redirect> {
    service.register(dto).await?;
    Ok(Redirect::to("/"))
}

/// `GET /school/search?location=`
pub async fn search(
    State(service): State<Arc<SchoolService>>,
    PageQuery(query): PageQuery<SearchSchoolsQuery>,
) -> PageResult<Html<String>> {
    let search = service.search(query.location.as_deref()).await?;
    let html = render_view(
        "search_results.html",
        context! {
            location => search.location,
            origin => search.origin,
            schools => search.results,
        },
    )?;
    Ok(Html(html))
}
