//! HTML view rendering using Jinja2 syntax.
//!
//! Views live in `templates/views/` and are compiled into the binary, so the
//! server does not depend on its working directory at runtime.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global view environment
static VIEW_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Embedded views as (name, source) pairs
const VIEWS: &[(&str, &str)] = &[
    (
        "layout.html",
        include_str!("../../../templates/views/layout.html"),
    ),
    (
        "index.html",
        include_str!("../../../templates/views/index.html"),
    ),
    ("new.html", include_str!("../../../templates/views/new.html")),
    (
        "search_results.html",
        include_str!("../../../templates/views/search_results.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in VIEWS {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load view {}: {}", name, e);
        } else {
            tracing::debug!("Loaded view: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    VIEW_ENV.get_or_init(init_environment)
}

/// Render a view with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
///
/// let html = render_view("index.html", context! { schools => schools })?;
/// ```
pub fn render_view(view_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(view_name)
        .map_err(|_| TemplateError::NotFound(view_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a view exists
#[cfg(test)]
pub fn view_exists(view_name: &str) -> bool {
    get_environment().get_template(view_name).is_ok()
}
