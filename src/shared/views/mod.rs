//! Server-rendered HTML views

mod engine;

pub use engine::{render_view, TemplateError};
