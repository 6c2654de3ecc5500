use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Matches any string holding at least one non-whitespace character
    /// - Valid: "Cupertino", "  CA "
    /// - Invalid: "", "   ", "\t"
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

/// Flatten `validator` errors into human-readable messages, sorted by field name
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}
