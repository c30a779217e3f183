//! Field tier: one template field to its rendered string

use super::markdown;
use crate::model::{FieldContent, FieldType, TemplateField};

/// Rendered value of `field` for HTML substitution
///
/// Markdown is converted to HTML, files become data URIs, and boolean flags
/// render empty since templates resolve them in their own derivations.
pub fn render_field(field: &TemplateField) -> String {
    match field.content() {
        None => String::new(),
        Some(FieldContent::Text(text)) if field.field_type() == FieldType::Markdown => {
            markdown::to_html(text)
        }
        Some(FieldContent::Text(text)) => text.clone(),
        Some(FieldContent::Bool(_)) => String::new(),
        Some(FieldContent::File(file)) => file.data_uri(),
    }
}

/// Raw value of `field` for CSS and script substitution
///
/// Same as [`render_field`] except markdown stays as written and booleans
/// render as `true`/`false`.
pub fn raw_field(field: &TemplateField) -> String {
    match field.content() {
        None => String::new(),
        Some(FieldContent::Text(text)) => text.clone(),
        Some(FieldContent::Bool(flag)) => flag.to_string(),
        Some(FieldContent::File(file)) => file.data_uri(),
    }
}
