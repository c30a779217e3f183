//! Slidepress - structured slide decks rendered to standalone HTML
//!
//! This library provides the presentation document model, a patch engine for
//! field-level edit batches, a JSON codec, and a template-substitution
//! renderer.
//!
//! # Example
//!
//! ```rust
//! use slidepress::{patch, render, ChangeRecord, FieldChange, Presentation};
//!
//! let mut deck = Presentation::new();
//! let slide = deck.new_slide(None);
//! let deck = patch::apply(
//!     deck,
//!     &[ChangeRecord::slide(&slide, vec![FieldChange::new("title", "Hello")])],
//! )
//! .unwrap();
//!
//! let html = render(&deck);
//! assert!(html.contains("Hello"));
//! ```

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod patch;
pub mod registry;
pub mod renderer;
pub mod store;
pub mod studio;
pub mod template;
pub mod transition;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{Config, ConfigError};
pub use error::{EntityKind, Error, Result};
pub use model::{DocumentSummary, FieldContent, FieldType, File, Presentation, Slide, TemplateField};
pub use patch::{ChangeBatch, ChangeRecord, FieldChange, PatchFailure};
pub use registry::VariantRegistry;
pub use renderer::{render_document_html, RenderConfig, ThemeSet};
pub use store::{FileStore, MemoryStore, Store};
pub use studio::Studio;
pub use template::{SlideTemplate, TemplateKind};
pub use transition::{Transition, TransitionKind};

/// Render a presentation to HTML with default configuration
///
/// # Example
///
/// ```rust
/// use slidepress::{render, Presentation};
///
/// let mut deck = Presentation::new();
/// deck.title = "Roadmap".to_string();
/// deck.new_slide(None);
///
/// let html = render(&deck);
/// assert!(html.contains("<title>Roadmap</title>"));
/// assert!(html.contains(r#"class="simple_title current""#));
/// ```
pub fn render(presentation: &Presentation) -> String {
    render_document_html(presentation, &RenderConfig::default())
}

/// Decode a persisted JSON document and render it
///
/// # Example
///
/// ```rust
/// use slidepress::{codec, render_json, Presentation};
///
/// let mut deck = Presentation::with_id("demo");
/// deck.new_slide(None);
/// let json = codec::to_json(&deck).unwrap();
///
/// let html = render_json(&json).unwrap();
/// assert!(html.contains(r#"id="slide_0""#));
/// ```
pub fn render_json(json: &str) -> Result<String> {
    let presentation = codec::from_json(json)?;
    Ok(render(&presentation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_presentation() {
        let html = render(&Presentation::with_id("empty"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("const totalPages = 0;"));
        assert!(!html.contains("<slide "));
    }

    #[test]
    fn test_render_multiple_slides() {
        let mut deck = Presentation::new();
        deck.new_slide(None);
        deck.new_slide(None);
        let html = render(&deck);
        assert!(html.contains(r#"id="slide_0""#));
        assert!(html.contains(r#"id="slide_1""#));
        assert_eq!(html.matches(" current\"").count(), 1);
    }

    #[test]
    fn test_render_json_malformed() {
        assert!(matches!(render_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_render_json_unknown_template() {
        let json = r##"{"id": "x", "slides": [{
            "id": "s", "backgroundColor": "#fff", "backgroundColorAlt": "#000",
            "accentColor": "#f80", "headerAlignment": "left",
            "template": {"name": "Carousel"}, "transition": {"name": "Parallax"}
        }]}"##;
        assert!(matches!(
            render_json(json),
            Err(Error::UnknownVariant { kind: EntityKind::Template, .. })
        ));
    }
}
