//! HTML renderer for presentations
//!
//! Rendering runs in three tiers, each a pure substitution pass over bundled
//! skeletons: a field renders to a string, a slide renders its template
//! content and stylesheet from its fields, and the document stitches every
//! slide together with the page chrome.

pub mod config;
mod document;
mod field;
mod markdown;
mod slide;

pub use config::{RenderConfig, ThemeSet};
pub use document::{render_document_html, render_footer};
pub use field::{raw_field, render_field};
pub use markdown::to_html as markdown_to_html;
pub use slide::{class_list, render_slide_html, render_slide_style, z_index};
