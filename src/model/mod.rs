//! Document model: presentations, slides, template fields and attachments

mod field;
mod file;
mod presentation;
mod slide;

pub use field::{coerce, FieldContent, FieldType, FxRef, TemplateField};
pub use file::File;
pub use presentation::{DocumentSummary, Presentation};
pub use slide::Slide;
