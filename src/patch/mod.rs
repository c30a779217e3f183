//! Patch engine: ordered field-level edits against a presentation
//!
//! Every record is dispatched by exact name against a closed table, first
//! at document or slide scope, then against the slide's current template
//! schema. Names outside those sets fail with [`crate::Error::UnknownField`].

mod change;
mod engine;

pub use change::{ChangeBatch, ChangeRecord, FieldChange};
pub use engine::{apply, normalize_color, PatchFailure};
