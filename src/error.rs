//! Error types shared by the codec, patch engine and store

use thiserror::Error;

/// What kind of entity a [`Error::NotFound`] or [`Error::UnknownVariant`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Presentation,
    Slide,
    Template,
    Transition,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Presentation => "presentation",
            EntityKind::Slide => "slide",
            EntityKind::Template => "template",
            EntityKind::Transition => "transition",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Unknown document or slide identifier
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A change names a field absent from the current schema
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// Discriminator that no registry entry answers to
    #[error("unknown {kind}: {name}")]
    UnknownVariant { kind: EntityKind, name: String },

    /// Payload shape inconsistent with the declared field type
    #[error("type mismatch for {field}: expected {expected}")]
    TypeMismatch { field: String, expected: &'static str },

    /// Gateway read or write failure
    #[error("persistence failure for {id}: {source}")]
    Persistence {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// Tree or text that does not have the persisted record layout
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    pub fn unknown_variant(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            name: name.into(),
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    pub fn persistence(id: impl Into<String>, source: std::io::Error) -> Self {
        Self::Persistence {
            id: id.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
