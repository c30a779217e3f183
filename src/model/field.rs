//! Typed template fields

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::File;
use crate::error::{Error, Result};

/// Declared type of a template field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Markdown,
    Image,
    Video,
    Color,
    #[serde(rename = "bool", alias = "boolean")]
    Bool,
}

impl FieldType {
    /// Whether the content is a [`File`] attachment
    pub fn is_file(&self) -> bool {
        matches!(self, FieldType::Image | FieldType::Video)
    }

    fn expected(&self) -> &'static str {
        match self {
            FieldType::Text | FieldType::Markdown | FieldType::Color => "string",
            FieldType::Image | FieldType::Video => "file object",
            FieldType::Bool => "boolean",
        }
    }
}

/// Content held by a field; its shape always matches the declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContent {
    Text(String),
    Bool(bool),
    File(File),
}

impl FieldContent {
    fn fits(&self, field_type: FieldType) -> bool {
        match self {
            FieldContent::Text(_) => matches!(
                field_type,
                FieldType::Text | FieldType::Markdown | FieldType::Color
            ),
            FieldContent::Bool(_) => field_type == FieldType::Bool,
            FieldContent::File(_) => field_type.is_file(),
        }
    }
}

/// Non-owning reference to a catalog visual effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Cached class string of the effect
    #[serde(default)]
    pub classes: String,
}

/// One named, typed slot of a slide template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateField {
    field_type: FieldType,
    name: String,
    content: Option<FieldContent>,
    pub fx: Option<FxRef>,
}

impl TemplateField {
    /// Create an empty field
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
            content: None,
            fx: None,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> Option<&FieldContent> {
        self.content.as_ref()
    }

    /// Text content, for text, markdown and color fields
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(FieldContent::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn flag(&self) -> Option<bool> {
        match &self.content {
            Some(FieldContent::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&File> {
        match &self.content {
            Some(FieldContent::File(f)) => Some(f),
            _ => None,
        }
    }

    /// Replace the content, rejecting a shape that contradicts the declared type
    pub fn set_content(&mut self, content: Option<FieldContent>) -> Result<()> {
        if let Some(c) = &content {
            if !c.fits(self.field_type) {
                return Err(Error::type_mismatch(&self.name, self.field_type.expected()));
            }
        }
        self.content = content;
        Ok(())
    }

    /// Assign a generic value, re-typing it by the declared type
    pub fn assign(&mut self, value: Value) -> Result<()> {
        self.content = coerce(self.field_type, &self.name, value)?;
        Ok(())
    }

    /// Generic value of the content, as persisted
    pub fn to_value(&self) -> Value {
        match &self.content {
            None => Value::Null,
            Some(FieldContent::Text(s)) => Value::String(s.clone()),
            Some(FieldContent::Bool(b)) => Value::Bool(*b),
            Some(FieldContent::File(f)) => serde_json::json!({
                "type": f.mime_type(),
                "name": f.name(),
                "content": f.content(),
                "size": f.size(),
            }),
        }
    }
}

/// Re-type a generic value for a field of `field_type`
///
/// File fields accept a structured object; any other shape clears them.
pub fn coerce(field_type: FieldType, name: &str, value: Value) -> Result<Option<FieldContent>> {
    if value.is_null() {
        return Ok(None);
    }
    match field_type {
        FieldType::Image | FieldType::Video => {
            if !value.is_object() {
                return Ok(None);
            }
            let file: File = serde_json::from_value(value)
                .map_err(|_| Error::type_mismatch(name, field_type.expected()))?;
            Ok(Some(FieldContent::File(file)))
        }
        FieldType::Text | FieldType::Markdown | FieldType::Color => match value {
            Value::String(s) => Ok(Some(FieldContent::Text(s))),
            _ => Err(Error::type_mismatch(name, field_type.expected())),
        },
        FieldType::Bool => match value {
            Value::Bool(b) => Ok(Some(FieldContent::Bool(b))),
            _ => Err(Error::type_mismatch(name, field_type.expected())),
        },
    }
}
