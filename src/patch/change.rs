//! Change-batch records as accepted from the editor

use std::convert::TryFrom;

use serde::Deserialize;
use serde_json::Value;

/// A single `{field, value}` edit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldChange {
    pub field: String,
    #[serde(default)]
    pub value: Value,
}

impl FieldChange {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// One entry of a change batch
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawChange")]
pub enum ChangeRecord {
    /// Document-scope scalar change
    Scalar(FieldChange),
    /// Ordered sub-changes against one slide
    Slide { id: String, changes: Vec<FieldChange> },
}

impl ChangeRecord {
    pub fn scalar(field: impl Into<String>, value: impl Into<Value>) -> Self {
        ChangeRecord::Scalar(FieldChange::new(field, value))
    }

    pub fn slide(id: impl Into<String>, changes: Vec<FieldChange>) -> Self {
        ChangeRecord::Slide {
            id: id.into(),
            changes,
        }
    }
}

/// Wire form: `{field, value}` or `{field: "slide", id, value: [{field, value}]}`
#[derive(Deserialize)]
struct RawChange {
    field: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    value: Value,
}

impl TryFrom<RawChange> for ChangeRecord {
    type Error = String;

    fn try_from(raw: RawChange) -> Result<Self, Self::Error> {
        if raw.field != "slide" {
            return Ok(ChangeRecord::Scalar(FieldChange {
                field: raw.field,
                value: raw.value,
            }));
        }
        let id = raw
            .id
            .ok_or_else(|| "slide change without an id".to_string())?;
        let changes: Vec<FieldChange> = serde_json::from_value(raw.value)
            .map_err(|e| format!("slide change {id}: {e}"))?;
        Ok(ChangeRecord::Slide { id, changes })
    }
}

/// A batch of changes addressed to one presentation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeBatch {
    pub id: String,
    #[serde(default)]
    pub changes: Vec<ChangeRecord>,
}

impl ChangeBatch {
    pub fn new(id: impl Into<String>, changes: Vec<ChangeRecord>) -> Self {
        Self {
            id: id.into(),
            changes,
        }
    }

    pub fn from_json(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
