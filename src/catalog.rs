//! Enumerations of the variant and effect catalogs for editor pick lists

use serde::{Deserialize, Serialize};

use crate::template::TemplateKind;
use crate::transition::TransitionKind;

/// One pick-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub label: String,
}

impl CatalogEntry {
    fn new(id: &str, label: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            label: label.into(),
        }
    }
}

/// A catalog visual effect: id, human name and the classes it applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub id: &'static str,
    pub name: &'static str,
    pub classes: &'static str,
}

const EFFECTS: &[Effect] = &[
    Effect { id: "rainbow-bg", name: "Rainbow background", classes: "rainbow rainbow-bg" },
    Effect { id: "rainbow-bg-gradient", name: "Rainbow background gradient", classes: "rainbow rainbow-bg-gradient" },
    Effect { id: "rainbow-border", name: "Rainbow border", classes: "rainbow rainbow-border" },
    Effect { id: "rainbow-text", name: "Rainbow text", classes: "rainbow rainbow-text" },
    Effect { id: "rainbow-text-gradient", name: "Rainbow text gradient", classes: "rainbow rainbow-text-gradient" },
    Effect { id: "rainbow-text-shadow", name: "Rainbow text shadow", classes: "rainbow rainbow-text-shadow" },
    Effect { id: "rainbow-box-shadow", name: "Rainbow box shadow", classes: "rainbow rainbow-box-shadow" },
    Effect { id: "shine-bg", name: "Shine background", classes: "shine shine-bg" },
    Effect { id: "shine-border", name: "Shine border", classes: "shine shine-border" },
];

/// `three_text_columns` -> `Three Text Columns`
fn label(discriminator: &str) -> String {
    discriminator
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read-only listing of everything the editor may pick from
pub struct Catalog;

impl Catalog {
    pub fn templates() -> Vec<CatalogEntry> {
        TemplateKind::ALL
            .iter()
            .map(|k| CatalogEntry::new(k.discriminator(), label(k.discriminator())))
            .collect()
    }

    pub fn transitions() -> Vec<CatalogEntry> {
        TransitionKind::ALL
            .iter()
            .map(|k| CatalogEntry::new(k.discriminator(), label(k.discriminator())))
            .collect()
    }

    pub fn effects() -> Vec<CatalogEntry> {
        EFFECTS
            .iter()
            .map(|e| CatalogEntry::new(e.id, e.name))
            .collect()
    }

    pub fn effect(id: &str) -> Option<&'static Effect> {
        EFFECTS.iter().find(|e| e.id == id)
    }

    /// Class string of an effect, empty when the id is unknown
    pub fn effect_classes(id: &str) -> &'static str {
        Self::effect(id).map(|e| e.classes).unwrap_or("")
    }
}
