//! Variant registry: discriminator string to default-populated instance
//!
//! The set of variants is closed; lookups never register anything new.

use std::collections::HashMap;

use crate::error::{EntityKind, Error, Result};
use crate::model::FieldContent;
use crate::template::{SlideTemplate, TemplateKind};
use crate::transition::{Transition, TransitionKind};

/// Stateless constructor table for templates and transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantRegistry;

impl VariantRegistry {
    /// Lower-case a display name and replace spaces with underscores
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase().replace(' ', "_")
    }

    pub fn template_kind(name: &str) -> Result<TemplateKind> {
        TemplateKind::from_discriminator(&Self::normalize(name))
            .ok_or_else(|| Error::unknown_variant(EntityKind::Template, name))
    }

    pub fn transition_kind(name: &str) -> Result<TransitionKind> {
        TransitionKind::from_discriminator(&Self::normalize(name))
            .ok_or_else(|| Error::unknown_variant(EntityKind::Transition, name))
    }

    /// Fresh default-populated template for `name`
    pub fn template(name: &str) -> Result<SlideTemplate> {
        Ok(SlideTemplate::new(Self::template_kind(name)?))
    }

    /// Fresh template for `name` with `values` overriding defaults
    pub fn template_with(
        name: &str,
        values: HashMap<String, Option<FieldContent>>,
    ) -> Result<SlideTemplate> {
        Ok(SlideTemplate::with_values(Self::template_kind(name)?, values))
    }

    /// Fresh default-populated transition for `name`
    pub fn transition(name: &str) -> Result<Transition> {
        Ok(Transition::new(Self::transition_kind(name)?))
    }

    /// First registry entry for templates
    pub fn default_template() -> SlideTemplate {
        SlideTemplate::new(TemplateKind::ALL[0])
    }

    /// First registry entry for transitions
    pub fn default_transition() -> Transition {
        Transition::new(TransitionKind::ALL[0])
    }
}
