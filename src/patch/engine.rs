//! Sequential application of change records

use serde_json::Value;
use thiserror::Error;

use super::change::{ChangeRecord, FieldChange};
use crate::error::{EntityKind, Error, Result};
use crate::model::{File, Presentation, Slide};
use crate::registry::VariantRegistry;

/// A batch that stopped on its first failing record
///
/// `partial` holds the document with every earlier record applied; whether to
/// keep or discard it is the caller's decision.
#[derive(Debug, Error)]
#[error("{error} (after {applied} applied changes)")]
pub struct PatchFailure {
    #[source]
    pub error: Error,
    pub partial: Presentation,
    pub applied: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentField {
    Title,
    Footer,
    FontFamily,
    HeaderFontFamily,
}

const DOCUMENT_FIELDS: &[(&str, DocumentField)] = &[
    ("title", DocumentField::Title),
    ("footer", DocumentField::Footer),
    ("font-family", DocumentField::FontFamily),
    ("font_family", DocumentField::FontFamily),
    ("header-font-family", DocumentField::HeaderFontFamily),
    ("header_font_family", DocumentField::HeaderFontFamily),
];

/// Slide-scope targets: a reorder, or an attribute of the slide itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlideField {
    Position,
    Attribute(Attribute),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Title,
    Description,
    FontFamily,
    HeaderAlignment,
    Theme,
    BackgroundImage,
    BackgroundColor,
    BackgroundColorAlt,
    AccentColor,
    Transition,
    Duration,
    Template,
}

const SLIDE_FIELDS: &[(&str, SlideField)] = &[
    ("position", SlideField::Position),
    ("title", SlideField::Attribute(Attribute::Title)),
    ("description", SlideField::Attribute(Attribute::Description)),
    ("font-family", SlideField::Attribute(Attribute::FontFamily)),
    ("font_family", SlideField::Attribute(Attribute::FontFamily)),
    ("header-alignment", SlideField::Attribute(Attribute::HeaderAlignment)),
    ("header_alignment", SlideField::Attribute(Attribute::HeaderAlignment)),
    ("theme", SlideField::Attribute(Attribute::Theme)),
    ("background-image", SlideField::Attribute(Attribute::BackgroundImage)),
    ("background_image", SlideField::Attribute(Attribute::BackgroundImage)),
    ("background-color", SlideField::Attribute(Attribute::BackgroundColor)),
    ("background_color", SlideField::Attribute(Attribute::BackgroundColor)),
    ("background-color-alt", SlideField::Attribute(Attribute::BackgroundColorAlt)),
    ("background_color_alt", SlideField::Attribute(Attribute::BackgroundColorAlt)),
    ("accent-color", SlideField::Attribute(Attribute::AccentColor)),
    ("accent_color", SlideField::Attribute(Attribute::AccentColor)),
    ("transition", SlideField::Attribute(Attribute::Transition)),
    ("duration", SlideField::Attribute(Attribute::Duration)),
    ("template", SlideField::Attribute(Attribute::Template)),
];

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Apply `changes` in order, stopping at the first failure
pub fn apply(
    mut presentation: Presentation,
    changes: &[ChangeRecord],
) -> std::result::Result<Presentation, PatchFailure> {
    for (applied, change) in changes.iter().enumerate() {
        if let Err(error) = apply_record(&mut presentation, change) {
            log::debug!("change {} failed: {}", applied, error);
            return Err(PatchFailure {
                error,
                partial: presentation,
                applied,
            });
        }
    }
    Ok(presentation)
}

fn apply_record(presentation: &mut Presentation, change: &ChangeRecord) -> Result<()> {
    match change {
        ChangeRecord::Scalar(change) => apply_document_field(presentation, change),
        ChangeRecord::Slide { id, changes } => {
            if presentation.slide(id).is_none() {
                return Err(Error::not_found(EntityKind::Slide, id));
            }
            for change in changes {
                apply_slide_field(presentation, id, change)?;
            }
            Ok(())
        }
    }
}

fn apply_document_field(presentation: &mut Presentation, change: &FieldChange) -> Result<()> {
    let field = lookup(DOCUMENT_FIELDS, &change.field)
        .ok_or_else(|| Error::unknown_field(&change.field))?;
    log::debug!("document {}: {:?}", presentation.id(), field);
    match field {
        DocumentField::Title => presentation.title = text(&change.field, &change.value)?,
        DocumentField::Footer => presentation.footer = text(&change.field, &change.value)?,
        DocumentField::FontFamily => {
            presentation.font_family = choice(&change.field, &change.value)?
        }
        DocumentField::HeaderFontFamily => {
            presentation.header_font_family = choice(&change.field, &change.value)?
        }
    }
    Ok(())
}

fn apply_slide_field(presentation: &mut Presentation, id: &str, change: &FieldChange) -> Result<()> {
    let name = change.field.as_str();
    let value = &change.value;
    let Some(field) = lookup(SLIDE_FIELDS, name) else {
        return assign_template_field(slide_mut(presentation, id)?, name, value);
    };
    log::debug!("slide {}: {:?}", id, field);
    match field {
        SlideField::Position => {
            let position = value
                .as_u64()
                .ok_or_else(|| Error::type_mismatch(name, "non-negative integer"))?;
            presentation.move_slide(id, position as usize)
        }
        SlideField::Attribute(attribute) => {
            set_attribute(slide_mut(presentation, id)?, attribute, name, value)
        }
    }
}

fn set_attribute(slide: &mut Slide, attribute: Attribute, name: &str, value: &Value) -> Result<()> {
    match attribute {
        Attribute::Title => slide.title = text(name, value)?,
        Attribute::Description => slide.description = text(name, value)?,
        Attribute::FontFamily => slide.font_family = choice(name, value)?,
        Attribute::HeaderAlignment => slide.header_alignment = choice(name, value)?,
        Attribute::Theme => slide.theme = choice(name, value)?,
        Attribute::BackgroundImage => slide.background_image = file(name, value)?,
        Attribute::BackgroundColor => slide.background_color = color(name, value)?,
        Attribute::BackgroundColorAlt => slide.background_color_alt = color(name, value)?,
        Attribute::AccentColor => slide.accent_color = color(name, value)?,
        Attribute::Transition => {
            slide.transition = VariantRegistry::transition(&choice(name, value)?)?
        }
        Attribute::Duration => {
            slide.transition.duration = value
                .as_f64()
                .ok_or_else(|| Error::type_mismatch(name, "number"))?
        }
        Attribute::Template => slide.template = VariantRegistry::template(&choice(name, value)?)?,
    }
    Ok(())
}

fn slide_mut<'p>(presentation: &'p mut Presentation, id: &str) -> Result<&'p mut Slide> {
    presentation
        .slide_mut(id)
        .ok_or_else(|| Error::not_found(EntityKind::Slide, id))
}

/// Schema-field fallback; `t_` addresses a template field explicitly
fn assign_template_field(slide: &mut Slide, name: &str, value: &Value) -> Result<()> {
    let bare = name.strip_prefix("t_").unwrap_or(name);
    log::debug!("slide {}: template field {}", slide.id(), bare);
    slide
        .template
        .field_mut(bare)
        .ok_or_else(|| Error::unknown_field(name))?
        .assign(value.clone())
}

fn text(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(Error::type_mismatch(field, "string")),
    }
}

/// A string, or the `{id}` object an editor pick list sends
fn choice(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(map) => match map.get("id") {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(Error::type_mismatch(field, "string or {id}")),
        },
        _ => Err(Error::type_mismatch(field, "string or {id}")),
    }
}

fn color(field: &str, value: &Value) -> Result<String> {
    let raw = text(field, value)?;
    Ok(normalize_color(&raw))
}

/// Prefix `#` when missing
pub fn normalize_color(raw: &str) -> String {
    if raw.starts_with('#') {
        raw.to_string()
    } else {
        format!("#{raw}")
    }
}

fn file(field: &str, value: &Value) -> Result<Option<File>> {
    if !value.is_object() {
        return Ok(None);
    }
    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(|_| Error::type_mismatch(field, "file object"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{SlideTemplate, TemplateKind};
    use crate::transition::{Transition, TransitionKind};
    use serde_json::json;

    fn deck() -> Presentation {
        let mut p = Presentation::with_id("deck");
        for id in ["a", "b", "c"] {
            p.add_slide(
                Slide::with_id(id, SlideTemplate::new(TemplateKind::ImageText), Transition::default()),
                None,
            );
        }
        p
    }

    fn on_slide(id: &str, changes: Vec<FieldChange>) -> Vec<ChangeRecord> {
        vec![ChangeRecord::slide(id, changes)]
    }

    #[test]
    fn test_document_scalars() {
        let changes = vec![
            ChangeRecord::scalar("title", "Quarterly"),
            ChangeRecord::scalar("footer", "ACME"),
            ChangeRecord::scalar("font_family", json!({"id": "Lato", "text": "Lato"})),
        ];
        let p = apply(deck(), &changes).unwrap();
        assert_eq!(p.title, "Quarterly");
        assert_eq!(p.footer, "ACME");
        assert_eq!(p.font_family, "Lato");
    }

    #[test]
    fn test_unknown_document_field() {
        let failure = apply(deck(), &[ChangeRecord::scalar("colour", "x")]).unwrap_err();
        assert!(matches!(failure.error, Error::UnknownField { .. }));
        assert_eq!(failure.applied, 0);
    }

    #[test]
    fn test_color_normalization() {
        let changes = on_slide(
            "a",
            vec![
                FieldChange::new("background-color", "ff0000"),
                FieldChange::new("accent_color", "#00ff00"),
            ],
        );
        let p = apply(deck(), &changes).unwrap();
        let slide = p.slide("a").unwrap();
        assert_eq!(slide.background_color, "#ff0000");
        assert_eq!(slide.accent_color, "#00ff00");
    }

    #[test]
    fn test_position_moves_and_renumbers() {
        let p = apply(deck(), &on_slide("b", vec![FieldChange::new("position", 0)])).unwrap();
        let order: Vec<_> = p.slides().iter().map(|s| (s.id(), s.position())).collect();
        assert_eq!(order, vec![("b", 0), ("a", 1), ("c", 2)]);
    }

    #[test]
    fn test_position_must_be_number() {
        let failure = apply(deck(), &on_slide("b", vec![FieldChange::new("position", "first")])).unwrap_err();
        assert!(matches!(failure.error, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_transition_then_duration_targets_new_instance() {
        let changes = on_slide(
            "a",
            vec![
                FieldChange::new("transition", "fadeout"),
                FieldChange::new("duration", 3.5),
            ],
        );
        let p = apply(deck(), &changes).unwrap();
        let transition = &p.slide("a").unwrap().transition;
        assert_eq!(transition.kind(), TransitionKind::Fadeout);
        assert_eq!(transition.duration, 3.5);
    }

    #[test]
    fn test_transition_replacement_uses_new_default_duration() {
        let changes = on_slide(
            "a",
            vec![
                FieldChange::new("duration", 9.0),
                FieldChange::new("transition", json!({"id": "to_left"})),
            ],
        );
        let p = apply(deck(), &changes).unwrap();
        assert_eq!(p.slide("a").unwrap().transition.duration, 0.8);
    }

    #[test]
    fn test_template_swap_resets_fields() {
        let changes = on_slide(
            "a",
            vec![
                FieldChange::new("subtitle", "Changed"),
                FieldChange::new("template", "Three text columns"),
            ],
        );
        let p = apply(deck(), &changes).unwrap();
        assert_eq!(
            p.slide("a").unwrap().template,
            SlideTemplate::new(TemplateKind::ThreeTextColumns)
        );
    }

    #[test]
    fn test_template_field_fallback() {
        let changes = on_slide(
            "b",
            vec![
                FieldChange::new("text", "Body"),
                FieldChange::new("t_text_color", "#333333"),
            ],
        );
        let p = apply(deck(), &changes).unwrap();
        let template = &p.slide("b").unwrap().template;
        assert_eq!(template.field("text").unwrap().text(), Some("Body"));
        assert_eq!(template.text_color(), "#333333");

        let failure = apply(deck(), &on_slide("b", vec![FieldChange::new("t_caption", "x")])).unwrap_err();
        assert!(matches!(failure.error, Error::UnknownField { .. }));
    }

    #[test]
    fn test_slide_title_wins_over_template_title() {
        let changes = on_slide(
            "a",
            vec![
                FieldChange::new("title", "Slide"),
                FieldChange::new("t_title", "Template"),
            ],
        );
        let p = apply(deck(), &changes).unwrap();
        let slide = p.slide("a").unwrap();
        assert_eq!(slide.title, "Slide");
        assert_eq!(slide.template.field("title").unwrap().text(), Some("Template"));
    }

    #[test]
    fn test_background_image_non_object_clears() {
        let image = json!({"type": "image/png", "name": "bg.png", "content": "QQ==", "size": 2});
        let p = apply(deck(), &on_slide("a", vec![FieldChange::new("background-image", image)])).unwrap();
        assert!(p.slide("a").unwrap().background_image.is_some());
        let p = apply(p, &on_slide("a", vec![FieldChange::new("background_image", "")])).unwrap();
        assert!(p.slide("a").unwrap().background_image.is_none());
    }

    #[test]
    fn test_unknown_slide() {
        let failure = apply(deck(), &on_slide("zzz", vec![])).unwrap_err();
        assert!(matches!(
            failure.error,
            Error::NotFound { kind: EntityKind::Slide, .. }
        ));
    }

    #[test]
    fn test_unknown_variant() {
        let failure = apply(deck(), &on_slide("a", vec![FieldChange::new("template", "carousel")])).unwrap_err();
        assert!(matches!(failure.error, Error::UnknownVariant { .. }));
    }

    #[test]
    fn test_failure_keeps_earlier_records() {
        let changes = vec![
            ChangeRecord::scalar("title", "Kept"),
            ChangeRecord::slide("a", vec![FieldChange::new("nonexistent", "x")]),
            ChangeRecord::scalar("footer", "Never"),
        ];
        let failure = apply(deck(), &changes).unwrap_err();
        assert_eq!(failure.applied, 1);
        assert_eq!(failure.partial.title, "Kept");
        assert_eq!(failure.partial.footer, "");
        assert!(matches!(failure.error, Error::UnknownField { ref field } if field == "nonexistent"));
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("ff0000"), "#ff0000");
        assert_eq!(normalize_color("#ff0000"), "#ff0000");
    }
}
