//! Conversion between [`Presentation`] and the persisted JSON tree
//!
//! Encoding mirrors the record layout field by field. Decoding reads the
//! tree into typed records first, then rebuilds every template and
//! transition through the [`VariantRegistry`] so the concrete variant, its
//! schema order and its fixed parameters come from the registry rather than
//! from whatever the tree happens to contain.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::model::{coerce, File, FxRef, Presentation, Slide, TemplateField};
use crate::registry::VariantRegistry;
use crate::template::{FieldSpec, SlideTemplate, TemplateKind};
use crate::transition::Transition;

fn roboto() -> String {
    "Roboto".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresentationRecord {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    footer: String,
    #[serde(default = "roboto", alias = "font_family")]
    font_family: String,
    #[serde(default = "roboto", alias = "header_font_family")]
    header_font_family: String,
    #[serde(default)]
    style: Vec<String>,
    #[serde(default)]
    scripts: Vec<String>,
    #[serde(default)]
    slides: Vec<SlideRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlideRecord {
    id: String,
    #[serde(default)]
    position: usize,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    theme: String,
    #[serde(alias = "background_color")]
    background_color: String,
    #[serde(alias = "background_color_alt")]
    background_color_alt: String,
    #[serde(alias = "accent_color")]
    accent_color: String,
    #[serde(default, alias = "background_image")]
    background_image: Value,
    #[serde(default = "roboto", alias = "font_family")]
    font_family: String,
    #[serde(alias = "header_alignment")]
    header_alignment: String,
    template: TemplateRecord,
    transition: TransitionRecord,
}

#[derive(Deserialize)]
struct TemplateRecord {
    name: String,
    #[serde(default)]
    fields: Vec<FieldRecord>,
}

#[derive(Deserialize)]
struct FieldRecord {
    name: String,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    fx: Option<FxRef>,
}

#[derive(Deserialize)]
struct TransitionRecord {
    name: String,
    #[serde(default)]
    duration: Option<f64>,
}

/// Encode a presentation as the persisted tree
pub fn to_tree(presentation: &Presentation) -> Value {
    json!({
        "id": presentation.id(),
        "title": presentation.title,
        "footer": presentation.footer,
        "fontFamily": presentation.font_family,
        "headerFontFamily": presentation.header_font_family,
        "style": presentation.style,
        "scripts": presentation.scripts,
        "slides": presentation.slides().iter().map(slide_tree).collect::<Vec<_>>(),
    })
}

fn file_tree(file: Option<&File>) -> Value {
    match file {
        Some(f) => json!({
            "type": f.mime_type(),
            "name": f.name(),
            "content": f.content(),
            "size": f.size(),
        }),
        None => Value::Null,
    }
}

fn slide_tree(slide: &Slide) -> Value {
    json!({
        "id": slide.id(),
        "position": slide.position(),
        "title": slide.title,
        "description": slide.description,
        "theme": slide.theme,
        "backgroundColor": slide.background_color,
        "backgroundColorAlt": slide.background_color_alt,
        "accentColor": slide.accent_color,
        "backgroundImage": file_tree(slide.background_image.as_ref()),
        "fontFamily": slide.font_family,
        "headerAlignment": slide.header_alignment,
        "template": template_tree(&slide.template),
        "transition": transition_tree(&slide.transition),
    })
}

fn template_tree(template: &SlideTemplate) -> Value {
    json!({
        "name": template.name(),
        "description": template.description(),
        "titleTextColor": template.title_text_color(),
        "textColor": template.text_color(),
        "fields": template.fields().iter().map(field_tree).collect::<Vec<_>>(),
    })
}

fn field_tree(field: &TemplateField) -> Value {
    let mut tree = json!({
        "type": field.field_type(),
        "name": field.name(),
        "content": field.to_value(),
    });
    if let Some(fx) = &field.fx {
        tree["fx"] = json!({ "id": fx.id, "name": fx.name, "classes": fx.classes });
    }
    tree
}

fn transition_tree(transition: &Transition) -> Value {
    json!({
        "name": transition.name(),
        "duration": transition.duration,
        "timingFunction": transition.timing_function(),
        "delay": transition.delay(),
        "direction": transition.direction(),
        "fillMode": transition.fill_mode(),
        "timeLine": transition.time_line(),
        "iterationCount": transition.iteration_count(),
        "playState": transition.play_state(),
        "keyframe": transition.keyframe(),
        "target": transition.target(),
        "extraCss": transition.extra_css(),
    })
}

/// Decode a persisted tree, reconstructing concrete variants
pub fn from_tree(tree: Value) -> Result<Presentation> {
    let record: PresentationRecord = serde_json::from_value(tree)?;
    let mut presentation = Presentation::with_id(record.id);
    presentation.title = record.title;
    presentation.footer = record.footer;
    presentation.font_family = record.font_family;
    presentation.header_font_family = record.header_font_family;
    presentation.style = record.style;
    presentation.scripts = record.scripts;
    for (index, slide_record) in record.slides.into_iter().enumerate() {
        if slide_record.position != index {
            log::warn!(
                "slide {} stored at position {} but listed at {}; renumbering",
                slide_record.id,
                slide_record.position,
                index
            );
        }
        let slide = slide_from_record(slide_record)?;
        presentation.add_slide(slide, None);
    }
    Ok(presentation)
}

/// Find the schema slot for a persisted field name
///
/// Older documents prefixed field names with a per-template abbreviation
/// of at most three letters (`ti_title`, `if_src`); those are mapped onto
/// the bare name.
fn schema_slot(kind: TemplateKind, name: &str) -> Option<&'static FieldSpec> {
    let schema = kind.schema();
    if let Some(spec) = schema.iter().find(|s| s.name == name) {
        return Some(spec);
    }
    let (prefix, bare) = name.split_once('_')?;
    if prefix.len() > 3 {
        return None;
    }
    let spec = schema.iter().find(|s| s.name == bare)?;
    log::warn!(
        "migrating legacy field name {} to {} in {}",
        name,
        bare,
        kind.discriminator()
    );
    Some(spec)
}

fn template_from_record(record: TemplateRecord) -> Result<SlideTemplate> {
    let kind = VariantRegistry::template_kind(&record.name)?;
    let mut values = HashMap::new();
    let mut effects = Vec::new();
    for field in record.fields {
        let Some(spec) = schema_slot(kind, &field.name) else {
            log::warn!(
                "dropping field {} unknown to template {}",
                field.name,
                kind.discriminator()
            );
            continue;
        };
        let content = coerce(spec.field_type, spec.name, field.content)?;
        values.insert(spec.name.to_string(), content);
        if let Some(fx) = field.fx {
            effects.push((spec.name, fx));
        }
    }
    let mut template = SlideTemplate::with_values(kind, values);
    for (name, fx) in effects {
        if let Some(field) = template.field_mut(name) {
            field.fx = Some(fx);
        }
    }
    Ok(template)
}

fn slide_from_record(record: SlideRecord) -> Result<Slide> {
    let template = template_from_record(record.template)?;
    let mut transition = VariantRegistry::transition(&record.transition.name)?;
    if let Some(duration) = record.transition.duration {
        transition.duration = duration;
    }
    let mut slide = Slide::with_id(record.id, template, transition);
    slide.title = record.title;
    slide.description = record.description;
    slide.theme = record.theme;
    slide.background_color = record.background_color;
    slide.background_color_alt = record.background_color_alt;
    slide.accent_color = record.accent_color;
    slide.background_image = match record.background_image {
        Value::Object(_) => Some(serde_json::from_value(record.background_image)?),
        _ => None,
    };
    slide.font_family = record.font_family;
    slide.header_alignment = record.header_alignment;
    Ok(slide)
}

/// Encode as pretty-printed JSON text
pub fn to_json(presentation: &Presentation) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_tree(presentation))?)
}

/// Decode from JSON text
pub fn from_json(text: &str) -> Result<Presentation> {
    from_tree(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EntityKind, Error};
    use pretty_assertions::assert_eq;

    fn minimal(template: &str, fields: Value) -> Value {
        json!({
            "id": "p1",
            "title": "Deck",
            "slides": [{
                "id": "s1",
                "position": 0,
                "title": "First",
                "backgroundColor": "#ffffff",
                "backgroundColorAlt": "#000000",
                "accentColor": "#ff8f00",
                "headerAlignment": "center",
                "template": { "name": template, "fields": fields },
                "transition": { "name": "Fadeout", "duration": 1.25 }
            }]
        })
    }

    #[test]
    fn test_display_name_resolves_variant() {
        let p = from_tree(minimal("Three text columns", json!([]))).unwrap();
        let slide = &p.slides()[0];
        assert_eq!(slide.template.kind(), TemplateKind::ThreeTextColumns);
        assert_eq!(slide.transition.duration, 1.25);
        assert_eq!(slide.transition.discriminator(), "fadeout");
    }

    #[test]
    fn test_image_object_coerced_and_fx_reattached() {
        let fields = json!([
            {"type": "image", "name": "image",
             "content": {"type": "image/png", "name": "x.png", "content": "QQ==", "size": 2},
             "fx": {"id": "rainbow-border"}},
            {"type": "markdown", "name": "text", "content": "**hi**"}
        ]);
        let p = from_tree(minimal("Image Text", fields)).unwrap();
        let template = &p.slides()[0].template;
        let image = template.field("image").unwrap();
        assert_eq!(image.file().unwrap().name(), "x.png");
        let fx = image.fx.as_ref().unwrap();
        assert_eq!(fx.id, "rainbow-border");
        assert_eq!(fx.classes, "");
        assert_eq!(template.field("text").unwrap().text(), Some("**hi**"));
        // schema order and untouched defaults survive
        assert_eq!(template.fields()[0].name(), "title");
        assert_eq!(template.field("subtitle").unwrap().text(), Some("Subtitle"));
    }

    #[test]
    fn test_image_non_object_becomes_absent() {
        let fields = json!([{"type": "image", "name": "image", "content": ""}]);
        let p = from_tree(minimal("image_text", fields)).unwrap();
        assert!(p.slides()[0].template.field("image").unwrap().content().is_none());
    }

    #[test]
    fn test_legacy_prefixed_names_migrate() {
        let fields = json!([
            {"type": "text", "name": "if_title", "content": "Docs"},
            {"type": "text", "name": "if_src", "content": "https://example.com"}
        ]);
        let p = from_tree(minimal("Iframe", fields)).unwrap();
        let template = &p.slides()[0].template;
        assert_eq!(template.field("title").unwrap().text(), Some("Docs"));
        assert_eq!(template.field("src").unwrap().text(), Some("https://example.com"));
    }

    #[test]
    fn test_unknown_template_fails() {
        let err = from_tree(minimal("Carousel", json!([]))).unwrap_err();
        assert!(matches!(err, Error::UnknownVariant { kind: EntityKind::Template, .. }));
    }

    #[test]
    fn test_mistyped_field_fails() {
        let fields = json!([{"type": "bool", "name": "loop", "content": "yes"}]);
        let err = from_tree(minimal("Video", fields)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_snake_case_keys_accepted() {
        let tree = json!({
            "id": "p2",
            "font_family": "Inter",
            "slides": [{
                "id": "s",
                "background_color": "#111111",
                "background_color_alt": "#222222",
                "accent_color": "#333333",
                "header_alignment": "left",
                "template": {"name": "Simple title", "fields": []},
                "transition": {"name": "Parallax"}
            }]
        });
        let p = from_tree(tree).unwrap();
        assert_eq!(p.font_family, "Inter");
        assert_eq!(p.slides()[0].background_color, "#111111");
        assert_eq!(p.slides()[0].transition.duration, 1.5);
    }

    #[test]
    fn test_tree_layout() {
        let mut p = Presentation::with_id("p3");
        p.new_slide(None);
        let tree = to_tree(&p);
        assert_eq!(tree["id"], "p3");
        let slide = &tree["slides"][0];
        assert_eq!(slide["position"], 0);
        assert_eq!(slide["backgroundImage"], Value::Null);
        assert_eq!(slide["template"]["name"], "Simple title");
        assert_eq!(slide["template"]["fields"][0]["type"], "text");
        assert_eq!(slide["transition"]["name"], "Parallax");
        assert_eq!(slide["transition"]["target"], "#slide_${position}.hidden, #slide_${position}.hidden .content");
        assert!(slide["template"]["fields"][0].get("fx").is_none());
    }
}
