//! Slide-template variants
//!
//! Each variant is a closed [`TemplateKind`] plus a fixed, ordered field
//! schema. A [`SlideTemplate`] is one instance of a variant holding the field
//! values; its `content`, `style` and `script` derivations are the skeletons
//! the renderer fills in.

mod substitute;

pub use substitute::{substitute, Bindings};

use std::collections::HashMap;

use crate::model::{FieldContent, FieldType, TemplateField};

/// Default content of a schema slot
#[derive(Debug, Clone, Copy)]
enum Seed {
    Empty,
    Text(&'static str),
    Flag(bool),
}

/// One `(type, name)` slot of a variant's schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field_type: FieldType,
    pub name: &'static str,
    seed: Seed,
}

const fn slot(field_type: FieldType, name: &'static str, seed: Seed) -> FieldSpec {
    FieldSpec {
        field_type,
        name,
        seed,
    }
}

const BLACK: Seed = Seed::Text("#000000");

const SIMPLE_TITLE: &[FieldSpec] = &[
    slot(FieldType::Text, "title", Seed::Text("")),
    slot(FieldType::Text, "subtitle", Seed::Text("Subtitle")),
    slot(FieldType::Color, "title_text_color", BLACK),
    slot(FieldType::Color, "text_color", BLACK),
];

const IMAGE_TEXT: &[FieldSpec] = &[
    slot(FieldType::Text, "title", Seed::Text("")),
    slot(FieldType::Color, "title_text_color", BLACK),
    slot(FieldType::Text, "subtitle", Seed::Text("Subtitle")),
    slot(FieldType::Markdown, "text", Seed::Text("This is some text")),
    slot(FieldType::Color, "text_color", BLACK),
    slot(FieldType::Image, "image", Seed::Empty),
];

const TEXT_IMAGE: &[FieldSpec] = &[
    slot(FieldType::Text, "title", Seed::Text("")),
    slot(FieldType::Text, "subtitle", Seed::Text("Subtitle")),
    slot(FieldType::Markdown, "text", Seed::Text("This is some text")),
    slot(FieldType::Color, "text_color", BLACK),
    slot(FieldType::Image, "image", Seed::Empty),
];

const THREE_TEXT_COLUMNS: &[FieldSpec] = &[
    slot(FieldType::Text, "title", Seed::Text("")),
    slot(FieldType::Color, "title_text_color", BLACK),
    slot(FieldType::Text, "subtitle", Seed::Text("Subtitle")),
    slot(FieldType::Markdown, "text_1", Seed::Text("This is the first text")),
    slot(FieldType::Markdown, "text_2", Seed::Text("This is the second text")),
    slot(FieldType::Markdown, "text_3", Seed::Text("This is the third text")),
    slot(FieldType::Color, "text_color", BLACK),
];

const VIDEO: &[FieldSpec] = &[
    slot(FieldType::Text, "title", Seed::Text("")),
    slot(FieldType::Color, "title_text_color", BLACK),
    slot(FieldType::Text, "subtitle", Seed::Text("Subtitle")),
    slot(FieldType::Color, "text_color", BLACK),
    slot(FieldType::Video, "video", Seed::Empty),
    slot(FieldType::Bool, "controls", Seed::Flag(false)),
    slot(FieldType::Bool, "loop", Seed::Flag(true)),
    slot(FieldType::Bool, "autoplay", Seed::Flag(true)),
];

const IFRAME: &[FieldSpec] = &[
    slot(FieldType::Text, "title", Seed::Text("")),
    slot(FieldType::Color, "text_color", BLACK),
    slot(FieldType::Text, "src", Seed::Empty),
];

/// The closed set of slide layouts, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    SimpleTitle,
    ImageText,
    TextImage,
    ThreeTextColumns,
    Video,
    Iframe,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::SimpleTitle,
        TemplateKind::ImageText,
        TemplateKind::TextImage,
        TemplateKind::ThreeTextColumns,
        TemplateKind::Video,
        TemplateKind::Iframe,
    ];

    /// Registry key, also used as the slide's CSS class token
    pub fn discriminator(&self) -> &'static str {
        match self {
            TemplateKind::SimpleTitle => "simple_title",
            TemplateKind::ImageText => "image_text",
            TemplateKind::TextImage => "text_image",
            TemplateKind::ThreeTextColumns => "three_text_columns",
            TemplateKind::Video => "video",
            TemplateKind::Iframe => "iframe",
        }
    }

    /// Display name as persisted in the template record
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::SimpleTitle => "Simple title",
            TemplateKind::ImageText => "Image Text",
            TemplateKind::TextImage => "Text Image",
            TemplateKind::ThreeTextColumns => "Three text columns",
            TemplateKind::Video => "Video",
            TemplateKind::Iframe => "Iframe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::SimpleTitle => "A simple title slide",
            TemplateKind::ImageText => "A block of text with an image on the left",
            TemplateKind::TextImage => "A block of text with an image on the right",
            TemplateKind::ThreeTextColumns => "A block of three text columns",
            TemplateKind::Video => "A video slide",
            TemplateKind::Iframe => "An embedded web page slide",
        }
    }

    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.discriminator() == discriminator)
    }

    /// Ordered `(type, name)` schema of this variant
    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            TemplateKind::SimpleTitle => SIMPLE_TITLE,
            TemplateKind::ImageText => IMAGE_TEXT,
            TemplateKind::TextImage => TEXT_IMAGE,
            TemplateKind::ThreeTextColumns => THREE_TEXT_COLUMNS,
            TemplateKind::Video => VIDEO,
            TemplateKind::Iframe => IFRAME,
        }
    }

    fn content_skeleton(&self) -> &'static str {
        match self {
            TemplateKind::SimpleTitle => include_str!("../../res/slides/simple_title.html"),
            TemplateKind::ImageText => include_str!("../../res/slides/image_text.html"),
            TemplateKind::TextImage => include_str!("../../res/slides/text_image.html"),
            TemplateKind::ThreeTextColumns => {
                include_str!("../../res/slides/three_text_columns.html")
            }
            TemplateKind::Video => include_str!("../../res/slides/video.html"),
            TemplateKind::Iframe => include_str!("../../res/slides/iframe.html"),
        }
    }

    fn style_skeleton(&self) -> &'static str {
        match self {
            TemplateKind::SimpleTitle => include_str!("../../res/slides/simple_title.css"),
            TemplateKind::ImageText => include_str!("../../res/slides/image_text.css"),
            TemplateKind::TextImage => include_str!("../../res/slides/text_image.css"),
            TemplateKind::ThreeTextColumns => {
                include_str!("../../res/slides/three_text_columns.css")
            }
            TemplateKind::Video => include_str!("../../res/slides/video.css"),
            TemplateKind::Iframe => include_str!("../../res/slides/iframe.css"),
        }
    }
}

/// An instance of a slide-template variant
///
/// The field list is fixed at construction: fields can be reassigned but
/// never added, removed or renamed.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTemplate {
    kind: TemplateKind,
    fields: Vec<TemplateField>,
}

impl SlideTemplate {
    /// Build a default-populated instance of `kind`
    pub fn new(kind: TemplateKind) -> Self {
        Self::with_values(kind, HashMap::new())
    }

    /// Build an instance with `values` overriding the schema defaults
    ///
    /// Schema order is preserved. Values whose name is not in the schema or
    /// whose shape contradicts the slot's type are ignored; callers that need
    /// to report those check beforehand.
    pub fn with_values(kind: TemplateKind, mut values: HashMap<String, Option<FieldContent>>) -> Self {
        let fields = kind
            .schema()
            .iter()
            .map(|spec| {
                let mut field = TemplateField::new(spec.field_type, spec.name);
                let content = match values.remove(spec.name) {
                    Some(provided) => provided,
                    None => match spec.seed {
                        Seed::Empty => None,
                        Seed::Text(s) => Some(FieldContent::Text(s.to_string())),
                        Seed::Flag(b) => Some(FieldContent::Bool(b)),
                    },
                };
                if field.set_content(content).is_err() {
                    log::warn!("ignoring mistyped value for {}.{}", kind.discriminator(), spec.name);
                }
                field
            })
            .collect();
        Self { kind, fields }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn discriminator(&self) -> &'static str {
        self.kind.discriminator()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn fields(&self) -> &[TemplateField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut TemplateField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    fn color(&self, name: &str) -> &str {
        self.field(name)
            .and_then(|f| f.text())
            .filter(|s| !s.is_empty())
            .unwrap_or("#000000")
    }

    pub fn title_text_color(&self) -> &str {
        self.color("title_text_color")
    }

    pub fn text_color(&self) -> &str {
        self.color("text_color")
    }

    /// HTML skeleton whose placeholders match the field names
    pub fn content(&self) -> String {
        let skeleton = self.kind.content_skeleton();
        match self.kind {
            TemplateKind::Video => {
                let flag = |name: &'static str| {
                    if self.flag(name) {
                        name
                    } else {
                        ""
                    }
                };
                Bindings::new()
                    .with("controls", flag("controls"))
                    .with("loop", flag("loop"))
                    .apply(skeleton)
            }
            _ => skeleton.to_string(),
        }
    }

    /// CSS skeleton with the field placeholders and the standard color variables
    pub fn style(&self) -> String {
        self.kind.style_skeleton().to_string()
    }

    /// Behaviour fragment, empty for most variants
    pub fn script(&self) -> String {
        match self.kind {
            TemplateKind::Video => Bindings::new()
                .with("autoplay", self.flag("autoplay"))
                .apply(include_str!("../../res/slides/video.js")),
            _ => String::new(),
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.field(name).and_then(|f| f.flag()).unwrap_or(false)
    }
}

impl Default for SlideTemplate {
    fn default() -> Self {
        Self::new(TemplateKind::SimpleTitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_unique() {
        for kind in TemplateKind::ALL {
            let mut names: Vec<_> = kind.schema().iter().map(|s| s.name).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), kind.schema().len(), "{:?}", kind);
        }
    }

    #[test]
    fn test_defaults_follow_schema_order() {
        let template = SlideTemplate::new(TemplateKind::Video);
        let names: Vec<_> = template.fields().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["title", "title_text_color", "subtitle", "text_color", "video", "controls", "loop", "autoplay"]
        );
        assert_eq!(template.field("loop").unwrap().flag(), Some(true));
        assert!(template.field("video").unwrap().content().is_none());
    }

    #[test]
    fn test_with_values_overrides() {
        let mut values = HashMap::new();
        values.insert(
            "subtitle".to_string(),
            Some(FieldContent::Text("Custom".into())),
        );
        values.insert("bogus".to_string(), Some(FieldContent::Text("x".into())));
        let template = SlideTemplate::with_values(TemplateKind::SimpleTitle, values);
        assert_eq!(template.field("subtitle").unwrap().text(), Some("Custom"));
        assert!(template.field("bogus").is_none());
        assert_eq!(template.fields().len(), 4);
    }

    #[test]
    fn test_video_content_resolves_flags() {
        let template = SlideTemplate::new(TemplateKind::Video);
        let html = template.content();
        assert!(html.contains("loop"));
        assert!(!html.contains("$controls"));
        assert!(!html.contains("controls"));
    }

    #[test]
    fn test_video_script_interpolates_autoplay() {
        let mut template = SlideTemplate::new(TemplateKind::Video);
        assert!(template.script().contains("&& true"));
        template
            .field_mut("autoplay")
            .unwrap()
            .set_content(Some(FieldContent::Bool(false)))
            .unwrap();
        assert!(template.script().contains("&& false"));
    }

    #[test]
    fn test_non_video_script_empty() {
        assert!(SlideTemplate::new(TemplateKind::ImageText).script().is_empty());
    }

    #[test]
    fn test_colors_default_black() {
        let template = SlideTemplate::new(TemplateKind::Iframe);
        assert_eq!(template.title_text_color(), "#000000");
        assert_eq!(template.text_color(), "#000000");
    }
}
