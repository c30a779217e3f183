use uuid::Uuid;

use super::File;
use crate::template::SlideTemplate;
use crate::transition::Transition;

/// One ordered unit of a presentation
///
/// The slide exclusively owns its template and transition instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    id: String,
    position: usize,
    pub title: String,
    pub description: String,
    pub theme: String,
    pub background_color: String,
    pub background_color_alt: String,
    pub accent_color: String,
    pub background_image: Option<File>,
    pub font_family: String,
    pub header_alignment: String,
    pub template: SlideTemplate,
    pub transition: Transition,
}

impl Slide {
    /// A new slide with a generated identifier
    pub fn new(template: SlideTemplate, transition: Transition) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), template, transition)
    }

    pub fn with_id(id: impl Into<String>, template: SlideTemplate, transition: Transition) -> Self {
        Self {
            id: id.into(),
            position: 0,
            title: "New slide".to_string(),
            description: String::new(),
            theme: String::new(),
            background_color: "#ffffff".to_string(),
            background_color_alt: "#000000".to_string(),
            accent_color: "#ff8f00".to_string(),
            background_image: None,
            font_family: "Roboto".to_string(),
            header_alignment: "center".to_string(),
            template,
            transition,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Index in the owning presentation, kept in sync by [`super::Presentation`]
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
