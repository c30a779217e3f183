use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Slide;
use crate::error::{EntityKind, Error, Result};
use crate::registry::VariantRegistry;

/// Identifier and title of a stored presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
}

/// The top-level document: metadata plus an ordered list of slides
///
/// Invariant: `slides[i].position == i` after every insert, remove and move.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    id: String,
    pub title: String,
    pub footer: String,
    pub font_family: String,
    pub header_font_family: String,
    pub style: Vec<String>,
    pub scripts: Vec<String>,
    slides: Vec<Slide>,
}

impl Presentation {
    /// An empty presentation with a generated identifier
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            footer: String::new(),
            font_family: "Roboto".to_string(),
            header_font_family: "Roboto".to_string(),
            style: Vec::new(),
            scripts: Vec::new(),
            slides: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id() == id)
    }

    pub fn slide_mut(&mut self, id: &str) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id() == id)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.slides
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| Error::not_found(EntityKind::Slide, id))
    }

    fn renumber(&mut self) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_position(i);
        }
    }

    /// Insert `slide` at `position` (clamped), or append when `None`
    ///
    /// Returns the index the slide landed at.
    pub fn add_slide(&mut self, slide: Slide, position: Option<usize>) -> usize {
        let index = position.unwrap_or(self.slides.len()).min(self.slides.len());
        self.slides.insert(index, slide);
        self.renumber();
        index
    }

    /// Add a slide built from the registry defaults and return its identifier
    pub fn new_slide(&mut self, position: Option<usize>) -> String {
        let slide = Slide::new(
            VariantRegistry::default_template(),
            VariantRegistry::default_transition(),
        );
        let id = slide.id().to_string();
        self.add_slide(slide, position);
        id
    }

    /// Move a slide to `position`, clamped to the last index
    pub fn move_slide(&mut self, id: &str, position: usize) -> Result<()> {
        let from = self.index_of(id)?;
        let slide = self.slides.remove(from);
        let to = position.min(self.slides.len());
        self.slides.insert(to, slide);
        self.renumber();
        Ok(())
    }

    pub fn remove_slide(&mut self, id: &str) -> Result<Slide> {
        let index = self.index_of(id)?;
        let slide = self.slides.remove(index);
        self.renumber();
        Ok(slide)
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
