//! Service layer tying the store, patch engine and renderer together
//!
//! A change batch is applied to a loaded copy and persisted only when every
//! record succeeded, so a failing batch leaves the stored document as it was.

use crate::error::Result;
use crate::model::{DocumentSummary, Presentation};
use crate::patch::{self, ChangeBatch};
use crate::renderer::{render_document_html, RenderConfig};
use crate::store::Store;

pub struct Studio<S: Store> {
    store: S,
}

impl<S: Store> Studio<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create and persist an empty presentation
    pub fn create(&mut self, title: Option<&str>) -> Result<Presentation> {
        let mut presentation = Presentation::new();
        if let Some(title) = title {
            presentation.title = title.to_string();
        }
        self.store.save(&presentation)?;
        log::info!("created presentation {}", presentation.id());
        Ok(presentation)
    }

    pub fn load(&self, id: &str) -> Result<Presentation> {
        self.store.load(id)
    }

    pub fn list(&self) -> Result<Vec<DocumentSummary>> {
        self.store.list()
    }

    /// Apply `batch`, creating the target presentation when it does not exist
    ///
    /// Nothing is persisted unless every record applies.
    pub fn apply_changes(&mut self, batch: &ChangeBatch) -> Result<Presentation> {
        let presentation = match self.store.load(&batch.id) {
            Ok(p) => p,
            Err(crate::Error::NotFound { .. }) => {
                log::info!("batch targets unknown presentation {}; creating it", batch.id);
                Presentation::with_id(&batch.id)
            }
            Err(e) => return Err(e),
        };
        let updated = patch::apply(presentation, &batch.changes).map_err(|failure| {
            log::warn!(
                "discarding batch for {} after {} of {} changes: {}",
                batch.id,
                failure.applied,
                batch.changes.len(),
                failure.error
            );
            failure.error
        })?;
        self.store.save(&updated)?;
        Ok(updated)
    }

    /// Add a default slide and return its identifier
    pub fn add_slide(&mut self, id: &str, position: Option<usize>) -> Result<String> {
        let mut presentation = self.store.load(id)?;
        let slide_id = presentation.new_slide(position);
        self.store.save(&presentation)?;
        Ok(slide_id)
    }

    pub fn remove_slide(&mut self, id: &str, slide_id: &str) -> Result<()> {
        let mut presentation = self.store.load(id)?;
        presentation.remove_slide(slide_id)?;
        self.store.save(&presentation)
    }

    pub fn render(&self, id: &str, config: &RenderConfig) -> Result<String> {
        let presentation = self.store.load(id)?;
        Ok(render_document_html(&presentation, config))
    }
}
