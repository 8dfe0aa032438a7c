use crate::error::LoadError;
use crate::image_classifier::interface::ImageClassifier;
use std::sync::{Arc, OnceLock};

pub type SharedImageClassifier = Arc<dyn ImageClassifier + Send + Sync>;

/// Holds the classifier for the lifetime of the process. The loader runs at
/// most once per cache, even when several threads race on `get_or_load`; its
/// outcome, error included, is returned to every later caller.
#[derive(Clone, Default)]
pub struct ModelCache {
    cell: Arc<OnceLock<Result<SharedImageClassifier, LoadError>>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<SharedImageClassifier, LoadError>
    where
        F: FnOnce() -> Result<SharedImageClassifier, LoadError>,
    {
        self.cell.get_or_init(load).clone()
    }

    pub fn get(&self) -> Option<SharedImageClassifier> {
        self.cell.get().and_then(|loaded| loaded.as_ref().ok().cloned())
    }
}
