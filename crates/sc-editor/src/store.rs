//! Persistence seam.
//!
//! The editor loads a scene when a website is opened and saves on
//! explicit request. Saving never creates or consumes undo entries —
//! the store sits entirely outside the history manager.

use sc_core::Scene;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the backing store. The editing core itself never fails;
/// these surface through the session and are shown by the host UI.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved scene for website `{0}`")]
    NotFound(String),
    #[error("scene serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Scene load/save interface backed by the hosting service.
pub trait SceneStore {
    fn load_scene(&self, website_id: &str) -> Result<Scene, StoreError>;
    fn save_scene(&mut self, website_id: &str, scene: &Scene) -> Result<(), StoreError>;
}

/// In-memory store keeping scenes as JSON documents, one per website.
/// Used by tests and demos in place of the hosted backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneStore for MemoryStore {
    fn load_scene(&self, website_id: &str) -> Result<Scene, StoreError> {
        let json = self
            .pages
            .get(website_id)
            .ok_or_else(|| StoreError::NotFound(website_id.to_string()))?;
        Ok(serde_json::from_str(json)?)
    }

    fn save_scene(&mut self, website_id: &str, scene: &Scene) -> Result<(), StoreError> {
        let json = serde_json::to_string(scene)?;
        self.pages.insert(website_id.to_string(), json);
        Ok(())
    }
}
