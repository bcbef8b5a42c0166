//! Editing session: glue between the controller and the hosting product.
//!
//! A session is created when the editor opens a website for editing. It
//! loads the saved scene (or seeds the starter set), owns the device
//! mode and save path, and forwards everything else to the controller.

use crate::controller::EditorController;
use crate::notify::Notifier;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::store::{SceneStore, StoreError};
use log::info;
use sc_core::model::{ElementKind, Point, Scene};

/// Rendering viewport presets. Device mode affects only the visual
/// surface the renderer draws into — never the scene itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceMode {
    /// Canvas viewport size in CSS pixels.
    pub fn viewport(self) -> (f32, f32) {
        match self {
            Self::Desktop => (1280.0, 800.0),
            Self::Tablet => (768.0, 1024.0),
            Self::Mobile => (375.0, 667.0),
        }
    }
}

/// The default seed for a website that has never been saved: a heading,
/// a text block, and a call-to-action button stacked down the page.
pub fn starter_scene() -> Scene {
    Scene::new()
        .add_element(ElementKind::Heading, Point::new(80.0, 60.0))
        .add_element(ElementKind::Text, Point::new(80.0, 140.0))
        .add_element(ElementKind::Button, Point::new(80.0, 220.0))
}

/// One website's editing session.
pub struct EditorSession {
    website_id: String,
    controller: EditorController,
    store: Box<dyn SceneStore>,
    device: DeviceMode,
}

impl EditorSession {
    /// Open a website for editing. A missing saved scene falls back to
    /// the starter set; any other store failure propagates.
    pub fn open(store: Box<dyn SceneStore>, website_id: &str) -> Result<Self, StoreError> {
        let scene = match store.load_scene(website_id) {
            Ok(scene) => scene,
            Err(StoreError::NotFound(_)) => {
                info!("no saved scene for {website_id}, seeding starter scene");
                starter_scene()
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            website_id: website_id.to_string(),
            controller: EditorController::new(scene),
            store,
            device: DeviceMode::default(),
        })
    }

    /// Same as [`open`](Self::open) with a toast notifier attached.
    pub fn open_with_notifier(
        store: Box<dyn SceneStore>,
        website_id: &str,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, StoreError> {
        let mut session = Self::open(store, website_id)?;
        let scene = session.controller.scene().clone();
        session.controller = EditorController::with_notifier(scene, notifier);
        Ok(session)
    }

    pub fn website_id(&self) -> &str {
        &self.website_id
    }

    pub fn controller(&self) -> &EditorController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EditorController {
        &mut self.controller
    }

    pub fn device_mode(&self) -> DeviceMode {
        self.device
    }

    /// Switch the rendering viewport. The scene is untouched.
    pub fn set_device_mode(&mut self, device: DeviceMode) {
        self.device = device;
    }

    /// Persist the working scene. Saving is invisible to the history
    /// manager: no entry is created or consumed.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store
            .save_scene(&self.website_id, self.controller.scene())?;
        info!("saved scene for {}", self.website_id);
        Ok(())
    }

    /// Session-level key routing: Save and TogglePreview are handled
    /// here, everything else goes to the controller.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Result<(), StoreError> {
        if !self.controller.state().is_editing_text() {
            match ShortcutMap::resolve(key, ctrl, shift, alt, meta) {
                Some(ShortcutAction::Save) => return self.save(),
                Some(ShortcutAction::TogglePreview) => {
                    let preview = !self.controller.is_preview();
                    self.controller.set_preview(preview);
                    return Ok(());
                }
                _ => {}
            }
        }
        self.controller.handle_key(key, ctrl, shift, alt, meta);
        Ok(())
    }
}
