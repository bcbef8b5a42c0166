//! Single-slot clipboard for element copy/paste.
//!
//! The slot holds a value copy of one element — not a reference into any
//! scene — so it survives deletes and scene-level undo/redo. It is an
//! injected value owned by the controller, never a process global, so
//! every test gets a fresh clipboard.

use log::debug;
use sc_core::model::{DUPLICATE_OFFSET, Scene};
use sc_core::{Element, ElementId};

#[derive(Debug, Default)]
pub struct Clipboard {
    slot: Option<Element>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Copy an element into the slot, overwriting previous content.
    /// Missing IDs leave the slot untouched. Returns whether a copy
    /// happened.
    pub fn copy(&mut self, scene: &Scene, id: ElementId) -> bool {
        match scene.get(id) {
            Some(element) => {
                debug!("clipboard: copy {id}");
                self.slot = Some(element.clone());
                true
            }
            None => false,
        }
    }

    /// Materialize the slot into `scene`: fresh ID, position offset
    /// (+20, +20) from the *stored* position — repeated pastes land on
    /// the same spot — and top layer. `None` when the slot is empty.
    pub fn paste(&self, scene: &Scene) -> Option<Scene> {
        let source = self.slot.as_ref()?;
        let mut element = source.clone();
        element.id = ElementId::generate(element.kind.id_prefix());
        element.position = element
            .position
            .translated(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        element.layer = scene.max_layer() + 1;
        debug!("clipboard: paste as {}", element.id);
        let mut next = scene.clone();
        next.elements.push(element);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sc_core::model::{ElementKind, Point};

    #[test]
    fn paste_from_empty_slot_is_none() {
        let clipboard = Clipboard::new();
        assert!(clipboard.paste(&Scene::new()).is_none());
    }

    #[test]
    fn copy_missing_id_leaves_slot() {
        let scene = Scene::new().add_element(ElementKind::Button, Point::new(0.0, 0.0));
        let id = scene.elements[0].id;
        let mut clipboard = Clipboard::new();
        assert!(clipboard.copy(&scene, id));
        assert!(!clipboard.copy(&scene, ElementId::intern("stale_id")));
        assert!(!clipboard.is_empty());
    }

    #[test]
    fn paste_survives_source_deletion() {
        let scene = Scene::new().add_element(ElementKind::Button, Point::new(30.0, 40.0));
        let id = scene.elements[0].id;
        let mut clipboard = Clipboard::new();
        clipboard.copy(&scene, id);

        let emptied = scene.delete_element(id);
        assert!(emptied.is_empty());

        let pasted = clipboard.paste(&emptied).unwrap();
        assert_eq!(pasted.len(), 1);
        let e = &pasted.elements[0];
        assert_ne!(e.id, id);
        assert_eq!(e.position, Point::new(50.0, 60.0));
        assert_eq!(e.content, scene.elements[0].content);
        assert_eq!(e.style, scene.elements[0].style);
        assert_eq!(e.size, scene.elements[0].size);
    }

    #[test]
    fn repeated_pastes_use_same_offset() {
        let scene = Scene::new().add_element(ElementKind::Image, Point::new(10.0, 10.0));
        let id = scene.elements[0].id;
        let mut clipboard = Clipboard::new();
        clipboard.copy(&scene, id);

        let once = clipboard.paste(&scene).unwrap();
        let twice = clipboard.paste(&once).unwrap();

        let first = &once.elements[1];
        let second = &twice.elements[2];
        assert_ne!(first.id, second.id);
        // offset is from the stored position, not cumulative
        assert_eq!(first.position, second.position);
        assert_eq!(first.position, Point::new(30.0, 30.0));
        // each paste still lands on top
        assert_eq!(second.layer, twice.max_layer());
    }
}
