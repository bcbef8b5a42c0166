//! Pure scene operations.
//!
//! Every mutation is a function from `(&Scene, args)` to a new `Scene`
//! value. The input scene is never touched, so history snapshots stay
//! independent copies. Operations that target a missing or locked element
//! return an unchanged copy — no-ops, never errors — which lets the UI
//! tolerate stale IDs without error boundaries.

use crate::id::ElementId;
use crate::model::{DUPLICATE_OFFSET, Element, ElementKind, Point, Scene};
use log::debug;
use serde::{Deserialize, Serialize};

/// Which resize handle is being dragged. Edges adjust one dimension,
/// corners adjust both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// Whether this handle adjusts the horizontal dimension, and the sign
    /// a positive pointer delta contributes to the width.
    fn x_factor(self) -> f32 {
        match self {
            Self::East | Self::NorthEast | Self::SouthEast => 1.0,
            Self::West | Self::NorthWest | Self::SouthWest => -1.0,
            Self::North | Self::South => 0.0,
        }
    }

    fn y_factor(self) -> f32 {
        match self {
            Self::South | Self::SouthEast | Self::SouthWest => 1.0,
            Self::North | Self::NorthEast | Self::NorthWest => -1.0,
            Self::East | Self::West => 0.0,
        }
    }
}

/// Direction for single-step layer adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerShift {
    /// Bring forward: layer + 1.
    Raise,
    /// Send backward: layer - 1, floored at 1.
    Lower,
}

impl Scene {
    /// Place a new element of `kind` at `position` (clamped to the canvas
    /// origin) on top of everything else.
    pub fn add_element(&self, kind: ElementKind, position: Point) -> Scene {
        let mut next = self.clone();
        let element = Element::new(kind, position, self.max_layer() + 1);
        debug!("add {:?} as {} at layer {}", kind, element.id, element.layer);
        next.elements.push(element);
        next
    }

    /// Translate an element by a delta, clamped to ≥ (0, 0).
    /// Locked or missing elements are left untouched.
    pub fn move_element(&self, id: ElementId, dx: f32, dy: f32) -> Scene {
        self.update_unlocked(id, |e| {
            e.position = e.position.translated(dx, dy);
        })
    }

    /// Grow or shrink an element from one of its eight handles.
    /// Width floors at [`crate::model::MIN_WIDTH`], height at
    /// [`crate::model::MIN_HEIGHT`]. Locked or missing elements are left
    /// untouched.
    pub fn resize_element(&self, id: ElementId, edge: ResizeEdge, dx: f32, dy: f32) -> Scene {
        self.update_unlocked(id, |e| {
            e.size.width += dx * edge.x_factor();
            e.size.height += dy * edge.y_factor();
            e.size = e.size.clamped();
        })
    }

    /// Replace an element's text content. Accepted for every kind; only
    /// text-bearing kinds render it.
    pub fn set_content(&self, id: ElementId, text: &str) -> Scene {
        self.update(id, |e| {
            e.content = text.to_string();
        })
    }

    /// Remove an element. Missing IDs are a no-op. The caller owns
    /// clearing any selection that pointed at the element.
    pub fn delete_element(&self, id: ElementId) -> Scene {
        let mut next = self.clone();
        let before = next.elements.len();
        next.elements.retain(|e| e.id != id);
        if next.elements.len() != before {
            debug!("delete {id}");
        }
        next
    }

    /// Clone an element with a fresh ID, offset by (+20, +20), placed on
    /// top of everything else. The copy is appended, so it is the last
    /// element of the new scene.
    pub fn duplicate_element(&self, id: ElementId) -> Scene {
        let Some(source) = self.get(id) else {
            return self.clone();
        };
        let mut copy = source.clone();
        copy.id = ElementId::generate(copy.kind.id_prefix());
        copy.position = copy.position.translated(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        copy.layer = self.max_layer() + 1;
        debug!("duplicate {id} as {}", copy.id);
        let mut next = self.clone();
        next.elements.push(copy);
        next
    }

    /// Nudge an element one step up or down in stacking order.
    /// Layers floor at 1 and are allowed to go non-contiguous or collide;
    /// ties keep scene order.
    pub fn set_layer(&self, id: ElementId, shift: LayerShift) -> Scene {
        self.update(id, |e| {
            e.layer = match shift {
                LayerShift::Raise => e.layer + 1,
                LayerShift::Lower => e.layer.saturating_sub(1).max(1),
            };
        })
    }

    /// Flip an element's hidden flag.
    pub fn toggle_hidden(&self, id: ElementId) -> Scene {
        self.update(id, |e| e.hidden = !e.hidden)
    }

    /// Flip an element's locked flag. Allowed even when locked — this is
    /// the programmatic escape hatch, not direct manipulation.
    pub fn toggle_locked(&self, id: ElementId) -> Scene {
        self.update(id, |e| e.locked = !e.locked)
    }

    /// Clone-and-edit helper for operations that apply to any element.
    fn update(&self, id: ElementId, f: impl FnOnce(&mut Element)) -> Scene {
        let mut next = self.clone();
        if let Some(e) = next.elements.iter_mut().find(|e| e.id == id) {
            f(e);
        }
        next
    }

    /// Clone-and-edit helper for direct-manipulation operations, which
    /// locked elements ignore.
    fn update_unlocked(&self, id: ElementId, f: impl FnOnce(&mut Element)) -> Scene {
        let mut next = self.clone();
        if let Some(e) = next.elements.iter_mut().find(|e| e.id == id && !e.locked) {
            f(e);
        }
        next
    }
}
