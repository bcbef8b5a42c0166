//! Layer ordering and hit testing: paint order and point → element lookup.
//!
//! Rendering iterates elements in ascending `layer` order so higher
//! layers occlude lower ones; hit testing reverse-walks the same order
//! (front-to-back) so the element painted on top also wins pointer
//! events.

use crate::id::ElementId;
use crate::model::{Element, Scene};
use crate::scene::ResizeEdge;

/// Half-size of the square resize handles, in canvas units.
const HANDLE_REACH: f32 = 6.0;

/// Elements in paint order: ascending by `layer`, ties keeping their
/// relative scene order (the sort is stable).
pub fn sorted_by_layer(scene: &Scene) -> Vec<&Element> {
    let mut sorted: Vec<&Element> = scene.elements.iter().collect();
    sorted.sort_by_key(|e| e.layer);
    sorted
}

/// Find the topmost element at canvas position (x, y).
///
/// The hidden flag only applies outside preview mode: in preview the
/// element renders (and hit-tests) like any other. Returns `None` on
/// background.
pub fn topmost_at(scene: &Scene, x: f32, y: f32, preview: bool) -> Option<ElementId> {
    sorted_by_layer(scene)
        .iter()
        .rev()
        .find(|e| (preview || !e.hidden) && e.bounds_contain(x, y))
        .map(|e| e.id)
}

/// Which of the eight resize handles of `element` is at (x, y), if any.
/// Handles sit on the corners and edge midpoints of the element bounds.
pub fn resize_handle_at(element: &Element, x: f32, y: f32) -> Option<ResizeEdge> {
    let left = element.position.x;
    let top = element.position.y;
    let right = left + element.size.width;
    let bottom = top + element.size.height;
    let mid_x = left + element.size.width / 2.0;
    let mid_y = top + element.size.height / 2.0;

    let near = |px: f32, py: f32| (x - px).abs() <= HANDLE_REACH && (y - py).abs() <= HANDLE_REACH;

    // Corners win over edges when handles overlap on tiny elements.
    if near(left, top) {
        Some(ResizeEdge::NorthWest)
    } else if near(right, top) {
        Some(ResizeEdge::NorthEast)
    } else if near(left, bottom) {
        Some(ResizeEdge::SouthWest)
    } else if near(right, bottom) {
        Some(ResizeEdge::SouthEast)
    } else if near(mid_x, top) {
        Some(ResizeEdge::North)
    } else if near(mid_x, bottom) {
        Some(ResizeEdge::South)
    } else if near(left, mid_y) {
        Some(ResizeEdge::West)
    } else if near(right, mid_y) {
        Some(ResizeEdge::East)
    } else {
        None
    }
}
