//! End-to-end scene operation scenarios.

use pretty_assertions::assert_eq;
use sc_core::model::{Color, ElementKind, Point, Size};
use sc_core::scene::ResizeEdge;
use sc_core::{Scene, sorted_by_layer};

#[test]
fn placing_a_button_on_an_existing_scene() {
    let scene = Scene::new().add_element(ElementKind::Text, Point::new(0.0, 0.0));
    assert_eq!(scene.elements[0].layer, 1);

    let scene = scene.add_element(ElementKind::Button, Point::new(10.0, 10.0));
    assert_eq!(scene.len(), 2);

    let button = scene.elements.last().unwrap();
    assert_eq!(button.layer, 2);
    assert_eq!(button.size, Size::new(120.0, 48.0));
    assert_eq!(button.style.background, Color::from_hex("#3b82f6"));
    assert_eq!(button.position, Point::new(10.0, 10.0));
}

#[test]
fn drag_as_accumulated_moves() {
    let scene = Scene::new().add_element(ElementKind::Image, Point::new(100.0, 100.0));
    let id = scene.elements[0].id;

    // A drag gesture arrives as many incremental deltas.
    let mut dragged = scene.clone();
    for _ in 0..5 {
        dragged = dragged.move_element(id, 3.0, -1.0);
    }
    assert_eq!(dragged.get(id).unwrap().position, Point::new(115.0, 95.0));
}

#[test]
fn locked_element_survives_manipulation_unchanged() {
    let scene = Scene::new().add_element(ElementKind::Heading, Point::new(50.0, 50.0));
    let id = scene.elements[0].id;
    let locked = scene.toggle_locked(id);

    let after = locked
        .move_element(id, 10.0, 10.0)
        .resize_element(id, ResizeEdge::SouthEast, 40.0, 40.0);
    assert_eq!(after, locked);

    // Content edits and visibility toggles are not direct manipulation.
    let retitled = locked.set_content(id, "Still editable");
    assert_eq!(retitled.get(id).unwrap().content, "Still editable");
}

#[test]
fn extreme_shrink_clamps_to_floor() {
    let scene = Scene::new().add_element(ElementKind::Container, Point::new(0.0, 0.0));
    let id = scene.elements[0].id;

    let shrunk = scene.resize_element(id, ResizeEdge::SouthEast, -1000.0, -1000.0);
    assert_eq!(shrunk.get(id).unwrap().size, Size::new(50.0, 20.0));
}

#[test]
fn paint_order_tracks_layer_changes() {
    let scene = Scene::new()
        .add_element(ElementKind::Container, Point::new(0.0, 0.0))
        .add_element(ElementKind::Image, Point::new(20.0, 20.0))
        .add_element(ElementKind::Text, Point::new(40.0, 40.0));
    let container = scene.elements[0].id;

    // Raise the container above everything.
    let mut raised = scene.clone();
    for _ in 0..3 {
        raised = raised.set_layer(container, sc_core::LayerShift::Raise);
    }
    let order: Vec<_> = sorted_by_layer(&raised).iter().map(|e| e.id).collect();
    assert_eq!(order.last(), Some(&container));
}

#[test]
fn layers_stay_non_contiguous_after_delete() {
    let scene = Scene::new()
        .add_element(ElementKind::Text, Point::new(0.0, 0.0))
        .add_element(ElementKind::Text, Point::new(10.0, 10.0))
        .add_element(ElementKind::Text, Point::new(20.0, 20.0));
    let middle = scene.elements[1].id;

    let after = scene.delete_element(middle);
    let layers: Vec<u32> = sorted_by_layer(&after).iter().map(|e| e.layer).collect();
    assert_eq!(layers, vec![1, 3]);
    // The gap is preserved; the next add still goes on top.
    let after = after.add_element(ElementKind::Button, Point::new(0.0, 0.0));
    assert_eq!(after.elements.last().unwrap().layer, 4);
}
