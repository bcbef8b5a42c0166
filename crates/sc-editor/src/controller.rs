//! Selection & interaction controller.
//!
//! Owns the working scene, the single-element selection, and the
//! interaction state machine. Pointer and keyboard events come in;
//! scene snapshots go out to the history manager, one per completed
//! gesture. The four interaction modes are a single tagged enum, so two
//! of them can never be active at once.
//!
//! Failure semantics throughout: operations aimed at missing or locked
//! elements fall through as no-ops, and a no-op never records history.

use crate::clipboard::Clipboard;
use crate::history::History;
use crate::input::InputEvent;
use crate::notify::{Notifier, NullNotifier};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use log::debug;
use sc_core::model::{Element, Point, Scene};
use sc_core::scene::{LayerShift, ResizeEdge};
use sc_core::{ElementId, resize_handle_at, sorted_by_layer, topmost_at};

/// The mutually exclusive interaction mode. Exactly one variant is
/// active at any time; `Idle` between gestures.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    /// A drag gesture in progress. `last` is the previous pointer
    /// position; each move applies the incremental delta.
    Dragging { id: ElementId, last: Point },
    /// A resize gesture from one of the eight handles.
    Resizing {
        id: ElementId,
        edge: ResizeEdge,
        last: Point,
    },
    /// Inline text editing with an uncommitted draft.
    EditingText { id: ElementId, draft: String },
}

impl InteractionState {
    pub fn is_editing_text(&self) -> bool {
        matches!(self, Self::EditingText { .. })
    }
}

/// Drives one editing session's canvas from raw input events.
pub struct EditorController {
    scene: Scene,
    selection: Option<ElementId>,
    state: InteractionState,
    history: History,
    clipboard: Clipboard,
    preview: bool,
    notifier: Box<dyn Notifier>,
}

impl EditorController {
    /// Start a controller over an opening scene. The scene becomes the
    /// first history entry.
    pub fn new(scene: Scene) -> Self {
        Self::with_notifier(scene, Box::new(NullNotifier))
    }

    pub fn with_notifier(scene: Scene, notifier: Box<dyn Notifier>) -> Self {
        Self {
            history: History::new(scene.clone()),
            scene,
            selection: None,
            state: InteractionState::Idle,
            clipboard: Clipboard::new(),
            preview: false,
            notifier,
        }
    }

    // ─── Read surface for the renderer ───────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Elements in paint order. The hidden flag applies only outside
    /// preview mode — preview renders the scene as published.
    pub fn render_list(&self) -> Vec<&Element> {
        sorted_by_layer(&self.scene)
            .into_iter()
            .filter(|e| self.preview || !e.hidden)
            .collect()
    }

    /// Entering preview drops any in-flight interaction but keeps the
    /// selection for when editing resumes.
    pub fn set_preview(&mut self, preview: bool) {
        if preview && self.state.is_editing_text() {
            self.cancel_text_edit();
        }
        self.state = InteractionState::Idle;
        self.preview = preview;
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Feed a normalized pointer event through the state machine.
    /// All pointer input is inert in preview mode.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.preview {
            return;
        }
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::DoubleClick { x, y } => self.double_click(x, y),
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32) {
        // Clicking outside the text editor commits the draft (blur).
        if self.state.is_editing_text() {
            self.commit_text_edit();
        }

        // A handle of the selected element wins over whatever is under it.
        if let Some(id) = self.selection
            && let Some(element) = self.scene.get(id)
            && !element.locked
            && !element.hidden
            && let Some(edge) = resize_handle_at(element, x, y)
        {
            self.state = InteractionState::Resizing {
                id,
                edge,
                last: Point::new(x, y),
            };
            return;
        }

        match topmost_at(&self.scene, x, y, self.preview) {
            Some(id) => {
                self.selection = Some(id);
                // Locked elements select but never start a drag.
                let locked = self.scene.get(id).is_some_and(|e| e.locked);
                if !locked {
                    self.state = InteractionState::Dragging {
                        id,
                        last: Point::new(x, y),
                    };
                }
            }
            None => {
                self.selection = None;
            }
        }
    }

    fn pointer_move(&mut self, x: f32, y: f32) {
        match &mut self.state {
            InteractionState::Dragging { id, last } => {
                let (id, dx, dy) = (*id, x - last.x, y - last.y);
                *last = Point::new(x, y);
                self.scene = self.scene.move_element(id, dx, dy);
            }
            InteractionState::Resizing { id, edge, last } => {
                let (id, edge, dx, dy) = (*id, *edge, x - last.x, y - last.y);
                *last = Point::new(x, y);
                self.scene = self.scene.resize_element(id, edge, dx, dy);
            }
            _ => {}
        }
    }

    /// Release commits the gesture: exactly one history entry, and only
    /// if the scene actually changed.
    fn pointer_up(&mut self) {
        if matches!(
            self.state,
            InteractionState::Dragging { .. } | InteractionState::Resizing { .. }
        ) {
            self.commit();
            self.state = InteractionState::Idle;
        }
    }

    fn double_click(&mut self, x: f32, y: f32) {
        let Some(id) = topmost_at(&self.scene, x, y, self.preview) else {
            return;
        };
        let Some(element) = self.scene.get(id) else {
            return;
        };
        if element.kind.is_text_bearing() {
            self.selection = Some(id);
            self.state = InteractionState::EditingText {
                id,
                draft: element.content.clone(),
            };
        }
    }

    // ─── Inline text editing ─────────────────────────────────────────────

    /// Replace the uncommitted draft while editing. Ignored otherwise.
    pub fn set_draft(&mut self, text: &str) {
        if let InteractionState::EditingText { draft, .. } = &mut self.state {
            *draft = text.to_string();
        }
    }

    /// Blur or Enter: write the draft into the scene and record.
    pub fn commit_text_edit(&mut self) {
        if let InteractionState::EditingText { id, draft } = &self.state {
            self.scene = self.scene.set_content(*id, draft);
            self.state = InteractionState::Idle;
            self.commit();
        }
    }

    /// Escape: drop the draft without touching the scene.
    pub fn cancel_text_edit(&mut self) {
        if self.state.is_editing_text() {
            debug!("text edit cancelled");
            self.state = InteractionState::Idle;
        }
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Route a raw key event. While editing text only Enter (without
    /// shift, commits) and Escape (discards) are handled; global
    /// shortcuts are suppressed so typing "z" types a z.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) {
        if self.state.is_editing_text() {
            match key {
                "Enter" if !shift => self.commit_text_edit(),
                "Escape" => self.cancel_text_edit(),
                _ => {}
            }
            return;
        }
        if let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) {
            self.apply_action(action);
        }
    }

    /// Apply a resolved shortcut action. Suppressed during text editing.
    /// `Save` is a session-level concern and falls through untouched.
    pub fn apply_action(&mut self, action: ShortcutAction) {
        if self.state.is_editing_text() {
            return;
        }
        match action {
            ShortcutAction::Undo => {
                if let Some(scene) = self.history.undo() {
                    self.scene = scene.clone();
                    self.prune_selection();
                    self.notifier.notify("Undone");
                }
            }
            ShortcutAction::Redo => {
                if let Some(scene) = self.history.redo() {
                    self.scene = scene.clone();
                    self.prune_selection();
                    self.notifier.notify("Redone");
                }
            }
            ShortcutAction::Copy => {
                if let Some(id) = self.selection
                    && self.clipboard.copy(&self.scene, id)
                {
                    self.notifier.notify("Copied");
                }
            }
            ShortcutAction::Paste => {
                if let Some(next) = self.clipboard.paste(&self.scene) {
                    self.selection = next.elements.last().map(|e| e.id);
                    self.scene = next;
                    self.commit();
                    self.notifier.notify("Pasted");
                }
            }
            ShortcutAction::Duplicate => {
                if let Some(id) = self.selection {
                    let next = self.scene.duplicate_element(id);
                    if next != self.scene {
                        self.selection = next.elements.last().map(|e| e.id);
                        self.scene = next;
                        self.commit();
                        self.notifier.notify("Duplicated");
                    }
                }
            }
            ShortcutAction::Delete => {
                if let Some(id) = self.selection {
                    let next = self.scene.delete_element(id);
                    if next != self.scene {
                        self.scene = next;
                        self.selection = None;
                        self.commit();
                        self.notifier.notify("Deleted");
                    }
                }
            }
            ShortcutAction::BringForward => self.shift_selected(LayerShift::Raise),
            ShortcutAction::SendBackward => self.shift_selected(LayerShift::Lower),
            ShortcutAction::ToggleLock => {
                if let Some(id) = self.selection {
                    let next = self.scene.toggle_locked(id);
                    if next != self.scene {
                        let locked = next.get(id).is_some_and(|e| e.locked);
                        self.scene = next;
                        self.commit();
                        self.notifier.notify(if locked { "Locked" } else { "Unlocked" });
                    }
                }
            }
            ShortcutAction::ToggleHidden => {
                if let Some(id) = self.selection {
                    let next = self.scene.toggle_hidden(id);
                    if next != self.scene {
                        let hidden = next.get(id).is_some_and(|e| e.hidden);
                        self.scene = next;
                        self.commit();
                        self.notifier.notify(if hidden { "Hidden" } else { "Shown" });
                    }
                }
            }
            ShortcutAction::Deselect => self.escape(),
            ShortcutAction::Save | ShortcutAction::TogglePreview => {}
        }
    }

    /// Escape: discard the text draft while editing, abandon an
    /// in-flight drag/resize gesture (the working scene snaps back to
    /// the last committed snapshot), otherwise clear the selection.
    pub fn escape(&mut self) {
        match self.state {
            InteractionState::EditingText { .. } => self.cancel_text_edit(),
            InteractionState::Dragging { .. } | InteractionState::Resizing { .. } => {
                debug!("gesture cancelled");
                self.scene = self.history.current().clone();
                self.state = InteractionState::Idle;
                self.selection = None;
            }
            InteractionState::Idle => {
                self.selection = None;
            }
        }
    }

    // ─── Commit discipline ───────────────────────────────────────────────

    /// Record the working scene iff it differs from the current history
    /// entry. This is what keeps no-op gestures (locked element, zero
    /// delta, stale id) out of the undo stack.
    fn commit(&mut self) {
        if self.scene != *self.history.current() {
            self.history.record(self.scene.clone());
        }
    }

    fn shift_selected(&mut self, shift: LayerShift) {
        if let Some(id) = self.selection {
            let next = self.scene.set_layer(id, shift);
            if next != self.scene {
                self.scene = next;
                self.commit();
            }
        }
    }

    /// Drop the selection if its element no longer exists — undo/redo
    /// can remove elements out from under it.
    fn prune_selection(&mut self) {
        if let Some(id) = self.selection
            && !self.scene.contains(id)
        {
            self.selection = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sc_core::model::{ElementKind, Size};

    fn controller_with(kind: ElementKind, x: f32, y: f32) -> (EditorController, ElementId) {
        let scene = Scene::new().add_element(kind, Point::new(x, y));
        let id = scene.elements[0].id;
        (EditorController::new(scene), id)
    }

    fn drag(c: &mut EditorController, from: (f32, f32), to: (f32, f32)) {
        c.handle_input(InputEvent::PointerDown { x: from.0, y: from.1 });
        c.handle_input(InputEvent::PointerMove { x: to.0, y: to.1 });
        c.handle_input(InputEvent::PointerUp { x: to.0, y: to.1 });
    }

    #[test]
    fn click_selects_topmost() {
        let (mut c, id) = controller_with(ElementKind::Button, 10.0, 10.0);
        c.handle_input(InputEvent::PointerDown { x: 20.0, y: 20.0 });
        assert_eq!(c.selection(), Some(id));
        c.handle_input(InputEvent::PointerUp { x: 20.0, y: 20.0 });

        // click on empty canvas clears selection
        c.handle_input(InputEvent::PointerDown { x: 900.0, y: 900.0 });
        assert_eq!(c.selection(), None);
    }

    #[test]
    fn drag_gesture_records_exactly_one_entry() {
        let (mut c, id) = controller_with(ElementKind::Button, 100.0, 100.0);
        c.handle_input(InputEvent::PointerDown { x: 110.0, y: 110.0 });
        for step in 1..=5 {
            c.handle_input(InputEvent::PointerMove {
                x: 110.0 + step as f32 * 3.0,
                y: 110.0 - step as f32,
            });
        }
        c.handle_input(InputEvent::PointerUp { x: 125.0, y: 105.0 });

        assert_eq!(c.scene().get(id).unwrap().position, Point::new(115.0, 95.0));
        assert!(c.can_undo());
        // one undo restores the pre-drag scene; a second has nothing to do
        c.apply_action(ShortcutAction::Undo);
        assert_eq!(c.scene().get(id).unwrap().position, Point::new(100.0, 100.0));
        assert!(!c.can_undo());
    }

    #[test]
    fn escape_mid_drag_abandons_the_gesture() {
        let (mut c, id) = controller_with(ElementKind::Button, 100.0, 100.0);
        c.handle_input(InputEvent::PointerDown { x: 110.0, y: 110.0 });
        c.handle_input(InputEvent::PointerMove { x: 160.0, y: 110.0 });
        c.handle_key("Escape", false, false, false, false);
        c.handle_input(InputEvent::PointerUp { x: 160.0, y: 110.0 });

        // the scene snaps back; the release after the cancel records nothing
        assert_eq!(c.scene().get(id).unwrap().position, Point::new(100.0, 100.0));
        assert!(!c.can_undo());
        assert!(matches!(c.state(), InteractionState::Idle));
        assert_eq!(c.selection(), None);
    }

    #[test]
    fn escape_mid_resize_restores_original_size() {
        let (mut c, id) = controller_with(ElementKind::Button, 100.0, 100.0);
        drag(&mut c, (150.0, 120.0), (150.0, 120.0));
        c.handle_input(InputEvent::PointerDown { x: 220.0, y: 148.0 });
        c.handle_input(InputEvent::PointerMove { x: 260.0, y: 168.0 });
        assert!(matches!(c.state(), InteractionState::Resizing { .. }));
        c.escape();
        c.handle_input(InputEvent::PointerUp { x: 260.0, y: 168.0 });

        assert_eq!(c.scene().get(id).unwrap().size, Size::new(120.0, 48.0));
        assert!(!c.can_undo());
    }

    #[test]
    fn locked_element_selects_but_never_drags_or_records() {
        let (mut c, id) = controller_with(ElementKind::Image, 50.0, 50.0);
        c.handle_input(InputEvent::PointerDown { x: 60.0, y: 60.0 });
        c.handle_input(InputEvent::PointerUp { x: 60.0, y: 60.0 });
        c.apply_action(ShortcutAction::ToggleLock);
        assert!(c.scene().get(id).unwrap().locked);

        let before = c.scene().clone();
        drag(&mut c, (60.0, 60.0), (200.0, 200.0));
        assert_eq!(c.selection(), Some(id), "locked still click-selects");
        assert_eq!(*c.scene(), before, "locked drag is a no-op");
        // lock toggle recorded one entry; the no-op drag recorded none
        c.apply_action(ShortcutAction::Undo);
        assert!(!c.can_undo());
    }

    #[test]
    fn resize_via_handle_on_selected_element() {
        let (mut c, id) = controller_with(ElementKind::Button, 100.0, 100.0);
        // select first
        drag(&mut c, (150.0, 120.0), (150.0, 120.0));
        assert_eq!(c.selection(), Some(id));

        // grab the south-east handle (button default 120×48 → corner at 220,148)
        c.handle_input(InputEvent::PointerDown { x: 220.0, y: 148.0 });
        assert!(matches!(c.state(), InteractionState::Resizing { .. }));
        c.handle_input(InputEvent::PointerMove { x: 260.0, y: 168.0 });
        c.handle_input(InputEvent::PointerUp { x: 260.0, y: 168.0 });

        assert_eq!(c.scene().get(id).unwrap().size, Size::new(160.0, 68.0));
        assert!(matches!(c.state(), InteractionState::Idle));
    }

    #[test]
    fn double_click_edits_text_bearing_only() {
        let (mut c, id) = controller_with(ElementKind::Heading, 0.0, 0.0);
        c.handle_input(InputEvent::DoubleClick { x: 10.0, y: 10.0 });
        assert!(c.state().is_editing_text());
        assert_eq!(c.selection(), Some(id));

        let (mut c2, _) = controller_with(ElementKind::Image, 0.0, 0.0);
        c2.handle_input(InputEvent::DoubleClick { x: 10.0, y: 10.0 });
        assert!(!c2.state().is_editing_text());
    }

    #[test]
    fn enter_commits_escape_discards_draft() {
        let (mut c, id) = controller_with(ElementKind::Text, 0.0, 0.0);
        c.handle_input(InputEvent::DoubleClick { x: 10.0, y: 10.0 });
        c.set_draft("Hello world");
        c.handle_key("Enter", false, false, false, false);
        assert_eq!(c.scene().get(id).unwrap().content, "Hello world");
        assert!(c.can_undo());

        c.handle_input(InputEvent::DoubleClick { x: 10.0, y: 10.0 });
        c.set_draft("discarded");
        c.handle_key("Escape", false, false, false, false);
        assert_eq!(c.scene().get(id).unwrap().content, "Hello world");
    }

    #[test]
    fn shortcuts_suppressed_while_editing() {
        let (mut c, id) = controller_with(ElementKind::Text, 0.0, 0.0);
        c.handle_input(InputEvent::DoubleClick { x: 10.0, y: 10.0 });
        // cmd+z while typing must not undo
        c.handle_key("z", false, false, false, true);
        assert!(c.state().is_editing_text());
        assert!(c.scene().contains(id));
    }

    #[test]
    fn delete_clears_selection() {
        let (mut c, id) = controller_with(ElementKind::Button, 0.0, 0.0);
        drag(&mut c, (10.0, 10.0), (10.0, 10.0));
        c.apply_action(ShortcutAction::Delete);
        assert!(!c.scene().contains(id));
        assert_eq!(c.selection(), None);
        // deleting again with no selection changes nothing
        let before = c.scene().clone();
        c.apply_action(ShortcutAction::Delete);
        assert_eq!(*c.scene(), before);
    }

    #[test]
    fn copy_delete_paste_restores_content_at_offset() {
        let (mut c, id) = controller_with(ElementKind::Button, 30.0, 40.0);
        drag(&mut c, (40.0, 50.0), (40.0, 50.0));
        c.apply_action(ShortcutAction::Copy);
        c.apply_action(ShortcutAction::Delete);
        c.apply_action(ShortcutAction::Paste);

        assert_eq!(c.scene().len(), 1);
        let pasted = &c.scene().elements[0];
        assert_ne!(pasted.id, id);
        assert_eq!(pasted.position, Point::new(50.0, 60.0));
        assert_eq!(pasted.content, "Click Me");
        assert_eq!(c.selection(), Some(pasted.id));
    }

    #[test]
    fn undo_prunes_stale_selection() {
        let (mut c, _) = controller_with(ElementKind::Text, 0.0, 0.0);
        drag(&mut c, (10.0, 10.0), (10.0, 10.0));
        c.apply_action(ShortcutAction::Duplicate);
        // duplicate selected the copy; undo removes it
        c.apply_action(ShortcutAction::Undo);
        assert_eq!(c.selection(), None);
    }

    #[test]
    fn preview_mode_ignores_pointer_input() {
        let (mut c, id) = controller_with(ElementKind::Button, 100.0, 100.0);
        c.set_preview(true);
        drag(&mut c, (110.0, 110.0), (300.0, 300.0));
        assert_eq!(c.selection(), None);
        assert_eq!(c.scene().get(id).unwrap().position, Point::new(100.0, 100.0));
    }

    #[test]
    fn layer_shortcuts_move_selection_in_paint_order() {
        let scene = Scene::new()
            .add_element(ElementKind::Container, Point::new(0.0, 0.0))
            .add_element(ElementKind::Image, Point::new(10.0, 10.0));
        let container = scene.elements[0].id;
        let mut c = EditorController::new(scene);
        c.handle_input(InputEvent::PointerDown { x: 350.0, y: 250.0 }); // container only
        c.handle_input(InputEvent::PointerUp { x: 350.0, y: 250.0 });
        assert_eq!(c.selection(), Some(container));

        // two raises: one only ties the image's layer, and ties keep scene order
        c.apply_action(ShortcutAction::BringForward);
        c.apply_action(ShortcutAction::BringForward);
        let top = c.render_list().last().map(|e| e.id);
        assert_eq!(top, Some(container));
    }
}
