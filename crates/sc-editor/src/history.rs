//! Linear undo/redo history of full scene snapshots.
//!
//! Each committed mutation stores one immutable `Scene` copy. A cursor
//! addresses the snapshot currently rendered; entries before it are undo
//! targets, entries after it redo targets. Recording after an undo
//! truncates the redo tail — standard linear-undo discipline.
//!
//! Drag and resize gestures commit once on release, not per move, so a
//! whole gesture is one history step.

use log::debug;
use sc_core::Scene;

/// Default cap on retained snapshots. Oldest entries are trimmed first.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Snapshot stack with a cursor. `entries[cursor]` is always the scene
/// currently shown.
pub struct History {
    entries: Vec<Scene>,
    cursor: usize,
    max_depth: usize,
}

impl History {
    /// Start a history whose single entry is the opening scene.
    pub fn new(initial: Scene) -> Self {
        Self::with_depth(initial, DEFAULT_MAX_DEPTH)
    }

    pub fn with_depth(initial: Scene, max_depth: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            // one slot for the current scene plus at least one undo step
            max_depth: max_depth.max(2),
        }
    }

    /// The scene at the cursor — what the canvas is rendering.
    pub fn current(&self) -> &Scene {
        &self.entries[self.cursor]
    }

    /// Commit a new snapshot: drop any redo tail, append, advance the
    /// cursor. Trims the oldest entry when the depth cap is exceeded.
    pub fn record(&mut self, scene: Scene) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(scene);
        self.cursor = self.entries.len() - 1;
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
            self.cursor -= 1;
        }
        debug!("history: record, {} entries", self.entries.len());
    }

    /// Step back one snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) -> Option<&Scene> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> Option<&Scene> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}
