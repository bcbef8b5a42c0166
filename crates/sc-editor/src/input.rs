//! Input abstraction layer.
//!
//! Normalizes mouse and touch events from the host surface into a
//! unified `InputEvent` enum consumed by the interaction controller.
//! Coordinates are canvas-local units, already translated by the host.

/// A normalized pointer event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while tracking an interaction.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// Double click / double tap — opens the inline text editor on
    /// text-bearing elements.
    DoubleClick { x: f32, y: f32 },
}
