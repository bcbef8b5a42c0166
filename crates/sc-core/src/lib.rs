pub mod id;
pub mod model;
pub mod order;
pub mod scene;

pub use id::ElementId;
pub use model::*;
pub use order::{resize_handle_at, sorted_by_layer, topmost_at};
pub use scene::{LayerShift, ResizeEdge};
