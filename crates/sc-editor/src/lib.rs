pub mod clipboard;
pub mod controller;
pub mod history;
pub mod input;
pub mod notify;
pub mod session;
pub mod shortcuts;
pub mod store;

pub use clipboard::Clipboard;
pub use controller::{EditorController, InteractionState};
pub use history::History;
pub use input::InputEvent;
pub use notify::{Notifier, NullNotifier};
pub use session::{DeviceMode, EditorSession, starter_scene};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use store::{MemoryStore, SceneStore, StoreError};
