//! Input layer: key events, the notebook Enter-key dispatcher, and the
//! mount/unmount listener registry.

pub mod event;
pub mod keymap;
pub mod registry;

pub use event::{KeyCode, KeyPress, Platform};
pub use keymap::{dispatch_notebook_key, KeyDispatch};
pub use registry::{KeyHandler, ListenerGuard, ListenerRegistry};
