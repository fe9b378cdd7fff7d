//! Listener registry with scoped acquisition/release. A view mounts its key
//! handler and gets a guard back; dropping the guard unmounts it. Repeated
//! mount/unmount cycles never leave duplicate listeners behind.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::state::AppState;

use super::event::KeyPress;
use super::keymap::KeyDispatch;

new_key_type! {
    struct ListenerKey;
}

pub type KeyHandler = Box<dyn FnMut(&AppState, &KeyPress) -> KeyDispatch>;

#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<SlotMap<ListenerKey, KeyHandler>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler. The registration lives exactly as long as the
    /// returned guard.
    pub fn mount(&self, handler: KeyHandler) -> ListenerGuard {
        let key = self.inner.borrow_mut().insert(handler);
        ListenerGuard {
            key,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Offer a key to the mounted listeners in mount order. The first one
    /// that handles it consumes the event.
    pub fn dispatch(&self, state: &AppState, key: &KeyPress) -> KeyDispatch {
        let mut listeners = self.inner.borrow_mut();
        for (_, handler) in listeners.iter_mut() {
            let dispatch = handler(state, key);
            if dispatch.is_handled() {
                return dispatch;
            }
        }
        KeyDispatch::Ignored
    }
}

pub struct ListenerGuard {
    key: ListenerKey,
    registry: Weak<RefCell<SlotMap<ListenerKey, KeyHandler>>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.key);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/registry.rs"]
mod tests;
