//! Global key listeners scoped to a guard's lifetime
//!
//! A listener is registered for a key code and stays active exactly as long
//! as the returned [`ListenerGuard`] is alive. Dropping the guard (explicitly
//! or because its owner went away) deregisters it.

use crossterm::event::KeyCode;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Registry = Rc<RefCell<Vec<(u64, KeyCode)>>>;

/// Registry of active global key listeners
#[derive(Debug, Default)]
pub struct GlobalKeyListeners {
    active: Registry,
    next_id: u64,
}

impl GlobalKeyListeners {
    /// Register a listener for `code`; it is released when the guard drops
    pub fn register(&mut self, code: KeyCode) -> ListenerGuard {
        let id = self.next_id;
        self.next_id += 1;
        self.active.borrow_mut().push((id, code));
        tracing::debug!("Registered global listener {id} for {code:?}");
        ListenerGuard {
            id,
            code,
            registry: Rc::downgrade(&self.active),
        }
    }

    /// Whether any live listener is bound to `code`
    pub fn is_listening(&self, code: KeyCode) -> bool {
        self.active.borrow().iter().any(|(_, c)| *c == code)
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.borrow().is_empty()
    }
}

/// Keeps one listener registered while alive
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    code: KeyCode,
    registry: Weak<RefCell<Vec<(u64, KeyCode)>>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Registry may already be gone during teardown
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|(id, _)| *id != self.id);
            tracing::debug!("Released global listener {} for {:?}", self.id, self.code);
        }
    }
}
