//! Status listener registry
//!
//! Listeners are kept in registration order and each one is notified of
//! every status change. A panicking listener is isolated: the panic is
//! caught and logged, and delivery continues with the next listener.

use crate::types::StatusChange;
use std::panic::{self, AssertUnwindSafe};

/// Observer of player status transitions
pub trait StatusListener {
    fn on_status_changed(&mut self, change: &StatusChange);
}

impl<F> StatusListener for F
where
    F: FnMut(&StatusChange),
{
    fn on_status_changed(&mut self, change: &StatusChange) {
        self(change);
    }
}

/// Handle returned on registration, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub(crate) struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn StatusListener>)>,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, listener: Box<dyn StatusListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if `id` was not registered
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `change` to every listener; returns how many completed without panicking
    pub(crate) fn notify(&mut self, change: &StatusChange) -> usize {
        let mut delivered = 0;
        for (id, listener) in &mut self.listeners {
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| listener.on_status_changed(change)));
            match outcome {
                Ok(()) => delivered += 1,
                Err(payload) => {
                    let reason = payload
                        .downcast_ref::<&str>()
                        .map(|s| (*s).to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    tracing::error!(listener = ?id, status = ?change.status, %reason, "Status listener panicked");
                }
            }
        }
        delivered
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("next_id", &self.next_id)
            .field(
                "listeners",
                &self.listeners.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
