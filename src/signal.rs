//! Signal/slot change notification.
//!
//! A small, type-safe signal primitive used by [`DataSource`](crate::DataSource)
//! to announce wholesale content replacement and target rebinding. Slots are
//! plain closures invoked synchronously on the emitting thread; there is no
//! queued or cross-thread delivery, because the data source lives entirely on
//! the host widget's event-dispatch thread.
//!
//! # Example
//!
//! ```
//! use slate_table::Signal;
//!
//! let changed = Signal::<u32>::new();
//! let id = changed.connect(|n| println!("now {n}"));
//! changed.emit(7);
//! changed.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`] and accepted by [`Signal::disconnect`].
    /// The ID stays valid until the connection is removed or the signal is
    /// dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal with any number of connected slots.
///
/// Emission is synchronous and in-thread. The slot list is snapshotted before
/// any slot runs, so a slot may connect, disconnect, or re-emit from inside
/// its own invocation without deadlocking. Slots added during an emission are
/// not invoked for that emission.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Creates a signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connects a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] for later disconnection.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnects a slot by its connection ID.
    ///
    /// Returns `true` if the connection existed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnects every slot.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Returns the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Blocks or unblocks emission.
    ///
    /// While blocked, [`emit`](Self::emit) does nothing. Useful during batch
    /// reconfiguration to suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Returns `true` if emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emits the signal, invoking every connected slot with `args`.
    ///
    /// The connection lock is released before the first slot runs, so slots
    /// are free to call back into this signal or into the object that owns it.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "slate_table::signal", "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        for slot in slots {
            slot(&args);
        }
    }
}
