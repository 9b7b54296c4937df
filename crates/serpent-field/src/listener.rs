//! Listener trait, registry, and the channel-forwarding listener.
//!
//! Listeners are invoked synchronously, in registration order, after the
//! mutation they describe has been applied. They see the field through
//! `&dyn PlayFieldModel` and cannot mutate it from inside the callback.

use crate::event::FieldEvent;
use crate::model::PlayFieldModel;
use crossbeam_channel::{Receiver, Sender};
use indexmap::IndexMap;
use std::fmt;
use tracing::warn;

/// Receives [`FieldEvent`]s from a [`TileGrid`](crate::TileGrid).
///
/// Implemented for every `FnMut(&dyn PlayFieldModel, &FieldEvent)` closure.
pub trait FieldListener {
    /// Called once per event, after the change is visible in `field`.
    fn field_changed(&mut self, field: &dyn PlayFieldModel, event: &FieldEvent);
}

impl<F> FieldListener for F
where
    F: FnMut(&dyn PlayFieldModel, &FieldEvent),
{
    fn field_changed(&mut self, field: &dyn PlayFieldModel, event: &FieldEvent) {
        self(field, event)
    }
}

/// Handle returned by [`TileGrid::add_listener`](crate::TileGrid::add_listener).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of listeners.
///
/// Uses `IndexMap` so that notification order is registration order and
/// stays so after removals.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: IndexMap<ListenerId, Box<dyn FieldListener>>,
}

impl ListenerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener at the end of the notification order.
    pub fn add(&mut self, listener: Box<dyn FieldListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Unregister a listener. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener in registration order.
    pub fn notify(&mut self, field: &dyn PlayFieldModel, event: &FieldEvent) {
        for listener in self.listeners.values_mut() {
            listener.field_changed(field, event);
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Forwards every event into a crossbeam channel.
///
/// Lets a consumer on another thread (for example a renderer) drain events
/// at its own pace. Once the receiving side is dropped the listener logs a
/// warning and stops sending.
#[derive(Debug)]
pub struct ChannelListener {
    sender: Sender<FieldEvent>,
    disconnected: bool,
}

impl ChannelListener {
    /// Forward into an existing sender.
    pub fn new(sender: Sender<FieldEvent>) -> Self {
        Self {
            sender,
            disconnected: false,
        }
    }

    /// A listener paired with the receiver of a fresh unbounded channel.
    pub fn unbounded() -> (Self, Receiver<FieldEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    /// `true` once a send failed because the receiver is gone.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

impl FieldListener for ChannelListener {
    fn field_changed(&mut self, _field: &dyn PlayFieldModel, event: &FieldEvent) {
        if self.disconnected {
            return;
        }
        if self.sender.send(*event).is_err() {
            warn!(?event, "field event receiver disconnected; dropping listener output");
            self.disconnected = true;
        }
    }
}
