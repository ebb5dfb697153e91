//! Cross-thread event marshaling.
//!
//! Panels, label slots and the icon table belong to the host's single
//! update thread. Threads that observe host notifications submit
//! [`HostEvent`]s through a cloneable [`EventHandle`]; the update thread
//! drains them in arrival order, each handled to completion before the
//! next. No batching, no reordering.

use std::sync::mpsc::{self, Receiver, Sender};

use thiserror::Error;

use crate::model::HostEvent;

/// The update thread dropped its [`EventQueue`]; the event was not
/// delivered.
#[derive(Debug, Error)]
#[error("event queue is closed")]
pub struct QueueClosed;

/// Sending half of the event queue.
#[derive(Debug, Clone)]
pub struct EventHandle {
    tx: Sender<HostEvent>,
}

impl EventHandle {
    /// Enqueue an event from any thread.
    pub fn submit(&self, event: HostEvent) -> Result<(), QueueClosed> {
        self.tx.send(event).map_err(|_| QueueClosed)
    }
}

/// Receiving half of the event queue, owned by the update thread.
pub struct EventQueue {
    rx: Receiver<HostEvent>,
}

impl EventQueue {
    /// Hand every queued event to `handle`, in arrival order, without
    /// blocking. Call once per host update tick.
    pub fn drain(&self, mut handle: impl FnMut(HostEvent)) {
        for event in self.rx.try_iter() {
            handle(event);
        }
    }
}

/// Create a connected handle/queue pair.
pub fn channel() -> (EventHandle, EventQueue) {
    let (tx, rx) = mpsc::channel();
    (EventHandle { tx }, EventQueue { rx })
}
