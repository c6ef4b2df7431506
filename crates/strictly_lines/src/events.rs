//! Synchronous notifications published by the engine.
//!
//! Each event kind has its own [`Signal`]. Emitting calls every subscriber
//! immediately, in the order they subscribed, before the triggering engine
//! operation returns. Nothing is buffered: a subscriber only sees events
//! emitted after it subscribed.

use super::types::{Player, Tile};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

/// Handle returned by `subscribe`, used to unsubscribe later.
///
/// Ids are unique across all signals in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("sub#{}", _0)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed))
    }
}

type Slot<T> = Box<dyn FnMut(&T)>;

/// An ordered list of callbacks for one event kind.
pub struct Signal<T> {
    slots: Vec<(SubscriptionId, Slot<T>)>,
}

impl<T> Signal<T> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Registers `callback`. It runs after every callback registered before it.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId::next();
        self.slots.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not subscribed here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    /// Delivers `payload` to every subscriber in subscription order.
    pub fn emit(&mut self, payload: &T) {
        trace!(subscribers = self.slots.len(), "Emitting");
        for (_, callback) in &mut self.slots {
            callback(payload);
        }
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

/// A mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Who placed the mark.
    pub player: Player,
    /// Where it was placed.
    pub tile: Tile,
}

/// The winning player and the full run of tiles that won, sorted by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    /// Winning player.
    pub player: Player,
    /// Tiles forming the winning run.
    pub line: Vec<Tile>,
}

impl Winner {
    /// Whether `tile` is part of the winning run.
    pub fn contains(&self, tile: Tile) -> bool {
        self.line.binary_search(&tile).is_ok()
    }
}

/// The four notification channels of a game.
#[derive(Debug, Default)]
pub struct GameEvents {
    /// Cursor moved; carries the new focus.
    pub focus: Signal<Tile>,
    /// A mark was placed.
    pub select: Signal<Selection>,
    /// A winning line was formed.
    pub win: Signal<Winner>,
    /// The game was reset.
    pub reset: Signal<()>,
}

impl GameEvents {
    /// Removes `id` from whichever signal holds it.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.focus.unsubscribe(id)
            || self.select.unsubscribe(id)
            || self.win.unsubscribe(id)
            || self.reset.unsubscribe(id)
    }

    /// Total subscribers across all signals.
    pub fn subscriber_count(&self) -> usize {
        self.focus.len() + self.select.len() + self.win.len() + self.reset.len()
    }
}
