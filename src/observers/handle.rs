//! # Unsubscribe tokens.
//!
//! [`Reactive::subscribe`](crate::Reactive::subscribe) returns an
//! [`ObserverHandle`] naming exactly one registration: the channel plus a
//! bus-unique id. [`Reactive::unsubscribe`](crate::Reactive::unsubscribe)
//! consumes the handle and removes exactly that registration, so
//! subscribing the same callback twice on one channel stays unambiguous -
//! each registration gets its own handle.

use crate::calls::ChannelId;

/// Token identifying a single observer registration on the bus.
///
/// Handles are only meaningful on the bus that issued them. A handle kept
/// after its registration was removed is *stale*; passing it to
/// `unsubscribe` again yields
/// [`BusError::LookupMiss`](crate::BusError::LookupMiss).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle {
    channel: ChannelId,
    id: u64,
}

impl ObserverHandle {
    pub(crate) fn new(channel: ChannelId, id: u64) -> Self {
        Self { channel, id }
    }

    /// Channel this registration lives on.
    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }

    /// Bus-unique registration id.
    pub fn id(&self) -> u64 {
        self.id
    }
}
