//! Call data model: channel identifiers and payloads.
//!
//! This module groups the two value types the bus moves around:
//! - [`ChannelId`] opaque comparable token naming a notification stream;
//! - [`Call`] positional-plus-named payload, also memoized per channel as
//!   the latest call for replay-on-subscribe.

mod call;
mod channel;

pub use call::Call;
pub use channel::ChannelId;
