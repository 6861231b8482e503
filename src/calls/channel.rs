//! # Channel identifiers.
//!
//! A [`ChannelId`] names a logical notification stream on the bus. Channels
//! are never declared up front: they come into existence on the first
//! subscribe or first publish that mentions them.
//!
//! ## Representation
//! The identifier wraps an `Arc<str>`, so cloning a `ChannelId` (which the
//! bus does on every subscribe/publish) is a reference-count bump, not a
//! string copy. Identifiers compare, hash and order by their text.

use std::fmt;
use std::sync::Arc;

/// Opaque, comparable token naming a notification channel.
///
/// Construct one from any string-ish value:
///
/// ```rust
/// use memobus::ChannelId;
///
/// let a = ChannelId::from("temp");
/// let b: ChannelId = String::from("temp").into();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "temp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(Arc<str>);

impl ChannelId {
    /// Returns the channel name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for ChannelId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&ChannelId> for ChannelId {
    fn from(id: &ChannelId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
