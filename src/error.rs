//! Error types used by the bus and by observer callbacks.
//!
//! Two types:
//!
//! - [`CallbackError`] — failure returned by an observer callback.
//! - [`BusError`] — failures surfaced by bus operations themselves:
//!   a stale unsubscribe handle, or a callback failure propagated out of
//!   `publish`/`subscribe`.
//!
//! Both provide helper methods (`as_label`, `as_message`) for logging and
//! metrics.

use thiserror::Error;

use crate::calls::ChannelId;

/// Failure produced by an observer callback.
///
/// Observers report problems by returning this from
/// [`Observe::on_call`](crate::Observe::on_call); the bus never inspects
/// the message, it only decides whether delivery continues (see
/// [`DeliveryPolicy`](crate::DeliveryPolicy)).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CallbackError {
    /// Human-readable description of what went wrong inside the callback.
    pub message: String,
}

impl CallbackError {
    /// Creates a callback error from any string-ish message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for CallbackError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for CallbackError {
    fn from(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// # Errors produced by bus operations.
///
/// These represent failures local to a single `subscribe`, `unsubscribe`
/// or `publish` call; the bus has no retry logic and no fatal error class.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// `unsubscribe` was given a handle whose registration is not present
    /// on its channel (double-unsubscribe, or a stale handle).
    ///
    /// A channel with no registrations at all is **not** an error; that
    /// case is a no-op.
    #[error("no observer with id {id} on channel '{channel}'")]
    LookupMiss {
        /// Channel the handle points at.
        channel: ChannelId,
        /// Registration id carried by the handle.
        id: u64,
    },

    /// An observer callback failed while a call was being delivered.
    ///
    /// Under [`DeliveryPolicy::Abort`](crate::DeliveryPolicy::Abort) this
    /// aborts delivery to the remaining observers of that publish.
    #[error("observer '{observer}' failed on channel '{channel}': {source}")]
    Callback {
        /// Channel the call was delivered on.
        channel: ChannelId,
        /// Name of the failing observer.
        observer: String,
        /// The callback's own error.
        #[source]
        source: CallbackError,
    },
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use memobus::{BusError, ChannelId};
    ///
    /// let err = BusError::LookupMiss { channel: ChannelId::from("temp"), id: 7 };
    /// assert_eq!(err.as_label(), "bus_lookup_miss");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::LookupMiss { .. } => "bus_lookup_miss",
            BusError::Callback { .. } => "bus_callback_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::LookupMiss { channel, id } => {
                format!("lookup miss: channel={channel} id={id}")
            }
            BusError::Callback {
                channel,
                observer,
                source,
            } => {
                format!("callback failed: channel={channel} observer={observer} error={source}")
            }
        }
    }
}
