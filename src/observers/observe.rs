//! # Core observer trait.
//!
//! [`Observe`] is the extension point for plugging call handlers into the
//! bus. Observers are registered on a channel with
//! [`Reactive::subscribe`](crate::Reactive::subscribe) and invoked
//! **synchronously, on the publisher's thread**, once per registration.
//!
//! ## Contract
//! - `on_call` runs inline inside `publish` (and inside `subscribe`, for
//!   the replay of a channel's latest call). A slow observer delays the
//!   publisher; there is no queueing and no worker task.
//! - Returning `Err` signals a callback failure. What happens next is the
//!   bus's [`DeliveryPolicy`](crate::DeliveryPolicy): abort the remaining
//!   delivery (default) or log and continue.
//! - The same observer may be registered multiple times, on one channel or
//!   on several; each registration is invoked independently.

use std::sync::Arc;

use crate::calls::Call;
use crate::error::CallbackError;

/// Shared observer handle used by the bus (`Arc<dyn Observe>`).
pub type ObserverRef = Arc<dyn Observe>;

/// Contract for call observers.
///
/// Called inline from the publishing (or subscribing, during replay)
/// thread. Implementations should be quick and must not assume which
/// thread they run on.
pub trait Observe: Send + Sync + 'static {
    /// Handles a single call delivered on a channel this observer is
    /// subscribed to.
    ///
    /// The bus passes the same [`Call`] to every observer of the channel;
    /// the observer does not learn the channel name from the call (it knew
    /// the channel when it subscribed).
    fn on_call(&self, call: &Call) -> Result<(), CallbackError>;

    /// Human-readable name used in logs and in
    /// [`BusError::Callback`](crate::BusError::Callback).
    ///
    /// Prefer short, descriptive names (e.g., "display", "alerts").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
