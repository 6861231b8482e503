//! # Delivery policies for observer callbacks.
//!
//! [`DeliveryPolicy`] determines what `publish` does when an observer
//! callback returns an error mid-delivery.
//!
//! - [`DeliveryPolicy::Abort`] the failure propagates out of `publish`
//!   immediately; observers later in the channel's insertion order are not
//!   invoked for that call (default).
//! - [`DeliveryPolicy::BestEffort`] every observer is invoked; failures
//!   are logged and `publish` returns `Ok`.
//!
//! ## Choosing the right policy
//!
//! **Fail fast** (surface buggy observers at the publish site):
//! ```text
//! DeliveryPolicy::Abort       → partial delivery on failure, Err returned
//! ```
//!
//! **Maximum fan-out** (one bad observer must not starve the rest):
//! ```text
//! DeliveryPolicy::BestEffort  → full delivery, failures logged at warn
//! ```
//!
//! Either way the channel's latest call is recorded **before** delivery
//! starts, so replay-on-subscribe is unaffected by callback failures.

/// Policy controlling delivery when an observer callback fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Abort on the first failing callback: the error propagates out of
    /// `publish` and the remaining observers are skipped (default).
    ///
    /// This is a documented partial-delivery hazard, kept because it
    /// matches the long-standing observable behavior of the bus.
    Abort,
    /// Invoke every observer; log each failure and return `Ok`.
    BestEffort,
}

impl Default for DeliveryPolicy {
    /// Returns [`DeliveryPolicy::Abort`].
    fn default() -> Self {
        DeliveryPolicy::Abort
    }
}
