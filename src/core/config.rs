//! # Bus configuration.
//!
//! Provides [`Config`] centralized settings for a [`Reactive`] bus
//! instance.
//!
//! Config is consumed once, at construction: `Reactive::new(config)`.
//! There is exactly one knob today; it lives in a struct so that adding
//! further settings (an expiry policy for latest calls, say) does not
//! churn the constructor signature.
//!
//! [`Reactive`]: crate::Reactive

use crate::policies::DeliveryPolicy;

/// Configuration for a bus instance.
///
/// ## Field semantics
/// - `delivery`: what `publish` does when an observer callback fails
///   (abort the remaining delivery, or log and continue).
///
/// ## Notes
/// All fields are public; build the struct directly or start from
/// [`Config::default`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Delivery behavior on callback failure.
    ///
    /// - [`DeliveryPolicy::Abort`] (default): the first `Err` propagates
    ///   out of `publish`; observers later in insertion order are skipped
    ///   for that call.
    /// - [`DeliveryPolicy::BestEffort`]: every observer is invoked;
    ///   failures are logged at `warn` and `publish` returns `Ok`.
    pub delivery: DeliveryPolicy,
}
