//! Delivery policies.
//!
//! This module groups the knobs that control **what happens when an
//! observer callback fails** while a call is being delivered.
//!
//! ## Contents
//! - [`DeliveryPolicy`] abort delivery on the first failure, or keep going
//!
//! ## Quick wiring
//! ```text
//! Config { delivery: DeliveryPolicy }
//!      └─► core::bus::Reactive uses it inside publish():
//!           - Abort      → propagate the first Err, skip the rest
//!           - BestEffort → log each Err (tracing::warn!), invoke everyone
//! ```
//!
//! ## Defaults
//! - `DeliveryPolicy::Abort` (matches the historical observable semantics).

mod delivery;

pub use delivery::DeliveryPolicy;
