//! # Observers: the consumer side of the bus.
//!
//! This module provides the [`Observe`] trait and its supporting types for
//! receiving calls published through the [`Reactive`](crate::Reactive) bus.
//!
//! ## Architecture
//! ```text
//! Call flow:
//!   producer ── publish(Call) ──► Reactive ──► snapshot of channel observers
//!                                                │
//!                                                ├──► Observe::on_call(&Call)
//!                                                │         │
//!                                                │    ┌────┴─────┬─────────┐
//!                                                │    ▼          ▼         ▼
//!                                                │  ObserveFn  LogWriter  custom
//!                                                │
//!                                                └──► latest-call slot (replay
//!                                                     to future subscribers)
//! ```
//!
//! ## Contents
//! - [`Observe`] — synchronous observer contract (`on_call`, `name`);
//! - [`ObserverRef`] — shared handle type, `Arc<dyn Observe>`;
//! - [`ObserveFn`] — closure adapter for quick, named observers;
//! - [`ObserverHandle`] — unsubscribe token returned by `subscribe`;
//! - [`LogWriter`] — stdout demo observer (`logging` feature).
//!
//! ## Implementing custom observers
//! ```rust
//! use memobus::{Call, CallbackError, Observe};
//!
//! struct Threshold;
//!
//! impl Observe for Threshold {
//!     fn on_call(&self, call: &Call) -> Result<(), CallbackError> {
//!         if let Some(v) = call.arg(0).and_then(|v| v.as_f64()) {
//!             if v > 30.0 {
//!                 // raise an alert, etc.
//!             }
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "threshold" }
//! }
//! ```

mod handle;
mod observe;
mod observe_fn;

#[cfg(feature = "logging")]
mod log;

pub use handle::ObserverHandle;
pub use observe::{Observe, ObserverRef};
pub use observe_fn::ObserveFn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
