//! Bus core: state and delivery.
//!
//! This module contains the embedded implementation of the reactive bus.
//! The public API from this module is [`Reactive`], which owns all bus
//! state, and [`Config`], which selects its delivery behavior.
//!
//! Internal modules:
//! - [`bus`]: observer registry, latest-call memoization, delivery loops;
//! - [`config`]: bus-wide configuration.

mod bus;
mod config;

pub use bus::Reactive;
pub use config::Config;
