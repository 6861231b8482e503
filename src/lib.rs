//! # memobus
//!
//! **Memobus** is a lightweight reactive publish/subscribe bus for Rust.
//!
//! It provides a channel-addressed observer registry with last-value
//! memoization: producers publish variable-shaped payloads to named
//! channels, consumers subscribe a callback to a channel and receive both
//! future notifications **and** a synchronous replay of the channel's most
//! recent payload - even if they subscribed after it fired. The crate is
//! designed as a building block for in-process eventing (UI state fan-out,
//! sensor readings, cache invalidation signals).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!  │  producer #1 │   │  producer #2 │   │  producer #3 │
//!  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!         │ publish(chan, Call)                 │
//!         ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Reactive (bus instance, internally synchronized)         │
//! │  - observer registry: channel → [Observer] (isrt. order)  │
//! │  - latest calls:      channel → Call (last-write-wins)    │
//! └──────┬──────────────────┬──────────────────┬──────────────┘
//!        │ on_call(&Call)   │                  │
//!        ▼                  ▼                  ▼
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!  │  ObserveFn   │   │  LogWriter   │   │ custom impl  │
//!  │  (closure)   │   │  (feature)   │   │ of Observe   │
//!  └──────────────┘   └──────────────┘   └──────────────┘
//!
//!  subscribe(chan, observer) ──► appended to registry
//!                            └─► latest call replayed inline, once
//! ```
//!
//! ### Lifecycle
//! ```text
//! Reactive::new(Config) ──► subscribe / publish / unsubscribe, any thread
//!
//! per channel:
//!   Unknown ──subscribe──► Active ◄──subscribe/unsubscribe──┐
//!     │                      │                              │
//!     │ publish              │ last observer leaves         │
//!     ▼                      ▼                              │
//!   Quiescent ◄──────── (if ever published; else Unknown) ──┘
//!
//! Quiescent keeps the latest call forever: replay beats reclamation.
//! ```
//!
//! ## Features
//! | Area              | Description                                                        | Key types / traits                |
//! |-------------------|--------------------------------------------------------------------|-----------------------------------|
//! | **Observer API**  | Register callbacks per channel; replay of the latest call.         | [`Observe`], [`ObserveFn`]        |
//! | **Payloads**      | Positional plus named values, JSON-shaped.                         | [`Call`], [`ChannelId`]           |
//! | **Policies**      | Configure delivery behavior on callback failure.                   | [`DeliveryPolicy`]                |
//! | **Errors**        | Typed errors for stale handles and callback failures.              | [`BusError`], [`CallbackError`]   |
//! | **Configuration** | Centralize bus settings.                                           | [`Config`]                        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use memobus::{Call, CallbackError, Config, ObserveFn, Reactive};
//!
//! fn main() -> Result<(), memobus::BusError> {
//!     let bus = Reactive::new(Config::default());
//!
//!     // Publishing with no observers still memoizes the call.
//!     bus.publish("temp", Call::new().with_arg(21.5).with_kwarg("unit", "celsius"))?;
//!
//!     // A late subscriber replays it synchronously, before subscribe returns.
//!     let handle = bus.subscribe(
//!         "temp",
//!         ObserveFn::arc("display", |call: &Call| {
//!             println!("temp = {:?} {:?}", call.arg(0), call.kwarg("unit"));
//!             Ok::<_, CallbackError>(())
//!         }),
//!     )?;
//!
//!     bus.publish("temp", Call::new().with_arg(22.0).with_kwarg("unit", "celsius"))?;
//!     bus.unsubscribe(handle)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//! A [`Reactive`] instance is internally synchronized: operations from
//! multiple threads serialize on one mutex, and callbacks run outside it
//! on a snapshot of the channel's observer list. Re-entrant calls from
//! inside a callback are allowed; see [`Reactive`] for the exact rules.
//!
//! There is deliberately no global bus: construct one, own it, share it
//! via `Arc` where needed.

mod calls;
mod core;
mod error;
mod observers;
mod policies;

// ---- Public re-exports ----

pub use calls::{Call, ChannelId};
pub use crate::core::{Config, Reactive};
pub use error::{BusError, CallbackError};
pub use observers::{Observe, ObserveFn, ObserverHandle, ObserverRef};
pub use policies::DeliveryPolicy;

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
