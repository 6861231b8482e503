//! # Example: best_effort
//!
//! Demonstrates the two delivery policies side by side.
//!
//! Shows how to:
//! - Configure the bus with [`DeliveryPolicy::BestEffort`].
//! - Keep delivering past a failing observer (failures go to `tracing`).
//! - Contrast with the default abort-on-first-failure behavior.
//!
//! ## Run
//! Requires the `logging` feature for the built-in [`LogWriter`].
//! ```bash
//! cargo run --example best_effort --features logging
//! ```

use std::sync::Arc;

use memobus::{
    Call, CallbackError, Config, DeliveryPolicy, LogWriter, ObserveFn, Reactive,
};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let flaky = || {
        ObserveFn::arc("flaky", |_call: &Call| {
            Err::<(), _>(CallbackError::new("simulated failure"))
        })
    };

    // Default policy: the failing observer aborts delivery, LogWriter
    // (subscribed after it) never sees the call.
    let strict = Reactive::default();
    strict.subscribe("metrics", flaky()).unwrap();
    strict.subscribe("metrics", Arc::new(LogWriter)).unwrap();
    let err = strict
        .publish("metrics", Call::new().with_arg(1))
        .unwrap_err();
    println!("strict bus: {}", err.as_message());

    // Best effort: every observer is invoked; the failure is logged at
    // warn and publish succeeds.
    let lenient = Reactive::new(Config {
        delivery: DeliveryPolicy::BestEffort,
    });
    lenient.subscribe("metrics", flaky()).unwrap();
    lenient.subscribe("metrics", Arc::new(LogWriter)).unwrap();
    lenient
        .publish("metrics", Call::new().with_arg(1))
        .unwrap();
    println!("lenient bus: delivered past the failure");
}
