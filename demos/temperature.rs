//! # Example: temperature
//!
//! Demonstrates the core bus semantics end to end.
//!
//! Shows how to:
//! - Publish before anyone listens (the call is memoized).
//! - Subscribe late and receive the replay synchronously.
//! - Fan out to several observers in subscription order.
//! - Unsubscribe with the handle returned by `subscribe`.
//!
//! ## Flow
//! ```text
//! publish("temp", 21.5)          ──► latest call recorded, nobody notified
//! subscribe A                    ──► A replays 21.5
//! subscribe B                    ──► B replays 21.5
//! publish("temp", 22.0)          ──► A, then B
//! unsubscribe A
//! publish("temp", 23.0)          ──► B only
//! unsubscribe B                  ──► channel quiescent, 23.0 retained
//! subscribe C                    ──► C replays 23.0
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example temperature
//! ```

use memobus::{BusError, Call, CallbackError, ObserveFn, ObserverRef, Reactive};

fn display(name: &'static str) -> ObserverRef {
    ObserveFn::arc(name, move |call: &Call| {
        println!("[{name}] temp = {:?}", call.arg(0));
        Ok::<_, CallbackError>(())
    })
}

fn main() -> Result<(), BusError> {
    let bus = Reactive::default();

    // Nobody is listening yet; the reading is memoized all the same.
    bus.publish("temp", Call::new().with_arg(21.5))?;

    let a = bus.subscribe("temp", display("a"))?; // prints 21.5 immediately
    let b = bus.subscribe("temp", display("b"))?; // prints 21.5 immediately

    bus.publish("temp", Call::new().with_arg(22.0))?; // a, then b

    bus.unsubscribe(a)?;
    bus.publish("temp", Call::new().with_arg(23.0))?; // b only

    bus.unsubscribe(b)?;
    println!(
        "observers left: {}, latest retained: {:?}",
        bus.observer_count("temp"),
        bus.latest("temp").and_then(|c| c.arg(0).cloned()),
    );

    let _c = bus.subscribe("temp", display("c"))?; // prints 23.0 immediately
    Ok(())
}
