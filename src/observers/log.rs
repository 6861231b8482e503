//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints every call it receives to stdout in a
//! human-readable format.
//!
//! ## Output format
//! ```text
//! [call] args=[21.5] kwargs={"unit": String("celsius")}
//! ```
//!
//! ## Example
//! ```no_run
//! use memobus::{Call, LogWriter, Reactive};
//!
//! let bus = Reactive::default();
//! let _h = bus.subscribe("temp", std::sync::Arc::new(LogWriter))?;
//! bus.publish("temp", Call::new().with_arg(21.5))?;
//! # Ok::<(), memobus::BusError>(())
//! ```

use crate::calls::Call;
use crate::error::CallbackError;
use crate::observers::observe::Observe;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints the positional and named
/// values of each call for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Observe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl Observe for LogWriter {
    fn on_call(&self, call: &Call) -> Result<(), CallbackError> {
        println!("[call] args={:?} kwargs={:?}", call.args(), call.kwargs());
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
