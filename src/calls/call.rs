//! # Call payloads.
//!
//! A [`Call`] is the unit of data that travels over the bus: an ordered
//! sequence of positional values plus a mapping of named values. The same
//! type doubles as the **latest call** the bus memoizes per channel for
//! replay to late subscribers.
//!
//! Values are [`serde_json::Value`], so a call can carry numbers, strings,
//! booleans, arrays or objects without the bus caring about their shape.
//!
//! ## Example
//! ```rust
//! use memobus::Call;
//!
//! let call = Call::new()
//!     .with_arg(1)
//!     .with_arg(2)
//!     .with_kwarg("x", 3);
//!
//! assert_eq!(call.args().len(), 2);
//! assert_eq!(call.kwarg("x"), Some(&serde_json::json!(3)));
//! assert_eq!(call.kwarg("y"), None);
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

/// Variable-shaped payload: positional values plus named values.
///
/// Built incrementally with [`Call::with_arg`] / [`Call::with_kwarg`].
/// Positional order is preserved; named values are keyed by name (later
/// [`with_kwarg`](Call::with_kwarg) calls with the same name overwrite).
///
/// Cloning is a deep copy of the contained values; the bus clones a call
/// once per publish (into the latest-call slot) and hands observers a
/// shared reference during delivery.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Call {
    args: Vec<Value>,
    kwargs: BTreeMap<String, Value>,
}

impl Call {
    /// Creates an empty call (no positional, no named values).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional value.
    #[must_use]
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Sets a named value, overwriting any previous value under `name`.
    #[must_use]
    pub fn with_kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }

    /// Positional values, in the order they were added.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Named values.
    pub fn kwargs(&self) -> &BTreeMap<String, Value> {
        &self.kwargs
    }

    /// Returns the positional value at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Returns the named value under `name`, if present.
    pub fn kwarg(&self, name: &str) -> Option<&Value> {
        self.kwargs.get(name)
    }

    /// `true` when the call carries no values at all.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }
}
