//! # Function-backed observer (`ObserveFn`).
//!
//! [`ObserveFn`] wraps a closure `F: Fn(&Call) -> Result<(), CallbackError>`
//! together with a name, so ad-hoc observers can be registered without
//! declaring a struct.
//!
//! ## Example
//! ```rust
//! use memobus::{Call, CallbackError, Observe, ObserveFn, ObserverRef};
//!
//! let probe: ObserverRef = ObserveFn::arc("probe", |call: &Call| {
//!     let _ = call.arg(0);
//!     Ok::<_, CallbackError>(())
//! });
//!
//! assert_eq!(probe.name(), "probe");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::calls::Call;
use crate::error::CallbackError;
use crate::observers::observe::Observe;

/// Function-backed observer implementation.
///
/// Holds the closure by value; cloning is not supported - wrap in an
/// [`ObserverRef`](crate::ObserverRef) (see [`ObserveFn::arc`]) to share.
pub struct ObserveFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ObserveFn<F> {
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`ObserveFn::arc`] when you immediately need an
    /// [`ObserverRef`](crate::ObserverRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the observer and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Observe for ObserveFn<F>
where
    F: Fn(&Call) -> Result<(), CallbackError> + Send + Sync + 'static,
{
    fn on_call(&self, call: &Call) -> Result<(), CallbackError> {
        (self.f)(call)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_invoked_with_call() {
        let obs = ObserveFn::new("first-arg", |call: &Call| {
            match call.arg(0) {
                Some(_) => Ok(()),
                None => Err(CallbackError::new("empty call")),
            }
        });

        assert!(obs.on_call(&Call::new().with_arg(1)).is_ok());
        assert!(obs.on_call(&Call::new()).is_err());
        assert_eq!(obs.name(), "first-arg");
    }
}
