//! # Reactive bus: observer registry with last-value replay.
//!
//! [`Reactive`] owns the whole bus state: which observers are registered
//! on which channel, and the latest call published on each channel.
//!
//! ## Architecture
//! ```text
//! Producers (many):                  Observers (per channel, ordered):
//!   sensor ──┐
//!   ui     ──┼── publish(chan, Call) ──► Reactive ──► obs #1.on_call()
//!   timer  ──┘            │                 │     ──► obs #2.on_call()
//!                         │                 │          (insertion order)
//!                         ▼                 ▼
//!                  latest-call slot    subscribe(chan, obs)
//!                  (one per channel)   └─► replays latest call, if any
//! ```
//!
//! ## Rules
//! - **Synchronous delivery**: callbacks run inline on the caller's
//!   thread; `publish` returns after the last observer has returned.
//! - **Replay-on-subscribe**: a subscriber on a channel that was ever
//!   published to receives the latest call exactly once, before
//!   `subscribe` returns.
//! - **Insertion order**: per channel, observers are notified in the
//!   order they subscribed; duplicate registrations are all invoked.
//! - **Latest-call retention**: a channel published to once keeps its
//!   latest call for the lifetime of the bus, even with zero observers.
//!   This is a deliberate trade-off: replay correctness over memory
//!   reclamation.
//!
//! ## Concurrency
//! All three operations serialize on a single internal mutex. Observer
//! callbacks run **outside** the lock, on a snapshot of the channel's
//! observer list taken when the operation began. Consequences:
//! - the bus is safe to share across threads (`Arc<Reactive>`);
//! - callbacks may re-enter the bus (subscribe/unsubscribe/publish, on
//!   any channel including their own) without deadlocking;
//! - a publish notifies exactly the observers that existed when it began;
//!   an observer added from inside a callback sees only later publishes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::calls::{Call, ChannelId};
use crate::core::config::Config;
use crate::error::BusError;
use crate::observers::{ObserverHandle, ObserverRef};
use crate::policies::DeliveryPolicy;

/// One registration: a bus-unique id plus the observer it belongs to.
struct Entry {
    id: u64,
    observer: ObserverRef,
}

/// Mutable bus state, guarded by the outer mutex.
#[derive(Default)]
struct State {
    /// Channel → registered observers, insertion order. A key is present
    /// only while the channel has at least one observer.
    observers: HashMap<ChannelId, Vec<Entry>>,
    /// Channel → most recent published call. A key, once present, is
    /// never removed.
    latest: HashMap<ChannelId, Call>,
}

/// Channel-addressed observer registry with last-value memoization.
///
/// Construct one explicitly and pass it (or an `Arc` of it) to whoever
/// needs to publish or subscribe; the bus is deliberately **not** a
/// process-wide singleton, so lifetimes and test isolation stay explicit.
///
/// ## Example
/// ```rust
/// use memobus::{Call, CallbackError, ObserveFn, Reactive};
///
/// let bus = Reactive::default();
///
/// // A publish with no observers still records the latest call...
/// bus.publish("temp", Call::new().with_arg(21.5))?;
///
/// // ...which a late subscriber receives immediately, during subscribe.
/// let handle = bus.subscribe(
///     "temp",
///     ObserveFn::arc("probe", |call: &Call| {
///         assert_eq!(call.arg(0), Some(&serde_json::json!(21.5)));
///         Ok::<_, CallbackError>(())
///     }),
/// )?;
///
/// bus.unsubscribe(handle)?;
/// # Ok::<(), memobus::BusError>(())
/// ```
pub struct Reactive {
    state: Mutex<State>,
    next_id: AtomicU64,
    config: Config,
}

impl Default for Reactive {
    /// Equivalent to `Reactive::new(Config::default())`.
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Reactive {
    /// Creates an empty bus with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            state: Mutex::new(State::default()),
            next_id: AtomicU64::new(0),
            config,
        }
    }

    /// Registers `observer` on `channel` and returns the handle that
    /// [`unsubscribe`](Self::unsubscribe) consumes.
    ///
    /// The registration is appended to the channel's list (created on
    /// first subscribe), after any existing registrations - including
    /// earlier registrations of the same observer, which are kept and
    /// invoked separately.
    ///
    /// If the channel has a stored latest call, the observer receives it
    /// here: synchronously, exactly once, before `subscribe` returns. A
    /// channel that was never published to triggers no invocation.
    ///
    /// # Errors
    /// Only the replay can fail: if the callback returns an error while
    /// handling the latest call, the registration is rolled back and the
    /// failure is returned as [`BusError::Callback`]. The bus is then in
    /// the same state as before the call.
    pub fn subscribe(
        &self,
        channel: impl Into<ChannelId>,
        observer: ObserverRef,
    ) -> Result<ObserverHandle, BusError> {
        let channel = channel.into();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let replay = {
            let mut state = self.state.lock();
            state.observers.entry(channel.clone()).or_default().push(Entry {
                id,
                observer: Arc::clone(&observer),
            });
            state.latest.get(&channel).cloned()
        };

        let handle = ObserverHandle::new(channel, id);
        trace!(
            channel = %handle.channel(),
            id,
            observer = observer.name(),
            replay = replay.is_some(),
            "observer subscribed"
        );

        if let Some(call) = replay {
            if let Err(source) = observer.on_call(&call) {
                let channel = handle.channel().clone();
                let name = observer.name().to_string();
                // Roll the registration back so the caller is not left
                // holding a live observer it has no handle for.
                let _ = self.unsubscribe(handle);
                return Err(BusError::Callback {
                    channel,
                    observer: name,
                    source,
                });
            }
        }

        Ok(handle)
    }

    /// Removes the registration named by `handle`.
    ///
    /// A handle whose channel is not currently tracked (its last observer
    /// already left) is a no-op, not an error.
    ///
    /// When the removal empties the channel's observer list, the channel
    /// is dropped from the observer registry; its latest call, if any,
    /// stays for replay to future subscribers.
    ///
    /// # Errors
    /// [`BusError::LookupMiss`] when the channel is tracked but holds no
    /// registration with the handle's id - a double-unsubscribe or a
    /// handle from another bus.
    pub fn unsubscribe(&self, handle: ObserverHandle) -> Result<(), BusError> {
        let mut state = self.state.lock();

        let entries = match state.observers.get_mut(handle.channel()) {
            Some(entries) => entries,
            None => return Ok(()),
        };
        let pos = match entries.iter().position(|e| e.id == handle.id()) {
            Some(pos) => pos,
            None => {
                return Err(BusError::LookupMiss {
                    channel: handle.channel().clone(),
                    id: handle.id(),
                });
            }
        };

        entries.remove(pos);
        let emptied = entries.is_empty();
        if emptied {
            state.observers.remove(handle.channel());
        }

        trace!(
            channel = %handle.channel(),
            id = handle.id(),
            channel_pruned = emptied,
            "observer unsubscribed"
        );
        Ok(())
    }

    /// Records `call` as the channel's latest call and delivers it to
    /// every observer currently registered on the channel.
    ///
    /// The latest-call slot is overwritten unconditionally, **before**
    /// delivery and even when the channel has zero observers - a later
    /// subscriber will replay it. Observers are invoked synchronously, in
    /// insertion order, each receiving the same payload; `publish`
    /// returns once the last one has.
    ///
    /// # Errors
    /// Under [`DeliveryPolicy::Abort`] the first callback failure is
    /// returned as [`BusError::Callback`] and the remaining observers are
    /// skipped for this call (the latest-call slot keeps the new value).
    /// Under [`DeliveryPolicy::BestEffort`] failures are logged at `warn`
    /// and `publish` returns `Ok`.
    pub fn publish(&self, channel: impl Into<ChannelId>, call: Call) -> Result<(), BusError> {
        let channel = channel.into();

        let snapshot: Vec<ObserverRef> = {
            let mut state = self.state.lock();
            state.latest.insert(channel.clone(), call.clone());
            match state.observers.get(&channel) {
                Some(entries) => entries.iter().map(|e| Arc::clone(&e.observer)).collect(),
                None => Vec::new(),
            }
        };

        trace!(channel = %channel, observers = snapshot.len(), "publishing call");

        match self.config.delivery {
            DeliveryPolicy::Abort => {
                for observer in &snapshot {
                    if let Err(source) = observer.on_call(&call) {
                        return Err(BusError::Callback {
                            channel,
                            observer: observer.name().to_string(),
                            source,
                        });
                    }
                }
            }
            DeliveryPolicy::BestEffort => {
                for observer in &snapshot {
                    if let Err(source) = observer.on_call(&call) {
                        warn!(
                            channel = %channel,
                            observer = observer.name(),
                            error = %source,
                            "observer callback failed; continuing delivery"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Number of registrations currently on `channel` (0 when untracked).
    pub fn observer_count(&self, channel: impl Into<ChannelId>) -> usize {
        let channel = channel.into();
        self.state
            .lock()
            .observers
            .get(&channel)
            .map_or(0, Vec::len)
    }

    /// `true` when `channel` has at least one registration.
    pub fn has_observers(&self, channel: impl Into<ChannelId>) -> bool {
        self.observer_count(channel) > 0
    }

    /// The channel's latest call, if it was ever published to.
    ///
    /// Returns a clone; the stored value only changes on the next publish.
    pub fn latest(&self, channel: impl Into<ChannelId>) -> Option<Call> {
        let channel = channel.into();
        self.state.lock().latest.get(&channel).cloned()
    }

    /// Channels that currently have at least one observer.
    ///
    /// Order is unspecified. Channels that only ever saw publishes (no
    /// live observers) are not listed; probe those with
    /// [`latest`](Self::latest).
    pub fn channels(&self) -> Vec<ChannelId> {
        self.state.lock().observers.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CallbackError;
    use crate::observers::ObserveFn;
    use serde_json::json;

    /// Helper: named observer that records every call it receives.
    fn recording(name: &'static str) -> (Arc<Mutex<Vec<Call>>>, ObserverRef) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let observer: ObserverRef = ObserveFn::arc(name, move |call: &Call| {
            sink.lock().push(call.clone());
            Ok::<_, CallbackError>(())
        });
        (log, observer)
    }

    /// Helper: named observer that always fails.
    fn failing(name: &'static str) -> ObserverRef {
        ObserveFn::arc(name, |_call: &Call| {
            Err::<(), _>(CallbackError::new("boom"))
        })
    }

    #[test]
    fn test_subscribe_on_fresh_channel_does_not_invoke() {
        let bus = Reactive::default();
        let (log, obs) = recording("a");

        bus.subscribe("temp", obs).unwrap();
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_late_subscriber_replays_latest_call_once() {
        let bus = Reactive::default();
        bus.publish("temp", Call::new().with_arg(1).with_arg(2).with_kwarg("x", 3))
            .unwrap();

        let (log, obs) = recording("late");
        bus.subscribe("temp", obs).unwrap();

        let seen = log.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].args(), &[json!(1), json!(2)]);
        assert_eq!(seen[0].kwarg("x"), Some(&json!(3)));
    }

    #[test]
    fn test_publish_reaches_all_observers_in_subscription_order() {
        let bus = Reactive::default();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&order);
            bus.subscribe(
                "temp",
                ObserveFn::arc(tag, move |_call: &Call| {
                    seen.lock().push(tag);
                    Ok::<_, CallbackError>(())
                }),
            )
            .unwrap();
        }

        bus.publish("temp", Call::new().with_arg(22.0)).unwrap();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_registration_is_invoked_per_registration() {
        let bus = Reactive::default();
        let (log, obs) = recording("dup");

        bus.subscribe("temp", Arc::clone(&obs)).unwrap();
        bus.subscribe("temp", obs).unwrap();
        bus.publish("temp", Call::new().with_arg(1)).unwrap();

        assert_eq!(log.lock().len(), 2);
        assert_eq!(bus.observer_count("temp"), 2);
    }

    #[test]
    fn test_unsubscribe_prunes_channel_but_keeps_latest() {
        let bus = Reactive::default();
        bus.publish("temp", Call::new().with_arg(23.0)).unwrap();

        let (_, obs) = recording("only");
        let handle = bus.subscribe("temp", obs).unwrap();
        bus.unsubscribe(handle).unwrap();

        assert!(!bus.has_observers("temp"));
        assert!(bus.channels().is_empty());

        // Latest call survived the pruning: a new subscriber replays it.
        let (log, obs) = recording("next");
        bus.subscribe("temp", obs).unwrap();
        assert_eq!(log.lock()[0].arg(0), Some(&json!(23.0)));
    }

    #[test]
    fn test_unsubscribe_untracked_channel_is_noop() {
        let bus = Reactive::default();
        let (_, obs) = recording("only");
        let handle = bus.subscribe("temp", obs).unwrap();

        bus.unsubscribe(handle.clone()).unwrap();
        // Channel is gone now, so the stale handle is a silent no-op.
        assert!(bus.unsubscribe(handle).is_ok());
    }

    #[test]
    fn test_stale_handle_on_live_channel_is_lookup_miss() {
        let bus = Reactive::default();
        let (_, a) = recording("a");
        let (_, b) = recording("b");
        let ha = bus.subscribe("temp", a).unwrap();
        let _hb = bus.subscribe("temp", b).unwrap();

        bus.unsubscribe(ha.clone()).unwrap();
        let err = bus.unsubscribe(ha).unwrap_err();
        assert!(matches!(err, BusError::LookupMiss { .. }));
        assert_eq!(err.as_label(), "bus_lookup_miss");
    }

    #[test]
    fn test_publish_overwrites_latest_call() {
        let bus = Reactive::default();
        let call = Call::new().with_arg(7);

        bus.publish("temp", call.clone()).unwrap();
        bus.publish("temp", call.clone()).unwrap();

        assert_eq!(bus.latest("temp"), Some(call));
        bus.publish("temp", Call::new().with_arg(8)).unwrap();
        assert_eq!(bus.latest("temp").unwrap().arg(0), Some(&json!(8)));
    }

    #[test]
    fn test_publish_without_observers_records_latest() {
        let bus = Reactive::default();
        bus.publish("idle", Call::new().with_arg("v")).unwrap();

        assert!(!bus.has_observers("idle"));
        assert!(bus.latest("idle").is_some());
    }

    #[test]
    fn test_abort_policy_skips_remaining_observers() {
        let bus = Reactive::default();
        let (log, ok) = recording("after");

        bus.subscribe("temp", failing("bad")).unwrap();
        bus.subscribe("temp", ok).unwrap();

        let err = bus.publish("temp", Call::new().with_arg(1)).unwrap_err();
        match err {
            BusError::Callback { observer, .. } => assert_eq!(observer, "bad"),
            other => panic!("unexpected error: {other:?}"),
        }
        // Delivery aborted before the second observer.
        assert!(log.lock().is_empty());
        // The latest call was still recorded.
        assert!(bus.latest("temp").is_some());
    }

    #[test]
    fn test_best_effort_policy_reaches_all_observers() {
        let bus = Reactive::new(Config {
            delivery: DeliveryPolicy::BestEffort,
        });
        let (log, ok) = recording("after");

        bus.subscribe("temp", failing("bad")).unwrap();
        bus.subscribe("temp", ok).unwrap();

        bus.publish("temp", Call::new().with_arg(1)).unwrap();
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_failed_replay_rolls_back_registration() {
        let bus = Reactive::default();
        bus.publish("temp", Call::new().with_arg(1)).unwrap();

        let err = bus.subscribe("temp", failing("bad")).unwrap_err();
        assert_eq!(err.as_label(), "bus_callback_failed");
        assert_eq!(bus.observer_count("temp"), 0);
    }

    #[test]
    fn test_subscribe_during_publish_misses_that_publish() {
        let bus = Arc::new(Reactive::default());
        let (inner_log, inner) = recording("inner");

        let reentrant = {
            let bus = Arc::clone(&bus);
            let inner = Arc::clone(&inner);
            ObserveFn::arc("outer", move |_call: &Call| {
                // Replay fires here (a latest call exists), which is the
                // inner observer's single delivery for this test step.
                bus.subscribe("temp", Arc::clone(&inner))
                    .map(|_| ())
                    .map_err(|e| CallbackError::new(e.as_message()))
            })
        };
        bus.subscribe("temp", reentrant).unwrap();

        bus.publish("temp", Call::new().with_arg(1)).unwrap();
        // The snapshot taken at publish time did not include `inner`; its
        // only invocation so far is the replay during the re-entrant
        // subscribe.
        assert_eq!(inner_log.lock().len(), 1);

        // It was registered, though, so the next publish reaches it (and
        // each re-entrant subscribe adds one more registration).
        let before = inner_log.lock().len();
        let registered = bus.observer_count("temp");
        bus.publish("temp", Call::new().with_arg(2)).unwrap();
        assert!(inner_log.lock().len() > before);
        assert!(bus.observer_count("temp") > registered);
    }

    /// The end-to-end scenario: late replay, ordered fan-out, selective
    /// unsubscribe, retention after the last observer leaves.
    #[test]
    fn test_temperature_scenario() {
        let bus = Reactive::default();

        let (log_a, a) = recording("a");
        let ha = bus.subscribe("temp", a).unwrap();

        bus.publish("temp", Call::new().with_arg(21.5)).unwrap();
        assert_eq!(log_a.lock().last().unwrap().arg(0), Some(&json!(21.5)));

        let (log_b, b) = recording("b");
        let hb = bus.subscribe("temp", b).unwrap();
        assert_eq!(log_b.lock().last().unwrap().arg(0), Some(&json!(21.5)));

        bus.publish("temp", Call::new().with_arg(22.0)).unwrap();
        assert_eq!(log_a.lock().len(), 2);
        assert_eq!(log_b.lock().len(), 2);

        bus.unsubscribe(ha).unwrap();
        bus.publish("temp", Call::new().with_arg(23.0)).unwrap();
        assert_eq!(log_a.lock().len(), 2);
        assert_eq!(log_b.lock().len(), 3);

        bus.unsubscribe(hb).unwrap();
        assert_eq!(bus.observer_count("temp"), 0);
        assert_eq!(bus.latest("temp").unwrap().arg(0), Some(&json!(23.0)));

        let (log_c, c) = recording("c");
        bus.subscribe("temp", c).unwrap();
        assert_eq!(log_c.lock().len(), 1);
        assert_eq!(log_c.lock()[0].arg(0), Some(&json!(23.0)));
    }

    #[test]
    fn test_channels_lists_only_observed_channels() {
        let bus = Reactive::default();
        bus.publish("quiet", Call::new().with_arg(0)).unwrap();
        let (_, obs) = recording("x");
        bus.subscribe("busy", obs).unwrap();

        assert_eq!(bus.channels(), vec![ChannelId::from("busy")]);
    }

    #[test]
    fn test_bus_is_shareable_across_threads() {
        let bus = Arc::new(Reactive::default());
        let (log, obs) = recording("sink");
        bus.subscribe("temp", obs).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let bus = Arc::clone(&bus);
                std::thread::spawn(move || {
                    bus.publish("temp", Call::new().with_arg(i)).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(log.lock().len(), 4);
        assert!(bus.latest("temp").is_some());
    }
}
