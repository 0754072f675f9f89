//! Sync Poller
//!
//! Re-fetches the remote feed on a fixed interval and commits it when the
//! change token moved. Failures are soft: logged, never surfaced, and the
//! previous store state is kept.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::error::ContentError;
use crate::runtime;
use crate::source::{ContentSource, Origin};
use crate::store::{CommitOutcome, ContentStore};

/// Result of one poll
#[derive(Debug, Clone)]
pub enum PollOutcome {
    /// Another poll was still in flight
    Skipped,
    /// Remote token matches the one already committed
    Unchanged,
    /// New data committed; subscribers were notified
    Updated { revision: u64 },
    /// A newer commit landed while this poll was in flight
    Stale,
    /// Remote fetch failed; state untouched
    Failed(ContentError),
}

type Subscriber = Box<dyn Fn(&ContentStore)>;

/// Periodic remote re-synchronization for one store
pub struct SyncPoller {
    store: ContentStore,
    remote: Rc<dyn ContentSource>,
    interval: Duration,
    in_flight: Cell<bool>,
    stopped: Cell<bool>,
    subscribers: RefCell<Vec<Subscriber>>,
}

/// Clears the in-flight flag even if the poll future is dropped midway
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl SyncPoller {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

    pub fn new(store: ContentStore, remote: Rc<dyn ContentSource>) -> Self {
        Self {
            store,
            remote,
            interval: Self::DEFAULT_INTERVAL,
            in_flight: Cell::new(false),
            stopped: Cell::new(false),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Called after every applied commit, e.g. to re-render page 1
    pub fn subscribe(&self, subscriber: impl Fn(&ContentStore) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn is_polling(&self) -> bool {
        self.in_flight.get()
    }

    /// One remote check
    pub async fn poll(&self) -> PollOutcome {
        if self.in_flight.get() {
            tracing::debug!(source = self.remote.name(), "poll already in flight, skipping");
            return PollOutcome::Skipped;
        }
        self.in_flight.set(true);
        let _guard = InFlight(&self.in_flight);

        let generation = self.store.begin_request();
        let fetched = match self.remote.fetch().await {
            Ok(fetched) => fetched,
            Err(err) => {
                tracing::warn!(source = self.remote.name(), error = %err, "sync check failed");
                return PollOutcome::Failed(err);
            }
        };

        let previous = self.store.change_token();
        if previous.is_some() && previous == fetched.change_token {
            tracing::debug!(source = self.remote.name(), token = ?previous, "feed unchanged");
            return PollOutcome::Unchanged;
        }

        match self.store.commit(generation, fetched, Origin::Primary) {
            CommitOutcome::Applied { revision } => {
                tracing::info!(source = self.remote.name(), revision, items = self.store.len(), "new feed data, refreshing");
                for subscriber in self.subscribers.borrow().iter() {
                    subscriber(&self.store);
                }
                PollOutcome::Updated { revision }
            }
            CommitOutcome::Discarded => PollOutcome::Stale,
        }
    }

    /// Poll immediately, then every `interval` until `stop()`
    pub async fn run(&self) {
        self.stopped.set(false);
        tracing::info!(source = self.remote.name(), interval_secs = self.interval.as_secs(), "sync poller started");
        while !self.stopped.get() {
            self.poll().await;
            runtime::sleep(self.interval).await;
        }
        tracing::info!(source = self.remote.name(), "sync poller stopped");
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }
}
