//! View-state controller: the fetch-coordination lifecycle.
//!
//! A `refresh` pairs the current-weather and forecast requests, waits for
//! both to settle, and replaces the view state wholesale. Overlapping
//! refreshes are permitted; each takes a monotonically increasing ticket and
//! a completion whose ticket is no longer the newest is discarded, so the
//! latest issued request always wins.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::backend::{FetchError, WeatherBackend};
use crate::model::{Query, ViewState};

/// Owns the view state and coordinates the paired backend fetches.
#[derive(Debug)]
pub struct ViewController {
    backend: Arc<dyn WeatherBackend>,
    inner: Mutex<Inner>,
    seq: AtomicU64,
}

#[derive(Debug)]
struct Inner {
    query: Query,
    view: ViewState,
}

impl ViewController {
    /// Create a controller in `Loading` with the given default query.
    ///
    /// The caller is expected to follow up with exactly one [`Self::init`].
    pub fn new(backend: Arc<dyn WeatherBackend>, default_query: Query) -> Self {
        Self {
            backend,
            inner: Mutex::new(Inner {
                query: default_query,
                view: ViewState::Loading,
            }),
            seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current view state.
    pub fn view(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// The persistent query driving the next fetch.
    pub fn query(&self) -> Query {
        self.lock().query.clone()
    }

    /// Load the default query. Called once on startup.
    pub async fn init(&self) {
        let query = self.query();
        self.refresh(query).await;
    }

    /// Re-fetch both endpoints for `query`, replacing the view wholesale.
    ///
    /// The prior view is discarded the instant `Loading` is set; there is no
    /// queue of pending refreshes.
    pub async fn refresh(&self, query: Query) {
        // The ticket is taken under the same lock as the Loading transition;
        // otherwise a refresh preempted between the increment and the lock
        // could overwrite a newer refresh's delivered state.
        let ticket = {
            let mut inner = self.lock();
            let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
            inner.query = query.clone();
            inner.view = ViewState::Loading;
            ticket
        };
        debug!(ticket, city = %query.city, unit = %query.unit, "refresh started");

        // Both requests run in parallel and both must settle. Either failing
        // yields Error; one success and one failure never produces a partial
        // Ready.
        let (weather, forecast) =
            tokio::join!(self.backend.current(&query), self.backend.forecast(&query));

        let next = match (weather, forecast) {
            (Ok(weather), Ok(forecast)) => ViewState::Ready { weather, forecast },
            (Err(err), _) => error_state(err),
            (Ok(_), Err(err)) => error_state(err),
        };

        let mut inner = self.lock();
        if self.seq.load(Ordering::SeqCst) == ticket {
            inner.view = next;
        } else {
            debug!(ticket, "discarding result of superseded refresh");
        }
    }

    /// Search submission. Empty or whitespace-only input is a no-op, not an
    /// error: no fetch is issued and neither view nor query changes.
    pub async fn on_search_submit(&self, raw_city: &str) {
        let city = raw_city.trim();
        if city.is_empty() {
            return;
        }
        let unit = self.lock().query.unit;
        self.refresh(Query::new(city, unit)).await;
    }

    /// Flip the unit and re-fetch the current city with it.
    ///
    /// The flipped unit is recorded before the network settles, so `query()`
    /// reflects it immediately.
    pub async fn on_toggle_unit(&self) {
        let query = {
            let mut inner = self.lock();
            inner.query.unit = inner.query.unit.toggle();
            inner.query.clone()
        };
        if !query.city.trim().is_empty() {
            self.refresh(query).await;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn error_state(err: FetchError) -> ViewState {
    debug!(error = %err, "paired fetch failed");
    ViewState::Error(err.to_string())
}
