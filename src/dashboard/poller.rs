use super::state::{DashboardState, DashboardView};
use crate::api::StatusSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

/// Polls a [`StatusSource`] on a fixed interval and keeps the latest view state.
///
/// The first fetch is issued immediately, then one per interval. Fetches are
/// spawned and never awaited by the ticker, so a slow response does not delay
/// the next request. After [`StatusDashboard::shutdown`] no request is issued
/// and results still in flight are dropped.
pub struct StatusDashboard {
    state_tx: Arc<watch::Sender<DashboardState>>,
    state_rx: watch::Receiver<DashboardState>,
    torn_down: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl StatusDashboard {
    /// Start polling. Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn StatusSource>, poll_interval: Duration) -> Self {
        let (state_tx, state_rx) = watch::channel(DashboardState::default());
        let state_tx = Arc::new(state_tx);
        let torn_down = Arc::new(AtomicBool::new(false));

        let ticker = tokio::spawn(run_ticker(
            source,
            poll_interval,
            Arc::clone(&state_tx),
            Arc::clone(&torn_down),
        ));

        info!("Status polling started, interval={:?}", poll_interval);

        Self {
            state_tx,
            state_rx,
            torn_down,
            ticker: Some(ticker),
        }
    }

    /// Current view, evaluated from the latest state
    pub fn view(&self) -> DashboardView {
        self.state_rx.borrow().view()
    }

    pub fn state(&self) -> DashboardState {
        self.state_rx.borrow().clone()
    }

    /// Receiver notified whenever the state changes
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Cancel the polling timer. Calling it again is a no-op.
    pub fn shutdown(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };

        // Set under the state lock so no fetch can apply after this returns
        let torn_down = &self.torn_down;
        self.state_tx.send_if_modified(|_| {
            torn_down.store(true, Ordering::Release);
            false
        });
        ticker.abort();

        info!("Status polling stopped");
    }
}

impl Drop for StatusDashboard {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_ticker(
    source: Arc<dyn StatusSource>,
    poll_interval: Duration,
    state_tx: Arc<watch::Sender<DashboardState>>,
    torn_down: Arc<AtomicBool>,
) {
    let mut interval = tokio::time::interval(poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        if torn_down.load(Ordering::Acquire) {
            break;
        }

        tokio::spawn(fetch_and_apply(
            Arc::clone(&source),
            Arc::clone(&state_tx),
            Arc::clone(&torn_down),
        ));
    }
}

async fn fetch_and_apply(
    source: Arc<dyn StatusSource>,
    state_tx: Arc<watch::Sender<DashboardState>>,
    torn_down: Arc<AtomicBool>,
) {
    // Decided under the state lock, like shutdown(): a fetch that gets past
    // this point is in flight, anything later is never issued
    let mut issue = false;
    state_tx.send_if_modified(|_| {
        issue = !torn_down.load(Ordering::Acquire);
        false
    });
    if !issue {
        debug!("Dashboard torn down, skipping status fetch");
        return;
    }

    let result = source.fetch_status().await;

    match &result {
        Ok(snapshot) => debug!(
            "Fetched status: price={} charging={:?} capacity={}%",
            snapshot.current_price, snapshot.charging, snapshot.battery_capacity_percent
        ),
        Err(e) => error!("Error fetching status: {}", e),
    }

    state_tx.send_if_modified(|state| {
        if torn_down.load(Ordering::Acquire) {
            debug!("Dashboard torn down, dropping late status result");
            return false;
        }
        state.apply(result)
    });
}
