//! Tick scheduler - fires a callback on a fixed interval
//!
//! Two states, stopped and running. Starting fires one tick immediately,
//! then one per interval on the tokio runtime. Start and stop are both
//! idempotent.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Callback run on each tick
pub type TickFn = Arc<dyn Fn() + Send + Sync>;

pub struct TickScheduler {
    runtime: Handle,
    interval: Duration,
    on_tick: TickFn,
    task: Option<JoinHandle<()>>,
}

impl TickScheduler {
    pub fn new(runtime: Handle, interval: Duration, on_tick: TickFn) -> Self {
        Self {
            runtime,
            interval,
            on_tick,
            task: None,
        }
    }

    /// Start ticking, no-op if already running
    ///
    /// The first tick runs on the calling thread before this returns.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        tracing::info!("Tick scheduler starting ({:?} interval)", self.interval);
        (self.on_tick)();

        let on_tick = Arc::clone(&self.on_tick);
        let period = self.interval;
        let first = Instant::now() + period;
        self.task = Some(self.runtime.spawn(async move {
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        }));
    }

    /// Stop ticking, no-op if already stopped
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("Tick scheduler stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
