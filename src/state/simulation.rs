//! Simulated backend events.
//!
//! Nothing here talks to a real data source. The scheduler owns three
//! process-wide tasks with an explicit start/stop lifecycle:
//!
//! - the threat feed, which asks for a random canned notification every
//!   30 s,
//! - the stat jitter, which nudges every stat by -1, 0 or +1 every 10 s,
//! - the welcome toast, sent once shortly after start.
//!
//! Tasks only send [`AppMessage`]s; the event loop applies them.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::app::AppMessage;
use crate::models::{NotificationRequest, StatCard};

/// Shortest period a periodic source may run at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Timings for the simulated sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTimings {
    pub feed_interval: Duration,
    pub jitter_interval: Duration,
    pub welcome_delay: Duration,
}

impl Default for SimulationTimings {
    fn default() -> Self {
        Self {
            feed_interval: Duration::from_millis(30_000),
            jitter_interval: Duration::from_millis(10_000),
            welcome_delay: Duration::from_millis(1_000),
        }
    }
}

impl SimulationTimings {
    /// Raise zero periods to [`MIN_INTERVAL`]; tokio intervals reject a zero period.
    pub fn clamped(self) -> Self {
        Self {
            feed_interval: clamp_period("feed", self.feed_interval),
            jitter_interval: clamp_period("jitter", self.jitter_interval),
            welcome_delay: self.welcome_delay,
        }
    }
}

fn clamp_period(source: &str, period: Duration) -> Duration {
    if period < MIN_INTERVAL {
        tracing::warn!(source, ?period, "Interval too short, using {:?}", MIN_INTERVAL);
        MIN_INTERVAL
    } else {
        period
    }
}

/// The fixed set of notifications the threat feed chooses from.
pub fn canned_threats() -> [NotificationRequest; 3] {
    [
        NotificationRequest::danger(
            "New Threat Detected!",
            "Phishing attempt blocked from secure-banking@fakmail.com",
        ),
        NotificationRequest::warning(
            "Suspicious Email!",
            "Possible spoofed sender detected in your inbox",
        ),
        NotificationRequest::success("Scan Complete", "No threats found in the last 50 emails"),
    ]
}

/// Pick one canned notification uniformly at random.
pub fn random_canned_threat<R: Rng + ?Sized>(rng: &mut R) -> NotificationRequest {
    let threats = canned_threats();
    let index = rng.random_range(0..threats.len());
    threats[index].clone()
}

pub fn welcome_notification() -> NotificationRequest {
    NotificationRequest::success(
        "Welcome to Genjutsu",
        "Your Gmail is being protected. All systems active.",
    )
}

/// Apply a delta to a displayed value, flooring at 0.
///
/// The displayed value is the only stored value; nothing below zero is kept.
pub fn jitter_value(value: u64, delta: i64) -> u64 {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as u64)
    }
}

/// Nudge every stat by a random delta in {-1, 0, +1}.
pub fn jitter_stats<R: Rng + ?Sized>(stats: &mut [StatCard], rng: &mut R) {
    for stat in stats.iter_mut() {
        let delta = rng.random_range(-1..=1);
        stat.set_value(jitter_value(stat.value(), delta));
    }
}

#[derive(Debug)]
pub struct SimulationScheduler {
    timings: SimulationTimings,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    tasks: Vec<JoinHandle<()>>,
}

impl SimulationScheduler {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>, timings: SimulationTimings) -> Self {
        Self {
            timings: timings.clamped(),
            message_tx,
            tasks: Vec::new(),
        }
    }

    /// Start all simulated sources. No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        tracing::info!(
            feed_ms = self.timings.feed_interval.as_millis() as u64,
            jitter_ms = self.timings.jitter_interval.as_millis() as u64,
            "Starting simulated event sources"
        );

        self.tasks.push(spawn_periodic(
            self.message_tx.clone(),
            self.timings.feed_interval,
            || AppMessage::FeedTick,
        ));
        self.tasks.push(spawn_periodic(
            self.message_tx.clone(),
            self.timings.jitter_interval,
            || AppMessage::JitterTick,
        ));
        self.tasks.push(spawn_delayed(
            self.message_tx.clone(),
            self.timings.welcome_delay,
            AppMessage::Notify(welcome_notification()),
        ));
    }

    /// Stop all simulated sources.
    pub fn stop(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        tracing::info!("Stopping simulated event sources");
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }
}

impl Drop for SimulationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Send a message every `period`, starting one period from now.
fn spawn_periodic<F>(
    tx: mpsc::UnboundedSender<AppMessage>,
    period: Duration,
    make: F,
) -> JoinHandle<()>
where
    F: Fn() -> AppMessage + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tx.send(make()).is_err() {
                // Receiver gone: the app has shut down
                break;
            }
        }
    })
}

/// Send a single message after `delay`.
pub fn spawn_delayed(
    tx: mpsc::UnboundedSender<AppMessage>,
    delay: Duration,
    message: AppMessage,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(message);
    })
}
