//! One-shot counter animation for dashboard stat cards.
//!
//! Each stat card is observed until it is first reported visible. At that
//! point it is armed: its displayed number becomes the target, the display
//! resets to 0 and then climbs by `target / (duration / tick)` per tick,
//! rounding down, until the final tick snaps to the target exactly. Armed
//! counters are never observed again.

use std::collections::HashMap;

use crate::models::{format_grouped, parse_grouped_or_zero, StatCard};

/// Tick length of the animation timer.
pub const TICK_MS: u64 = 16;

/// Total animation duration.
pub const DURATION_MS: u64 = 1000;

/// Per-counter animation progress.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_timing(target, DURATION_MS, TICK_MS)
    }

    pub fn with_timing(target: u64, duration_ms: u64, tick_ms: u64) -> Self {
        let steps = duration_ms.max(1) as f64 / tick_ms.max(1) as f64;
        Self {
            target,
            current: 0.0,
            increment: target as f64 / steps,
            finished: false,
        }
    }

    /// Advance one tick and return the value to display.
    pub fn step(&mut self) -> u64 {
        if self.finished {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            self.target
        } else {
            // current < target, so the floor never exceeds it
            (self.current.floor() as u64).min(self.target)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

/// Observation state of a single stat card.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterBinding {
    pub id: String,
    /// Set on first visibility; never cleared
    pub armed: bool,
    animation: Option<CounterAnimation>,
}

#[derive(Debug, Clone, Default)]
pub struct CounterAnimator {
    bindings: HashMap<String, CounterBinding>,
    duration_ms: u64,
    tick_ms: u64,
}

impl CounterAnimator {
    /// Observe the given stat cards.
    pub fn observe<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let bindings = ids
            .into_iter()
            .map(|id| {
                (
                    id.to_string(),
                    CounterBinding {
                        id: id.to_string(),
                        armed: false,
                        animation: None,
                    },
                )
            })
            .collect();
        Self {
            bindings,
            duration_ms: DURATION_MS,
            tick_ms: TICK_MS,
        }
    }

    pub fn with_timing(mut self, duration_ms: u64, tick_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self.tick_ms = tick_ms;
        self
    }

    /// Arm a card's animation. No-op if already armed or not observed.
    ///
    /// Returns whether an animation started.
    pub fn arm(&mut self, card: &mut StatCard) -> bool {
        let Some(binding) = self.bindings.get_mut(&card.id) else {
            return false;
        };
        if binding.armed {
            return false;
        }

        let target = parse_grouped_or_zero(&card.text);
        binding.armed = true;
        binding.animation = Some(CounterAnimation::with_timing(
            target,
            self.duration_ms,
            self.tick_ms,
        ));
        card.text = format_grouped(0);
        tracing::debug!(card = %card.id, target, "Counter armed");
        true
    }

    /// Handle a visibility report for the cards with the given ids.
    ///
    /// Returns whether any animation started.
    pub fn on_visible(&mut self, visible_ids: &[String], cards: &mut [StatCard]) -> bool {
        let mut started = false;
        for card in cards.iter_mut() {
            if visible_ids.iter().any(|id| *id == card.id) {
                started |= self.arm(card);
            }
        }
        started
    }

    /// Advance every running animation by one tick.
    ///
    /// Returns whether any displayed value was written.
    pub fn tick(&mut self, cards: &mut [StatCard]) -> bool {
        let mut changed = false;
        for card in cards.iter_mut() {
            let Some(binding) = self.bindings.get_mut(&card.id) else {
                continue;
            };
            let Some(animation) = binding.animation.as_mut() else {
                continue;
            };
            card.text = format_grouped(animation.step());
            changed = true;
            if animation.is_finished() {
                binding.animation = None;
            }
        }
        changed
    }

    pub fn is_armed(&self, id: &str) -> bool {
        self.bindings.get(id).map(|b| b.armed).unwrap_or(false)
    }

    /// Whether the card is still waiting for its first visibility report.
    pub fn is_observed(&self, id: &str) -> bool {
        self.bindings.get(id).map(|b| !b.armed).unwrap_or(false)
    }

    pub fn is_animating(&self) -> bool {
        self.bindings.values().any(|b| b.animation.is_some())
    }
}
