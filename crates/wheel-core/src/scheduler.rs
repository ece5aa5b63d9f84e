//! Scroll tracking and the interval-driven mutation trigger.
//!
//! Two independent clocks are composed here: the scroll debounce (how long
//! the page counts as "scrolling" after the last event) and the mutation
//! interval (minimum gap between scheduled mutations). Both are plain
//! deadlines compared against an injected `now`, so nothing fires after the
//! owner is gone.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Active,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    pub last_offset: f64,
    /// Absolute offset delta of the most recent scroll event.
    pub velocity: f64,
    pub active: bool,
    pub last_activity: Option<Duration>,
}

/// Single pending deadline; re-arming replaces it.
#[derive(Clone, Debug)]
pub struct DebounceTimer {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl DebounceTimer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Duration) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, on the first call at or after the deadline.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MutationScheduler {
    scroll: ScrollState,
    debounce: DebounceTimer,
    interval: Duration,
    last_mutation: Duration,
}

impl MutationScheduler {
    /// `start` seeds the interval clock, so the first scheduled mutation can
    /// happen no earlier than `start + interval`.
    pub fn new(debounce: Duration, interval: Duration, start: Duration) -> Self {
        Self {
            scroll: ScrollState::default(),
            debounce: DebounceTimer::new(debounce),
            interval,
            last_mutation: start,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.scroll.active {
            ScrollPhase::Active
        } else {
            ScrollPhase::Idle
        }
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    #[inline]
    pub fn last_mutation(&self) -> Duration {
        self.last_mutation
    }

    /// Records a scroll event and restarts the quiet period. The first event
    /// of a burst restarts the interval clock, so a burst never mutates
    /// before `interval` has elapsed inside it.
    pub fn on_scroll(&mut self, offset: f64, now: Duration) {
        // a deadline that already passed ends the previous burst first
        self.settle(now);
        if !self.scroll.active {
            self.last_mutation = now;
        }
        self.scroll.velocity = (offset - self.scroll.last_offset).abs();
        self.scroll.last_offset = offset;
        self.scroll.active = true;
        self.scroll.last_activity = Some(now);
        self.debounce.arm(now);
    }

    /// Drops back to idle once the quiet period has elapsed. Returns true on
    /// the transition.
    pub fn settle(&mut self, now: Duration) -> bool {
        if self.debounce.expire(now) {
            self.scroll.active = false;
            self.scroll.velocity = 0.0;
            return true;
        }
        false
    }

    /// Whether a scheduled mutation is due at `now`. Stamps the interval
    /// clock when it is.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.scroll.active || self.scroll.velocity <= 0.0 {
            return false;
        }
        if now.saturating_sub(self.last_mutation) > self.interval {
            self.last_mutation = now;
            return true;
        }
        false
    }
}
