use std::time::Duration;

/// Throttles `requestAnimationFrame` callbacks down to a fixed frame rate.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    slack: Duration,
    next_due: Option<Duration>,
}

impl FramePacer {
    pub fn new(fps: u32, slack: Duration) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            slack,
            next_due: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a frame should be produced at `now`. The first call always
    /// is. After a stall the cadence restarts from `now` instead of
    /// replaying the missed frames.
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.next_due {
            Some(due) if now + self.slack < due => false,
            Some(due) => {
                let next = due + self.interval;
                self.next_due = Some(if next + self.slack <= now {
                    now + self.interval
                } else {
                    next
                });
                true
            }
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }
}
