use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for one scheduled single-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

/// Single-shot timer primitive supplied by the host.
///
/// When a scheduled timer elapses the host reports it through
/// `CarouselEngine::on_timer_fired` with the token returned here.
pub trait AutoplayScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerToken;
    fn cancel(&mut self, token: TimerToken);
}

/// Deterministic scheduler driven by a virtual clock.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    now: Duration,
    next_token: u64,
    pending: Vec<(TimerToken, Duration)>,
    scheduled_total: usize,
    cancelled_total: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    #[must_use]
    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Moves the clock forward and returns the timers that came due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now = self.now.saturating_add(by);
        let now = self.now;
        let mut due: Vec<(TimerToken, Duration)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(token, deadline)| (*deadline, *token));
        due.into_iter().map(|(token, _)| token).collect()
    }
}

impl AutoplayScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending.push((token, self.now.saturating_add(delay)));
        self.scheduled_total += 1;
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != token);
        if self.pending.len() != before {
            self.cancelled_total += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_returns_only_due_timers() {
        let mut scheduler = ManualScheduler::default();
        let early = scheduler.schedule(Duration::from_millis(100));
        let late = scheduler.schedule(Duration::from_millis(300));

        assert_eq!(scheduler.advance(Duration::from_millis(150)), vec![early]);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(300)));
        assert_eq!(scheduler.advance(Duration::from_millis(150)), vec![late]);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut scheduler = ManualScheduler::default();
        let token = scheduler.schedule(Duration::from_millis(10));
        scheduler.cancel(token);
        scheduler.cancel(token);

        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(scheduler.cancelled_total(), 1);
    }
}
