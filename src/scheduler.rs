use std::time::{Duration, Instant};

/// A single repeating deadline driving game ticks.
///
/// Replaces the ambient interval-timer identifiers of a browser runtime with
/// an explicit handle: changing the period or restarting always discards the
/// previous deadline, so at most one tick driver is ever active.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    next_tick: Option<Instant>,
}

impl TickScheduler {
    /// Creates a stopped scheduler with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_tick: None,
        }
    }

    /// Starts (or restarts) ticking, first deadline one period from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.period);
    }

    /// Stops ticking. `poll` returns false until the next `start`.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Replaces the period and the pending deadline in one step.
    pub fn restart_with_period(&mut self, now: Instant, period: Duration) {
        self.period = period;
        self.start(now);
    }

    /// Returns the current tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true while a deadline is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Returns true once per elapsed deadline and re-arms for the next one.
    ///
    /// The next deadline is measured from `now` rather than the missed
    /// deadline, so a stalled event loop does not produce a burst of
    /// catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_tick else {
            return false;
        };

        if now < deadline {
            return false;
        }

        self.next_tick = Some(now + self.period);
        true
    }
}

/// One-shot actions staged to fire at a fixed later instant, used for the
/// delayed screen transitions ("launch game 500ms after `play`", "enter the
/// site 1000ms after a win").
#[derive(Debug)]
pub struct DeferredQueue<T> {
    pending: Vec<(Instant, T)>,
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Stages `action` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: T) {
        self.pending.push((now + delay, action));
    }

    /// Removes and returns all actions due at `now`, in scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut remaining = Vec::new();

        for (deadline, action) in self.pending.drain(..) {
            if deadline <= now {
                due.push(action);
            } else {
                remaining.push((deadline, action));
            }
        }

        self.pending = remaining;
        due
    }

    /// Returns true when nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
