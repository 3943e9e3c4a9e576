//! Clock and one-shot cooldown timer.
//!
//! The event loop owns time: it polls the timer on every iteration instead of
//! handing a closure to a background scheduler. A timer is therefore plain data
//! and cancelling it on teardown cannot race a pending callback.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the code under test.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Start at the current wall-clock instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// One-shot timer with a fixed duration.
///
/// Arming an already armed timer is refused, so timers never stack.
#[derive(Debug, Clone)]
pub struct CooldownTimer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl CooldownTimer {
    /// Create a disarmed timer.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Configured duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Arm the timer to fire `duration` after `now`.
    ///
    /// Returns `false` (and leaves the deadline alone) when already armed.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.duration);
        true
    }

    /// True while armed and not yet fired.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed. Returns `true` exactly once per arming.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the timer fires, `None` when disarmed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_millis(600);

    #[test]
    fn new_timer_is_disarmed() {
        let timer = CooldownTimer::new(COOLDOWN);
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(Instant::now()), None);
        assert_eq!(timer.duration(), COOLDOWN);
    }

    #[test]
    fn fires_once_after_deadline() {
        let clock = ManualClock::new();
        let mut timer = CooldownTimer::new(COOLDOWN);
        assert!(timer.arm(clock.now()));

        clock.advance(Duration::from_millis(599));
        assert!(!timer.poll(clock.now()));

        clock.advance(Duration::from_millis(1));
        assert!(timer.poll(clock.now()));
        assert!(!timer.poll(clock.now()));
        assert!(!timer.is_armed());
    }

    #[test]
    fn arming_twice_does_not_extend_deadline() {
        let clock = ManualClock::new();
        let mut timer = CooldownTimer::new(COOLDOWN);
        timer.arm(clock.now());

        clock.advance(Duration::from_millis(400));
        assert!(!timer.arm(clock.now()));
        assert_eq!(
            timer.remaining(clock.now()),
            Some(Duration::from_millis(200))
        );
    }

    #[test]
    fn cancel_disarms_without_firing() {
        let clock = ManualClock::new();
        let mut timer = CooldownTimer::new(COOLDOWN);
        timer.arm(clock.now());
        timer.cancel();

        clock.advance(COOLDOWN);
        assert!(!timer.poll(clock.now()));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let clock = ManualClock::new();
        let mut timer = CooldownTimer::new(COOLDOWN);
        timer.arm(clock.now());
        clock.advance(Duration::from_secs(5));
        assert_eq!(timer.remaining(clock.now()), Some(Duration::ZERO));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_millis(10));
        assert_eq!(other.now() - before, Duration::from_millis(10));
    }
}
