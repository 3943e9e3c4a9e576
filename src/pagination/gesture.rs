//! Gesture adapter: raw input signals in, gated page transitions out.
//!
//! Keys, swipes, progress-bar clicks and button clicks all funnel through
//! [`GestureAdapter::request_transition`], which refuses to start a new
//! transition while the previous one is still cooling down.

use super::controller::PaginationController;
use super::timer::{Clock, CooldownTimer, SystemClock};
use std::time::Duration;
use tracing::{debug, trace};

/// Minimum horizontal travel for a swipe to count.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// How long a transition holds the lock.
pub const DEFAULT_TRANSITION_COOLDOWN: Duration = Duration::from_millis(600);

/// Direction of a relative navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the first page.
    Backward,
    /// Toward the last page.
    Forward,
}

/// Flag preventing overlapping transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionLock {
    is_animating: bool,
}

impl TransitionLock {
    /// True while a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Take the lock. Returns `false` if it was already held.
    pub fn acquire(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.is_animating = true;
        true
    }

    /// Release the lock.
    pub fn release(&mut self) {
        self.is_animating = false;
    }
}

/// Start/last horizontal positions of one touch or drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    last_x: Option<f64>,
}

impl SwipeTracker {
    /// Begin a gesture, discarding any unfinished one.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.last_x = None;
    }

    /// Record movement. Ignored when no gesture is in progress.
    pub fn update(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// True between `start` and `finish`.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// End the gesture and return `start - last`.
    ///
    /// Positive means the pointer travelled left. A gesture without any
    /// movement yields `None`.
    pub fn finish(&mut self) -> Option<f64> {
        let start = self.start_x.take()?;
        let last = self.last_x.take()?;
        Some(start - last)
    }
}

/// Translates input signals into navigation requests.
///
/// Owns the transition lock and its cooldown timer. The controller is passed
/// in on every call so the two stay independently borrowable.
///
/// The cooldown is polled data with no scheduled callback, so dropping the
/// adapter mid-cooldown leaves nothing behind.
#[derive(Debug)]
pub struct GestureAdapter<C: Clock = SystemClock> {
    clock: C,
    lock: TransitionLock,
    cooldown: CooldownTimer,
    swipe: SwipeTracker,
    swipe_threshold: f64,
}

impl GestureAdapter<SystemClock> {
    /// Adapter on the wall clock with default threshold and cooldown.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for GestureAdapter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GestureAdapter<C> {
    /// Adapter on a custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            lock: TransitionLock::default(),
            cooldown: CooldownTimer::new(DEFAULT_TRANSITION_COOLDOWN),
            swipe: SwipeTracker::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Override the swipe threshold.
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold.abs();
        self
    }

    /// Override the cooldown window.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = CooldownTimer::new(cooldown);
        self
    }

    /// Swipe threshold in effect.
    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    /// True while a transition holds the lock.
    pub fn is_animating(&self) -> bool {
        self.lock.is_animating()
    }

    /// Release the lock if the cooldown has elapsed.
    ///
    /// Returns `true` when this call released it. The event loop calls this
    /// on every iteration.
    pub fn tick(&mut self) -> bool {
        if self.cooldown.poll(self.clock.now()) {
            self.lock.release();
            trace!("Transition cooldown elapsed");
            return true;
        }
        false
    }

    /// Time until the lock is released, `None` when idle.
    pub fn time_until_release(&self) -> Option<Duration> {
        self.cooldown.remaining(self.clock.now())
    }

    /// The single gated entry point for navigation.
    ///
    /// Dropped while a transition is in flight, when `target` is already
    /// current, or when the controller rejects it as out of range. Only an
    /// accepted request takes the lock and arms the cooldown.
    pub fn request_transition(
        &mut self,
        controller: &mut PaginationController,
        target: usize,
    ) -> bool {
        self.tick();

        if self.lock.is_animating() {
            debug!(target, "Transition in flight, dropping request");
            return false;
        }
        if target == controller.current_index() {
            return false;
        }
        if !controller.go_to_page(target) {
            return false;
        }

        self.lock.acquire();
        self.cooldown.arm(self.clock.now());
        debug!(target, "Transition started");
        true
    }

    /// Left/right arrow keys.
    pub fn on_key(&mut self, controller: &mut PaginationController, direction: Direction) -> bool {
        self.step(controller, direction)
    }

    /// Prev/next button clicks.
    pub fn on_button(
        &mut self,
        controller: &mut PaginationController,
        direction: Direction,
    ) -> bool {
        self.step(controller, direction)
    }

    /// Pointer went down at horizontal position `x`.
    pub fn on_touch_start(&mut self, x: f64) {
        self.swipe.start(x);
    }

    /// Pointer moved to horizontal position `x`.
    pub fn on_touch_move(&mut self, x: f64) {
        self.swipe.update(x);
    }

    /// True while a touch/drag gesture is being tracked.
    pub fn is_tracking_swipe(&self) -> bool {
        self.swipe.is_tracking()
    }

    /// Pointer released; evaluates the tracked gesture as a swipe.
    pub fn on_touch_end(&mut self, controller: &mut PaginationController) -> bool {
        match self.swipe.finish() {
            Some(delta_x) => self.on_swipe_end(controller, delta_x),
            None => false,
        }
    }

    /// Evaluate a finished swipe with travel `delta_x = start - end`.
    ///
    /// Beyond `+threshold` advances, beyond `-threshold` goes back, anything
    /// in between is ignored.
    pub fn on_swipe_end(&mut self, controller: &mut PaginationController, delta_x: f64) -> bool {
        if delta_x > self.swipe_threshold {
            self.step(controller, Direction::Forward)
        } else if delta_x < -self.swipe_threshold {
            self.step(controller, Direction::Backward)
        } else {
            trace!(delta_x, "Swipe below threshold");
            false
        }
    }

    /// Click on the progress bar at normalized position `fraction`.
    ///
    /// Maps to `floor(fraction * total_pages)`. Non-finite, negative and
    /// past-the-end positions are dropped.
    pub fn on_progress_bar_click(
        &mut self,
        controller: &mut PaginationController,
        fraction: f64,
    ) -> bool {
        if !fraction.is_finite() || fraction < 0.0 {
            return false;
        }
        let target = (fraction * controller.total_pages() as f64).floor();
        if target >= controller.total_pages() as f64 {
            return false;
        }
        self.request_transition(controller, target as usize)
    }

    fn step(&mut self, controller: &mut PaginationController, direction: Direction) -> bool {
        let current = controller.current_index();
        match direction {
            Direction::Forward if controller.can_go_next() => {
                self.request_transition(controller, current + 1)
            }
            Direction::Backward if controller.can_go_prev() => {
                self.request_transition(controller, current - 1)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod tests;
