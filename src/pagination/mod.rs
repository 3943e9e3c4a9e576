//! Pagination core (pure).
//!
//! [`PaginationController`] owns the current page index;
//! [`GestureAdapter`] turns input signals into gated transitions against it.

pub mod controller;
pub mod gesture;
pub mod timer;

// Re-export for convenience
pub use controller::{ChangeCallback, PaginationController, PaginationSnapshot};
pub use gesture::{
    Direction, GestureAdapter, SwipeTracker, TransitionLock, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TRANSITION_COOLDOWN,
};
pub use timer::{Clock, CooldownTimer, ManualClock, SystemClock};
