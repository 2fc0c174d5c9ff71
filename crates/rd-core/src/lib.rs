//! Core domain logic for the reading timer.
//!
//! This crate contains the fundamental types and logic for:
//! - Timer: the start/pause/commit state machine and its tick source seam
//! - Sessions: committed reading sessions and the newest-first log
//! - Stats: totals, goal progress, streaks and achievement badges
//! - Formatting: `MM:SS` display, durations and the history listing

pub mod achievement;
pub mod app;
pub mod clock;
pub mod format;
pub mod motivation;
pub mod session;
pub mod stats;
pub mod timer;

pub use achievement::{Achievement, BadgeStatus};
pub use app::ReadingApp;
pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{format_duration, format_elapsed};
pub use motivation::{Quote, quote_for};
pub use session::{Session, SessionId, SessionLog};
pub use stats::{DailyGoal, InvalidGoal, Summary};
pub use timer::{
    ArmId, ManualTicks, TICK_PERIOD, TickHandle, TickSource, TimerController, TimerSnapshot,
    TimerState,
};
