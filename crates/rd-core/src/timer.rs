//! Reading timer state machine.
//!
//! The controller owns no thread. Entering `Running` arms a [`TickSource`]
//! and keeps the returned handle; every exit from `Running` (pause, commit,
//! drop) disarms it before state is touched. Each arming gets a fresh
//! [`ArmId`] and ticks carry the id they were armed with, so a tick that was
//! already in flight when the source was disarmed is dropped instead of
//! counted.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle           (pause)
//! Idle|Running -> commit -> Idle    (elapsed reset when a session is produced)
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::clock::Clock;
use crate::format::format_elapsed;
use crate::session::Session;

/// Fixed period of the running timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one arming of a tick source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ArmId(u64);

impl fmt::Display for ArmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arm-{}", self.0)
    }
}

/// Cancellation handle returned when a tick source is armed.
pub trait TickHandle {
    /// Stop emitting ticks for this arming.
    fn disarm(self);
}

/// A periodic event source the controller arms while running.
pub trait TickSource {
    type Handle: TickHandle;

    /// Begin delivering `arm` every `period` until the handle is disarmed.
    fn arm(&mut self, arm: ArmId, period: Duration) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

impl TimerState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of the timer for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub elapsed_secs: u64,
    pub display: String,
    pub pending_notes: String,
}

/// Owns the elapsed counter and the armed tick source.
pub struct TimerController<S: TickSource> {
    source: S,
    armed: Option<(ArmId, S::Handle)>,
    next_arm: u64,
    elapsed_secs: u64,
    pending_notes: String,
}

impl<S: TickSource> fmt::Debug for TimerController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerController")
            .field("state", &self.state())
            .field("armed", &self.armed_id())
            .field("elapsed_secs", &self.elapsed_secs)
            .field("pending_notes", &self.pending_notes)
            .finish_non_exhaustive()
    }
}

impl<S: TickSource> TimerController<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            armed: None,
            next_arm: 0,
            elapsed_secs: 0,
            pending_notes: String::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub const fn state(&self) -> TimerState {
        if self.armed.is_some() {
            TimerState::Running
        } else {
            TimerState::Idle
        }
    }

    pub const fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// The live arming, if running.
    pub fn armed_id(&self) -> Option<ArmId> {
        self.armed.as_ref().map(|(id, _)| *id)
    }

    pub fn pending_notes(&self) -> &str {
        &self.pending_notes
    }

    /// `MM:SS` rendering of the elapsed counter.
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.state(),
            elapsed_secs: self.elapsed_secs,
            display: self.display(),
            pending_notes: self.pending_notes.clone(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start running. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let arm = ArmId(self.next_arm);
        self.next_arm += 1;
        let handle = self.source.arm(arm, TICK_PERIOD);
        self.armed = Some((arm, handle));
        tracing::debug!(%arm, elapsed_secs = self.elapsed_secs, "timer started");
        true
    }

    /// Stop running without resetting elapsed time. Returns `false` if idle.
    pub fn pause(&mut self) -> bool {
        if !self.disarm() {
            return false;
        }
        tracing::debug!(elapsed_secs = self.elapsed_secs, "timer paused");
        true
    }

    /// Count one second if `arm` is the live arming.
    pub fn tick(&mut self, arm: ArmId) -> bool {
        if self.armed_id() != Some(arm) {
            tracing::debug!(%arm, live = ?self.armed_id(), "dropping stray tick");
            return false;
        }
        self.elapsed_secs += 1;
        tracing::trace!(elapsed_secs = self.elapsed_secs, "tick");
        true
    }

    pub fn set_pending_notes(&mut self, notes: impl Into<String>) {
        self.pending_notes = notes.into();
    }

    /// Stop and turn the elapsed time into a session.
    ///
    /// Returns `None` when nothing was timed; the timer is left idle either
    /// way. On success elapsed time and pending notes are reset.
    pub fn commit(&mut self, notes: impl Into<String>, clock: &impl Clock) -> Option<Session> {
        self.disarm();
        let Some(session) = Session::new(self.elapsed_secs, notes, clock.today()) else {
            tracing::debug!("commit with nothing timed, no session");
            return None;
        };
        self.elapsed_secs = 0;
        self.pending_notes.clear();
        tracing::debug!(
            id = %session.id(),
            duration_secs = session.duration_secs(),
            "session committed"
        );
        Some(session)
    }

    /// [`commit`](Self::commit) with the pending notes buffer.
    pub fn commit_pending(&mut self, clock: &impl Clock) -> Option<Session> {
        let notes = self.pending_notes.clone();
        self.commit(notes, clock)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn disarm(&mut self) -> bool {
        match self.armed.take() {
            Some((_, handle)) => {
                handle.disarm();
                true
            }
            None => false,
        }
    }
}

impl<S: TickSource> Drop for TimerController<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[derive(Debug, Default)]
struct ManualLog {
    live: Vec<ArmId>,
    armed: usize,
    disarmed: usize,
}

/// Tick source driven by hand.
///
/// Clones share their bookkeeping, so a clone kept outside the controller
/// can observe arming and disarming.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    log: Rc<RefCell<ManualLog>>,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Armings that have not been disarmed yet.
    pub fn live(&self) -> Vec<ArmId> {
        self.log.borrow().live.clone()
    }

    pub fn armed_count(&self) -> usize {
        self.log.borrow().armed
    }

    pub fn disarmed_count(&self) -> usize {
        self.log.borrow().disarmed
    }
}

/// Handle for a [`ManualTicks`] arming.
#[derive(Debug)]
pub struct ManualHandle {
    arm: ArmId,
    log: Rc<RefCell<ManualLog>>,
}

impl TickHandle for ManualHandle {
    fn disarm(self) {
        let mut log = self.log.borrow_mut();
        log.live.retain(|id| *id != self.arm);
        log.disarmed += 1;
    }
}

impl TickSource for ManualTicks {
    type Handle = ManualHandle;

    fn arm(&mut self, arm: ArmId, _period: Duration) -> ManualHandle {
        let mut log = self.log.borrow_mut();
        log.live.push(arm);
        log.armed += 1;
        ManualHandle {
            arm,
            log: Rc::clone(&self.log),
        }
    }
}
