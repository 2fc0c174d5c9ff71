//! Application root: owns the timer and the session log.

use crate::clock::Clock;
use crate::motivation::{Quote, quote_for};
use crate::session::{Session, SessionLog};
use crate::stats::{DailyGoal, Summary};
use crate::timer::{ArmId, TickSource, TimerController};

/// The single owner of all mutable reading state.
///
/// The session log is only changed by [`ReadingApp::stop_and_save`]; every
/// other view reads `sessions()` and derives what it needs.
#[derive(Debug)]
pub struct ReadingApp<S: TickSource, C: Clock> {
    timer: TimerController<S>,
    log: SessionLog,
    goal: DailyGoal,
    clock: C,
}

impl<S: TickSource, C: Clock> ReadingApp<S, C> {
    pub const fn new(ticks: S, clock: C, goal: DailyGoal) -> Self {
        Self {
            timer: TimerController::new(ticks),
            log: SessionLog::new(),
            goal,
            clock,
        }
    }

    pub const fn timer(&self) -> &TimerController<S> {
        &self.timer
    }

    pub fn sessions(&self) -> &[Session] {
        self.log.as_slice()
    }

    pub const fn goal(&self) -> DailyGoal {
        self.goal
    }

    pub fn start(&mut self) -> bool {
        self.timer.start()
    }

    pub fn pause(&mut self) -> bool {
        self.timer.pause()
    }

    pub fn tick(&mut self, arm: ArmId) -> bool {
        self.timer.tick(arm)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.timer.set_pending_notes(notes);
    }

    /// Commit the timer and prepend the session, if one was produced.
    pub fn stop_and_save(&mut self, notes: impl Into<String>) -> Option<&Session> {
        let session = self.timer.commit(notes, &self.clock)?;
        self.log.record(session);
        self.log.as_slice().first()
    }

    /// [`stop_and_save`](Self::stop_and_save) with the pending notes.
    pub fn stop_and_save_pending(&mut self) -> Option<&Session> {
        let notes = self.timer.pending_notes().to_string();
        self.stop_and_save(notes)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(self.log.as_slice(), self.goal, self.clock.today())
    }

    pub fn quote(&self) -> &'static Quote {
        quote_for(self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::achievement::Achievement;
    use crate::clock::FixedClock;
    use crate::timer::{ManualTicks, TimerState};

    fn app() -> ReadingApp<ManualTicks, FixedClock> {
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        ReadingApp::new(ManualTicks::new(), FixedClock(today), DailyGoal::default())
    }

    fn read_for(app: &mut ReadingApp<ManualTicks, FixedClock>, secs: u64) {
        app.start();
        let arm = app.timer().armed_id().unwrap();
        for _ in 0..secs {
            app.tick(arm);
        }
    }

    #[test]
    fn stop_without_time_leaves_log_unchanged() {
        let mut app = app();
        app.start();
        assert!(app.stop_and_save("nothing").is_none());
        assert!(app.sessions().is_empty());
        assert_eq!(app.timer().state(), TimerState::Idle);
    }

    #[test]
    fn stop_prepends_and_resets() {
        let mut app = app();
        read_for(&mut app, 30);
        app.stop_and_save("first");
        read_for(&mut app, 45);
        let saved = app.stop_and_save("second").unwrap().clone();

        assert_eq!(saved.duration_secs(), 45);
        let notes: Vec<_> = app.sessions().iter().map(Session::notes).collect();
        assert_eq!(notes, ["second", "first"]);
        assert_eq!(app.timer().elapsed_secs(), 0);
    }

    #[test]
    fn pending_notes_are_saved_and_cleared() {
        let mut app = app();
        app.set_notes("Middlemarch ch. 12");
        read_for(&mut app, 5);
        let saved = app.stop_and_save_pending().unwrap();

        assert_eq!(saved.notes(), "Middlemarch ch. 12");
        assert_eq!(app.timer().pending_notes(), "");
    }

    #[test]
    fn summary_is_recomputed_on_every_read() {
        let mut app = app();
        assert_eq!(app.summary().session_count, 0);

        read_for(&mut app, 3600);
        app.stop_and_save("");
        let summary = app.summary();

        assert_eq!(summary.session_count, 1);
        assert_eq!(summary.total_hours, 1);
        assert_eq!(summary.streak_days, 1);
        assert!((summary.goal_progress - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            summary.unlocked().collect::<Vec<_>>(),
            [Achievement::FirstSession, Achievement::OneHour]
        );
    }

    #[test]
    fn stray_ticks_never_reach_the_log() {
        let mut app = app();
        app.start();
        let arm = app.timer().armed_id().unwrap();
        for _ in 0..5 {
            app.tick(arm);
        }
        app.pause();
        for _ in 0..3 {
            app.tick(arm);
        }
        let saved = app.stop_and_save("note").unwrap();
        assert_eq!(saved.duration_secs(), 5);
        assert_eq!(saved.notes(), "note");
    }
}
