//! Aggregations over the session log.
//!
//! Every function takes sessions ordered newest first, is defined for the
//! empty slice, and has no side effects. Nothing here is cached: callers
//! recompute from the log on each read.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::achievement::{Achievement, BadgeStatus, badges};
use crate::session::Session;

const SECS_PER_HOUR: u64 = 3600;

/// Daily reading goal in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailyGoal(f64);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("daily goal must be a positive number of hours, got {0}")]
pub struct InvalidGoal(pub f64);

impl DailyGoal {
    pub fn from_hours(hours: f64) -> Result<Self, InvalidGoal> {
        if hours.is_finite() && hours > 0.0 {
            Ok(Self(hours))
        } else {
            Err(InvalidGoal(hours))
        }
    }

    pub const fn hours(&self) -> f64 {
        self.0
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self(1.0)
    }
}

pub fn total_seconds(sessions: &[Session]) -> u64 {
    sessions.iter().map(Session::duration_secs).sum()
}

/// Whole hours read.
pub fn total_hours_floor(sessions: &[Session]) -> u64 {
    total_seconds(sessions) / SECS_PER_HOUR
}

/// Whole minutes left over after [`total_hours_floor`].
pub fn total_minutes_remainder(sessions: &[Session]) -> u64 {
    (total_seconds(sessions) % SECS_PER_HOUR) / 60
}

pub const fn session_count(sessions: &[Session]) -> usize {
    sessions.len()
}

/// Whole hours read over the goal, clamped to `1.0`.
#[allow(clippy::cast_precision_loss)]
pub fn goal_progress(sessions: &[Session], goal: DailyGoal) -> f64 {
    (total_hours_floor(sessions) as f64 / goal.hours()).min(1.0)
}

/// Consecutive-day streak ending today.
///
/// The i-th newest session must fall exactly `i` days before `today`; the
/// count stops at the first session that does not. When the newest session
/// is not from today the streak is zero. This assumes at most one session
/// per day: a second session on the same day ends the count.
#[allow(clippy::cast_possible_wrap)]
pub fn streak(sessions: &[Session], today: NaiveDate) -> u32 {
    let mut count = 0;
    for (i, session) in sessions.iter().enumerate() {
        let diff_days = (today - session.date()).num_days();
        if i == 0 && diff_days > 0 {
            return 0;
        }
        if diff_days != i as i64 {
            break;
        }
        count += 1;
    }
    count
}

/// Every derived statistic for one read of the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub session_count: usize,
    pub total_seconds: u64,
    pub total_hours: u64,
    pub total_minutes_remainder: u64,
    pub goal_hours: f64,
    pub goal_progress: f64,
    pub streak_days: u32,
    pub badges: Vec<BadgeStatus>,
}

impl Summary {
    pub fn compute(sessions: &[Session], goal: DailyGoal, today: NaiveDate) -> Self {
        Self {
            session_count: session_count(sessions),
            total_seconds: total_seconds(sessions),
            total_hours: total_hours_floor(sessions),
            total_minutes_remainder: total_minutes_remainder(sessions),
            goal_hours: goal.hours(),
            goal_progress: goal_progress(sessions, goal),
            streak_days: streak(sessions, today),
            badges: badges(sessions),
        }
    }

    /// Badges that are currently unlocked.
    pub fn unlocked(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.badges
            .iter()
            .filter(|badge| badge.unlocked)
            .map(|badge| badge.achievement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn session(secs: u64, date: NaiveDate) -> Session {
        Session::new(secs, "", date).unwrap()
    }

    /// Sessions on the given days (newest first), one minute each.
    fn on_days(days: &[u32]) -> Vec<Session> {
        days.iter().map(|d| session(60, day(*d))).collect()
    }

    #[test]
    fn empty_log_is_all_zero() {
        let summary = Summary::compute(&[], DailyGoal::default(), day(10));
        assert_eq!(summary.session_count, 0);
        assert_eq!(summary.total_seconds, 0);
        assert_eq!(summary.total_hours, 0);
        assert_eq!(summary.total_minutes_remainder, 0);
        assert!(summary.goal_progress.abs() < f64::EPSILON);
        assert_eq!(summary.streak_days, 0);
        assert_eq!(summary.unlocked().count(), 0);
    }

    #[test]
    fn single_long_session_splits_hours_and_minutes() {
        let sessions = [session(3725, day(10))];
        assert_eq!(total_hours_floor(&sessions), 1);
        assert_eq!(total_minutes_remainder(&sessions), 2);
    }

    #[test]
    fn three_sessions_total() {
        let sessions = [
            session(1800, day(10)),
            session(3600, day(9)),
            session(7200, day(8)),
        ];
        assert_eq!(total_seconds(&sessions), 12_600);
        assert_eq!(total_hours_floor(&sessions), 3);
        assert_eq!(total_minutes_remainder(&sessions), 30);
        assert_eq!(session_count(&sessions), 3);

        let unlocked: Vec<_> = Summary::compute(&sessions, DailyGoal::default(), day(10))
            .unlocked()
            .collect();
        assert_eq!(
            unlocked,
            [Achievement::FirstSession, Achievement::OneHour]
        );
    }

    #[test]
    fn total_seconds_is_additive() {
        let mut sessions = vec![session(125, day(3)), session(40, day(2))];
        let before = total_seconds(&sessions);
        let extra = session(999, day(1));
        sessions.push(extra.clone());
        assert_eq!(total_seconds(&sessions), before + extra.duration_secs());
    }

    #[test]
    fn goal_progress_uses_whole_hours() {
        let sessions = [session(5399, day(1))];
        let goal = DailyGoal::from_hours(2.0).unwrap();
        assert!((goal_progress(&sessions, goal) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn goal_progress_is_clamped() {
        let sessions = [session(3 * 3600, day(1))];
        for hours in [0.5, 1.0, 3.0] {
            let goal = DailyGoal::from_hours(hours).unwrap();
            assert!((goal_progress(&sessions, goal) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn goal_rejects_non_positive_values() {
        assert!(DailyGoal::from_hours(0.0).is_err());
        assert!(DailyGoal::from_hours(-1.0).is_err());
        assert!(DailyGoal::from_hours(f64::NAN).is_err());
        assert!(DailyGoal::from_hours(f64::INFINITY).is_err());
        assert_eq!(
            DailyGoal::from_hours(-2.0).unwrap_err().to_string(),
            "daily goal must be a positive number of hours, got -2"
        );
    }

    #[test]
    fn streak_counts_consecutive_days() {
        assert_eq!(streak(&on_days(&[10, 9, 8]), day(10)), 3);
    }

    #[test]
    fn streak_stops_at_gap() {
        assert_eq!(streak(&on_days(&[10, 9, 7, 6]), day(10)), 2);
    }

    #[test]
    fn streak_is_zero_when_newest_is_not_today() {
        assert_eq!(streak(&on_days(&[9, 8, 7]), day(10)), 0);
    }

    #[test]
    fn streak_stops_at_second_session_same_day() {
        assert_eq!(streak(&on_days(&[10, 10, 9]), day(10)), 1);
    }

    #[test]
    fn streak_ignores_future_dated_newest() {
        assert_eq!(streak(&on_days(&[11, 10]), day(10)), 0);
    }
}
