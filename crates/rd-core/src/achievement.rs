//! Milestone badges derived from the session log.

use std::fmt;

use serde::Serialize;

use crate::session::Session;
use crate::stats::{session_count, total_hours_floor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstSession,
    OneHour,
    FiveHours,
    TenHours,
}

impl Achievement {
    /// Every badge, in display order.
    pub const ALL: [Self; 4] = [
        Self::FirstSession,
        Self::OneHour,
        Self::FiveHours,
        Self::TenHours,
    ];

    pub const fn title(&self) -> &'static str {
        match self {
            Self::FirstSession => "First session",
            Self::OneHour => "1 hour milestone",
            Self::FiveHours => "5 hour milestone",
            Self::TenHours => "10 hour milestone",
        }
    }

    pub const fn is_unlocked(&self, count: usize, hours: u64) -> bool {
        match self {
            Self::FirstSession => count >= 1,
            Self::OneHour => hours >= 1,
            Self::FiveHours => hours >= 5,
            Self::TenHours => hours >= 10,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A badge and whether the log currently unlocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStatus {
    pub achievement: Achievement,
    pub unlocked: bool,
}

/// Evaluate every badge against `sessions`.
pub fn badges(sessions: &[Session]) -> Vec<BadgeStatus> {
    let count = session_count(sessions);
    let hours = total_hours_floor(sessions);
    Achievement::ALL
        .iter()
        .map(|achievement| BadgeStatus {
            achievement: *achievement,
            unlocked: achievement.is_unlocked(count, hours),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn sessions(durations: &[u64]) -> Vec<Session> {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        durations
            .iter()
            .map(|secs| Session::new(*secs, "", date).unwrap())
            .collect()
    }

    fn unlocked(sessions: &[Session]) -> Vec<Achievement> {
        badges(sessions)
            .into_iter()
            .filter(|b| b.unlocked)
            .map(|b| b.achievement)
            .collect()
    }

    #[test]
    fn nothing_unlocked_without_sessions() {
        assert!(unlocked(&[]).is_empty());
        assert_eq!(badges(&[]).len(), Achievement::ALL.len());
    }

    #[test]
    fn first_session_unlocks_on_any_session() {
        assert_eq!(unlocked(&sessions(&[1])), [Achievement::FirstSession]);
    }

    #[test]
    fn hour_badges_use_whole_hours() {
        assert_eq!(
            unlocked(&sessions(&[3599])),
            [Achievement::FirstSession]
        );
        assert_eq!(
            unlocked(&sessions(&[3600, 4 * 3600])),
            [
                Achievement::FirstSession,
                Achievement::OneHour,
                Achievement::FiveHours
            ]
        );
        assert_eq!(unlocked(&sessions(&[36_000])), Achievement::ALL);
    }

    #[test]
    fn badge_serializes_snake_case() {
        let json = serde_json::to_string(&Achievement::FiveHours).unwrap();
        assert_eq!(json, "\"five_hours\"");
    }
}
