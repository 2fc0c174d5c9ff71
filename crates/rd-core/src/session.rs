//! Committed reading sessions and the newest-first session log.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Identifier of a committed session.
///
/// Backed by a UUIDv7, so identifiers issued later compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Issue a fresh identifier from the current time.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed reading interval.
///
/// Sessions are immutable and always carry a non-zero duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    duration_secs: u64,
    notes: String,
    date: NaiveDate,
}

impl Session {
    /// Build a session, or `None` when `duration_secs` is zero.
    pub fn new(duration_secs: u64, notes: impl Into<String>, date: NaiveDate) -> Option<Self> {
        if duration_secs == 0 {
            return None;
        }
        Some(Self {
            id: SessionId::new(),
            duration_secs,
            notes: notes.into(),
            date,
        })
    }

    pub const fn id(&self) -> SessionId {
        self.id
    }

    pub const fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Append-only sequence of sessions, newest first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SessionLog {
    sessions: Vec<Session>,
}

impl SessionLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Prepend a session so it becomes the newest entry.
    pub fn record(&mut self, session: Session) {
        self.sessions.insert(0, session);
    }

    /// Read-only view, newest first.
    pub fn as_slice(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }
}

impl AsRef<[Session]> for SessionLog {
    fn as_ref(&self) -> &[Session] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a SessionLog {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
