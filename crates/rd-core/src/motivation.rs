//! Motivational reading quotes.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: Option<&'static str>,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "Reading is dreaming with open eyes.",
        author: None,
    },
    Quote {
        text: "A reader lives a thousand lives before he dies.",
        author: Some("George R. R. Martin"),
    },
    Quote {
        text: "There is no friend as loyal as a book.",
        author: Some("Ernest Hemingway"),
    },
    Quote {
        text: "Once you learn to read, you will be forever free.",
        author: Some("Frederick Douglass"),
    },
    Quote {
        text: "Today a reader, tomorrow a leader.",
        author: Some("Margaret Fuller"),
    },
];

/// The quote shown on `date`. Stable for a whole day.
pub fn quote_for(date: NaiveDate) -> &'static Quote {
    let day = usize::try_from(date.num_days_from_ce().unsigned_abs()).unwrap_or_default();
    &QUOTES[day % QUOTES.len()]
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.author {
            Some(author) => write!(f, "\"{}\" ({author})", self.text),
            None => write!(f, "\"{}\"", self.text),
        }
    }
}
