//! Line-oriented front end for a reading session.
//!
//! Each input line is one user intent (start, pause, stop, ...) or a read of
//! a derived view (status, history, stats, ...). The shell owns the
//! [`ReadingApp`]; ticks are fed in separately by the event loop.

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use rd_core::format::{format_duration, history_lines, progress_bar};
use rd_core::{ArmId, Clock, ReadingApp, TickSource};
use serde::Serialize;
use thiserror::Error;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Start,
    Pause,
    /// Stop and save; `None` uses the pending note.
    Stop(Option<String>),
    /// Set the pending note; `None` clears it.
    Note(Option<String>),
    Status,
    History,
    Stats,
    Achievements,
    Quote,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),
    #[error("'{0}' takes no arguments")]
    UnexpectedArgs(String),
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        let rest = (!rest.is_empty()).then(|| rest.to_string());

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseCommandError::Empty),
            "stop" | "save" => return Ok(Self::Stop(rest)),
            "note" => return Ok(Self::Note(rest)),
            "start" => Self::Start,
            "pause" => Self::Pause,
            "status" => Self::Status,
            "history" => Self::History,
            "stats" => Self::Stats,
            "achievements" => Self::Achievements,
            "quote" => Self::Quote,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        if rest.is_some() {
            return Err(ParseCommandError::UnexpectedArgs(word.to_string()));
        }
        Ok(command)
    }
}

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
Commands:
  start           start or resume the timer
  pause           pause the timer
  stop [notes]    stop and save the session (alias: save)
  note [text]     set or clear the note for the current session
  status          show the timer
  history         list saved sessions
  stats           totals, goal progress and streak
  achievements    milestone badges
  quote           today's quote
  json            dump timer, sessions and stats as JSON
  quit            leave (unsaved time is lost)";

#[derive(Serialize)]
struct JsonDump<'a> {
    timer: rd_core::TimerSnapshot,
    sessions: &'a [rd_core::Session],
    summary: rd_core::Summary,
}

pub struct Shell<S: TickSource, C: Clock> {
    app: ReadingApp<S, C>,
}

impl<S: TickSource, C: Clock> Shell<S, C> {
    pub const fn new(app: ReadingApp<S, C>) -> Self {
        Self { app }
    }

    pub const fn app(&self) -> &ReadingApp<S, C> {
        &self.app
    }

    /// Feed one tick from the event loop.
    pub fn tick(&mut self, arm: ArmId) -> bool {
        self.app.tick(arm)
    }

    /// Parse and run one input line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match line.parse::<ShellCommand>() {
            Ok(command) => self.run(command, out),
            Err(ParseCommandError::Empty) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn run<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<Flow> {
        tracing::debug!(?command, "shell command");
        match command {
            ShellCommand::Start => {
                if self.app.start() {
                    writeln!(out, "Started at {}.", self.app.timer().display())?;
                } else {
                    writeln!(out, "Already running.")?;
                }
            }
            ShellCommand::Pause => {
                if self.app.pause() {
                    writeln!(out, "Paused at {}.", self.app.timer().display())?;
                } else {
                    writeln!(out, "Not running.")?;
                }
            }
            ShellCommand::Stop(notes) => {
                let saved = match notes {
                    Some(notes) => self.app.stop_and_save(notes),
                    None => self.app.stop_and_save_pending(),
                };
                match saved {
                    Some(session) => writeln!(
                        out,
                        "Saved {} on {}.",
                        rd_core::format_elapsed(session.duration_secs()),
                        session.date().format("%Y-%m-%d")
                    )?,
                    None => writeln!(out, "Nothing to save.")?,
                }
            }
            ShellCommand::Note(Some(text)) => {
                self.app.set_notes(text);
                writeln!(out, "Note set.")?;
            }
            ShellCommand::Note(None) => {
                self.app.set_notes(String::new());
                writeln!(out, "Note cleared.")?;
            }
            ShellCommand::Status => self.write_status(out)?,
            ShellCommand::History => write!(out, "{}", history_lines(self.app.sessions()))?,
            ShellCommand::Stats => self.write_stats(out)?,
            ShellCommand::Achievements => self.write_achievements(out)?,
            ShellCommand::Quote => writeln!(out, "{}", self.app.quote())?,
            ShellCommand::Json => {
                let dump = JsonDump {
                    timer: self.app.timer().snapshot(),
                    sessions: self.app.sessions(),
                    summary: self.app.summary(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&dump)?)?;
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<()> {
        let timer = self.app.timer();
        writeln!(out, "{} ({})", timer.display(), timer.state())?;
        if !timer.pending_notes().is_empty() {
            writeln!(out, "Note: {}", timer.pending_notes())?;
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn write_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let summary = self.app.summary();
        let percent = (summary.goal_progress * 100.0).round() as u32;
        let day_word = if summary.streak_days == 1 { "day" } else { "days" };

        writeln!(out, "Sessions:    {}", summary.session_count)?;
        writeln!(out, "Total read:  {}", format_duration(summary.total_seconds))?;
        writeln!(
            out,
            "Goal:        {} {percent:>3}% of {}h",
            progress_bar(summary.goal_progress),
            summary.goal_hours
        )?;
        writeln!(out, "Streak:      {} {day_word}", summary.streak_days)?;
        Ok(())
    }

    fn write_achievements<W: Write>(&self, out: &mut W) -> Result<()> {
        for badge in self.app.summary().badges {
            let mark = if badge.unlocked { 'x' } else { ' ' };
            writeln!(out, "[{mark}] {}", badge.achievement)?;
        }
        Ok(())
    }
}
