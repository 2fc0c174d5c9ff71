//! Text rendering for durations, progress and session history.

use std::fmt::Write;

use crate::session::Session;

/// Formats seconds as `MM:SS`.
///
/// Minutes are zero-padded to at least two digits and never roll over into
/// hours.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Formats seconds as a duration string.
/// Returns "Xh Ym" if >= 1 hour, "Xm" if < 1 hour.
pub fn format_duration(secs: u64) -> String {
    let total_minutes = secs / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Generates a 10-character progress bar from a ratio in `0.0..=1.0`.
/// Any non-zero ratio gets at least one block so it stays visible.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn progress_bar(ratio: f64) -> String {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = if ratio > 0.0 && ratio < 0.05 {
        1
    } else {
        (ratio * 10.0).round() as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Renders the history list, newest first.
pub fn history_lines(sessions: &[Session]) -> String {
    let mut output = String::new();

    if sessions.is_empty() {
        writeln!(output, "No sessions yet.").unwrap();
        return output;
    }

    for session in sessions {
        let date = session.date().format("%Y-%m-%d");
        let elapsed = format_elapsed(session.duration_secs());
        if session.notes().is_empty() {
            writeln!(output, "{date}  {elapsed:>7}").unwrap();
        } else {
            let notes = session.notes().replace('\n', " ");
            writeln!(output, "{date}  {elapsed:>7}  {notes}").unwrap();
        }
    }

    output
}
