//! Interactive reading session.
//!
//! Runs a single-threaded event loop that interleaves input lines with
//! ticks from the armed [`IntervalTicks`] source, so every mutation of the
//! timer and the session log happens on one thread, one at a time.

use std::io::Write;

use anyhow::{Context, Result};
use rd_core::{ReadingApp, SystemClock};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::Config;
use crate::shell::{Flow, Shell};
use crate::ticks::IntervalTicks;

/// Run the session until `quit` or end of input.
pub async fn run<R, W>(input: R, out: &mut W, config: &Config) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let goal = config.goal().context("invalid daily_goal_hours")?;
    let (ticks, mut rx) = IntervalTicks::channel();
    let mut shell = Shell::new(ReadingApp::new(ticks, SystemClock, goal));

    if config.show_quote_on_start {
        writeln!(out, "{}", shell.app().quote())?;
    }
    writeln!(out, "Type 'help' for commands.")?;
    out.flush()?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            Some(arm) = rx.recv() => {
                shell.tick(arm);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                if shell.handle_line(&line, out)? == Flow::Quit {
                    break;
                }
                out.flush()?;
            }
        }
    }

    let unsaved = shell.app().timer().elapsed_secs();
    if unsaved > 0 {
        writeln!(out, "Discarded {} of unsaved time.", shell.app().timer().display())?;
    }
    tracing::debug!(
        sessions = shell.app().sessions().len(),
        unsaved_secs = unsaved,
        "session closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn quiet_config() -> Config {
        Config {
            show_quote_on_start: false,
            ..Config::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn scripted_session_without_ticks() {
        let input: &[u8] = b"note Dune\nstart\nstatus\nstop\nhistory\nbogus\nquit\nstart\n";
        let mut output = Vec::new();
        run(input, &mut output, &quiet_config()).await.unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
        Type 'help' for commands.
        Note set.
        Started at 00:00.
        00:00 (running)
        Note: Dune
        Nothing to save.
        No sessions yet.
        error: unknown command: bogus (try 'help')
        ");
    }

    #[tokio::test(start_paused = true)]
    async fn end_of_input_ends_the_session() {
        let input: &[u8] = b"start\n";
        let mut output = Vec::new();
        run(input, &mut output, &quiet_config()).await.unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("Started at 00:00.\n"), "{output}");
    }

    #[tokio::test]
    async fn rejects_invalid_goal() {
        let config = Config {
            daily_goal_hours: -1.0,
            ..quiet_config()
        };
        let mut output = Vec::new();
        let err = run(&b""[..], &mut output, &config).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid daily_goal_hours");
    }

    #[tokio::test]
    async fn prints_quote_when_configured() {
        let mut output = Vec::new();
        run(&b"quit\n"[..], &mut output, &Config::default())
            .await
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with('"'), "{output}");
        assert!(output.ends_with("Type 'help' for commands.\n"));
    }
}
