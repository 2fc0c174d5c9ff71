//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reading session timer.
///
/// Time reading sessions, attach notes, and see totals, streaks and
/// milestones. Everything lives in memory for the length of the session.
#[derive(Debug, Parser)]
#[command(name = "rd", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open an interactive reading session.
    Session,

    /// Print today's reading quote.
    Quote,

    /// Render a number of seconds as the timer shows it (MM:SS).
    Format {
        /// Elapsed seconds.
        seconds: u64,
    },
}
