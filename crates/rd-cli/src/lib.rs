//! Reading timer CLI library.
//!
//! This crate provides the CLI interface for the reading timer.

mod cli;
pub mod commands;
mod config;
pub mod shell;
pub mod ticks;

pub use cli::{Cli, Commands};
pub use config::Config;
