//! CLI subcommand implementations.

pub mod format;
pub mod quote;
pub mod session;
