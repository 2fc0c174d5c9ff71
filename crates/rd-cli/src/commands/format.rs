//! Format command: render seconds the way the live timer does.

use std::io::Write;

use anyhow::Result;
use rd_core::format_elapsed;

pub fn run<W: Write>(writer: &mut W, seconds: u64) -> Result<()> {
    writeln!(writer, "{}", format_elapsed(seconds))?;
    Ok(())
}
