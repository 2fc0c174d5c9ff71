//! Quote command for printing the day's motivational quote.

use std::io::Write;

use anyhow::Result;
use rd_core::{Clock, quote_for};

pub fn run<W: Write>(writer: &mut W, clock: &impl Clock) -> Result<()> {
    writeln!(writer, "{}", quote_for(clock.today()))?;
    Ok(())
}
