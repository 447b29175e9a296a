use std::io::Write;

use crate::domain::tally::Tally;
use crate::error::{PresentationError, PresentationResult};

/// Prompt shown before the line is read. No trailing newline.
pub const PROMPT: &str = "Enter a line of string: ";

/// Write the prompt and flush it so it is visible before the blocking read.
pub fn write_prompt<W: Write>(out: &mut W) -> PresentationResult<()> {
    write!(out, "{PROMPT}")
        .and_then(|()| out.flush())
        .map_err(|source| PresentationError::PromptWrite { source })
}

/// Write the four category counts, one per line, in fixed order.
pub fn write_report<W: Write>(out: &mut W, tally: &Tally) -> PresentationResult<()> {
    render(out, tally).map_err(|source| PresentationError::ReportWrite { source })
}

fn render<W: Write>(out: &mut W, tally: &Tally) -> std::io::Result<()> {
    writeln!(out, "Vowels: {}", tally.vowels)?;
    writeln!(out, "Consonants: {}", tally.consonants)?;
    writeln!(out, "Digits: {}", tally.digits)?;
    writeln!(out, "White spaces: {}", tally.spaces)?;
    out.flush()
}
