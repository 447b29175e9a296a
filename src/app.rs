use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::domain::line::InputLine;
use crate::domain::tally::Tally;
use crate::{input, presentation};

/// Run the classifier against process stdin/stdout.
pub fn run() -> Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_with(&mut stdin, &mut stdout)
}

/// Prompt, read one capped line, classify it, and emit the report.
///
/// Strict order: prompt, blocking read, single classification pass, report.
pub fn run_with<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<()> {
    presentation::write_prompt(out).context("failed to write prompt")?;

    let line = match input::read_line_capped(reader) {
        Ok(line) => line,
        Err(e) => {
            // An unavailable input stream reads as an empty line.
            eprintln!("[warn] {e}");
            InputLine::default()
        }
    };

    let tally = Tally::from_line(&line);
    presentation::write_report(out, &tally).context("failed to emit report")?;
    Ok(())
}
