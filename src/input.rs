use std::io::BufRead;

use crate::domain::line::{InputLine, MAX_LINE_LEN};
use crate::error::{InfraResult, InfrastructureError};

/// Read one line from `reader`, consuming at most [`MAX_LINE_LEN`] characters
/// of content.
///
/// Stops at a `\n` terminator, end of stream, or the cap, whichever comes
/// first. The terminator is consumed from the stream but never stored. When
/// the cap cuts a line short, the excess bytes and their terminator are left
/// unread in the stream.
pub fn read_line_capped<R: BufRead>(reader: &mut R) -> InfraResult<InputLine> {
    let mut buf: Vec<u8> = Vec::with_capacity(MAX_LINE_LEN);
    let mut saw_terminator = false;

    while buf.len() < MAX_LINE_LEN {
        let chunk = reader
            .fill_buf()
            .map_err(|source| InfrastructureError::StdinRead { source })?;
        if chunk.is_empty() {
            // End of stream reads as a terminated line.
            break;
        }
        let budget = MAX_LINE_LEN - buf.len();
        match chunk.iter().position(|&b| b == b'\n') {
            Some(pos) if pos <= budget => {
                buf.extend_from_slice(&chunk[..pos]);
                reader.consume(pos + 1);
                saw_terminator = true;
                break;
            }
            _ => {
                let take = budget.min(chunk.len());
                buf.extend_from_slice(&chunk[..take]);
                reader.consume(take);
            }
        }
    }

    // CRLF: the carriage return belongs to the terminator, not the line.
    if saw_terminator && buf.last() == Some(&b'\r') {
        buf.pop();
    }

    Ok(InputLine::new(String::from_utf8_lossy(&buf).into_owned()))
}
