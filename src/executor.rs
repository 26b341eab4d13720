//! Line-at-a-time executor.
//!
//! Reads one line, transforms it, writes it, then reads the next. Nothing
//! is batched: a failing line stops the run before anything after it is
//! read, and every earlier line has already been written.

use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::case_style::FieldCaser;
use crate::error::FieldcaseError;
use crate::line::LineTransformer;

/// Run `transformer` over every line of `input`, writing to `output`.
///
/// Returns the number of lines written. Lines are read as raw bytes and end
/// at `\n`; a trailing `\r` is dropped too. Output lines always end with
/// `\n`. Bytes that are not UTF-8 are only a problem in targeted fields.
pub fn execute<R, W, C>(
    transformer: &LineTransformer<'_, C>,
    mut input: R,
    output: &mut W,
) -> Result<usize, FieldcaseError>
where
    R: BufRead,
    W: Write,
    C: FieldCaser + ?Sized,
{
    let mut count = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(FieldcaseError::Input)?;
        if read == 0 {
            break;
        }
        let line_number = count + 1;

        let line = strip_line_ending(&buf);
        let result = transformer.transform_bytes(line_number, line)?;
        trace!(
            "line {line_number}: {:?} -> {:?}",
            String::from_utf8_lossy(line),
            String::from_utf8_lossy(&result)
        );

        output.write_all(&result).map_err(FieldcaseError::Output)?;
        output.write_all(b"\n").map_err(FieldcaseError::Output)?;
        count = line_number;
    }

    output.flush().map_err(FieldcaseError::Output)?;
    debug!("processed {count} lines with {}", transformer.style_name());
    Ok(count)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
