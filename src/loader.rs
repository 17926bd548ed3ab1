//! Reads newline-delimited numeric files.
//!
//! Each line contributes at most one value: the decimal number it starts with, after any
//! leading whitespace. Text following the number is ignored, so `10 ohm` loads as `10`. Lines
//! that are blank or do not start with a number are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Loads every value from the file at `path`, in file order.
pub fn load_values(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
    let values = read_values(BufReader::new(file)).map_err(|e| Error::unreadable(path, e))?;
    debug!(path = %path.display(), count = values.len(), "loaded values");
    Ok(values)
}

/// Streams values out of `reader` in a single pass.
/// # Examples
/// ```
///     # use resistor_pair::loader::read_values;
///     let vals = read_values("100\n  4.7e3 ohm\nabc\n\n-2.5\n".as_bytes()).unwrap();
///     assert_eq!(vals, vec![100.0, 4700.0, -2.5]);
/// ```
pub fn read_values(mut reader: impl BufRead) -> std::io::Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    while reader.read_until(b'\n', &mut buf)? > 0 {
        lineno += 1;
        let line = String::from_utf8_lossy(&buf);
        match leading_number(&line) {
            Some(v) => values.push(v),
            None => debug!(line = lineno, "skipping line without a leading number"),
        }
        buf.clear();
    }
    Ok(values)
}

fn digits(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses the longest decimal number at the start of `line`.
fn leading_number(line: &str) -> Option<f64> {
    let text = line.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digits(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse().ok()
}
