//! calibration::io — whitespace-delimited response tables.
//!
//! Purpose
//! -------
//! Load a sampled transfer function from a text table with one row per
//! frequency:
//!
//! ```text
//! # freq [Hz]   real        imag
//!   10.0        1.02e-1    -3.4e-3
//!   20.0        9.87e-2    -6.1e-3
//! ```
//!
//! Conventions
//! -----------
//! - Columns are separated by any run of spaces or tabs.
//! - Everything after a `#` is a comment; lines left blank are skipped.
//! - Rows are framed by a single `csv` reader over the whole stream, which
//!   also skips comment and blank lines; `\r\n` endings are accepted.
//! - Every data row has exactly three numeric columns.
//! - Line numbers in errors are 1-based and count every physical line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array1;
use num_complex::Complex64;

use crate::calibration::errors::{CalError, CalResult};
use crate::calibration::model::FrequencyResponse;

/// Read a response table from `path`.
///
/// Errors
/// ------
/// - `CalError::Io` if the file cannot be opened or read.
/// - `CalError::Parse` for malformed rows; see [`parse_response_table`].
/// - Validation errors from [`FrequencyResponse::new`].
pub fn read_response_file<P: AsRef<Path>>(path: P) -> CalResult<FrequencyResponse> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| CalError::Io { reason: format!("{}: {err}", path.display()) })?;
    log::debug!("reading response table from {}", path.display());
    parse_response_table(file)
}

/// Parse a response table from any reader.
///
/// Errors
/// ------
/// - `CalError::Parse { line, .. }` for a row without exactly three columns
///   or with a non-numeric field.
/// - `CalError::Io` if the underlying reader fails.
/// - `CalError::EmptyInput { name: "freq" }` if no data rows are present.
/// - `CalError::NonMonotonicFrequency` / `CalError::NonFiniteValue` from
///   validation of the parsed columns.
pub fn parse_response_table<R: Read>(reader: R) -> CalResult<FrequencyResponse> {
    // The extra newline terminates a final row that lacks one, so the reader
    // position after every record is one line past it.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .terminator(csv::Terminator::Any(b'\n'))
        .comment(Some(b'#'))
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader.chain(&b"\n"[..]));

    let mut freq = Vec::new();
    let mut values = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line_no = rdr.position().line().saturating_sub(1);
        let fields = row_tokens(&record);
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(CalError::Parse {
                line: line_no,
                reason: format!(
                    "expected 3 columns (frequency, real, imaginary), found {}",
                    fields.len()
                ),
            });
        }
        let parse = |token: &str| {
            token.parse::<f64>().map_err(|err| CalError::Parse {
                line: line_no,
                reason: format!("invalid number {token:?}: {err}"),
            })
        };
        freq.push(parse(fields[0])?);
        values.push(Complex64::new(parse(fields[1])?, parse(fields[2])?));
    }

    log::debug!("parsed {} response rows", freq.len());
    FrequencyResponse::new(Array1::from(freq), Array1::from(values))
}

/// Data tokens of one row: space-delimited fields split again on tabs, up
/// to the first `#`.
fn row_tokens(record: &csv::StringRecord) -> Vec<&str> {
    let mut tokens = Vec::new();
    for field in record.iter().flat_map(|field| field.split('\t')) {
        let (data, commented) = match field.find('#') {
            Some(at) => (&field[..at], true),
            None => (field, false),
        };
        let data = data.trim();
        if !data.is_empty() {
            tokens.push(data);
        }
        if commented {
            break;
        }
    }
    tokens
}
