//! calibration::validation — shared input guards for calibration routines.
//!
//! Purpose
//! -------
//! Centralize the checks every calibration entry point needs before doing
//! arithmetic: non-empty inputs, matching lengths, finite values, and a
//! strictly increasing frequency grid.
//!
//! Key behaviors
//! -------------
//! - Map violations into structured [`CalError`] values naming the
//!   offending argument and index.
//! - Check shapes first, then values, so a length mismatch is reported even
//!   when the data also contains NaNs.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_calibration_inputs`] before computing open-loop gains.
//! - Call [`validate_frequency_grid`] before fitting splines to data on an
//!   arbitrary frequency array.
//! - Call [`validate_response_pair`] before dividing two responses.

use num_complex::Complex64;

use crate::calibration::errors::{CalError, CalResult};

/// Validate a frequency grid: non-empty, finite, strictly increasing.
///
/// Errors
/// ------
/// - `CalError::EmptyInput { name: "freq" }`.
/// - `CalError::NonFiniteValue { name: "freq", index }`.
/// - `CalError::NonMonotonicFrequency { index, previous, current }` for the
///   first `i` with `freq[i] <= freq[i - 1]`.
pub fn validate_frequency_grid(freq: &[f64]) -> CalResult<()> {
    if freq.is_empty() {
        return Err(CalError::EmptyInput { name: "freq" });
    }
    if let Some(index) = freq.iter().position(|f| !f.is_finite()) {
        return Err(CalError::NonFiniteValue { name: "freq", index });
    }
    for (i, pair) in freq.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(CalError::NonMonotonicFrequency {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

/// Validate the length and finiteness of one complex response array.
pub fn validate_response(name: &'static str, values: &[Complex64], expected: usize) -> CalResult<()> {
    if values.is_empty() {
        return Err(CalError::EmptyInput { name });
    }
    if values.len() != expected {
        return Err(CalError::LengthMismatch { name, expected, actual: values.len() });
    }
    if let Some(index) = values.iter().position(|z| !z.is_finite()) {
        return Err(CalError::NonFiniteValue { name, index });
    }
    Ok(())
}

/// Validate `(freq, C, D, A)` for transfer-function estimation.
///
/// Shapes are checked for all four arrays before any value check, so the
/// error for `freq = [1, 2]`, `C = [NaN]` is a length mismatch.
pub fn validate_calibration_inputs(
    freq: &[f64], c: &[Complex64], d: &[Complex64], a: &[Complex64],
) -> CalResult<()> {
    if freq.is_empty() {
        return Err(CalError::EmptyInput { name: "freq" });
    }
    let n = freq.len();
    for (name, values) in [("C", c), ("D", d), ("A", a)] {
        if values.is_empty() {
            return Err(CalError::EmptyInput { name });
        }
        if values.len() != n {
            return Err(CalError::LengthMismatch { name, expected: n, actual: values.len() });
        }
    }
    validate_frequency_grid(freq)?;
    validate_response("C", c, n)?;
    validate_response("D", d, n)?;
    validate_response("A", a, n)?;
    Ok(())
}

/// Validate two responses that are divided element-wise.
///
/// Shapes are checked for both arrays before any value check.
///
/// Errors
/// ------
/// - `CalError::EmptyInput` / `CalError::LengthMismatch` for bad shapes.
/// - `CalError::NonFiniteValue { name: "Rtrue" | "Rmeasured", index }` for
///   the first NaN/±inf element.
pub fn validate_response_pair(r_true: &[Complex64], r_measured: &[Complex64]) -> CalResult<()> {
    if r_true.is_empty() {
        return Err(CalError::EmptyInput { name: "Rtrue" });
    }
    if r_measured.is_empty() {
        return Err(CalError::EmptyInput { name: "Rmeasured" });
    }
    if r_measured.len() != r_true.len() {
        return Err(CalError::LengthMismatch {
            name: "Rmeasured",
            expected: r_true.len(),
            actual: r_measured.len(),
        });
    }
    validate_response("Rtrue", r_true, r_true.len())?;
    validate_response("Rmeasured", r_measured, r_true.len())
}
