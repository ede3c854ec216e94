//! calibration::errors — unified error type for the calibration pipeline.
//!
//! Purpose
//! -------
//! Define [`CalError`], the error type returned by transfer-function
//! estimation, error decomposition, strain correction, and response-file
//! reading, together with the [`CalResult`] alias. Lower-level errors from
//! `numerics` and `signal` are wrapped so that a single `?` chain works end
//! to end.
//!
//! Key behaviors
//! -------------
//! - Shape problems (empty inputs, mismatched lengths) are reported before
//!   any arithmetic; [`CalError::is_shape_mismatch`] groups them.
//! - Exact zeros in a denominator are reported as
//!   [`CalError::DivisionSingularity`] with the bin index (and frequency
//!   when known) instead of silently producing Inf/NaN.
//! - Non-increasing frequency grids are reported as
//!   [`CalError::NonMonotonicFrequency`] before any spline is fitted.
//! - With the `python-bindings` feature, every variant converts to a Python
//!   `ValueError` carrying the `Display` message.
//!
//! Conventions
//! -----------
//! - Indices are 0-based; file line numbers are 1-based.
//! - `name` payloads identify the offending argument (`"freq"`, `"C"`,
//!   `"D"`, `"A"`, `"Rtrue"`, `"Rmeasured"`, ...).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::numerics::errors::NumericsError;
use crate::signal::errors::SignalError;

pub type CalResult<T> = Result<T, CalError>;

/// Unified error type for calibration routines.
#[derive(Debug, Clone, PartialEq)]
pub enum CalError {
    // ---- Shape ----
    /// An input array has no elements.
    EmptyInput { name: &'static str },

    /// An input array's length differs from the reference length.
    LengthMismatch { name: &'static str, expected: usize, actual: usize },

    // ---- Values ----
    /// An input element is NaN/±inf.
    NonFiniteValue { name: &'static str, index: usize },

    /// Frequency array is not strictly increasing at `index`.
    NonMonotonicFrequency { index: usize, previous: f64, current: f64 },

    /// Two responses that must share a frequency grid do not.
    FrequencyGridMismatch { name: &'static str, index: usize },

    /// Drift factor γ must be finite.
    InvalidGamma { re: f64, im: f64 },

    /// Substitution value for singular denominators must be finite and non-zero.
    InvalidEpsilon { value: f64 },

    /// Parametric kernel coefficients must be finite.
    InvalidKernelParameter { name: &'static str, value: f64 },

    /// Two options cannot be used together.
    IncompatibleOptions { reason: &'static str },

    // ---- Arithmetic ----
    /// A denominator is exactly zero.
    DivisionSingularity { index: usize, frequency: Option<f64> },

    // ---- Wrapped subsystem errors ----
    /// Spline/phase helper failure.
    Numerics(NumericsError),

    /// Series construction or FFT failure.
    Signal(SignalError),

    // ---- Response files ----
    /// File could not be opened or read.
    Io { reason: String },

    /// A row of a response file is malformed.
    Parse { line: u64, reason: String },
}

impl CalError {
    /// `true` for errors caused by empty or mismatched input lengths.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, CalError::EmptyInput { .. } | CalError::LengthMismatch { .. })
    }
}

impl std::error::Error for CalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalError::Numerics(err) => Some(err),
            CalError::Signal(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            CalError::EmptyInput { name } => write!(f, "Input array `{name}` is empty."),
            CalError::LengthMismatch { name, expected, actual } => {
                write!(f, "Length mismatch for `{name}`: expected {expected}, got {actual}")
            }
            // ---- Values ----
            CalError::NonFiniteValue { name, index } => {
                write!(f, "Element {index} of `{name}` is non-finite.")
            }
            CalError::NonMonotonicFrequency { index, previous, current } => write!(
                f,
                "Frequencies must be strictly increasing; freq[{index}] = {current} <= {previous}"
            ),
            CalError::FrequencyGridMismatch { name, index } => {
                write!(f, "Frequency grid of `{name}` differs from the reference at index {index}")
            }
            CalError::InvalidGamma { re, im } => {
                write!(f, "Drift factor gamma must be finite; got: {re}{im:+}i")
            }
            CalError::InvalidEpsilon { value } => {
                write!(f, "Singularity substitute must be finite and non-zero; got: {value}")
            }
            CalError::InvalidKernelParameter { name, value } => {
                write!(f, "Kernel parameter `{name}` must be finite; got: {value}")
            }
            CalError::IncompatibleOptions { reason } => write!(f, "Incompatible options: {reason}"),
            // ---- Arithmetic ----
            CalError::DivisionSingularity { index, frequency: Some(freq) } => {
                write!(f, "Division by zero at index {index} (f = {freq} Hz)")
            }
            CalError::DivisionSingularity { index, frequency: None } => {
                write!(f, "Division by zero at index {index}")
            }
            // ---- Wrapped subsystem errors ----
            CalError::Numerics(err) => write!(f, "Numerics error: {err}"),
            CalError::Signal(err) => write!(f, "Signal error: {err}"),
            // ---- Response files ----
            CalError::Io { reason } => write!(f, "I/O error: {reason}"),
            CalError::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
        }
    }
}

impl From<NumericsError> for CalError {
    fn from(err: NumericsError) -> CalError {
        match err {
            NumericsError::NonMonotonic { index, previous, current } => {
                CalError::NonMonotonicFrequency { index, previous, current }
            }
            other => CalError::Numerics(other),
        }
    }
}

impl From<SignalError> for CalError {
    fn from(err: SignalError) -> CalError {
        CalError::Signal(err)
    }
}

impl From<csv::Error> for CalError {
    fn from(err: csv::Error) -> CalError {
        let line = err.position().map_or(0, |p| p.line());
        match err.kind() {
            csv::ErrorKind::Io(io) => CalError::Io { reason: io.to_string() },
            _ => CalError::Parse { line, reason: err.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<CalError> for PyErr {
    fn from(err: CalError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<NumericsError> for PyErr {
    fn from(err: NumericsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<SignalError> for PyErr {
    fn from(err: SignalError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
