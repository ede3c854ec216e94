//! numerics::errors — error type for phase, unit, and spline helpers.
//!
//! Purpose
//! -------
//! Provide [`NumericsError`] and the [`NumericsResult`] alias for the
//! low-level numerical building blocks (interpolating splines and option
//! parsing). Higher layers (`calibration`) convert these into their own
//! error type via `From`.
//!
//! Conventions
//! -----------
//! - Indices are 0-based.
//! - Messages describe the violated constraint and embed the offending value.

pub type NumericsResult<T> = Result<T, NumericsError>;

/// Error conditions raised by spline fitting/evaluation and option parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericsError {
    // ---- Fitting ----
    /// Abscissa and ordinate arrays differ in length.
    LengthMismatch { expected: usize, actual: usize },

    /// Too few knots for the requested spline degree.
    InsufficientPoints { needed: usize, actual: usize },

    /// Abscissa is not strictly increasing at `index` (x[index] <= x[index - 1]).
    NonMonotonic { index: usize, previous: f64, current: f64 },

    /// A knot coordinate is NaN/±inf.
    NonFinite { index: usize, value: f64 },

    /// The spline coefficient system could not be solved.
    SingularSystem { row: usize },

    // ---- Evaluation ----
    /// Evaluation point lies outside the fitted domain and extrapolation is disabled.
    OutOfDomain { x: f64, lower: f64, upper: f64 },

    /// The linear interpolation table rejected the knots.
    Interpolator { reason: String },

    // ---- Option parsing ----
    /// Unrecognized option string.
    InvalidOption { name: String, reason: &'static str },
}

impl std::error::Error for NumericsError {}

impl std::fmt::Display for NumericsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Fitting ----
            NumericsError::LengthMismatch { expected, actual } => {
                write!(f, "Spline input length mismatch: expected {expected}, got {actual}")
            }
            NumericsError::InsufficientPoints { needed, actual } => {
                write!(f, "Spline needs at least {needed} points, got {actual}")
            }
            NumericsError::NonMonotonic { index, previous, current } => write!(
                f,
                "Spline abscissa must be strictly increasing; x[{index}] = {current} <= {previous}"
            ),
            NumericsError::NonFinite { index, value } => {
                write!(f, "Spline knot at index {index} is non-finite: {value}")
            }
            NumericsError::SingularSystem { row } => {
                write!(f, "Spline coefficient system is singular at row {row}")
            }
            // ---- Evaluation ----
            NumericsError::OutOfDomain { x, lower, upper } => write!(
                f,
                "Evaluation point {x} lies outside the fitted domain [{lower}, {upper}]"
            ),
            NumericsError::Interpolator { reason } => {
                write!(f, "Linear interpolation table could not be built: {reason}")
            }
            // ---- Option parsing ----
            NumericsError::InvalidOption { name, reason } => {
                write!(f, "Invalid option {name:?}. {reason}")
            }
        }
    }
}
