//! numerics — phase, decibel, and spline building blocks.
//!
//! Purpose
//! -------
//! Collect the small numerical primitives the calibration pipeline is built
//! from: principal-value phase and phase unwrapping, amplitude/decibel
//! conversion, and zero-smoothing interpolating splines with an explicit
//! extrapolation policy.
//!
//! Key behaviors
//! -------------
//! - [`angle`], [`unwrap_phase`], [`wrap_phase`], and [`PhaseOptions`]
//!   decompose and present complex phases (radians or degrees).
//! - [`amp_to_db`] / [`db_to_amp`] convert between amplitudes and decibels.
//! - [`InterpolatingSpline`] fits linear or not-a-knot cubic splines and
//!   evaluates them on arbitrary grids, reporting [`DomainCoverage`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything here is pure and allocation-light; no logging, no global
//!   state.
//! - Failures are reported via [`NumericsError`]; nothing panics on user
//!   input.
//!
//! Downstream usage
//! ----------------
//! - `calibration` uses the spline and phase helpers to resample the
//!   correction kernel onto FFT bins and converts [`NumericsError`] into
//!   its own error type.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its edge cases (±π handling,
//!   extrapolation policies, not-a-knot exactness on cubics, dB round
//!   trips).

pub mod errors;
pub mod phase;
pub mod spline;
pub mod units;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{NumericsError, NumericsResult};
pub use self::phase::{PhaseOptions, PhaseUnit, angle, angles, unwrap_phase, wrap_phase};
pub use self::spline::{
    DomainCoverage, Extrapolation, InterpolatingSpline, SplineDegree, SplineEvaluation,
    SplineOptions,
};
pub use self::units::{amp_to_db, complex_amp_to_db, db_to_amp};
