//! numerics::phase — principal-value phase, unwrapping, and unit handling.
//!
//! Purpose
//! -------
//! Provide the phase primitives used when decomposing complex frequency
//! responses: the principal argument of a complex value, NumPy-compatible
//! phase unwrapping, and radian/degree presentation.
//!
//! Key behaviors
//! -------------
//! - [`angle`] returns arg z in the half-open interval (−π, π]; the value
//!   −π produced by `atan2(-0.0, x < 0)` is mapped to +π.
//! - [`unwrap_phase`] adds integer multiples of 2π so that consecutive
//!   samples never differ by more than π, matching `numpy.unwrap` with the
//!   default discontinuity (π) and period (2π).
//! - [`PhaseUnit`] selects radians or degrees for reported phases.
//!
//! Invariants & assumptions
//! ------------------------
//! - Unwrapping preserves the first sample and the length of the input.
//! - Non-finite samples propagate as in NumPy: they are not corrected and
//!   poison the cumulative correction from that point on.

use std::f64::consts::PI;
use std::str::FromStr;

use num_complex::Complex64;

use crate::numerics::errors::NumericsError;

/// Principal argument of `z` in (−π, π].
#[inline]
pub fn angle(z: Complex64) -> f64 {
    let phi = z.im.atan2(z.re);
    if phi <= -PI { PI } else { phi }
}

/// Element-wise [`angle`] over a slice of complex values.
pub fn angles(values: &[Complex64]) -> Vec<f64> {
    values.iter().map(|&z| angle(z)).collect()
}

/// Wrap an arbitrary phase (radians) into (−π, π].
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    let tau = 2.0 * PI;
    let wrapped = phase - tau * ((phase + PI) / tau).floor();
    // `wrapped` is in [−π, π); move the lower edge to the upper one.
    if wrapped <= -PI { wrapped + tau } else { wrapped }
}

/// Unwrap a phase sequence (radians).
///
/// Parameters
/// ----------
/// - `phase`: `&[f64]`
///   Sampled phase in radians, typically the principal values returned by
///   [`angles`].
///
/// Returns
/// -------
/// `Vec<f64>`
///   Phase of the same length with the first sample unchanged and every
///   adjacent difference in [−π, π].
///
/// Notes
/// -----
/// - Follows `numpy.unwrap`: the correction for a step `dd` is
///   `mod(dd + π, 2π) − π − dd`, where a step of exactly +π keeps its sign
///   and steps already smaller than π in magnitude are left untouched.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phase.len());
    let Some(&first) = phase.first() else {
        return out;
    };
    out.push(first);

    let tau = 2.0 * PI;
    let mut correction = 0.0;
    for pair in phase.windows(2) {
        let dd = pair[1] - pair[0];
        let mut ddmod = (dd + PI).rem_euclid(tau) - PI;
        if ddmod == -PI && dd > 0.0 {
            ddmod = PI;
        }
        if dd.abs() >= PI {
            correction += ddmod - dd;
        }
        out.push(pair[1] + correction);
    }
    out
}

/// Unit used when reporting phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseUnit {
    #[default]
    Radians,
    Degrees,
}

impl PhaseUnit {
    /// Convert a phase expressed in radians into this unit.
    #[inline]
    pub fn from_radians(self, phase: f64) -> f64 {
        match self {
            PhaseUnit::Radians => phase,
            PhaseUnit::Degrees => phase.to_degrees(),
        }
    }
}

impl FromStr for PhaseUnit {
    type Err = NumericsError;

    /// Parse a phase unit (case-insensitive): `"radians"`/`"rad"` or
    /// `"degrees"`/`"deg"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "radians" | "rad" => Ok(PhaseUnit::Radians),
            "degrees" | "deg" => Ok(PhaseUnit::Degrees),
            _ => Err(NumericsError::InvalidOption {
                name: s.to_string(),
                reason: "Valid phase units are 'radians' or 'degrees'.",
            }),
        }
    }
}

/// How a sequence of phases should be presented.
///
/// Fields
/// ------
/// - `unwrap`: remove 2π discontinuities before reporting.
/// - `unit`: radians (default) or degrees; conversion happens after
///   unwrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseOptions {
    pub unwrap: bool,
    pub unit: PhaseUnit,
}

impl PhaseOptions {
    pub fn new(unwrap: bool, unit: PhaseUnit) -> PhaseOptions {
        PhaseOptions { unwrap, unit }
    }

    /// Apply these options to principal-value phases in radians.
    pub fn present(&self, phase: Vec<f64>) -> Vec<f64> {
        let phase = if self.unwrap { unwrap_phase(&phase) } else { phase };
        match self.unit {
            PhaseUnit::Radians => phase,
            PhaseUnit::Degrees => phase.into_iter().map(f64::to_degrees).collect(),
        }
    }
}
