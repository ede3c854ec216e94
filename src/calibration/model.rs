//! calibration::model — sampled loop model and response-function estimation.
//!
//! Purpose
//! -------
//! Hold the three sampled transfer functions of a detector's differential
//! arm loop (sensing `C`, digital filter `D`, actuation `A`) on a common
//! frequency grid and estimate the response function
//!
//! ```text
//!   G(f) = C(f) · D(f) · A(f)
//!   R(f) = (1 + γ G(f)) / (γ C(f))
//! ```
//!
//! for a complex drift factor `γ` on the sensing function.
//!
//! Key behaviors
//! -------------
//! - [`CalibrationModel::new`] validates shapes and values once; every
//!   later evaluation relies on those checks.
//! - [`CalibrationModel::response`] fails with
//!   [`CalError::DivisionSingularity`] at the first bin where `γ C(f) == 0`.
//! - [`transfer_function`] is the stateless slice-based entry point.
//!
//! Invariants & assumptions
//! ------------------------
//! - `freq` is non-empty, finite, and strictly increasing.
//! - `C`, `D`, `A` have the length of `freq` and are finite.
//! - Responses are unitless complex numbers; only ratios are meaningful.

use ndarray::Array1;
use num_complex::Complex64;

use crate::calibration::errors::{CalError, CalResult};
use crate::calibration::validation::{
    validate_calibration_inputs, validate_frequency_grid, validate_response,
};
use crate::numerics::phase::{PhaseOptions, angles};
use crate::numerics::units::complex_amp_to_db;

const UNITY: Complex64 = Complex64::new(1.0, 0.0);

/// FrequencyResponse — complex values sampled on a frequency grid.
///
/// Fields
/// ------
/// - `freq`: strictly increasing frequencies in Hz.
/// - `values`: complex response at each frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    freq: Array1<f64>,
    values: Array1<Complex64>,
}

impl FrequencyResponse {
    /// Build a validated response.
    ///
    /// Errors
    /// ------
    /// - `CalError::EmptyInput` / `CalError::LengthMismatch` for shape problems.
    /// - `CalError::NonFiniteValue` for NaN/±inf in either array.
    /// - `CalError::NonMonotonicFrequency` if `freq` is not strictly increasing.
    pub fn new(freq: Array1<f64>, values: Array1<Complex64>) -> CalResult<FrequencyResponse> {
        if freq.is_empty() {
            return Err(CalError::EmptyInput { name: "freq" });
        }
        validate_response("values", &values.to_vec(), freq.len())?;
        validate_frequency_grid(&freq.to_vec())?;
        Ok(FrequencyResponse { freq, values })
    }

    /// Build without validation; callers guarantee the invariants.
    pub(crate) fn from_validated(freq: Array1<f64>, values: Array1<Complex64>) -> FrequencyResponse {
        FrequencyResponse { freq, values }
    }

    pub fn freq(&self) -> &Array1<f64> {
        &self.freq
    }

    pub fn values(&self) -> &Array1<Complex64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }

    /// `(frequency, value)` pairs in grid order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.freq.iter().copied().zip(self.values.iter().copied())
    }

    pub fn into_parts(self) -> (Array1<f64>, Array1<Complex64>) {
        (self.freq, self.values)
    }

    /// `|R(f)|` at each frequency.
    pub fn amplitude(&self) -> Array1<f64> {
        self.values.mapv(|z| z.norm())
    }

    /// `20 log10 |R(f)|` at each frequency.
    pub fn amplitude_db(&self) -> Array1<f64> {
        self.values.mapv(complex_amp_to_db)
    }

    /// Phase at each frequency, optionally unwrapped and in degrees.
    pub fn phase(&self, options: PhaseOptions) -> Array1<f64> {
        let wrapped = angles(&self.values.to_vec());
        Array1::from(options.present(wrapped))
    }

    /// Index of the first bin whose frequency differs from `other`'s.
    pub(crate) fn grid_mismatch(&self, other: &FrequencyResponse) -> Option<usize> {
        if self.len() != other.len() {
            return Some(self.len().min(other.len()));
        }
        self.freq.iter().zip(other.freq.iter()).position(|(a, b)| a != b)
    }
}

/// CalibrationModel — sensing, digital, and actuation responses on one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationModel {
    freq: Array1<f64>,
    sensing: Array1<Complex64>,
    digital: Array1<Complex64>,
    actuation: Array1<Complex64>,
}

impl CalibrationModel {
    /// Build a validated model.
    ///
    /// Parameters
    /// ----------
    /// - `freq`: strictly increasing frequencies in Hz.
    /// - `sensing`: `C(f)`.
    /// - `digital`: `D(f)`.
    /// - `actuation`: `A(f)`.
    ///
    /// Errors
    /// ------
    /// - Shape errors (`EmptyInput`, `LengthMismatch`) before value errors
    ///   (`NonFiniteValue`, `NonMonotonicFrequency`).
    pub fn new(
        freq: Array1<f64>, sensing: Array1<Complex64>, digital: Array1<Complex64>,
        actuation: Array1<Complex64>,
    ) -> CalResult<CalibrationModel> {
        validate_calibration_inputs(
            &freq.to_vec(),
            &sensing.to_vec(),
            &digital.to_vec(),
            &actuation.to_vec(),
        )?;
        Ok(CalibrationModel { freq, sensing, digital, actuation })
    }

    /// Build a model from three responses that share one frequency grid.
    ///
    /// Errors
    /// ------
    /// - `CalError::FrequencyGridMismatch` naming `"D"` or `"A"` at the first
    ///   differing bin.
    pub fn from_responses(
        sensing: &FrequencyResponse, digital: &FrequencyResponse, actuation: &FrequencyResponse,
    ) -> CalResult<CalibrationModel> {
        for (name, other) in [("D", digital), ("A", actuation)] {
            if let Some(index) = sensing.grid_mismatch(other) {
                return Err(CalError::FrequencyGridMismatch { name, index });
            }
        }
        CalibrationModel::new(
            sensing.freq.clone(),
            sensing.values.clone(),
            digital.values.clone(),
            actuation.values.clone(),
        )
    }

    pub fn freq(&self) -> &Array1<f64> {
        &self.freq
    }

    pub fn sensing(&self) -> &Array1<Complex64> {
        &self.sensing
    }

    pub fn digital(&self) -> &Array1<Complex64> {
        &self.digital
    }

    pub fn actuation(&self) -> &Array1<Complex64> {
        &self.actuation
    }

    pub fn len(&self) -> usize {
        self.freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }

    /// Open-loop gain `G = C · D · A`.
    pub fn open_loop_gain(&self) -> Array1<Complex64> {
        Array1::from_iter(
            self.sensing
                .iter()
                .zip(self.digital.iter())
                .zip(self.actuation.iter())
                .map(|((c, d), a)| c * d * a),
        )
    }

    /// Response function `R = (1 + γ G) / (γ C)` for drift factor `gamma`.
    ///
    /// Errors
    /// ------
    /// - `CalError::InvalidGamma` if `gamma` has a NaN/±inf component.
    /// - `CalError::DivisionSingularity` at the first bin with `γ C == 0`
    ///   (every bin when `γ == 0`).
    pub fn response(&self, gamma: Complex64) -> CalResult<FrequencyResponse> {
        if !gamma.is_finite() {
            return Err(CalError::InvalidGamma { re: gamma.re, im: gamma.im });
        }
        let gain = self.open_loop_gain();
        let mut values = Vec::with_capacity(self.len());
        for (index, (g, c)) in gain.iter().zip(self.sensing.iter()).enumerate() {
            let denom = gamma * c;
            if denom == Complex64::new(0.0, 0.0) {
                return Err(CalError::DivisionSingularity {
                    index,
                    frequency: Some(self.freq[index]),
                });
            }
            values.push((UNITY + gamma * g) / denom);
        }
        log::trace!("response evaluated on {} bins for gamma = {gamma}", values.len());
        Ok(FrequencyResponse::from_validated(self.freq.clone(), Array1::from(values)))
    }

    /// Response with no drift (`γ = 1`).
    pub fn nominal_response(&self) -> CalResult<FrequencyResponse> {
        self.response(UNITY)
    }
}

/// Estimate `R(f) = (1 + γ C D A) / (γ C)` from sampled arrays.
///
/// Parameters
/// ----------
/// - `freq`: `&[f64]`
///   Strictly increasing frequencies in Hz.
/// - `c`, `d`, `a`: `&[Complex64]`
///   Sensing, digital filter, and actuation responses; same length as `freq`.
/// - `gamma`: `Complex64`
///   Drift factor on the sensing function.
///
/// Returns
/// -------
/// `CalResult<FrequencyResponse>`
///   The response on the input grid.
///
/// Errors
/// ------
/// - Shape errors before value errors; see [`CalibrationModel::new`].
/// - `CalError::DivisionSingularity` where `γ C == 0`.
pub fn transfer_function(
    freq: &[f64], c: &[Complex64], d: &[Complex64], a: &[Complex64], gamma: Complex64,
) -> CalResult<FrequencyResponse> {
    let model = CalibrationModel::new(
        Array1::from(freq.to_vec()),
        Array1::from(c.to_vec()),
        Array1::from(d.to_vec()),
        Array1::from(a.to_vec()),
    )?;
    model.response(gamma)
}
