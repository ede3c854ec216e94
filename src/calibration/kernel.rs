//! calibration::kernel — correction kernels and transfer-function errors.
//!
//! Purpose
//! -------
//! Compare a measured response with the true one through the correction
//! kernel `K(f) = R_measured(f) / R_true(f)` and decompose it into a
//! fractional amplitude error `δA/A = |K| − 1` and a phase error
//! `δφ = arg K`. Also provide a closed-form [`ParametricKernel`] for
//! injecting a known amplitude/phase/time-shift error into a spectrum.
//!
//! Key behaviors
//! -------------
//! - [`correction_kernel`] divides element-wise and applies a
//!   [`SingularityPolicy`] to exact zeros in `R_true`.
//! - [`transfer_function_error_with`] unwraps and converts the phase per
//!   [`PhaseOptions`]; [`transfer_function_error`] uses the defaults
//!   (wrapped phase in radians, singularities raise).
//! - [`ParametricKernel`] samples `K(f) = (1 + α(f)) e^{i δφ(f)}` with
//!   `α(f) = a₀ + a₁ f` and `δφ(f) = φ₀ − 2π f δt`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `R_true` and `R_measured` share one frequency grid; only their lengths
//!   can be checked on raw slices.
//! - Phase values are principal values in (−π, π] unless unwrapped.

use ndarray::Array1;
use num_complex::Complex64;

use crate::calibration::errors::{CalError, CalResult};
use crate::calibration::model::FrequencyResponse;
use crate::calibration::validation::validate_response_pair;
use crate::numerics::phase::{PhaseOptions, angles};
use crate::signal::FrequencySeries;

/// Handling of exact zeros in the `R_true` denominator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SingularityPolicy {
    /// Fail with [`CalError::DivisionSingularity`].
    #[default]
    Raise,
    /// Divide by this finite non-zero value instead of zero.
    Substitute(f64),
    /// Perform the IEEE division and let Inf/NaN flow into the result.
    Propagate,
}

impl SingularityPolicy {
    fn validate(self) -> CalResult<()> {
        match self {
            SingularityPolicy::Substitute(value) if !value.is_finite() || value == 0.0 => {
                Err(CalError::InvalidEpsilon { value })
            }
            _ => Ok(()),
        }
    }
}

/// Options for [`transfer_function_error_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorOptions {
    pub phase: PhaseOptions,
    pub singularity: SingularityPolicy,
}

/// TransferFunctionError — kernel and its amplitude/phase decomposition.
///
/// Fields
/// ------
/// - `kernel`: `K = R_measured / R_true`.
/// - `frac_amp_error`: `|K| − 1`.
/// - `phase`: `arg K`, unwrapped and converted per the request options.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunctionError {
    kernel: Array1<Complex64>,
    frac_amp_error: Array1<f64>,
    phase: Array1<f64>,
}

impl TransferFunctionError {
    /// Decompose `R_measured / R_true` for two responses on one grid.
    ///
    /// Errors
    /// ------
    /// - `CalError::FrequencyGridMismatch { name: "Rmeasured", .. }` if the
    ///   grids differ.
    /// - `CalError::DivisionSingularity` with the bin frequency under
    ///   [`SingularityPolicy::Raise`].
    pub fn between(
        r_true: &FrequencyResponse, r_measured: &FrequencyResponse, options: &ErrorOptions,
    ) -> CalResult<TransferFunctionError> {
        if let Some(index) = r_true.grid_mismatch(r_measured) {
            return Err(CalError::FrequencyGridMismatch { name: "Rmeasured", index });
        }
        transfer_function_error_with(
            &r_true.values().to_vec(),
            &r_measured.values().to_vec(),
            options,
        )
        .map_err(|err| match err {
            CalError::DivisionSingularity { index, frequency: None } => {
                CalError::DivisionSingularity { index, frequency: Some(r_true.freq()[index]) }
            }
            other => other,
        })
    }

    pub fn kernel(&self) -> &Array1<Complex64> {
        &self.kernel
    }

    pub fn frac_amp_error(&self) -> &Array1<f64> {
        &self.frac_amp_error
    }

    pub fn phase(&self) -> &Array1<f64> {
        &self.phase
    }

    pub fn len(&self) -> usize {
        self.kernel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernel.is_empty()
    }

    /// `(frac_amp_error, phase)`.
    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.frac_amp_error, self.phase)
    }
}

/// Element-wise `K = R_measured / R_true` under a singularity policy.
///
/// Errors
/// ------
/// - Shape and finiteness errors from [`validate_response_pair`].
/// - `CalError::InvalidEpsilon` for a zero or non-finite substitute.
/// - `CalError::DivisionSingularity { index, frequency: None }` at the first
///   zero of `R_true` under [`SingularityPolicy::Raise`].
pub fn correction_kernel(
    r_true: &[Complex64], r_measured: &[Complex64], policy: SingularityPolicy,
) -> CalResult<Array1<Complex64>> {
    validate_response_pair(r_true, r_measured)?;
    policy.validate()?;

    let zero = Complex64::new(0.0, 0.0);
    let mut kernel = Vec::with_capacity(r_true.len());
    let mut propagated = Vec::new();
    for (index, (t, m)) in r_true.iter().zip(r_measured).enumerate() {
        let denom = match (*t == zero, policy) {
            (false, _) => *t,
            (true, SingularityPolicy::Propagate) => {
                propagated.push(index);
                *t
            }
            (true, SingularityPolicy::Substitute(eps)) => {
                log::debug!("substituting {eps} for zero Rtrue at index {index}");
                Complex64::new(eps, 0.0)
            }
            (true, SingularityPolicy::Raise) => {
                return Err(CalError::DivisionSingularity { index, frequency: None });
            }
        };
        kernel.push(m / denom);
    }
    if !propagated.is_empty() {
        log::warn!("zero Rtrue propagated as non-finite kernel values at bins {propagated:?}");
    }
    Ok(Array1::from(kernel))
}

/// Fractional amplitude and wrapped phase errors of `R_measured / R_true`.
///
/// Parameters
/// ----------
/// - `r_true`: `&[Complex64]`
///   Response with no drift.
/// - `r_measured`: `&[Complex64]`
///   Response under test; same length as `r_true`.
///
/// Returns
/// -------
/// `CalResult<TransferFunctionError>`
///   `|K| − 1` and `arg K` in radians, principal values.
///
/// Errors
/// ------
/// - Shape errors for empty or mismatched inputs.
/// - `CalError::NonFiniteValue` for a NaN/±inf element of either response.
/// - `CalError::DivisionSingularity` where `R_true == 0`.
pub fn transfer_function_error(
    r_true: &[Complex64], r_measured: &[Complex64],
) -> CalResult<TransferFunctionError> {
    transfer_function_error_with(r_true, r_measured, &ErrorOptions::default())
}

/// [`transfer_function_error`] with explicit phase and singularity options.
pub fn transfer_function_error_with(
    r_true: &[Complex64], r_measured: &[Complex64], options: &ErrorOptions,
) -> CalResult<TransferFunctionError> {
    let kernel = correction_kernel(r_true, r_measured, options.singularity)?;
    let frac_amp_error = kernel.mapv(|k| k.norm() - 1.0);
    let phase = Array1::from(options.phase.present(angles(&kernel.to_vec())));
    Ok(TransferFunctionError { kernel, frac_amp_error, phase })
}

/// ParametricKernel — closed-form amplitude/phase error model.
///
/// `K(f) = (1 + amp_offset + amp_slope · f) · exp(i (phase_offset − 2π f time_shift))`
///
/// Fields
/// ------
/// - `amp_offset`: fractional amplitude error at 0 Hz.
/// - `amp_slope`: change of the fractional amplitude error per Hz.
/// - `phase_offset`: constant phase error in radians.
/// - `time_shift`: delay in seconds; multiplying by `e^{−2πi f δt}` delays a
///   signal by `δt`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParametricKernel {
    amp_offset: f64,
    amp_slope: f64,
    phase_offset: f64,
    time_shift: f64,
}

impl ParametricKernel {
    /// Errors
    /// ------
    /// - `CalError::InvalidKernelParameter` for any non-finite coefficient.
    pub fn new(
        amp_offset: f64, amp_slope: f64, phase_offset: f64, time_shift: f64,
    ) -> CalResult<ParametricKernel> {
        for (name, value) in [
            ("amp_offset", amp_offset),
            ("amp_slope", amp_slope),
            ("phase_offset", phase_offset),
            ("time_shift", time_shift),
        ] {
            if !value.is_finite() {
                return Err(CalError::InvalidKernelParameter { name, value });
            }
        }
        Ok(ParametricKernel { amp_offset, amp_slope, phase_offset, time_shift })
    }

    /// Pure delay by `time_shift` seconds.
    pub fn delay(time_shift: f64) -> CalResult<ParametricKernel> {
        ParametricKernel::new(0.0, 0.0, 0.0, time_shift)
    }

    pub fn amp_offset(&self) -> f64 {
        self.amp_offset
    }

    pub fn amp_slope(&self) -> f64 {
        self.amp_slope
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    pub fn time_shift(&self) -> f64 {
        self.time_shift
    }

    /// `α(f) = amp_offset + amp_slope · f`.
    pub fn frac_amp_error(&self, freq: f64) -> f64 {
        self.amp_offset + self.amp_slope * freq
    }

    /// `δφ(f) = phase_offset − 2π f time_shift`.
    pub fn phase_error(&self, freq: f64) -> f64 {
        self.phase_offset - std::f64::consts::TAU * freq * self.time_shift
    }

    /// `K(f)`.
    pub fn value(&self, freq: f64) -> Complex64 {
        Complex64::from_polar(1.0 + self.frac_amp_error(freq), self.phase_error(freq))
    }

    /// `K` sampled at each frequency.
    pub fn sample(&self, freq: &[f64]) -> Array1<Complex64> {
        freq.iter().map(|&f| self.value(f)).collect()
    }

    /// Multiply every bin of `spectrum` by `K` at the bin frequency.
    pub fn apply(&self, spectrum: &FrequencySeries) -> CalResult<FrequencySeries> {
        let kernel = self.sample(&spectrum.sample_frequencies().to_vec());
        Ok(spectrum.apply_kernel(&kernel.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::phase::PhaseUnit;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use std::f64::consts::PI;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - K ≡ 1 when both responses agree.
    // - The closed-form unit-loop case K = 0.75.
    // - Each singularity policy and substitute validation.
    // - Phase unwrapping and degree conversion.
    // - Grid checks and frequency reporting in `between`.
    // - ParametricKernel sampling and application.
    // -------------------------------------------------------------------------

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    // Purpose
    // -------
    // Verify identical responses give zero amplitude and phase error.
    //
    // Given
    // -----
    // - R_true = R_measured = [1 + i, −2, 3i].
    //
    // Expect
    // ------
    // - K ≡ 1, δA/A ≡ 0, δφ ≡ 0.
    fn identical_responses_give_unit_kernel() {
        let r = [c(1.0, 1.0), c(-2.0, 0.0), c(0.0, 3.0)];

        let err = transfer_function_error(&r, &r).unwrap();

        for ((k, amp), ph) in err.kernel().iter().zip(err.frac_amp_error()).zip(err.phase()) {
            assert_abs_diff_eq!(k.re, 1.0, epsilon = 1e-15);
            assert_abs_diff_eq!(k.im, 0.0, epsilon = 1e-15);
            assert_abs_diff_eq!(*amp, 0.0, epsilon = 1e-15);
            assert_abs_diff_eq!(*ph, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the unit-loop comparison between γ = 1 and γ = 2.
    //
    // Given
    // -----
    // - R_true = 2, R_measured = 1.5 at three bins.
    //
    // Expect
    // ------
    // - K = 0.75, δA/A = −0.25, δφ = 0.
    fn unit_loop_drift_gives_quarter_amplitude_error() {
        let r_true = [c(2.0, 0.0); 3];
        let r_meas = [c(1.5, 0.0); 3];

        let err = transfer_function_error(&r_true, &r_meas).unwrap();

        for ((k, amp), ph) in err.kernel().iter().zip(err.frac_amp_error()).zip(err.phase()) {
            assert_abs_diff_eq!(k.re, 0.75, epsilon = 1e-15);
            assert_abs_diff_eq!(*amp, -0.25, epsilon = 1e-15);
            assert_abs_diff_eq!(*ph, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify each singularity policy.
    //
    // Given
    // -----
    // - R_true = [1, 0], R_measured = [1, 2].
    //
    // Expect
    // ------
    // - Raise → DivisionSingularity at index 1.
    // - Substitute(0.5) → K[1] = 4.
    // - Propagate → K[1] non-finite.
    // - Substitute(0) → InvalidEpsilon.
    fn singularity_policies() {
        let r_true = [c(1.0, 0.0), c(0.0, 0.0)];
        let r_meas = [c(1.0, 0.0), c(2.0, 0.0)];

        assert_eq!(
            correction_kernel(&r_true, &r_meas, SingularityPolicy::Raise),
            Err(CalError::DivisionSingularity { index: 1, frequency: None })
        );
        let k = correction_kernel(&r_true, &r_meas, SingularityPolicy::Substitute(0.5)).unwrap();
        assert_abs_diff_eq!(k[1].re, 4.0, epsilon = 1e-15);
        let k = correction_kernel(&r_true, &r_meas, SingularityPolicy::Propagate).unwrap();
        assert!(!k[1].is_finite());
        assert_eq!(
            correction_kernel(&r_true, &r_meas, SingularityPolicy::Substitute(0.0)),
            Err(CalError::InvalidEpsilon { value: 0.0 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure empty and mismatched inputs are shape errors.
    //
    // Given
    // -----
    // - ([], []) and ([1, 1], [1]).
    //
    // Expect
    // ------
    // - Both errors satisfy `is_shape_mismatch()`.
    fn transfer_function_error_rejects_bad_shapes() {
        assert!(transfer_function_error(&[], &[]).unwrap_err().is_shape_mismatch());
        assert!(
            transfer_function_error(&[c(1.0, 0.0); 2], &[c(1.0, 0.0)])
                .unwrap_err()
                .is_shape_mismatch()
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite responses are rejected instead of yielding NaN errors.
    //
    // Given
    // -----
    // - R_true = [1, NaN, 1] against unit R_measured; then the reverse with
    //   an infinite R_measured element.
    //
    // Expect
    // ------
    // - NonFiniteValue("Rtrue", 1) and NonFiniteValue("Rmeasured", 2).
    fn transfer_function_error_rejects_non_finite_responses() {
        let ones = [c(1.0, 0.0); 3];
        let with_nan = [c(1.0, 0.0), c(f64::NAN, 0.0), c(1.0, 0.0)];
        let with_inf = [c(1.0, 0.0), c(1.0, 0.0), c(0.0, f64::INFINITY)];

        assert_eq!(
            transfer_function_error(&with_nan, &ones).unwrap_err(),
            CalError::NonFiniteValue { name: "Rtrue", index: 1 }
        );
        assert_eq!(
            transfer_function_error(&ones, &with_inf).unwrap_err(),
            CalError::NonFiniteValue { name: "Rmeasured", index: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify unwrapping removes 2π jumps and degrees are applied after.
    //
    // Given
    // -----
    // - R_true = 1, R_measured = e^{iθ} with θ = 0, 2, 4, 6 rad.
    //
    // Expect
    // ------
    // - Wrapped: consecutive jumps may exceed π.
    // - Unwrapped: θ itself; in degrees θ·180/π.
    fn phase_options_unwrap_then_convert() {
        let r_true = [c(1.0, 0.0); 4];
        let r_meas: Vec<Complex64> = (0..4).map(|k| Complex64::from_polar(1.0, 2.0 * k as f64)).collect();

        let wrapped = transfer_function_error(&r_true, &r_meas).unwrap();
        let unwrapped = transfer_function_error_with(
            &r_true,
            &r_meas,
            &ErrorOptions {
                phase: PhaseOptions::new(true, PhaseUnit::Radians),
                ..ErrorOptions::default()
            },
        )
        .unwrap();
        let degrees = transfer_function_error_with(
            &r_true,
            &r_meas,
            &ErrorOptions {
                phase: PhaseOptions::new(true, PhaseUnit::Degrees),
                ..ErrorOptions::default()
            },
        )
        .unwrap();

        assert!(wrapped.phase().windows(2).into_iter().any(|w| (w[1] - w[0]).abs() > PI));
        for (k, (rad, deg)) in unwrapped.phase().iter().zip(degrees.phase()).enumerate() {
            assert_abs_diff_eq!(*rad, 2.0 * k as f64, epsilon = 1e-12);
            assert_abs_diff_eq!(*deg, (2.0 * k as f64).to_degrees(), epsilon = 1e-9);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify `between` checks grids and attaches the singular frequency.
    //
    // Given
    // -----
    // - R_true zero at f = 20; R_measured on the same grid; a third response
    //   on a different grid.
    //
    // Expect
    // ------
    // - DivisionSingularity { index: 1, frequency: Some(20.0) }.
    // - FrequencyGridMismatch { name: "Rmeasured", index: 0 }.
    fn between_checks_grid_and_reports_frequency() {
        let r_true =
            FrequencyResponse::new(array![10.0, 20.0], array![c(1.0, 0.0), c(0.0, 0.0)]).unwrap();
        let r_meas =
            FrequencyResponse::new(array![10.0, 20.0], array![c(1.0, 0.0), c(1.0, 0.0)]).unwrap();
        let other =
            FrequencyResponse::new(array![5.0, 20.0], array![c(1.0, 0.0), c(1.0, 0.0)]).unwrap();
        let opts = ErrorOptions::default();

        assert_eq!(
            TransferFunctionError::between(&r_true, &r_meas, &opts),
            Err(CalError::DivisionSingularity { index: 1, frequency: Some(20.0) })
        );
        assert_eq!(
            TransferFunctionError::between(&r_meas, &other, &opts),
            Err(CalError::FrequencyGridMismatch { name: "Rmeasured", index: 0 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify parametric kernel values and validation.
    //
    // Given
    // -----
    // - amp_offset = −0.2, amp_slope = 2e-4, phase_offset = 0.1,
    //   time_shift = 1e-3, evaluated at f = 1000 Hz.
    //
    // Expect
    // ------
    // - α = 0, δφ = 0.1 − 2π, |K| = 1, arg K ≡ 0.1 (mod 2π).
    // - A NaN coefficient is rejected.
    fn parametric_kernel_value() {
        let kernel = ParametricKernel::new(-0.2, 2.0e-4, 0.1, 1.0e-3).unwrap();

        let k = kernel.value(1000.0);

        assert_abs_diff_eq!(kernel.frac_amp_error(1000.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(kernel.phase_error(1000.0), 0.1 - 2.0 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(k.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(k.arg(), 0.1, epsilon = 1e-12);
        assert!(matches!(
            ParametricKernel::new(0.0, f64::NAN, 0.0, 0.0),
            Err(CalError::InvalidKernelParameter { name: "amp_slope", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify `apply` multiplies each bin by K at its frequency.
    //
    // Given
    // -----
    // - Unit spectrum with 3 bins at Δf = 10 Hz; amplitude-only kernel
    //   α(f) = 0.01 f.
    //
    // Expect
    // ------
    // - Bins 1.0, 1.1, 1.2.
    fn parametric_kernel_apply_scales_bins() {
        let spectrum = FrequencySeries::new(Array1::from_elem(3, c(1.0, 0.0)), 10.0).unwrap();
        let kernel = ParametricKernel::new(0.0, 0.01, 0.0, 0.0).unwrap();

        let out = kernel.apply(&spectrum).unwrap();

        for (k, expected) in [1.0, 1.1, 1.2].iter().enumerate() {
            assert_abs_diff_eq!(out.data()[k].re, *expected, epsilon = 1e-12);
            assert_abs_diff_eq!(out.data()[k].im, 0.0, epsilon = 1e-12);
        }
    }
}
