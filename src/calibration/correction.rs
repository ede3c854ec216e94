//! calibration::correction — apply a calibration error to strain data.
//!
//! Purpose
//! -------
//! Turn a calibration model and a drift factor `γ` into the strain that a
//! detector with that drift would have recorded:
//!
//! 1. Forward-transform the strain (`x̃ = Δt · rfft(x)`).
//! 2. Evaluate `R_true` (γ = 1) and `R_measured` (γ) on the model grid.
//! 3. Form `K = R_measured / R_true`.
//! 4. Split `K` into amplitude `|K|` and (optionally unwrapped) phase.
//! 5. Fit zero-smoothing splines to amplitude and phase over the model grid.
//! 6. Evaluate both splines at the FFT bin frequencies `k Δf`.
//! 7. Rebuild `K(f_k) = |K| e^{i φ}` and multiply the spectrum.
//! 8. Inverse-transform and restore the original start time.
//!
//! Key behaviors
//! -------------
//! - Splines are linear by default and fitted through every point.
//! - Bins outside the model grid follow the spline's extrapolation policy;
//!   any such bin yields an [`InterpolationDomainWarning`] on the outcome and
//!   a `log::warn!` record. With `Extrapolation::Raise` the same situation
//!   is an error instead.
//! - The output has the input's length, spacing, and start time.
//!
//! Invariants & assumptions
//! ------------------------
//! - `γ = 1` gives `K ≡ 1` and reproduces the input up to FFT round-off.
//! - The phase fed to the spline is continuous when unwrapping is enabled,
//!   so interpolation never crosses a ±π branch cut.

use ndarray::Array1;
use num_complex::Complex64;

use crate::calibration::errors::{CalError, CalResult};
use crate::calibration::kernel::{ParametricKernel, SingularityPolicy, correction_kernel};
use crate::calibration::model::CalibrationModel;
use crate::calibration::validation::validate_frequency_grid;
use crate::numerics::phase::{angles, unwrap_phase};
use crate::numerics::spline::{InterpolatingSpline, SplineOptions};
use crate::signal::{FrequencySeries, TimeSeries};

/// Options for [`adjust_strain`].
///
/// Fields
/// ------
/// - `spline`: degree and extrapolation policy (default linear, extrapolate).
/// - `unwrap_phase`: unwrap `arg K` before fitting (default `true`).
/// - `singularity`: handling of zeros in `R_true` (default raise).
///   [`SingularityPolicy::Propagate`] is rejected by [`adjust_strain`]:
///   a non-finite kernel value cannot be fitted by the splines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionOptions {
    pub spline: SplineOptions,
    pub unwrap_phase: bool,
    pub singularity: SingularityPolicy,
}

impl CorrectionOptions {
    /// Errors
    /// ------
    /// - `CalError::IncompatibleOptions` for [`SingularityPolicy::Propagate`].
    pub fn validate(&self) -> CalResult<()> {
        if self.singularity == SingularityPolicy::Propagate {
            return Err(CalError::IncompatibleOptions {
                reason: "singularity policy 'propagate' cannot be combined with spline \
                         resampling; use 'raise' or 'substitute'",
            });
        }
        Ok(())
    }
}

impl Default for CorrectionOptions {
    fn default() -> Self {
        CorrectionOptions {
            spline: SplineOptions::default(),
            unwrap_phase: true,
            singularity: SingularityPolicy::default(),
        }
    }
}

/// Bins evaluated outside the frequency range the kernel was fitted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationDomainWarning {
    /// Bins below the lowest model frequency.
    pub below: usize,
    /// Bins above the highest model frequency.
    pub above: usize,
    /// `(min, max)` of the model grid.
    pub fitted: (f64, f64),
    /// `(min, max)` of the bin frequencies.
    pub requested: (f64, f64),
}

impl std::fmt::Display for InterpolationDomainWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bin(s) below and {} above the fitted range [{}, {}] Hz (requested [{}, {}] Hz)",
            self.below, self.above, self.fitted.0, self.fitted.1, self.requested.0, self.requested.1
        )
    }
}

/// Kernel sampled on a target grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledKernel {
    pub values: Array1<Complex64>,
    pub warning: Option<InterpolationDomainWarning>,
}

/// CorrectionOutcome — adjusted strain plus diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionOutcome {
    strain: TimeSeries,
    kernel: FrequencySeries,
    warning: Option<InterpolationDomainWarning>,
}

impl CorrectionOutcome {
    pub fn strain(&self) -> &TimeSeries {
        &self.strain
    }

    /// The kernel evaluated at every FFT bin.
    pub fn kernel(&self) -> &FrequencySeries {
        &self.kernel
    }

    pub fn warning(&self) -> Option<&InterpolationDomainWarning> {
        self.warning.as_ref()
    }

    pub fn into_strain(self) -> TimeSeries {
        self.strain
    }
}

/// Interpolate a kernel known on `freq` onto `grid` in amplitude/phase form.
///
/// Parameters
/// ----------
/// - `freq`: `&[f64]`
///   Strictly increasing frequencies where `kernel` is known.
/// - `kernel`: `&[Complex64]`
///   Kernel values; same length as `freq`.
/// - `grid`: `&[f64]`
///   Target frequencies (any order).
/// - `options`: `&CorrectionOptions`
///   Spline degree, extrapolation policy, and phase unwrapping.
///
/// Errors
/// ------
/// - `CalError::EmptyInput`, `CalError::NonFiniteValue`, or
///   `CalError::NonMonotonicFrequency` for a bad `freq`, reported before
///   any spline is fitted.
/// - `CalError::Numerics` for too few points, a length mismatch, or an
///   out-of-domain point under `Extrapolation::Raise`.
pub fn resample_kernel(
    freq: &[f64], kernel: &[Complex64], grid: &[f64], options: &CorrectionOptions,
) -> CalResult<ResampledKernel> {
    validate_frequency_grid(freq)?;

    let amplitude: Vec<f64> = kernel.iter().map(|k| k.norm()).collect();
    let wrapped = angles(kernel);
    let phase = if options.unwrap_phase { unwrap_phase(&wrapped) } else { wrapped };

    let amp_spline = InterpolatingSpline::fit(freq, &amplitude, options.spline)?;
    let phase_spline = InterpolatingSpline::fit(freq, &phase, options.spline)?;

    let amp = amp_spline.evaluate(grid)?;
    let ph = phase_spline.evaluate(grid)?;

    let values =
        amp.values.iter().zip(&ph.values).map(|(&r, &theta)| Complex64::from_polar(r, theta)).collect();

    let warning = if amp.coverage.is_within() {
        None
    } else {
        let requested = grid
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &f| (lo.min(f), hi.max(f)));
        let warning = InterpolationDomainWarning {
            below: amp.coverage.below,
            above: amp.coverage.above,
            fitted: amp_spline.domain(),
            requested,
        };
        log::warn!("kernel evaluated outside the model grid: {warning}");
        Some(warning)
    };

    Ok(ResampledKernel { values, warning })
}

/// Multiply a spectrum by a kernel already sampled on its bins.
pub fn adjust_frequency_series(
    spectrum: &FrequencySeries, kernel: &[Complex64],
) -> CalResult<FrequencySeries> {
    Ok(spectrum.apply_kernel(kernel)?)
}

/// Simulate the strain a detector with sensing drift `gamma` would record.
///
/// Parameters
/// ----------
/// - `strain`: `&TimeSeries`
///   Input strain; its start time is copied to the output.
/// - `model`: `&CalibrationModel`
///   Sensing, digital, and actuation responses on a frequency grid.
/// - `gamma`: `Complex64`
///   Drift factor on the sensing function.
/// - `options`: `&CorrectionOptions`
///   Spline, phase, and singularity settings.
///
/// Returns
/// -------
/// `CalResult<CorrectionOutcome>`
///   Adjusted strain, the per-bin kernel, and an optional domain warning.
///
/// Errors
/// ------
/// - `CalError::IncompatibleOptions` from [`CorrectionOptions::validate`],
///   before any transform.
/// - `CalError::DivisionSingularity` from the response or kernel.
/// - Spline or FFT failures wrapped as `CalError::Numerics`/`CalError::Signal`.
pub fn adjust_strain(
    strain: &TimeSeries, model: &CalibrationModel, gamma: Complex64, options: &CorrectionOptions,
) -> CalResult<CorrectionOutcome> {
    options.validate()?;
    let spectrum = strain.to_frequency_series()?;

    let r_true = model.nominal_response()?;
    let r_measured = model.response(gamma)?;
    let kernel = correction_kernel(
        &r_true.values().to_vec(),
        &r_measured.values().to_vec(),
        options.singularity,
    )?;

    let bins = spectrum.sample_frequencies().to_vec();
    let resampled = resample_kernel(&model.freq().to_vec(), &kernel.to_vec(), &bins, options)?;
    let kernel = FrequencySeries::new(resampled.values, spectrum.delta_f())?;

    let adjusted = adjust_frequency_series(&spectrum, &kernel.data().to_vec())?;
    let corrected = adjusted.to_time_series(strain.len(), strain.start_time())?;

    log::debug!(
        "adjusted {} samples over {} bins with gamma = {gamma}",
        corrected.len(),
        kernel.len()
    );
    Ok(CorrectionOutcome { strain: corrected, kernel, warning: resampled.warning })
}

/// [`adjust_strain`] on raw arrays with default options, returning the strain.
pub fn correct_strain(
    strain: &TimeSeries, freq: &[f64], c: &[Complex64], d: &[Complex64], a: &[Complex64],
    gamma: Complex64,
) -> CalResult<TimeSeries> {
    let model = CalibrationModel::new(
        Array1::from(freq.to_vec()),
        Array1::from(c.to_vec()),
        Array1::from(d.to_vec()),
        Array1::from(a.to_vec()),
    )?;
    Ok(adjust_strain(strain, &model, gamma, &CorrectionOptions::default())?.into_strain())
}

/// Apply a closed-form kernel to strain, keeping length, spacing, and start.
pub fn adjust_strain_with_kernel(
    strain: &TimeSeries, kernel: &ParametricKernel,
) -> CalResult<TimeSeries> {
    let spectrum = strain.to_frequency_series()?;
    let adjusted = kernel.apply(&spectrum)?;
    Ok(adjusted.to_time_series(strain.len(), strain.start_time())?)
}
