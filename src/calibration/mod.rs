//! calibration — response estimation, error kernels, and strain correction.
//!
//! Purpose
//! -------
//! Model the differential arm loop of an interferometric detector from its
//! sampled sensing `C(f)`, digital filter `D(f)`, and actuation `A(f)`
//! responses, estimate the response function `R(f) = (1 + γG)/(γC)` for a
//! drift factor `γ`, and propagate the resulting calibration error into
//! strain time series.
//!
//! Key behaviors
//! -------------
//! - [`CalibrationModel`] / [`transfer_function`]: validated response
//!   estimation with singularity detection.
//! - [`transfer_function_error`] / [`transfer_function_error_with`]: the
//!   kernel `K = R_measured / R_true` as fractional amplitude and phase.
//! - [`adjust_strain`] / [`correct_strain`]: FFT, spline-resampled kernel,
//!   multiply, inverse FFT, with the start time preserved.
//! - [`ParametricKernel`]: closed-form amplitude/phase/time-shift errors.
//! - [`read_response_file`]: whitespace-delimited `freq re im` tables.
//!
//! Invariants & assumptions
//! ------------------------
//! - All frequency grids are non-empty, finite, and strictly increasing.
//! - Exact zeros in denominators are errors unless a
//!   [`SingularityPolicy`] says otherwise.
//! - All fallible operations return [`CalResult`].
//!
//! Testing notes
//! -------------
//! - Each submodule has unit tests; the end-to-end pipeline is covered in
//!   `tests/integration_strain_correction.rs`.

pub mod correction;
pub mod errors;
pub mod io;
pub mod kernel;
pub mod model;
pub mod validation;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::correction::{
    CorrectionOptions, CorrectionOutcome, InterpolationDomainWarning, ResampledKernel,
    adjust_frequency_series, adjust_strain, adjust_strain_with_kernel, correct_strain,
    resample_kernel,
};
pub use self::errors::{CalError, CalResult};
pub use self::io::{parse_response_table, read_response_file};
pub use self::kernel::{
    ErrorOptions, ParametricKernel, SingularityPolicy, TransferFunctionError, correction_kernel,
    transfer_function_error, transfer_function_error_with,
};
pub use self::model::{CalibrationModel, FrequencyResponse, transfer_function};

/// Common imports for calibration workflows.
pub mod prelude {
    pub use super::{
        CalError, CalResult, CalibrationModel, CorrectionOptions, ErrorOptions,
        FrequencyResponse, ParametricKernel, SingularityPolicy, adjust_strain, correct_strain,
        transfer_function, transfer_function_error,
    };
    pub use crate::numerics::{Extrapolation, PhaseOptions, PhaseUnit, SplineDegree, SplineOptions};
    pub use crate::signal::{FrequencySeries, TimeSeries};
}
