//! gw_calibration — calibration-error propagation for gravitational-wave strain.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the calibration routines to Python via the `_gw_calibration` extension
//! module. With the `python-bindings` feature enabled, this file defines the
//! Python-facing functions, the `StrainCorrection` result class, and the
//! submodules used by the `gw_calibration` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`calibration`, `numerics`, `signal`)
//!   as the public crate surface.
//! - Estimate response functions `R = (1 + γCDA)/(γC)`, decompose the ratio
//!   of two responses into amplitude and phase errors, and apply the
//!   interpolated correction kernel to strain time series.
//! - Define `#[pyfunction]`/`#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer, registering `calibration` and `units` submodules so that
//!   dotted imports work from Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, argument conversion, and error mapping.
//! - Every Rust error reaching Python is raised as `ValueError` with the
//!   `Display` text of the underlying error.
//!
//! Conventions
//! -----------
//! - Frequencies in Hz, times in seconds, phases in radians unless a unit is
//!   requested explicitly.
//! - Complex arrays cross the boundary as NumPy `complex128`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `calibration::prelude` and ignore the
//!   items guarded by `python-bindings`.
//! - The Python packaging layer imports `_gw_calibration` and wraps it in
//!   user-facing helpers.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   end-to-end test in `tests/integration_strain_correction.rs`.
//! - The PyO3 surface is exercised from Python.

pub mod calibration;
pub mod numerics;
pub mod signal;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use num_complex::Complex64;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    calibration::{
        CalibrationModel, CorrectionOutcome, adjust_strain, read_response_file,
        transfer_function, transfer_function_error_with,
    },
    numerics::{amp_to_db, db_to_amp},
    signal::TimeSeries,
    utils::{extract_complex_vec, extract_correction_options, extract_error_options, extract_f64_vec},
};

/// StrainCorrection — Python-facing result of `adjust_strain`.
///
/// Purpose
/// -------
/// Hold a [`CorrectionOutcome`] and expose the adjusted strain, its timing,
/// the per-bin kernel, and any interpolation-domain warning as properties.
///
/// Fields
/// ------
/// - `inner`: [`CorrectionOutcome`]
///   Adjusted strain, kernel on the FFT bins, and optional domain warning.
///
/// Notes
/// -----
/// - Created only by `adjust_strain`; not constructible from Python.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "gw_calibration.calibration")]
pub struct StrainCorrection {
    inner: CorrectionOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl StrainCorrection {
    /// Adjusted strain samples.
    #[getter]
    pub fn strain<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.strain().data().to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn delta_t(&self) -> f64 {
        self.inner.strain().delta_t()
    }

    #[getter]
    pub fn start_time(&self) -> f64 {
        self.inner.strain().start_time()
    }

    /// Correction kernel at the FFT bin frequencies.
    #[getter]
    pub fn kernel<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.kernel().data().to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn delta_f(&self) -> f64 {
        self.inner.kernel().delta_f()
    }

    /// `(below, above)` counts of bins outside the model grid, if any.
    #[getter]
    pub fn out_of_range_bins(&self) -> Option<(usize, usize)> {
        self.inner.warning().map(|w| (w.below, w.above))
    }

    /// Human-readable interpolation-domain warning, if any.
    #[getter]
    pub fn warning(&self) -> Option<String> {
        self.inner.warning().map(|w| w.to_string())
    }
}

/// `transfer_function(freq, C, D, A, gamma=1)` → complex `R(f)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "transfer_function",
    signature = (freq, c, d, a, gamma = Complex64::new(1.0, 0.0)),
    text_signature = "(freq, C, D, A, /, gamma=1.0)"
)]
fn py_transfer_function<'py>(
    py: Python<'py>, freq: &Bound<'py, PyAny>, c: &Bound<'py, PyAny>, d: &Bound<'py, PyAny>,
    a: &Bound<'py, PyAny>, gamma: Complex64,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    let freq = extract_f64_vec(py, freq, "freq")?;
    let c = extract_complex_vec(c, "C")?;
    let d = extract_complex_vec(d, "D")?;
    let a = extract_complex_vec(a, "A")?;
    let response = transfer_function(&freq, &c, &d, &a, gamma)?;
    Ok(response.values().to_vec().into_pyarray(py))
}

/// `transfer_function_error(Rtrue, Rmeasured, ...)` → `(dA/A, dphi)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "transfer_function_error",
    signature = (r_true, r_measured, unwrap = None, unit = None, singularity = None, epsilon = None),
    text_signature = "(Rtrue, Rmeasured, /, unwrap=False, unit='radians', singularity='raise', \
                      epsilon=None)"
)]
fn py_transfer_function_error<'py>(
    r_true: &Bound<'py, PyAny>, r_measured: &Bound<'py, PyAny>, unwrap: Option<bool>,
    unit: Option<&str>, singularity: Option<&str>, epsilon: Option<f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let py = r_true.py();
    let r_true = extract_complex_vec(r_true, "Rtrue")?;
    let r_measured = extract_complex_vec(r_measured, "Rmeasured")?;
    let options = extract_error_options(unwrap, unit, singularity, epsilon)?;
    let (amp, phase) = transfer_function_error_with(&r_true, &r_measured, &options)?.into_parts();
    Ok((amp.to_vec().into_pyarray(py), phase.to_vec().into_pyarray(py)))
}

/// `adjust_strain(data, delta_t, start_time, freq, C, D, A, gamma=1, ...)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "adjust_strain",
    signature = (
        data,
        delta_t,
        start_time,
        freq,
        c,
        d,
        a,
        gamma = Complex64::new(1.0, 0.0),
        spline_order = None,
        extrapolation = None,
        unwrap_phase = None,
        singularity = None,
        epsilon = None,
    ),
    text_signature = "(data, delta_t, start_time, freq, C, D, A, /, gamma=1.0, spline_order=1, \
                      extrapolation='extrapolate', unwrap_phase=True, singularity='raise', \
                      epsilon=None)"
)]
fn py_adjust_strain<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, delta_t: f64, start_time: f64,
    freq: &Bound<'py, PyAny>, c: &Bound<'py, PyAny>, d: &Bound<'py, PyAny>,
    a: &Bound<'py, PyAny>, gamma: Complex64, spline_order: Option<usize>,
    extrapolation: Option<&str>, unwrap_phase: Option<bool>, singularity: Option<&str>,
    epsilon: Option<f64>,
) -> PyResult<StrainCorrection> {
    let samples = extract_f64_vec(py, data, "data")?;
    let strain = TimeSeries::new(Array1::from(samples), delta_t, start_time)?;
    let model = CalibrationModel::new(
        Array1::from(extract_f64_vec(py, freq, "freq")?),
        Array1::from(extract_complex_vec(c, "C")?),
        Array1::from(extract_complex_vec(d, "D")?),
        Array1::from(extract_complex_vec(a, "A")?),
    )?;
    let options =
        extract_correction_options(spline_order, extrapolation, unwrap_phase, singularity, epsilon)?;
    let inner = adjust_strain(&strain, &model, gamma, &options)?;
    Ok(StrainCorrection { inner })
}

/// `read_response_file(path)` → `(freq, values)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "read_response_file")]
fn py_read_response_file<'py>(
    py: Python<'py>, path: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<Complex64>>)> {
    let (freq, values) = read_response_file(path)?.into_parts();
    Ok((freq.to_vec().into_pyarray(py), values.to_vec().into_pyarray(py)))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "amp_to_db")]
fn py_amp_to_db(x: f64) -> f64 {
    amp_to_db(x)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "db_to_amp")]
fn py_db_to_amp(db: f64) -> f64 {
    db_to_amp(db)
}

/// _gw_calibration — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_gw_calibration` module and register the `calibration` and
/// `units` submodules used by the public `gw_calibration` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _gw_calibration<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let calibration_mod = PyModule::new(_py, "calibration")?;
    let units_mod = PyModule::new(_py, "units")?;
    calibration(_py, m, &calibration_mod)?;
    units(_py, m, &units_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("gw_calibration.calibration", calibration_mod)?;
    modules.set_item("gw_calibration.units", units_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn calibration<'py>(
    _py: Python, gw_calibration: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<StrainCorrection>()?;
    m.add_function(wrap_pyfunction!(py_transfer_function, m)?)?;
    m.add_function(wrap_pyfunction!(py_transfer_function_error, m)?)?;
    m.add_function(wrap_pyfunction!(py_adjust_strain, m)?)?;
    m.add_function(wrap_pyfunction!(py_read_response_file, m)?)?;
    gw_calibration.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn units<'py>(
    _py: Python, gw_calibration: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_amp_to_db, m)?)?;
    m.add_function(wrap_pyfunction!(py_db_to_amp, m)?)?;
    gw_calibration.add_submodule(m)?;
    Ok(())
}
