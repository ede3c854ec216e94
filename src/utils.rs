//! utils — conversion helpers for the Python bindings.
//!
//! Purpose
//! -------
//! Turn loosely typed Python arguments (NumPy arrays, pandas Series, plain
//! sequences, option strings) into the typed inputs of the calibration API.
//! Everything here is compiled only with the `python-bindings` feature.
//!
//! Conventions
//! -----------
//! - Array helpers try a zero-copy contiguous view first and fall back to
//!   copying a Python sequence.
//! - Option helpers accept `None` for every argument and fall back to the
//!   Rust `Default` of the corresponding option struct.
//! - Invalid option strings raise `ValueError` listing the accepted values.

#[cfg(feature = "python-bindings")]
use num_complex::Complex64;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::{
    calibration::{CorrectionOptions, ErrorOptions, SingularityPolicy},
    numerics::{Extrapolation, PhaseOptions, PhaseUnit, SplineDegree, SplineOptions},
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a 1-D real array-like into an owned `Vec<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(slice.to_vec())
}

/// Copy a 1-D complex array-like into an owned `Vec<Complex64>`.
///
/// Accepts `complex128` arrays, real `float64` arrays (imaginary part 0),
/// pandas Series of either, and sequences of Python numbers.
#[cfg(feature = "python-bindings")]
pub fn extract_complex_vec<'py>(raw_data: &Bound<'py, PyAny>, name: &str) -> PyResult<Vec<Complex64>> {
    let candidate = match raw_data.call_method("to_numpy", (false,), None) {
        Ok(obj) => obj,
        Err(_) => raw_data.clone(),
    };
    if let Ok(arr_ro) = candidate.extract::<PyReadonlyArray1<Complex64>>() {
        return Ok(arr_ro.as_array().to_vec());
    }
    if let Ok(arr_ro) = candidate.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().iter().map(|&re| Complex64::new(re, 0.0)).collect());
    }
    candidate.extract::<Vec<Complex64>>().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 1-D numpy.ndarray, pandas.Series, or sequence of complex numbers"
        ))
    })
}

#[cfg(feature = "python-bindings")]
pub fn extract_phase_options(unwrap: Option<bool>, unit: Option<&str>) -> PyResult<PhaseOptions> {
    let unit = match unit {
        Some(name) => name.parse::<PhaseUnit>()?,
        None => PhaseUnit::default(),
    };
    Ok(PhaseOptions::new(unwrap.unwrap_or(false), unit))
}

#[cfg(feature = "python-bindings")]
pub fn extract_singularity_policy(
    singularity: Option<&str>, epsilon: Option<f64>,
) -> PyResult<SingularityPolicy> {
    let name = singularity.unwrap_or("raise").to_lowercase();
    match name.as_str() {
        "raise" => Ok(SingularityPolicy::Raise),
        "propagate" => Ok(SingularityPolicy::Propagate),
        "substitute" => {
            let eps = epsilon.ok_or_else(|| {
                PyValueError::new_err("epsilon must be provided when singularity='substitute'")
            })?;
            Ok(SingularityPolicy::Substitute(eps))
        }
        other => Err(PyValueError::new_err(format!(
            "invalid singularity policy {:?} (expected 'raise', 'substitute', or 'propagate')",
            other
        ))),
    }
}

#[cfg(feature = "python-bindings")]
pub fn extract_error_options(
    unwrap: Option<bool>, unit: Option<&str>, singularity: Option<&str>, epsilon: Option<f64>,
) -> PyResult<ErrorOptions> {
    Ok(ErrorOptions {
        phase: extract_phase_options(unwrap, unit)?,
        singularity: extract_singularity_policy(singularity, epsilon)?,
    })
}

/// Build [`CorrectionOptions`] from keyword arguments.
///
/// `spline_order` is the polynomial order (1 = linear, 3 = cubic);
/// `extrapolation` is a mode name or its integer code as a string.
#[cfg(feature = "python-bindings")]
pub fn extract_correction_options(
    spline_order: Option<usize>, extrapolation: Option<&str>, unwrap_phase: Option<bool>,
    singularity: Option<&str>, epsilon: Option<f64>,
) -> PyResult<CorrectionOptions> {
    let degree = match spline_order {
        Some(k) => SplineDegree::from_order(k)?,
        None => SplineDegree::default(),
    };
    let extrapolation = match extrapolation {
        Some(name) => name.parse::<Extrapolation>()?,
        None => Extrapolation::default(),
    };
    Ok(CorrectionOptions {
        spline: SplineOptions::new(degree, extrapolation),
        unwrap_phase: unwrap_phase.unwrap_or(true),
        singularity: extract_singularity_policy(singularity, epsilon)?,
    })
}
