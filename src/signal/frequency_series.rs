//! signal::frequency_series — one-sided complex spectrum of a real signal.
//!
//! Purpose
//! -------
//! Hold the `N/2 + 1` non-negative-frequency bins of a real signal together
//! with their spacing, apply multiplicative kernels bin by bin, and
//! transform back to a [`TimeSeries`].
//!
//! Conventions
//! -----------
//! - Bin `k` sits at `k · Δf`.
//! - The inverse uses `x_n = N Δf · irfft(x̃)_n`, the dual of the forward
//!   `Δt` scaling, and needs the target length `N` because both `2m − 2`
//!   and `2m − 1` samples map to `m` bins.
//! - The spectrum does not know the absolute time origin; the start time
//!   of the reconstructed series is always supplied by the caller.

use ndarray::Array1;
use num_complex::Complex64;

use crate::signal::errors::{SignalError, SignalResult};
use crate::signal::fft::{irfft, rfft_len};
use crate::signal::time_series::TimeSeries;

/// FrequencySeries — complex bins with spacing `delta_f` (Hz).
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySeries {
    data: Array1<Complex64>,
    delta_f: f64,
}

impl FrequencySeries {
    /// Build a validated frequency series.
    ///
    /// Errors
    /// ------
    /// - `SignalError::EmptySeries` if `data` is empty.
    /// - `SignalError::InvalidSpacing` if `delta_f` is not finite and > 0.
    pub fn new(data: Array1<Complex64>, delta_f: f64) -> SignalResult<FrequencySeries> {
        if data.is_empty() {
            return Err(SignalError::EmptySeries);
        }
        if !(delta_f.is_finite() && delta_f > 0.0) {
            return Err(SignalError::InvalidSpacing { name: "delta_f", value: delta_f });
        }
        Ok(FrequencySeries { data, delta_f })
    }

    pub fn data(&self) -> &Array1<Complex64> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn delta_f(&self) -> f64 {
        self.delta_f
    }

    /// Bin frequencies `k · Δf`.
    pub fn sample_frequencies(&self) -> Array1<f64> {
        Array1::from_iter((0..self.len()).map(|k| k as f64 * self.delta_f))
    }

    /// Multiply every bin by the matching kernel value, keeping `Δf`.
    ///
    /// Errors
    /// ------
    /// - `SignalError::KernelLengthMismatch` if `kernel.len() != self.len()`.
    pub fn apply_kernel(&self, kernel: &[Complex64]) -> SignalResult<FrequencySeries> {
        if kernel.len() != self.len() {
            return Err(SignalError::KernelLengthMismatch {
                expected: self.len(),
                actual: kernel.len(),
            });
        }
        let data = Array1::from_iter(self.data.iter().zip(kernel).map(|(x, k)| x * k));
        Ok(FrequencySeries { data, delta_f: self.delta_f })
    }

    /// Inverse transform to `time_len` samples starting at `start_time`.
    ///
    /// Parameters
    /// ----------
    /// - `time_len`: `usize`
    ///   Length `N` of the reconstructed series; must satisfy
    ///   `N / 2 + 1 == self.len()`.
    /// - `start_time`: `f64`
    ///   Absolute time of the first reconstructed sample.
    ///
    /// Errors
    /// ------
    /// - `SignalError::BinCountMismatch` if `time_len` is inconsistent with
    ///   the number of bins.
    /// - `SignalError::InvalidStartTime` if `start_time` is not finite.
    pub fn to_time_series(&self, time_len: usize, start_time: f64) -> SignalResult<TimeSeries> {
        let expected = rfft_len(time_len);
        if time_len == 0 || expected != self.len() {
            return Err(SignalError::BinCountMismatch {
                time_len,
                expected,
                actual: self.len(),
            });
        }
        let bins: Vec<Complex64> = self.data.iter().copied().collect();
        let mut samples = irfft(&bins, time_len)?;
        let scale = time_len as f64 * self.delta_f;
        samples.iter_mut().for_each(|x| *x *= scale);
        let delta_t = 1.0 / scale;
        TimeSeries::new(Array1::from(samples), delta_t, start_time)
    }
}
