//! signal::time_series — uniformly sampled real time series.
//!
//! Purpose
//! -------
//! Represent a strain (or any real) signal sampled every `delta_t` seconds
//! from `start_time`, and provide its frequency-domain dual.
//!
//! Key behaviors
//! -------------
//! - [`TimeSeries::new`] validates samples, spacing, and start time.
//! - [`TimeSeries::to_frequency_series`] applies the continuous-FT
//!   convention `x̃_k = Δt · Σ x_n e^{−2πikn/N}` with `Δf = 1/(N Δt)`.
//! - The start time is *not* carried into the frequency domain; callers
//!   that transform back must pass it explicitly (see
//!   [`FrequencySeries::to_time_series`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - `data` is non-empty and finite, `delta_t > 0` and finite, `start_time`
//!   finite. These hold for every constructed value.

use ndarray::Array1;

use crate::signal::errors::{SignalError, SignalResult};
use crate::signal::fft::rfft;
use crate::signal::frequency_series::FrequencySeries;

/// TimeSeries — real samples with spacing and absolute start time.
///
/// Fields
/// ------
/// - `data`: samples x₀ … x_{N−1}.
/// - `delta_t`: sample spacing in seconds.
/// - `start_time`: time of x₀ in seconds (e.g. GPS seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    data: Array1<f64>,
    delta_t: f64,
    start_time: f64,
}

impl TimeSeries {
    /// Build a validated time series.
    ///
    /// Errors
    /// ------
    /// - `SignalError::EmptySeries` if `data` is empty.
    /// - `SignalError::NonFiniteSample` for the first NaN/±inf sample.
    /// - `SignalError::InvalidSpacing` if `delta_t` is not finite and > 0.
    /// - `SignalError::InvalidStartTime` if `start_time` is not finite.
    pub fn new(data: Array1<f64>, delta_t: f64, start_time: f64) -> SignalResult<TimeSeries> {
        if data.is_empty() {
            return Err(SignalError::EmptySeries);
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(SignalError::NonFiniteSample { index });
        }
        if !(delta_t.is_finite() && delta_t > 0.0) {
            return Err(SignalError::InvalidSpacing { name: "delta_t", value: delta_t });
        }
        if !start_time.is_finite() {
            return Err(SignalError::InvalidStartTime { value: start_time });
        }
        Ok(TimeSeries { data, delta_t, start_time })
    }

    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    pub fn sample_rate(&self) -> f64 {
        1.0 / self.delta_t
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Replace the start time; samples and spacing are unchanged.
    ///
    /// Errors
    /// ------
    /// - `SignalError::InvalidStartTime` if `start_time` is not finite; the
    ///   series is left untouched.
    pub fn set_start_time(&mut self, start_time: f64) -> SignalResult<()> {
        if !start_time.is_finite() {
            return Err(SignalError::InvalidStartTime { value: start_time });
        }
        self.start_time = start_time;
        Ok(())
    }

    /// Total duration `N · Δt`.
    pub fn duration(&self) -> f64 {
        self.len() as f64 * self.delta_t
    }

    /// Time stamps `start_time + n · Δt`.
    pub fn sample_times(&self) -> Array1<f64> {
        Array1::from_iter((0..self.len()).map(|n| self.start_time + n as f64 * self.delta_t))
    }

    /// Forward transform to `N/2 + 1` bins spaced `1/(N Δt)` apart.
    pub fn to_frequency_series(&self) -> SignalResult<FrequencySeries> {
        let samples: Vec<f64> = self.data.iter().copied().collect();
        let mut bins = rfft(&samples)?;
        bins.iter_mut().for_each(|b| *b *= self.delta_t);
        let delta_f = 1.0 / self.duration();
        FrequencySeries::new(Array1::from(bins), delta_f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Ensure construction rejects each invalid input.
    //
    // Given
    // -----
    // - Empty data, a NaN sample, zero spacing, and an infinite start time.
    //
    // Expect
    // ------
    // - The matching SignalError variant for each.
    fn new_rejects_invalid_inputs() {
        assert_eq!(TimeSeries::new(Array1::zeros(0), 1.0, 0.0), Err(SignalError::EmptySeries));
        assert_eq!(
            TimeSeries::new(array![1.0, f64::NAN], 1.0, 0.0),
            Err(SignalError::NonFiniteSample { index: 1 })
        );
        assert!(matches!(
            TimeSeries::new(array![1.0], 0.0, 0.0),
            Err(SignalError::InvalidSpacing { name: "delta_t", .. })
        ));
        assert!(matches!(
            TimeSeries::new(array![1.0], 1.0, f64::INFINITY),
            Err(SignalError::InvalidStartTime { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the forward transform's spacing and Δt scaling.
    //
    // Given
    // -----
    // - A constant series of 8 ones with Δt = 0.25.
    //
    // Expect
    // ------
    // - 5 bins, Δf = 0.5 Hz, DC bin = N·Δt = 2, other bins ≈ 0.
    fn to_frequency_series_applies_delta_t_scaling() {
        // Arrange
        let ts = TimeSeries::new(Array1::ones(8), 0.25, 100.0).unwrap();

        // Act
        let fs = ts.to_frequency_series().unwrap();

        // Assert
        assert_eq!(fs.len(), 5);
        assert_abs_diff_eq!(fs.delta_f(), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(fs.data()[0].re, 2.0, epsilon = 1e-12);
        for b in fs.data().iter().skip(1) {
            assert_abs_diff_eq!(b.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify sample times and duration follow start time and spacing.
    //
    // Given
    // -----
    // - 4 samples, Δt = 0.5, start = 10.
    //
    // Expect
    // ------
    // - Times [10, 10.5, 11, 11.5] and duration 2.
    fn sample_times_follow_start_and_spacing() {
        let ts = TimeSeries::new(array![0.0, 1.0, 2.0, 3.0], 0.5, 10.0).unwrap();
        assert_eq!(ts.sample_times(), array![10.0, 10.5, 11.0, 11.5]);
        assert_eq!(ts.duration(), 2.0);
        assert_eq!(ts.sample_rate(), 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the start time can be replaced and that invalid values leave
    // the series unchanged.
    //
    // Given
    // -----
    // - 3 samples, Δt = 0.25, start = 0; new start 1e9 + 0.5, then NaN.
    //
    // Expect
    // ------
    // - Sample times move to [1e9 + 0.5, 1e9 + 0.75, 1e9 + 1]; samples and
    //   Δt unchanged.
    // - NaN → InvalidStartTime; start time still 1e9 + 0.5.
    fn set_start_time_moves_sample_times() {
        // Arrange
        let mut ts = TimeSeries::new(array![1.0, -2.0, 3.0], 0.25, 0.0).unwrap();

        // Act
        ts.set_start_time(1.0e9 + 0.5).unwrap();
        let err = ts.set_start_time(f64::NAN).unwrap_err();

        // Assert
        assert_eq!(ts.start_time(), 1.0e9 + 0.5);
        assert_eq!(ts.sample_times(), array![1.0e9 + 0.5, 1.0e9 + 0.75, 1.0e9 + 1.0]);
        assert_eq!(ts.data(), &array![1.0, -2.0, 3.0]);
        assert_eq!(ts.delta_t(), 0.25);
        assert!(matches!(err, SignalError::InvalidStartTime { .. }), "Got: {err:?}");
    }
}
