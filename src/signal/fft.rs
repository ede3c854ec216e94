//! signal::fft — real-input FFT wrappers over `realfft`.
//!
//! Purpose
//! -------
//! Provide the forward (real → half-spectrum) and inverse (half-spectrum →
//! real) discrete Fourier transforms used by [`TimeSeries`] and
//! [`FrequencySeries`]. Scaling conventions are applied by the callers;
//! these helpers only add the `1/N` normalization to the inverse.
//!
//! Conventions
//! -----------
//! - A length-`N` real signal maps to `N/2 + 1` complex bins.
//! - Before the inverse transform, the imaginary parts of the DC bin and,
//!   for even `N`, the Nyquist bin are set to zero; a real signal cannot
//!   carry them and the backend rejects non-zero values.
//!
//! [`TimeSeries`]: crate::signal::TimeSeries
//! [`FrequencySeries`]: crate::signal::FrequencySeries

use num_complex::Complex64;
use realfft::RealFftPlanner;

use crate::signal::errors::{SignalError, SignalResult};

/// Number of complex bins produced by a real FFT of length `n`.
#[inline]
pub fn rfft_len(n: usize) -> usize {
    n / 2 + 1
}

/// Forward real FFT (unnormalized).
pub fn rfft(data: &[f64]) -> SignalResult<Vec<Complex64>> {
    if data.is_empty() {
        return Err(SignalError::EmptySeries);
    }
    let n = data.len();
    let plan = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut input = data.to_vec();
    let mut output = plan.make_output_vec();
    plan.process(&mut input, &mut output)?;
    Ok(output)
}

/// Inverse real FFT of `n` samples, normalized by `1/n`.
///
/// Errors
/// ------
/// - `SignalError::BinCountMismatch` if `bins.len() != n / 2 + 1`.
/// - `SignalError::EmptySeries` if `n == 0`.
pub fn irfft(bins: &[Complex64], n: usize) -> SignalResult<Vec<f64>> {
    if n == 0 {
        return Err(SignalError::EmptySeries);
    }
    let expected = rfft_len(n);
    if bins.len() != expected {
        return Err(SignalError::BinCountMismatch { time_len: n, expected, actual: bins.len() });
    }

    let mut input = bins.to_vec();
    discard_unrepresentable_imag(&mut input, n);

    let plan = RealFftPlanner::<f64>::new().plan_fft_inverse(n);
    let mut output = plan.make_output_vec();
    plan.process(&mut input, &mut output)?;

    let scale = 1.0 / n as f64;
    output.iter_mut().for_each(|x| *x *= scale);
    Ok(output)
}

fn discard_unrepresentable_imag(bins: &mut [Complex64], n: usize) {
    let last = bins.len() - 1;
    let mut edges = vec![0];
    if n % 2 == 0 && last > 0 {
        edges.push(last);
    }
    for idx in edges {
        if bins[idx].im != 0.0 {
            log::debug!(
                "discarding imaginary part {:e} of bin {idx} before inverse FFT (n = {n})",
                bins[idx].im
            );
            bins[idx].im = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    // Purpose
    // -------
    // Verify rfft → irfft reproduces even- and odd-length signals.
    //
    // Given
    // -----
    // - Deterministic signals of length 8 and 9.
    //
    // Expect
    // ------
    // - Round trip within 1e-12.
    fn rfft_irfft_round_trip_even_and_odd() {
        for n in [8usize, 9] {
            // Arrange
            let x: Vec<f64> = (0..n).map(|k| (0.7 * k as f64).sin() + 0.1 * k as f64).collect();

            // Act
            let bins = rfft(&x).unwrap();
            let back = irfft(&bins, n).unwrap();

            // Assert
            assert_eq!(bins.len(), rfft_len(n));
            for (a, b) in x.iter().zip(&back) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure imaginary parts on DC/Nyquist are dropped instead of
    // failing the inverse transform.
    //
    // Given
    // -----
    // - 3 bins for n = 4: DC = 4 + 1i, others zero, Nyquist = 0 + 2i.
    //
    // Expect
    // ------
    // - Output equals the inverse of DC = 4 alone: all ones.
    fn irfft_discards_dc_and_nyquist_imaginary_parts() {
        // Arrange
        let bins = vec![Complex64::new(4.0, 1.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 2.0)];

        // Act
        let out = irfft(&bins, 4).unwrap();

        // Assert
        for v in out {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a bin count inconsistent with `n` is rejected.
    //
    // Given
    // -----
    // - 4 bins with n = 4 (expects 3).
    //
    // Expect
    // ------
    // - BinCountMismatch { time_len: 4, expected: 3, actual: 4 }.
    fn irfft_rejects_wrong_bin_count() {
        let bins = vec![Complex64::new(0.0, 0.0); 4];
        assert_eq!(
            irfft(&bins, 4),
            Err(SignalError::BinCountMismatch { time_len: 4, expected: 3, actual: 4 })
        );
    }
}
