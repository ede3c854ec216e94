//! Amplitude ↔ decibel conversions.

use num_complex::Complex64;

/// Amplitude of a real quantity in decibels: 20·log10|x|.
///
/// Returns `-inf` for `x == 0`, matching the behavior of `log10(0)`.
#[inline]
pub fn amp_to_db(x: f64) -> f64 {
    20.0 * x.abs().log10()
}

/// Amplitude of a complex quantity in decibels: 20·log10|z|.
#[inline]
pub fn complex_amp_to_db(z: Complex64) -> f64 {
    20.0 * z.norm().log10()
}

/// Convert decibels back to a (non-negative) amplitude: 10^(dB/20).
#[inline]
pub fn db_to_amp(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}
