//! signal — time series, frequency series, and their Fourier duality.
//!
//! Purpose
//! -------
//! Provide the signal value types the calibration pipeline transforms:
//! a uniformly sampled real [`TimeSeries`] with an absolute start time and
//! its one-sided [`FrequencySeries`], connected by real FFTs.
//!
//! Key behaviors
//! -------------
//! - Forward transform scales by `Δt`, inverse by `N Δf`, so the pair is an
//!   exact round trip for any length `N`.
//! - The inverse transform takes the start time as an argument; an absolute
//!   time origin never travels through the frequency domain implicitly.
//! - [`FrequencySeries::apply_kernel`] multiplies bins by a sampled kernel
//!   without changing `Δf`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Constructed values are non-empty, finite where required, and have
//!   strictly positive spacing; see [`SignalError`] for the failure modes.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction guards, `Δt` scaling, even/odd round
//!   trips, kernel application, and DC/Nyquist handling in the inverse FFT.

pub mod errors;
pub mod fft;
pub mod frequency_series;
pub mod time_series;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{SignalError, SignalResult};
pub use self::frequency_series::FrequencySeries;
pub use self::time_series::TimeSeries;
