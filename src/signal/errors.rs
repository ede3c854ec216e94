//! signal::errors — error type for time/frequency series and FFT helpers.

pub type SignalResult<T> = Result<T, SignalError>;

/// Error conditions for series construction and Fourier transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalError {
    // ---- Construction ----
    /// Series has no samples.
    EmptySeries,

    /// A sample is NaN/±inf.
    NonFiniteSample { index: usize },

    /// Sample spacing (`delta_t` or `delta_f`) must be finite and > 0.
    InvalidSpacing { name: &'static str, value: f64 },

    /// Start time must be finite.
    InvalidStartTime { value: f64 },

    // ---- Transforms ----
    /// Number of frequency bins is incompatible with the requested time length.
    BinCountMismatch { time_len: usize, expected: usize, actual: usize },

    /// Kernel length differs from the number of frequency bins.
    KernelLengthMismatch { expected: usize, actual: usize },

    /// Backend FFT failure.
    Fft { reason: String },
}

impl std::error::Error for SignalError {}

impl std::fmt::Display for SignalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Construction ----
            SignalError::EmptySeries => write!(f, "Series is empty."),
            SignalError::NonFiniteSample { index } => {
                write!(f, "Sample at index {index} is non-finite.")
            }
            SignalError::InvalidSpacing { name, value } => {
                write!(f, "{name} must be finite and > 0; got: {value}")
            }
            SignalError::InvalidStartTime { value } => {
                write!(f, "Start time must be finite; got: {value}")
            }
            // ---- Transforms ----
            SignalError::BinCountMismatch { time_len, expected, actual } => write!(
                f,
                "A time series of length {time_len} needs {expected} frequency bins, got {actual}"
            ),
            SignalError::KernelLengthMismatch { expected, actual } => {
                write!(f, "Kernel length mismatch: expected {expected} bins, got {actual}")
            }
            SignalError::Fft { reason } => write!(f, "FFT failed: {reason}"),
        }
    }
}

impl From<realfft::FftError> for SignalError {
    fn from(err: realfft::FftError) -> SignalError {
        SignalError::Fft { reason: err.to_string() }
    }
}
