//! Error types shared by the transforms

use thiserror::Error;

/// Errors produced by signal transforms on degenerate input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Input signal contains no samples
    #[error("input signal is empty")]
    EmptySignal,

    /// STFT hop size of zero would never advance
    #[error("hop size must be non-zero")]
    InvalidHop,

    /// FFT size of zero has no spectrum
    #[error("FFT size must be non-zero")]
    InvalidFftSize,

    /// Frequency grid or distribution parameter out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
