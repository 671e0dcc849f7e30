//! Signal Lab - synthetic test signals and time-frequency analysis
//!
//! Generates closed-form test signals (tones, gated tones, linear chirps,
//! Gaussian noise) and analyzes them with the standard time-frequency
//! toolbox: FFT spectra, short-time Fourier transform, continuous wavelet
//! transform (complex Morlet), the Wigner-Ville distribution and the
//! Hilbert transform (envelope and instantaneous frequency). Results can
//! be rendered to PNG line plots and heatmaps.

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod timefreq;
pub mod render;

pub use error::SignalError;
pub use signal::{demo_mix, NoiseSource, SignalMix};
pub use spectrum::{SpectrumAnalyzer, WindowType};
pub use timefreq::{AnalyticSignal, MorletWavelet};
