//! FFT-based spectral analysis

pub mod fft;
pub mod windowing;
pub mod analysis;
pub mod stft;

pub use fft::FftEngine;
pub use windowing::{apply_window, generate_window, WindowType};
pub use analysis::{AnalyzerConfig, Spectrum, SpectrumAnalyzer};
pub use stft::{stft, Spectrogram, StftConfig};
