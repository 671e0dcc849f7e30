//! High-level spectrum analyzer
//!
//! Combines windowing, the FFT engine and amplitude normalization into a
//! single configurable front end.

use super::fft::FftEngine;
use super::windowing::{apply_window, window_correction_factor, WindowType};
use crate::error::SignalError;

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT size (signals are zero-padded or truncated to this)
    pub fft_size: usize,

    /// Window applied before the FFT
    pub window_type: WindowType,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Normalize magnitudes by 1/N (amplitude spectrum)
    pub normalize: bool,

    /// Compensate window attenuation
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window_type: WindowType::Hann,
            sample_rate: 1000.0,
            normalize: true,
            apply_correction: true,
        }
    }
}

/// One-sided amplitude spectrum with its frequency axis
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency bins in Hz
    pub frequencies: Vec<f64>,
    /// Magnitude per bin
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Frequency and magnitude of the strongest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, &m)| (self.frequencies[i], m))
    }

    /// Restrict the spectrum to bins at or below `max_hz`
    pub fn truncate_above(&mut self, max_hz: f64) {
        let keep = self
            .frequencies
            .iter()
            .take_while(|&&f| f <= max_hz)
            .count();
        self.frequencies.truncate(keep);
        self.magnitudes.truncate(keep);
    }
}

/// Windowed FFT spectrum analyzer
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    engine: FftEngine,
    correction_factor: f64,
}

impl SpectrumAnalyzer {
    /// Create an analyzer from a config
    pub fn new(config: AnalyzerConfig) -> Result<Self, SignalError> {
        let engine = FftEngine::new(config.fft_size)?;
        let correction_factor = if config.apply_correction {
            window_correction_factor(config.window_type, config.fft_size)
        } else {
            1.0
        };

        Ok(Self {
            config,
            engine,
            correction_factor,
        })
    }

    /// Analyzer sized to the signal with no window and 1/N scaling
    ///
    /// This reproduces a plain `|fft(x)| / N` amplitude spectrum.
    pub fn plain(signal_len: usize, sample_rate: f64) -> Result<Self, SignalError> {
        Self::new(AnalyzerConfig {
            fft_size: signal_len,
            window_type: WindowType::Rectangular,
            sample_rate,
            normalize: true,
            apply_correction: false,
        })
    }

    /// Compute the one-sided amplitude spectrum of `signal`
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Spectrum, SignalError> {
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }

        let windowed = apply_window(signal, self.config.window_type);

        let mut magnitudes = if self.config.normalize {
            self.engine.compute_magnitude_normalized(&windowed)
        } else {
            self.engine.compute_magnitude(&windowed)
        };

        if self.config.apply_correction {
            for m in magnitudes.iter_mut() {
                *m *= self.correction_factor;
            }
        }

        Ok(Spectrum {
            frequencies: self.engine.frequency_axis_hz(self.config.sample_rate),
            magnitudes,
        })
    }

    /// Current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::compose::demo_mix;
    use crate::signal::generators::sine;

    #[test]
    fn test_peak_frequency_of_tone() {
        let signal = sine(18.0, 3.0, 1000.0);
        let mut analyzer = SpectrumAnalyzer::plain(signal.len(), 1000.0).unwrap();
        let spectrum = analyzer.analyze(&signal).unwrap();

        let (freq, mag) = spectrum.peak().unwrap();
        assert!((freq - 18.0).abs() < 0.5, "peak at {freq} Hz");
        assert!((mag - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_windowed_tone_with_correction() {
        let signal = sine(100.0, 1.0, 1000.0);
        let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
            fft_size: 1000,
            window_type: WindowType::Hann,
            sample_rate: 1000.0,
            normalize: true,
            apply_correction: true,
        })
        .unwrap();

        let spectrum = analyzer.analyze(&signal).unwrap();
        let (freq, mag) = spectrum.peak().unwrap();
        assert!((freq - 100.0).abs() < 2.0);
        // Correction restores the ~0.5 amplitude peak despite the window
        assert!((mag - 0.5).abs() < 0.05, "mag={mag}");
    }

    #[test]
    fn test_demo_mix_components_visible() {
        let (_, signal) = demo_mix(11);
        let mut analyzer = SpectrumAnalyzer::plain(signal.len(), 1000.0).unwrap();
        let spectrum = analyzer.analyze(&signal).unwrap();

        // DC offset dominates; the steady 4 Hz and 18 Hz tones stand out
        // clearly above the noise floor
        let bin = |f: f64| (f * 3000.0 / 1000.0).round() as usize;
        assert!(spectrum.magnitudes[0] > 1.5);
        assert!(spectrum.magnitudes[bin(4.0)] > 0.3);
        assert!(spectrum.magnitudes[bin(18.0)] > 0.3);
        // A quiet region between the tones stays near the noise floor
        assert!(spectrum.magnitudes[bin(30.0)] < 0.1);
    }

    #[test]
    fn test_truncate_above() {
        let (_, signal) = demo_mix(0);
        let mut analyzer = SpectrumAnalyzer::plain(signal.len(), 1000.0).unwrap();
        let mut spectrum = analyzer.analyze(&signal).unwrap();
        spectrum.truncate_above(50.0);

        assert!(spectrum.frequencies.last().copied().unwrap() <= 50.0);
        assert_eq!(spectrum.frequencies.len(), spectrum.magnitudes.len());
        assert_eq!(spectrum.frequencies.len(), 151);
    }

    #[test]
    fn test_empty_signal_rejected() {
        let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig::default()).unwrap();
        assert_eq!(analyzer.analyze(&[]).unwrap_err(), SignalError::EmptySignal);
    }
}
