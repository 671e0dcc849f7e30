//! Real-input FFT engine built on realfft
//!
//! Plans are created once and buffers reused across calls, so repeated
//! analysis of equally sized signals does not allocate.

use crate::error::SignalError;
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// Transform size (number of time-domain samples)
    fft_size: usize,

    /// Real-to-complex FFT plan
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (positive half-spectrum)
    output_buffer: Vec<Complex64>,
}

impl std::fmt::Debug for FftEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftEngine")
            .field("fft_size", &self.fft_size)
            .finish_non_exhaustive()
    }
}

impl FftEngine {
    /// Create an engine for the given transform size
    pub fn new(fft_size: usize) -> Result<Self, SignalError> {
        if fft_size == 0 {
            return Err(SignalError::InvalidFftSize);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        Ok(Self {
            fft_size,
            input_buffer: vec![0.0; fft_size],
            output_buffer: vec![Complex64::new(0.0, 0.0); fft_size / 2 + 1],
            r2c,
        })
    }

    /// Compute the positive half-spectrum of `signal`
    ///
    /// The signal is zero-padded (or truncated) to the engine's FFT size.
    pub fn compute(&mut self, signal: &[f64]) -> &[Complex64] {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        // Buffer sizes are fixed at construction, so this cannot fail
        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .expect("FFT processing failed");

        &self.output_buffer
    }

    /// Magnitude spectrum |X[k]| for k = 0..fft_size/2
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        self.compute(signal).iter().map(|c| c.norm()).collect()
    }

    /// Magnitude spectrum normalized by 1/N
    ///
    /// With this scaling a unit sinusoid contributes a peak of ~0.5 (its
    /// energy split between the positive and negative half-spectra) and a
    /// DC offset appears at its actual level.
    pub fn compute_magnitude_normalized(&mut self, signal: &[f64]) -> Vec<f64> {
        let scale = 1.0 / self.fft_size as f64;
        self.compute(signal)
            .iter()
            .map(|c| c.norm() * scale)
            .collect()
    }

    /// Magnitude spectrum in dB relative to `reference`
    pub fn compute_magnitude_db(&mut self, signal: &[f64], reference: f64) -> Vec<f64> {
        self.compute_magnitude(signal)
            .iter()
            .map(|&mag| {
                let clamped = mag.max(1e-10);
                20.0 * (clamped / reference).log10()
            })
            .collect()
    }

    /// Transform size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of frequency bins (fft_size/2 + 1 for real input)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Frequency axis in Hz: f[k] = k * sample_rate / fft_size
    pub fn frequency_axis_hz(&self, sample_rate: f64) -> Vec<f64> {
        let step = sample_rate / self.fft_size as f64;
        (0..self.num_bins()).map(|k| k as f64 * step).collect()
    }

    /// Bin index closest to `frequency` Hz
    pub fn bin_for_frequency(&self, frequency: f64, sample_rate: f64) -> usize {
        let bin = (frequency * self.fft_size as f64 / sample_rate).round() as usize;
        bin.min(self.num_bins() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::generators::sine;

    #[test]
    fn test_zero_fft_size_rejected() {
        assert_eq!(FftEngine::new(0).unwrap_err(), SignalError::InvalidFftSize);
    }

    #[test]
    fn test_dc_signal() {
        let mut fft = FftEngine::new(1000).unwrap();
        let spectrum = fft.compute_magnitude_normalized(&vec![2.0; 1000]);

        // Normalized DC bin holds the offset level
        assert!((spectrum[0] - 2.0).abs() < 1e-9);
        assert!(spectrum[10] < 1e-9);
    }

    #[test]
    fn test_sine_peak_bin_matches_frequency() {
        // 4 Hz tone, 3 s at 1 kHz: peak must land on bin 4*3000/1000 = 12
        let signal = sine(4.0, 3.0, 1000.0);
        let mut fft = FftEngine::new(signal.len()).unwrap();
        let spectrum = fft.compute_magnitude(&signal);

        let (peak_bin, _) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, fft.bin_for_frequency(4.0, 1000.0));
        assert_eq!(peak_bin, 12);
    }

    #[test]
    fn test_normalized_sine_peak_is_half_amplitude() {
        let signal = sine(18.0, 3.0, 1000.0);
        let mut fft = FftEngine::new(signal.len()).unwrap();
        let spectrum = fft.compute_magnitude_normalized(&signal);

        let peak = spectrum
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((peak - 0.5).abs() < 0.01, "peak={peak}");
    }

    #[test]
    fn test_frequency_axis() {
        let fft = FftEngine::new(3000).unwrap();
        let freqs = fft.frequency_axis_hz(1000.0);

        assert_eq!(freqs.len(), 1501);
        assert_eq!(freqs[0], 0.0);
        // Resolution is fs/N = 1/3 Hz
        assert!((freqs[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((freqs[1500] - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_power_of_two_size() {
        // The demo signal is 3000 samples; arbitrary sizes must work
        let mut fft = FftEngine::new(3000).unwrap();
        let spectrum = fft.compute_magnitude(&vec![0.0; 3000]);
        assert_eq!(spectrum.len(), 1501);
    }
}
