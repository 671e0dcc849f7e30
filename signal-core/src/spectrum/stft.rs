//! Short-time Fourier transform
//!
//! Slides a window across the signal and stacks per-frame magnitude spectra
//! into a time-frequency matrix. Frames that run past the end of the signal
//! are zero-padded.

use super::fft::FftEngine;
use super::windowing::{generate_window, WindowType};
use crate::error::SignalError;
use log::debug;
use ndarray::Array2;

/// STFT parameters
#[derive(Debug, Clone)]
pub struct StftConfig {
    /// Analysis window length in samples
    pub window_len: usize,

    /// Samples between consecutive frames
    pub hop: usize,

    /// Window shape
    pub window_type: WindowType,

    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            window_len: 256,
            hop: 64,
            window_type: WindowType::Hann,
            sample_rate: 1000.0,
        }
    }
}

/// STFT magnitude matrix with its axes
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// Magnitudes, shape (frames, bins)
    pub magnitudes: Array2<f64>,

    /// Frame start times in seconds
    pub times: Vec<f64>,

    /// Bin frequencies in Hz
    pub frequencies: Vec<f64>,
}

impl Spectrogram {
    /// Number of time frames
    pub fn num_frames(&self) -> usize {
        self.magnitudes.nrows()
    }

    /// Number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.magnitudes.ncols()
    }

    /// Largest magnitude in the matrix
    pub fn max_magnitude(&self) -> f64 {
        self.magnitudes.iter().cloned().fold(0.0, f64::max)
    }
}

/// Compute the STFT magnitude spectrogram of a real signal
pub fn stft(signal: &[f64], config: &StftConfig) -> Result<Spectrogram, SignalError> {
    if signal.is_empty() {
        return Err(SignalError::EmptySignal);
    }
    if config.hop == 0 {
        return Err(SignalError::InvalidHop);
    }
    if config.window_len == 0 {
        return Err(SignalError::InvalidFftSize);
    }

    let window = generate_window(config.window_type, config.window_len);
    let mut engine = FftEngine::new(config.window_len)?;

    let num_frames = signal.len().div_ceil(config.hop);
    let num_bins = engine.num_bins();
    debug!(
        "stft: {} samples -> {num_frames} frames x {num_bins} bins",
        signal.len()
    );

    let mut frame = vec![0.0; config.window_len];
    let mut magnitudes = Array2::zeros((num_frames, num_bins));

    for frame_idx in 0..num_frames {
        let start = frame_idx * config.hop;
        for (i, slot) in frame.iter_mut().enumerate() {
            *slot = if start + i < signal.len() {
                signal[start + i] * window[i]
            } else {
                0.0
            };
        }

        let spectrum = engine.compute_magnitude(&frame);
        for (bin, &mag) in spectrum.iter().enumerate() {
            magnitudes[[frame_idx, bin]] = mag;
        }
    }

    let times = (0..num_frames)
        .map(|i| (i * config.hop) as f64 / config.sample_rate)
        .collect();
    let frequencies = engine.frequency_axis_hz(config.sample_rate);

    Ok(Spectrogram {
        magnitudes,
        times,
        frequencies,
    })
}
