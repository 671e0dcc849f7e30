//! Wigner-Ville distribution
//!
//! For each time index t the instantaneous autocorrelation
//! R(t, τ) = z(t+τ)·z*(t−τ) is folded into an nfft-length kernel and
//! transformed, giving W(t, f) = Σ_τ R(t, τ)·e^(−j4πfτ). The analytic
//! signal is used so negative-frequency mirror terms do not appear.
//!
//! The pseudo-WVD applies a Hamming window over the lag τ, trading
//! frequency resolution for reduced cross-term interference between
//! signal components.

use super::hilbert::analytic_signal;
use crate::error::SignalError;
use log::debug;
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Time-frequency energy map, row-major over time
#[derive(Debug, Clone)]
pub struct TimeFrequencyMap {
    /// Flattened matrix: `data[t * freq_bins + f]`
    data: Vec<f64>,
    time_bins: usize,
    freq_bins: usize,
    sample_rate: f64,
}

impl TimeFrequencyMap {
    /// Value at (time_idx, freq_idx)
    pub fn get(&self, time_idx: usize, freq_idx: usize) -> f64 {
        self.data[time_idx * self.freq_bins + freq_idx]
    }

    /// Number of time bins (equals the signal length)
    pub fn time_bins(&self) -> usize {
        self.time_bins
    }

    /// Number of frequency bins
    pub fn freq_bins(&self) -> usize {
        self.freq_bins
    }

    /// Instantaneous spectrum at one time index
    pub fn time_slice(&self, time_idx: usize) -> &[f64] {
        let start = time_idx * self.freq_bins;
        &self.data[start..start + self.freq_bins]
    }

    /// Frequency of bin `freq_idx` in Hz
    ///
    /// The lag kernel advances phase by 4πfτ, so bin k maps to
    /// k·fs / (2·nfft) and the axis spans [0, fs/2).
    pub fn bin_frequency(&self, freq_idx: usize) -> f64 {
        freq_idx as f64 * self.sample_rate / (2.0 * self.freq_bins as f64)
    }

    /// Frequency axis in Hz
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.freq_bins).map(|k| self.bin_frequency(k)).collect()
    }

    /// Time of bin `time_idx` in seconds
    pub fn bin_time(&self, time_idx: usize) -> f64 {
        time_idx as f64 / self.sample_rate
    }

    /// Location and value of the strongest cell: (time_idx, freq_idx, value)
    pub fn find_peak(&self) -> (usize, usize, f64) {
        let mut max_val = f64::NEG_INFINITY;
        let mut max_t = 0;
        let mut max_f = 0;
        for t in 0..self.time_bins {
            for f in 0..self.freq_bins {
                let v = self.get(t, f);
                if v > max_val {
                    max_val = v;
                    max_t = t;
                    max_f = f;
                }
            }
        }
        (max_t, max_f, max_val)
    }

    /// Mean energy per time index (marginal over frequency)
    pub fn time_marginal(&self) -> Vec<f64> {
        (0..self.time_bins)
            .map(|t| self.time_slice(t).iter().sum::<f64>() / self.freq_bins as f64)
            .collect()
    }

    /// Mean energy per frequency bin (marginal over time)
    pub fn freq_marginal(&self) -> Vec<f64> {
        (0..self.freq_bins)
            .map(|f| {
                (0..self.time_bins).map(|t| self.get(t, f)).sum::<f64>()
                    / self.time_bins as f64
            })
            .collect()
    }

    /// Copy into an ndarray matrix of shape (time_bins, freq_bins)
    pub fn to_matrix(&self) -> ndarray::Array2<f64> {
        ndarray::Array2::from_shape_vec((self.time_bins, self.freq_bins), self.data.clone())
            .expect("map dimensions are consistent")
    }
}

/// Compute the Wigner-Ville distribution of a real signal
///
/// # Arguments
/// * `signal` - Real input samples
/// * `nfft` - Number of frequency bins (raised to at least 4)
/// * `sample_rate` - Sample rate in Hz (used only for the axes)
pub fn wvd(signal: &[f64], nfft: usize, sample_rate: f64) -> Result<TimeFrequencyMap, SignalError> {
    let analytic = analytic_signal(signal)?;
    Ok(wvd_windowed(&analytic, nfft, None, sample_rate))
}

/// Compute the pseudo-WVD with a Hamming lag window of `window_len` samples
pub fn pwvd(
    signal: &[f64],
    nfft: usize,
    window_len: usize,
    sample_rate: f64,
) -> Result<TimeFrequencyMap, SignalError> {
    let analytic = analytic_signal(signal)?;
    let half_win = window_len / 2;
    let window: Vec<f64> = (0..=half_win)
        .map(|i| {
            if half_win == 0 {
                1.0
            } else {
                0.54 - 0.46 * (PI * i as f64 / half_win as f64).cos()
            }
        })
        .collect();
    Ok(wvd_windowed(&analytic, nfft, Some(&window), sample_rate))
}

/// Shared WVD core over an analytic signal, with an optional half lag window
fn wvd_windowed(
    signal: &[Complex64],
    nfft: usize,
    lag_window: Option<&[f64]>,
    sample_rate: f64,
) -> TimeFrequencyMap {
    let n = signal.len();
    let nfft = nfft.max(4);
    debug!("wvd: {n} time bins x {nfft} frequency bins");

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(nfft);

    let mut data = vec![0.0; n * nfft];
    let mut kernel = vec![Complex64::new(0.0, 0.0); nfft];

    for t in 0..n {
        kernel.fill(Complex64::new(0.0, 0.0));

        // Maximum lag limited by distance to the signal edges (and by the
        // lag window, if any)
        let mut tau_max = t.min(n - 1 - t);
        if let Some(w) = lag_window {
            tau_max = tau_max.min(w.len().saturating_sub(1));
        }

        for tau in 0..=tau_max {
            let weight = lag_window.map_or(1.0, |w| w[tau]);
            let val = signal[t + tau] * signal[t - tau].conj() * weight;
            kernel[tau % nfft] += val;
            if tau > 0 {
                kernel[(nfft - tau) % nfft] += val.conj();
            }
        }

        fft.process(&mut kernel);
        for f in 0..nfft {
            data[t * nfft + f] = kernel[f].re;
        }
    }

    TimeFrequencyMap {
        data,
        time_bins: n,
        freq_bins: nfft,
        sample_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::generators::{linear_chirp, sine};

    #[test]
    fn test_dimensions() {
        let signal = vec![0.5; 20];
        let map = wvd(&signal, 16, 1000.0).unwrap();
        assert_eq!(map.time_bins(), 20);
        assert_eq!(map.freq_bins(), 16);
        assert_eq!(map.time_slice(3).len(), 16);
    }

    #[test]
    fn test_pure_tone_concentrates_at_frequency() {
        // 50 Hz tone at 1 kHz for 0.256 s
        let fs = 1000.0;
        let signal = sine(50.0, 0.256, fs);
        let map = wvd(&signal, 256, fs).unwrap();

        // Away from the edges every time slice peaks near 50 Hz
        for t in (60..200).step_by(20) {
            let slice = map.time_slice(t);
            let peak = slice
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(i, _)| i)
                .unwrap();
            let freq = map.bin_frequency(peak);
            assert!((freq - 50.0).abs() < 5.0, "t={t}: peak at {freq} Hz");
        }
    }

    #[test]
    fn test_chirp_ridge_tracks_sweep() {
        let fs = 1000.0;
        let signal = linear_chirp(10.0, 100.0, 1.0, fs);
        let map = wvd(&signal, 256, fs).unwrap();

        // The WVD of a linear chirp is concentrated on the instantaneous
        // frequency line f(t) = 10 + 90 t
        for t in (200..800).step_by(150) {
            let slice = map.time_slice(t);
            let peak = slice
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(i, _)| i)
                .unwrap();
            let freq = map.bin_frequency(peak);
            let expected = 10.0 + 90.0 * (t as f64 / fs);
            assert!(
                (freq - expected).abs() < 8.0,
                "t={t}: peak {freq} Hz, expected {expected}"
            );
        }
    }

    #[test]
    fn test_dc_signal_peaks_at_zero() {
        let signal = vec![1.0; 64];
        let map = wvd(&signal, 32, 1000.0).unwrap();
        for t in (10..54).step_by(11) {
            let slice = map.time_slice(t);
            let peak = slice
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(i, _)| i)
                .unwrap();
            assert_eq!(peak, 0, "t={t}");
        }
    }

    #[test]
    fn test_pwvd_same_shape_as_wvd() {
        let signal = sine(30.0, 0.128, 1000.0);
        let full = wvd(&signal, 128, 1000.0).unwrap();
        let pseudo = pwvd(&signal, 128, 32, 1000.0).unwrap();
        assert_eq!(full.time_bins(), pseudo.time_bins());
        assert_eq!(full.freq_bins(), pseudo.freq_bins());
    }

    #[test]
    fn test_marginals_and_peak() {
        let signal = sine(40.0, 0.128, 1000.0);
        let map = wvd(&signal, 128, 1000.0).unwrap();

        assert_eq!(map.time_marginal().len(), map.time_bins());
        assert_eq!(map.freq_marginal().len(), map.freq_bins());

        let (_, peak_f, peak_val) = map.find_peak();
        assert!(peak_val > 0.0);
        assert!((map.bin_frequency(peak_f) - 40.0).abs() < 10.0);
    }

    #[test]
    fn test_matrix_shape() {
        let signal = sine(20.0, 0.064, 1000.0);
        let map = wvd(&signal, 64, 1000.0).unwrap();
        let matrix = map.to_matrix();
        assert_eq!(matrix.shape(), &[64, 64]);
    }

    #[test]
    fn test_empty_signal_rejected() {
        assert_eq!(
            wvd(&[], 64, 1000.0).unwrap_err(),
            SignalError::EmptySignal
        );
    }
}
