//! Continuous wavelet transform with a complex Morlet wavelet
//!
//! Follows the integrate-then-differentiate formulation used by PyWavelets:
//! the wavelet is sampled once at high precision, its cumulative integral is
//! resampled at each scale, convolved with the signal, and the derivative of
//! the result gives the CWT coefficients. Convolutions run through the FFT.

use crate::error::SignalError;
use log::debug;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Half-width of the wavelet sampling domain [-DOMAIN, DOMAIN]
const DOMAIN: f64 = 8.0;

/// Wavelet sampling resolution: 2^PRECISION points across the domain
const PRECISION: u32 = 10;

/// Complex Morlet wavelet cmorB-C
///
/// psi(x) = exp(j 2π C x) · exp(−x²/B) / sqrt(πB)
#[derive(Debug, Clone, Copy)]
pub struct MorletWavelet {
    /// Bandwidth parameter B
    pub bandwidth: f64,
    /// Center frequency C in cycles per unit of x
    pub center_freq: f64,
}

impl MorletWavelet {
    /// Create a wavelet, validating both parameters are positive
    pub fn new(bandwidth: f64, center_freq: f64) -> Result<Self, SignalError> {
        if !(bandwidth > 0.0 && center_freq > 0.0) {
            return Err(SignalError::InvalidParameter(format!(
                "Morlet parameters must be positive, got B={bandwidth} C={center_freq}"
            )));
        }
        Ok(Self {
            bandwidth,
            center_freq,
        })
    }

    /// Convert target frequencies in Hz to wavelet scales
    ///
    /// scale = C · fs / f, so larger scales probe lower frequencies.
    pub fn scales_for_frequencies(
        &self,
        frequencies: &[f64],
        sample_rate: f64,
    ) -> Result<Vec<f64>, SignalError> {
        if frequencies.iter().any(|&f| f <= 0.0) {
            return Err(SignalError::InvalidParameter(
                "wavelet frequencies must be positive".into(),
            ));
        }
        Ok(frequencies
            .iter()
            .map(|&f| self.center_freq * sample_rate / f)
            .collect())
    }

    /// Frequency in Hz probed by `scale` at `sample_rate`
    pub fn scale_to_frequency(&self, scale: f64, sample_rate: f64) -> f64 {
        self.center_freq * sample_rate / scale
    }

    /// Sample psi over the domain and return its cumulative integral
    /// together with the grid step
    fn integrated(&self) -> (Vec<Complex64>, f64) {
        let n = 1usize << PRECISION;
        let step = 2.0 * DOMAIN / (n - 1) as f64;
        let norm = 1.0 / (PI * self.bandwidth).sqrt();

        let mut int_psi = Vec::with_capacity(n);
        let mut acc = Complex64::new(0.0, 0.0);
        for i in 0..n {
            let x = -DOMAIN + i as f64 * step;
            let gauss = norm * (-x * x / self.bandwidth).exp();
            let angle = 2.0 * PI * self.center_freq * x;
            let psi = Complex64::new(gauss * angle.cos(), gauss * angle.sin());
            acc += psi * step;
            int_psi.push(acc);
        }
        (int_psi, step)
    }
}

/// CWT coefficients over a set of scales
#[derive(Debug, Clone)]
pub struct CwtResult {
    /// Complex coefficients, shape (scales, signal_length)
    pub coefficients: Array2<Complex64>,
    /// Frequency in Hz for each scale row
    pub frequencies: Array1<f64>,
}

impl CwtResult {
    /// Magnitude scalogram, shape (scales, signal_length)
    pub fn magnitudes(&self) -> Array2<f64> {
        self.coefficients.mapv(|c| c.norm())
    }

    /// Number of scale rows
    pub fn num_scales(&self) -> usize {
        self.coefficients.nrows()
    }
}

/// Compute the CWT of `signal` at the given scales
///
/// # Arguments
/// * `signal` - Real input samples
/// * `scales` - Wavelet scales (see [`MorletWavelet::scales_for_frequencies`])
/// * `wavelet` - Analyzing wavelet
/// * `sample_rate` - Sample rate in Hz
pub fn cwt(
    signal: &[f64],
    scales: &[f64],
    wavelet: &MorletWavelet,
    sample_rate: f64,
) -> Result<CwtResult, SignalError> {
    if signal.is_empty() {
        return Err(SignalError::EmptySignal);
    }
    if scales.is_empty() || scales.iter().any(|&s| !(s > 0.0)) {
        return Err(SignalError::InvalidParameter(
            "scales must be a non-empty list of positive values".into(),
        ));
    }

    let n = signal.len();
    debug!("cwt: {} samples over {} scales", n, scales.len());
    let (int_psi, step) = wavelet.integrated();
    let x_range = 2.0 * DOMAIN;

    let mut planner = FftPlanner::new();
    let mut coefficients = Array2::zeros((scales.len(), n));

    for (row, &scale) in scales.iter().enumerate() {
        // Resample the integrated wavelet at this scale and reverse it
        let num_samples = (scale * x_range + 1.0) as usize + 1;
        let inv_scale_step = 1.0 / (scale * step);
        let mut int_psi_scale: Vec<Complex64> = (0..num_samples)
            .filter_map(|i| {
                let j = (i as f64 * inv_scale_step) as usize;
                (j < int_psi.len()).then(|| int_psi[j])
            })
            .collect();
        int_psi_scale.reverse();

        let m = int_psi_scale.len();
        if m < 3 {
            return Err(SignalError::InvalidParameter(format!(
                "scale {scale} is too small for the wavelet resolution"
            )));
        }

        // Full linear convolution via zero-padded FFT
        let conv = fft_convolve(signal, &int_psi_scale, &mut planner);

        // coef = -sqrt(scale) * diff(conv), cropped symmetrically to n
        let gain = -scale.sqrt();
        let coef_len = conv.len() - 1;
        let d = (coef_len - n) as f64 / 2.0;
        let lo = d.floor() as usize;
        for (k, slot) in coefficients.row_mut(row).iter_mut().enumerate() {
            let i = lo + k;
            *slot = (conv[i + 1] - conv[i]) * gain;
        }
    }

    let frequencies = scales
        .iter()
        .map(|&s| wavelet.scale_to_frequency(s, sample_rate))
        .collect();

    Ok(CwtResult {
        coefficients,
        frequencies,
    })
}

/// Full convolution of a real signal with a complex kernel
fn fft_convolve(
    signal: &[f64],
    kernel: &[Complex64],
    planner: &mut FftPlanner<f64>,
) -> Vec<Complex64> {
    let out_len = signal.len() + kernel.len() - 1;
    let fft_size = out_len.next_power_of_two();

    let fft = planner.plan_fft_forward(fft_size);
    let ifft = planner.plan_fft_inverse(fft_size);

    let mut a: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    a.resize(fft_size, Complex64::new(0.0, 0.0));
    let mut b = kernel.to_vec();
    b.resize(fft_size, Complex64::new(0.0, 0.0));

    fft.process(&mut a);
    fft.process(&mut b);

    let scale = 1.0 / fft_size as f64;
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x = *x * *y * scale;
    }

    ifft.process(&mut a);
    a.truncate(out_len);
    a
}
