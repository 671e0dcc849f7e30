//! Hilbert transform and analytic signal
//!
//! The analytic signal is built in the frequency domain: take the FFT of
//! the real signal, double the positive-frequency bins, zero the negative
//! ones (DC and Nyquist are kept as-is) and invert. Its magnitude is the
//! amplitude envelope; the derivative of its unwrapped phase is the
//! instantaneous frequency.

use crate::error::SignalError;
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Compute the analytic signal of a real input
pub fn analytic_signal(signal: &[f64]) -> Result<Vec<Complex64>, SignalError> {
    if signal.is_empty() {
        return Err(SignalError::EmptySignal);
    }

    let n = signal.len();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut buf: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft.process(&mut buf);

    // Double positive frequencies, zero negative ones. DC stays; for even n
    // the Nyquist bin is shared and also stays.
    let half = if n % 2 == 0 { n / 2 } else { n.div_ceil(2) };
    for bin in buf.iter_mut().take(half).skip(1) {
        *bin *= 2.0;
    }
    let first_negative = if n % 2 == 0 { n / 2 + 1 } else { n.div_ceil(2) };
    for bin in buf.iter_mut().skip(first_negative) {
        *bin = Complex64::new(0.0, 0.0);
    }

    ifft.process(&mut buf);
    let scale = 1.0 / n as f64;
    for bin in buf.iter_mut() {
        *bin *= scale;
    }

    Ok(buf)
}

/// Analytic signal with its derived quantities
pub struct AnalyticSignal {
    samples: Vec<Complex64>,
    sample_rate: f64,
}

impl AnalyticSignal {
    /// Compute the analytic signal of `signal` sampled at `sample_rate` Hz
    pub fn new(signal: &[f64], sample_rate: f64) -> Result<Self, SignalError> {
        Ok(Self {
            samples: analytic_signal(signal)?,
            sample_rate,
        })
    }

    /// Complex analytic samples
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    /// Amplitude envelope |z[n]|
    pub fn envelope(&self) -> Vec<f64> {
        self.samples.iter().map(|z| z.norm()).collect()
    }

    /// Unwrapped instantaneous phase arg(z[n])
    pub fn instantaneous_phase(&self) -> Vec<f64> {
        let mut phase: Vec<f64> = self.samples.iter().map(|z| z.arg()).collect();
        unwrap_phase(&mut phase);
        phase
    }

    /// Instantaneous frequency in Hz, length N-1
    ///
    /// First difference of the unwrapped phase scaled by fs / 2π.
    pub fn instantaneous_frequency(&self) -> Vec<f64> {
        let phase = self.instantaneous_phase();
        let scale = self.sample_rate / (2.0 * PI);
        phase.windows(2).map(|w| (w[1] - w[0]) * scale).collect()
    }
}

/// Unwrap phase in place by removing 2π jumps between neighbors
fn unwrap_phase(phase: &mut [f64]) {
    let mut offset = 0.0;
    for i in 1..phase.len() {
        let raw = phase[i] + offset;
        let prev = phase[i - 1];
        let mut diff = raw - prev;
        while diff > PI {
            offset -= 2.0 * PI;
            diff -= 2.0 * PI;
        }
        while diff < -PI {
            offset += 2.0 * PI;
            diff += 2.0 * PI;
        }
        phase[i] = prev + diff;
    }
}
