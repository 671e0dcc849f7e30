//! Composite test signal construction
//!
//! `SignalMix` accumulates tones, gated tones, chirps, a DC offset and noise
//! into a single buffer sharing one time grid.

use super::generators::{gated_sine, linear_chirp, num_samples, sine, time_vector};
use super::noise::NoiseSource;

/// Builder for a multi-component test signal
#[derive(Debug, Clone)]
pub struct SignalMix {
    duration: f64,
    sample_rate: f64,
    samples: Vec<f64>,
}

impl SignalMix {
    /// Create an empty (all-zero) mix
    ///
    /// # Arguments
    /// * `duration` - Signal duration in seconds
    /// * `sample_rate` - Samples per second
    pub fn new(duration: f64, sample_rate: f64) -> Self {
        let n = num_samples(duration, sample_rate);
        Self {
            duration,
            sample_rate,
            samples: vec![0.0; n],
        }
    }

    /// Add a pure sinusoid at `frequency` Hz
    pub fn tone(mut self, frequency: f64) -> Self {
        self.accumulate(&sine(frequency, self.duration, self.sample_rate));
        self
    }

    /// Add a sinusoid gated to [start, end) seconds
    pub fn gated_tone(mut self, frequency: f64, start: f64, end: f64) -> Self {
        self.accumulate(&gated_sine(
            frequency,
            self.duration,
            self.sample_rate,
            start,
            end,
        ));
        self
    }

    /// Add a linear chirp sweeping from `f0` to `f1` Hz
    pub fn chirp(mut self, f0: f64, f1: f64) -> Self {
        self.accumulate(&linear_chirp(f0, f1, self.duration, self.sample_rate));
        self
    }

    /// Add a constant offset
    pub fn dc_offset(mut self, level: f64) -> Self {
        for x in self.samples.iter_mut() {
            *x += level;
        }
        self
    }

    /// Add Gaussian noise drawn from `source`
    pub fn noise(mut self, source: &mut NoiseSource) -> Self {
        source.add_to(&mut self.samples);
        self
    }

    /// Time grid matching the mixed signal
    pub fn time_vector(&self) -> Vec<f64> {
        time_vector(self.duration, self.sample_rate)
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the mix holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the builder and return the mixed samples
    pub fn build(self) -> Vec<f64> {
        self.samples
    }

    fn accumulate(&mut self, component: &[f64]) {
        for (x, &c) in self.samples.iter_mut().zip(component.iter()) {
            *x += c;
        }
    }
}

/// Sample rate of the canonical demo mix, in Hz
pub const DEMO_SAMPLE_RATE: f64 = 1000.0;

/// Duration of the canonical demo mix, in seconds
pub const DEMO_DURATION: f64 = 3.0;

/// Build the canonical multi-component demo signal
///
/// Two steady tones (4 Hz and 18 Hz), two tones gated to the middle second
/// (12 Hz and 15 Hz on [1 s, 2 s)), a +2 DC offset and unit-variance
/// Gaussian noise, sampled at 1 kHz for 3 seconds.
///
/// # Returns
/// `(t, signal)` - time grid and mixed samples, both of length 3000
pub fn demo_mix(seed: u64) -> (Vec<f64>, Vec<f64>) {
    // Unit Gaussian parameters are valid constants, construction cannot fail
    let mut noise = NoiseSource::new(0.0, 1.0, seed).expect("valid noise parameters");

    let mix = SignalMix::new(DEMO_DURATION, DEMO_SAMPLE_RATE)
        .tone(4.0)
        .tone(18.0)
        .gated_tone(12.0, 1.0, 2.0)
        .gated_tone(15.0, 1.0, 2.0)
        .dc_offset(2.0)
        .noise(&mut noise);

    let t = mix.time_vector();
    (t, mix.build())
}
