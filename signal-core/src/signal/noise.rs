//! Gaussian white-noise source
//!
//! Seedable so that noisy test signals are reproducible run-to-run.

use crate::error::SignalError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Seedable Gaussian noise generator
pub struct NoiseSource {
    rng: StdRng,
    normal: Normal<f64>,
}

impl NoiseSource {
    /// Create a noise source with an explicit seed
    ///
    /// # Arguments
    /// * `mean` - Mean of the distribution
    /// * `std_dev` - Standard deviation (must be finite and non-negative)
    /// * `seed` - RNG seed
    pub fn new(mean: f64, std_dev: f64, seed: u64) -> Result<Self, SignalError> {
        let normal = Normal::new(mean, std_dev).map_err(|_| {
            SignalError::InvalidParameter(format!(
                "noise std_dev must be finite and non-negative, got {std_dev}"
            ))
        })?;

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            normal,
        })
    }

    /// Create a noise source seeded from system entropy
    pub fn from_entropy(mean: f64, std_dev: f64) -> Result<Self, SignalError> {
        let normal = Normal::new(mean, std_dev).map_err(|_| {
            SignalError::InvalidParameter(format!(
                "noise std_dev must be finite and non-negative, got {std_dev}"
            ))
        })?;

        Ok(Self {
            rng: StdRng::from_entropy(),
            normal,
        })
    }

    /// Draw a single sample
    pub fn sample(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }

    /// Generate `n` samples
    pub fn generate(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal.sample(&mut self.rng)).collect()
    }

    /// Add noise to a signal in place
    pub fn add_to(&mut self, signal: &mut [f64]) {
        for x in signal.iter_mut() {
            *x += self.normal.sample(&mut self.rng);
        }
    }
}
