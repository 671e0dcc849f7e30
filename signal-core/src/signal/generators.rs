//! Closed-form signal generators
//!
//! All generators sample a deterministic formula over a uniform time grid
//! of `floor(duration * sample_rate)` points, endpoint excluded.

use std::f64::consts::PI;

/// Generate the time grid for a signal of given duration
///
/// # Arguments
/// * `duration` - Signal duration in seconds
/// * `sample_rate` - Samples per second
///
/// # Returns
/// Time vector t[n] = n / sample_rate for n = 0..floor(duration * sample_rate)
pub fn time_vector(duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    (0..n).map(|i| i as f64 / sample_rate).collect()
}

/// Number of samples covering `duration` seconds at `sample_rate`
pub fn num_samples(duration: f64, sample_rate: f64) -> usize {
    let n = duration * sample_rate;
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Generate a pure sinusoid: sin(2π f t)
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Signal duration in seconds
/// * `sample_rate` - Samples per second
pub fn sine(frequency: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * PI * frequency * t).sin()
        })
        .collect()
}

/// Generate a sinusoid gated to the interval [start, end) seconds
///
/// Samples outside the gate are exactly zero. A gate with `start >= end`
/// yields an all-zero signal.
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Total signal duration in seconds
/// * `sample_rate` - Samples per second
/// * `start` - Gate opening time in seconds (inclusive)
/// * `end` - Gate closing time in seconds (exclusive)
pub fn gated_sine(
    frequency: f64,
    duration: f64,
    sample_rate: f64,
    start: f64,
    end: f64,
) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f64 / sample_rate;
            if t >= start && t < end {
                (2.0 * PI * frequency * t).sin()
            } else {
                0.0
            }
        })
        .collect()
}

/// Generate a linear chirp sweeping from `f0` to `f1` Hz
///
/// Phase is 2π(f0 t + k t²/2) with chirp rate k = (f1 - f0) / duration, so
/// the instantaneous frequency f0 + k t moves linearly from f0 at t = 0 to
/// f1 at t = duration. A negative sweep (f1 < f0) is valid.
pub fn linear_chirp(f0: f64, f1: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    let k = (f1 - f0) / duration;
    (0..n)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * PI * (f0 * t + 0.5 * k * t * t)).sin()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_vector_length_and_step() {
        let t = time_vector(3.0, 1000.0);
        assert_eq!(t.len(), 3000);
        assert_eq!(t[0], 0.0);
        assert_relative_eq!(t[1], 0.001, epsilon = 1e-12);
        assert_relative_eq!(t[2999], 2.999, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_length_matches_duration() {
        assert_eq!(sine(4.0, 3.0, 1000.0).len(), 3000);
        assert_eq!(sine(4.0, 0.5, 8000.0).len(), 4000);
    }

    #[test]
    fn test_sine_values() {
        // 1 Hz at 4 samples/sec hits the quarter-cycle points
        let s = sine(1.0, 1.0, 4.0);
        assert_eq!(s.len(), 4);
        assert_relative_eq!(s[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(s[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(s[2], 0.0, epsilon = 1e-9);
        assert_relative_eq!(s[3], -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gated_sine_zero_outside_gate() {
        let s = gated_sine(12.0, 3.0, 1000.0, 1.0, 2.0);
        assert_eq!(s.len(), 3000);
        // Strictly zero before the gate opens and from the closing edge on
        assert!(s[..1000].iter().all(|&x| x == 0.0));
        assert!(s[2000..].iter().all(|&x| x == 0.0));
        // Inside the gate the tone is live
        assert!(s[1000..2000].iter().any(|&x| x.abs() > 0.5));
    }

    #[test]
    fn test_gated_sine_matches_plain_sine_inside_gate() {
        let gated = gated_sine(15.0, 3.0, 1000.0, 1.0, 2.0);
        let plain = sine(15.0, 3.0, 1000.0);
        for i in 1000..2000 {
            assert_relative_eq!(gated[i], plain[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gated_sine_degenerate_gate_is_silent() {
        let s = gated_sine(10.0, 1.0, 1000.0, 0.8, 0.2);
        assert_eq!(s.len(), 1000);
        assert!(s.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_chirp_starts_like_f0_tone() {
        // At t=0 the chirp phase derivative is 2π f0, so the first few
        // samples track a pure f0 tone closely.
        let chirp = linear_chirp(5.0, 50.0, 3.0, 1000.0);
        let tone = sine(5.0, 3.0, 1000.0);
        for i in 0..10 {
            assert_relative_eq!(chirp[i], tone[i], epsilon = 1e-3);
        }
    }

    #[test]
    fn test_chirp_length() {
        assert_eq!(linear_chirp(1.0, 50.0, 3.0, 1000.0).len(), 3000);
    }

    #[test]
    fn test_zero_duration_is_empty() {
        assert!(sine(4.0, 0.0, 1000.0).is_empty());
        assert!(time_vector(0.0, 1000.0).is_empty());
    }
}
