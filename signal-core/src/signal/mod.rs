//! Synthetic test signal generation

pub mod generators;
pub mod noise;
pub mod compose;

pub use generators::{gated_sine, linear_chirp, sine, time_vector};
pub use noise::NoiseSource;
pub use compose::{demo_mix, SignalMix};
