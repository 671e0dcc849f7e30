//! Analytic-signal and quadratic time-frequency transforms

pub mod hilbert;
pub mod wigner;
pub mod cwt;

pub use hilbert::{analytic_signal, AnalyticSignal};
pub use wigner::{pwvd, wvd, TimeFrequencyMap};
pub use cwt::{cwt, CwtResult, MorletWavelet};
