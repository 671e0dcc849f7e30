//! Gallery generator
//!
//! Builds the canonical multi-component test signal and a linear chirp,
//! runs every transform in the crate on them, and writes the resulting
//! figures as PNGs under `gallery/`. Takes no arguments.
//!
//! Run with: cargo run --release --bin gallery

use anyhow::{Context, Result};
use log::info;
use signal_lab::render::{render_heatmap, HeatmapOptions, LinePlot, Palette};
use signal_lab::signal::compose::{demo_mix, DEMO_SAMPLE_RATE};
use signal_lab::signal::generators::linear_chirp;
use signal_lab::spectrum::{stft, SpectrumAnalyzer, StftConfig, WindowType};
use signal_lab::timefreq::{cwt, wvd, AnalyticSignal, MorletWavelet};
use std::fs;
use std::path::Path;

const GALLERY_DIR: &str = "gallery";
const NOISE_SEED: u64 = 1;

/// Frequency axis cap for the figures; all demo components sit below 50 Hz
const MAX_PLOT_HZ: f64 = 50.0;

const BLUE: [u8; 3] = [31, 119, 180];
const ORANGE: [u8; 3] = [255, 127, 14];

fn main() -> Result<()> {
    env_logger::init();

    fs::create_dir_all(GALLERY_DIR)
        .with_context(|| format!("creating {GALLERY_DIR}/"))?;

    let fs_hz = DEMO_SAMPLE_RATE;
    let (t, mother) = demo_mix(NOISE_SEED);
    let chirp = linear_chirp(1.0, 50.0, 3.0, fs_hz);

    info!("generated mother signal ({} samples) and chirp", mother.len());

    waveform_figure(&t, &mother, &chirp)?;
    fft_figure(&mother, fs_hz)?;
    stft_figure(&mother, fs_hz)?;
    cwt_figure(&mother, fs_hz)?;
    wvd_figure(&mother, fs_hz)?;
    hilbert_figures(&t, &mother, fs_hz)?;

    info!("gallery written to {GALLERY_DIR}/");
    Ok(())
}

fn save(img: &image::RgbImage, name: &str) -> Result<()> {
    let path = Path::new(GALLERY_DIR).join(name);
    img.save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Time-domain view of the mother signal with the chirp overlaid
fn waveform_figure(t: &[f64], mother: &[f64], chirp: &[f64]) -> Result<()> {
    let img = LinePlot::new(1000, 400)
        .series(t, mother, BLUE)
        .series(t, chirp, ORANGE)
        .render();
    save(&img, "waveform.png")
}

/// One-sided amplitude spectrum, axis limited to the band of interest
fn fft_figure(signal: &[f64], sample_rate: f64) -> Result<()> {
    let mut analyzer = SpectrumAnalyzer::plain(signal.len(), sample_rate)?;
    let mut spectrum = analyzer.analyze(signal)?;
    spectrum.truncate_above(MAX_PLOT_HZ);

    let img = LinePlot::new(1000, 400)
        .x_range(0.0, MAX_PLOT_HZ)
        .series(&spectrum.frequencies, &spectrum.magnitudes, BLUE)
        .render();
    save(&img, "fft.png")
}

/// STFT magnitude spectrogram
fn stft_figure(signal: &[f64], sample_rate: f64) -> Result<()> {
    let config = StftConfig {
        window_len: 256,
        hop: 32,
        window_type: WindowType::Hann,
        sample_rate,
    };
    let spec = stft(signal, &config)?;

    // Keep only bins up to MAX_PLOT_HZ
    let bins = spec
        .frequencies
        .iter()
        .take_while(|&&f| f <= MAX_PLOT_HZ)
        .count();
    let img = render_heatmap(
        &spec.magnitudes,
        &HeatmapOptions {
            palette: Palette::Viridis,
            max_freq_bins: Some(bins),
            ..HeatmapOptions::default()
        },
    );
    save(&img, "stft.png")
}

/// Morlet scalogram over a 1-50 Hz grid
fn cwt_figure(signal: &[f64], sample_rate: f64) -> Result<()> {
    let wavelet = MorletWavelet::new(1.5, 1.0)?;
    let freqs: Vec<f64> = (1..=200).map(|i| 1.0 + 49.0 * i as f64 / 200.0).collect();
    let scales = wavelet.scales_for_frequencies(&freqs, sample_rate)?;
    let result = cwt(signal, &scales, &wavelet, sample_rate)?;

    // Rows are scales, columns time: transpose for the renderer. The
    // frequency grid ascends, so bin order matches the heatmap convention.
    let mags = result
        .magnitudes()
        .reversed_axes()
        .as_standard_layout()
        .to_owned();
    let img = render_heatmap(
        &mags,
        &HeatmapOptions {
            palette: Palette::Turbo,
            ..HeatmapOptions::default()
        },
    );
    save(&img, "cwt.png")
}

/// Wigner-Ville distribution of the mother signal
fn wvd_figure(signal: &[f64], sample_rate: f64) -> Result<()> {
    let map = wvd(signal, 512, sample_rate)?;
    let matrix = map.to_matrix();

    let bins = (0..map.freq_bins())
        .take_while(|&k| map.bin_frequency(k) <= MAX_PLOT_HZ)
        .count();
    let img = render_heatmap(
        &matrix,
        &HeatmapOptions {
            palette: Palette::Turbo,
            max_freq_bins: Some(bins),
            ..HeatmapOptions::default()
        },
    );
    save(&img, "wigner_ville.png")
}

/// Envelope overlay and instantaneous frequency from the analytic signal
fn hilbert_figures(t: &[f64], signal: &[f64], sample_rate: f64) -> Result<()> {
    let analytic = AnalyticSignal::new(signal, sample_rate)?;

    let envelope = analytic.envelope();
    let img = LinePlot::new(1000, 400)
        .series(t, signal, BLUE)
        .series(t, &envelope, ORANGE)
        .render();
    save(&img, "hilbert_envelope.png")?;

    let inst_freq = analytic.instantaneous_frequency();
    let img = LinePlot::new(1000, 400)
        .y_range(0.0, MAX_PLOT_HZ)
        .series(&t[1..], &inst_freq, BLUE)
        .render();
    save(&img, "hilbert_inst_freq.png")
}
