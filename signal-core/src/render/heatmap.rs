//! Time-frequency heatmap rendering
//!
//! Maps a (time, frequency) matrix onto pixels: time runs left to right,
//! frequency bottom to top. Values are normalized to the matrix maximum,
//! optionally on a dB scale with a configurable floor.

use super::colormap::Palette;
use ndarray::Array2;

/// Heatmap rendering options
#[derive(Debug, Clone)]
pub struct HeatmapOptions {
    /// Color palette
    pub palette: Palette,

    /// Convert magnitudes to dB before normalizing
    pub db_scale: bool,

    /// Lowest dB value shown (values below clamp to the palette bottom)
    pub db_floor: f64,

    /// Keep only the lowest `freq_bins` columns (None = all)
    pub max_freq_bins: Option<usize>,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            palette: Palette::Viridis,
            db_scale: true,
            db_floor: -80.0,
            max_freq_bins: None,
        }
    }
}

/// Render a (time, frequency) magnitude matrix to an RGB image
///
/// Rows of `data` are time steps, columns are frequency bins. The output
/// image is `time_bins` pixels wide and `freq_bins` pixels tall with low
/// frequencies at the bottom.
pub fn render_heatmap(data: &Array2<f64>, options: &HeatmapOptions) -> image::RgbImage {
    let width = data.nrows().max(1) as u32;
    let freq_bins = match options.max_freq_bins {
        Some(limit) => data.ncols().min(limit),
        None => data.ncols(),
    };
    let height = freq_bins.max(1) as u32;

    let max_val = data
        .iter()
        .cloned()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));

    let mut img = image::RgbImage::new(width, height);

    for (x, row) in data.rows().into_iter().enumerate() {
        for (bin, &value) in row.iter().take(freq_bins).enumerate() {
            let t = normalize(value.abs(), max_val, options);
            let [r, g, b] = options.palette.map(t);
            // Flip vertically so bin 0 (lowest frequency) is the bottom row
            let y = (freq_bins - 1 - bin) as u32;
            img.put_pixel(x as u32, y, image::Rgb([r, g, b]));
        }
    }

    img
}

fn normalize(value: f64, max_val: f64, options: &HeatmapOptions) -> f64 {
    if max_val <= 0.0 {
        return 0.0;
    }
    if options.db_scale {
        let db = 20.0 * (value.max(1e-12) / max_val).log10();
        (db - options.db_floor) / -options.db_floor
    } else {
        value / max_val
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_image_dimensions_and_orientation() {
        // 3 time steps, 2 frequency bins; energy only in the high bin
        let data = array![[0.0, 1.0], [0.0, 1.0], [0.0, 1.0]];
        let img = render_heatmap(
            &data,
            &HeatmapOptions {
                db_scale: false,
                palette: Palette::Gray,
                ..HeatmapOptions::default()
            },
        );

        assert_eq!(img.dimensions(), (3, 2));
        // High-frequency bin renders at the top row
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0]);
    }

    #[test]
    fn test_freq_bin_limit() {
        let data = Array2::from_elem((10, 100), 1.0);
        let img = render_heatmap(
            &data,
            &HeatmapOptions {
                max_freq_bins: Some(25),
                ..HeatmapOptions::default()
            },
        );
        assert_eq!(img.dimensions(), (10, 25));
    }

    #[test]
    fn test_all_zero_matrix() {
        let data = Array2::zeros((4, 4));
        let img = render_heatmap(&data, &HeatmapOptions::default());
        assert_eq!(img.dimensions(), (4, 4));
    }

    #[test]
    fn test_db_floor_clamps() {
        let data = array![[1.0, 1e-9]];
        let opts = HeatmapOptions {
            palette: Palette::Gray,
            db_scale: true,
            db_floor: -60.0,
            max_freq_bins: None,
        };
        let img = render_heatmap(&data, &opts);
        // The tiny value sits far below the floor and maps to black
        assert_eq!(img.get_pixel(0, 1).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
