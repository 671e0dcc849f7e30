//! Simple line-plot rendering
//!
//! Draws one or more (x, y) series as polylines on a white canvas with a
//! thin border. Axis ranges default to the data extents but can be fixed,
//! mirroring the axis limits used when plotting spectra.

use image::{Rgb, RgbImage};

/// Builder for a multi-series line plot
pub struct LinePlot {
    width: u32,
    height: u32,
    margin: u32,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    series: Vec<(Vec<f64>, Vec<f64>, [u8; 3])>,
}

impl LinePlot {
    /// Create an empty plot canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: 10,
            x_range: None,
            y_range: None,
            series: Vec::new(),
        }
    }

    /// Fix the x axis range
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    /// Fix the y axis range
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    /// Add an (x, y) series drawn in `color`
    ///
    /// Points beyond the shorter of the two slices are ignored.
    pub fn series(mut self, x: &[f64], y: &[f64], color: [u8; 3]) -> Self {
        let n = x.len().min(y.len());
        self.series
            .push((x[..n].to_vec(), y[..n].to_vec(), color));
        self
    }

    /// Render all series to an image
    pub fn render(&self) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, Rgb([255, 255, 255]));
        self.draw_border(&mut img);

        let (x_min, x_max) = self.x_range.unwrap_or_else(|| self.data_range(0));
        let (y_min, y_max) = self.y_range.unwrap_or_else(|| self.data_range(1));
        if x_max <= x_min || y_max <= y_min {
            return img;
        }

        let plot_w = (self.width - 2 * self.margin) as f64;
        let plot_h = (self.height - 2 * self.margin) as f64;

        for (xs, ys, color) in &self.series {
            let mut prev: Option<(i64, i64)> = None;
            for (&x, &y) in xs.iter().zip(ys.iter()) {
                if x < x_min || x > x_max {
                    prev = None;
                    continue;
                }
                let px = self.margin as f64 + (x - x_min) / (x_max - x_min) * plot_w;
                let py = self.margin as f64 + (1.0 - (y - y_min) / (y_max - y_min)) * plot_h;
                let point = (px.round() as i64, py.round() as i64);
                if let Some(p) = prev {
                    self.draw_segment(&mut img, p, point, *color);
                }
                prev = Some(point);
            }
        }

        img
    }

    /// Min/max over all series for axis `dim` (0 = x, 1 = y)
    fn data_range(&self, dim: usize) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (xs, ys, _) in &self.series {
            let values = if dim == 0 { xs } else { ys };
            for &v in values {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min.is_finite() && max.is_finite() {
            (min, max)
        } else {
            (0.0, 1.0)
        }
    }

    fn draw_border(&self, img: &mut RgbImage) {
        let border = Rgb([180, 180, 180]);
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 0..self.width {
            img.put_pixel(x, 0, border);
            img.put_pixel(x, bottom, border);
        }
        for y in 0..self.height {
            img.put_pixel(0, y, border);
            img.put_pixel(right, y, border);
        }
    }

    /// Draw a line segment by stepping along its longer axis
    fn draw_segment(&self, img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: [u8; 3]) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x0 as f64 + (x1 - x0) as f64 * t;
            let y = y0 as f64 + (y1 - y0) as f64 * t;
            let (x, y) = (x.round() as i64, y.round() as i64);
            if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
