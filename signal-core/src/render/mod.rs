//! PNG rendering of signals and time-frequency maps

pub mod colormap;
pub mod heatmap;
pub mod plot;

pub use colormap::Palette;
pub use heatmap::{render_heatmap, HeatmapOptions};
pub use plot::LinePlot;
