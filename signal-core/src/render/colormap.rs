//! Color palettes for heatmap rendering

/// Supported palettes, backed by `colorous` gradients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Perceptually uniform, colorblind-friendly (default)
    Viridis,
    /// High-contrast perceptually uniform
    Plasma,
    /// Dark-to-bright-yellow
    Inferno,
    /// Rainbow-like, close to matplotlib's jet
    Turbo,
    /// Simple black-to-white
    Gray,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Viridis
    }
}

impl Palette {
    /// Map a normalized value in [0, 1] to an RGB triple
    pub fn map(&self, value: f64) -> [u8; 3] {
        let t = value.clamp(0.0, 1.0);
        let color = match self {
            Palette::Viridis => colorous::VIRIDIS.eval_continuous(t),
            Palette::Plasma => colorous::PLASMA.eval_continuous(t),
            Palette::Inferno => colorous::INFERNO.eval_continuous(t),
            Palette::Turbo => colorous::TURBO.eval_continuous(t),
            Palette::Gray => {
                let v = (t * 255.0) as u8;
                return [v, v, v];
            }
        };
        [color.r, color.g, color.b]
    }

    /// Parse a palette name (unknown names fall back to viridis)
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "plasma" => Palette::Plasma,
            "inferno" => Palette::Inferno,
            "turbo" | "jet" => Palette::Turbo,
            "gray" | "grey" => Palette::Gray,
            _ => Palette::Viridis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_differ() {
        for p in [
            Palette::Viridis,
            Palette::Plasma,
            Palette::Inferno,
            Palette::Turbo,
            Palette::Gray,
        ] {
            assert_ne!(p.map(0.0), p.map(1.0), "{p:?}");
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        let p = Palette::Gray;
        assert_eq!(p.map(-1.0), p.map(0.0));
        assert_eq!(p.map(2.0), p.map(1.0));
        assert_eq!(p.map(1.0), [255, 255, 255]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Palette::parse("Turbo"), Palette::Turbo);
        assert_eq!(Palette::parse("jet"), Palette::Turbo);
        assert_eq!(Palette::parse("anything"), Palette::Viridis);
    }
}
