use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::util::classify::Tone;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tone → Color32
// ---------------------------------------------------------------------------

/// Concrete colour for a classifier tone.
pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Green => Color32::from_rgb(0x4a, 0xde, 0x80),
        Tone::Blue => Color32::from_rgb(0x60, 0xa5, 0xfa),
        Tone::Yellow => Color32::from_rgb(0xea, 0xb3, 0x08),
        Tone::Orange => Color32::from_rgb(0xf9, 0x73, 0x16),
        Tone::Red => Color32::from_rgb(0xef, 0x44, 0x44),
    }
}

// ---------------------------------------------------------------------------
// Genre colours
// ---------------------------------------------------------------------------

/// Stable genre → colour assignment for the charts.
#[derive(Debug, Clone)]
pub struct GenreColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl GenreColors {
    /// Assign palette colours to `genres` in sorted order.
    pub fn new<'a>(genres: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sorted: Vec<&str> = genres.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let palette = generate_palette(sorted.len());
        let mapping = sorted
            .into_iter()
            .zip(palette)
            .map(|(g, c)| (g.to_string(), c))
            .collect();

        GenreColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping
            .get(genre)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_genre_colors_ignore_input_order() {
        let a = GenreColors::new(["Drama", "Action", "Sci-Fi"]);
        let b = GenreColors::new(["Sci-Fi", "Drama", "Action", "Drama"]);
        for g in ["Action", "Drama", "Sci-Fi"] {
            assert_eq!(a.color_for(g), b.color_for(g));
        }
        assert_eq!(a.color_for("Western"), Color32::GRAY);
    }

    #[test]
    fn test_tones_have_distinct_colors() {
        let tones = [Tone::Green, Tone::Blue, Tone::Yellow, Tone::Orange, Tone::Red];
        let colors: std::collections::BTreeSet<[u8; 4]> =
            tones.iter().map(|t| tone_color(*t).to_array()).collect();
        assert_eq!(colors.len(), tones.len());
    }
}
