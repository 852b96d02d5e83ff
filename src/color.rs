use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct pastel colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.75);
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
// Color mapping: facet value → Color32
// ---------------------------------------------------------------------------

/// Maps the values of a facet (e.g. categories) to distinct badge colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Assign colours in facet order, so a given file always gets the same
    /// colours.
    pub fn new(values: &[String]) -> Self {
        let palette = generate_palette(values.len());
        let mapping = values.iter().cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Colour for a value; grey for values outside the facet.
    pub fn color_for(&self, value: &str) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(Color32::LIGHT_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn distinct_values_get_distinct_colours() {
        let facet = vec!["Formaggi".to_string(), "Salumi".to_string(), "Olio".to_string()];
        let map = ColorMap::new(&facet);
        assert_ne!(map.color_for("Formaggi"), map.color_for("Salumi"));
        assert_ne!(map.color_for("Salumi"), map.color_for("Olio"));
        assert_eq!(map.color_for("Unknown"), Color32::LIGHT_GRAY);
    }
}
