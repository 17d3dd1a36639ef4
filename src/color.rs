use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: calendar month → Color32
// ---------------------------------------------------------------------------

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Maps the 12 calendar months to distinct colours for the periodicity
/// scatter chart.
#[derive(Debug, Clone)]
pub struct MonthColors {
    colors: Vec<Color32>,
    default_color: Color32,
}

impl Default for MonthColors {
    fn default() -> Self {
        MonthColors {
            colors: generate_palette(12),
            default_color: Color32::GRAY,
        }
    }
}

impl MonthColors {
    /// Look up the colour for a month in 1–12; anything else gets the
    /// fallback grey.
    pub fn color_for(&self, month: i32) -> Color32 {
        match usize::try_from(month - 1) {
            Ok(idx) => self.colors.get(idx).copied().unwrap_or(self.default_color),
            Err(_) => self.default_color,
        }
    }

    /// Month abbreviation for legend labels; falls back to the raw number.
    pub fn label_for(month: i32) -> String {
        match usize::try_from(month - 1) {
            Ok(idx) if idx < 12 => MONTH_LABELS[idx].to_string(),
            _ => month.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(12).len(), 12);
    }

    #[test]
    fn months_get_distinct_colors() {
        let colors = MonthColors::default();
        let january = colors.color_for(1);
        let july = colors.color_for(7);
        assert_ne!(january, july);
    }

    #[test]
    fn out_of_range_months_fall_back_to_grey() {
        let colors = MonthColors::default();
        assert_eq!(colors.color_for(0), Color32::GRAY);
        assert_eq!(colors.color_for(13), Color32::GRAY);
        assert_eq!(MonthColors::label_for(5), "May");
        assert_eq!(MonthColors::label_for(42), "42");
    }
}
