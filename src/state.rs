use crate::color::MonthColors;
use crate::data::model::SunspotDataset;
use crate::data::transform::{self, PhasePoint, SmoothedPoint};

// ---------------------------------------------------------------------------
// Control parameters
// ---------------------------------------------------------------------------

/// The four user-adjustable parameters driving the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Inclusive yr_fraction range shown in the activity chart.
    pub year_lo: f64,
    pub year_hi: f64,
    /// Trailing moving-average window, in months.
    pub window: usize,
    /// Assumed periodicity, in years, for the fold.
    pub cycle_length: f64,
    /// Inclusive calendar-month range kept in the periodicity chart.
    pub month_lo: i32,
    pub month_hi: i32,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            year_lo: 1949.0,
            year_hi: 2022.0,
            window: 8,
            cycle_length: 11.0,
            month_lo: 1,
            month_hi: 12,
        }
    }
}

/// Slider domain for the year range, covering the full SILSO series.
pub const YEAR_DOMAIN: std::ops::RangeInclusive<f64> = 1749.0..=2025.0;
/// Slider domain for the smoothing window.
pub const WINDOW_DOMAIN: std::ops::RangeInclusive<usize> = 1..=15;

// ---------------------------------------------------------------------------
// Sun image catalog
// ---------------------------------------------------------------------------

/// A selectable live solar image. Pure passthrough: the URL is handed to the
/// image loader, nothing is computed from it.
#[derive(Debug, Clone, Copy)]
pub struct SunImageSource {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SUN_IMAGE_SOURCES: &[SunImageSource] = &[
    SunImageSource {
        label: "Real Time Sun Image",
        url: "https://soho.nascom.nasa.gov/data/realtime/hmi_igr/1024/latest.jpg",
    },
    SunImageSource {
        label: "EIT 171",
        url: "https://soho.nascom.nasa.gov/data/realtime/eit_171/1024/latest.jpg",
    },
    SunImageSource {
        label: "EIT 195",
        url: "https://soho.nascom.nasa.gov/data/realtime/eit_195/1024/latest.jpg",
    },
    SunImageSource {
        label: "EIT 284",
        url: "https://soho.nascom.nasa.gov/data/realtime/eit_284/1024/latest.jpg",
    },
    SunImageSource {
        label: "EIT 304",
        url: "https://soho.nascom.nasa.gov/data/realtime/eit_304/1024/latest.jpg",
    },
    SunImageSource {
        label: "SDO/HMI Continuum",
        url: "https://soho.nascom.nasa.gov/data/realtime/hmi_igr/1024/latest.jpg",
    },
    SunImageSource {
        label: "SDO/HMI Magnetogram",
        url: "https://soho.nascom.nasa.gov/data/realtime/hmi_mag/1024/latest.jpg",
    },
    SunImageSource {
        label: "SOHO LASCO C2",
        url: "https://soho.nascom.nasa.gov/data/realtime/c2/1024/latest.jpg",
    },
    SunImageSource {
        label: "SOHO LASCO C3",
        url: "https://soho.nascom.nasa.gov/data/realtime/c3/1024/latest.jpg",
    },
];

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Read-only afterwards;
    /// the transforms return derived sequences instead of mutating it.
    pub dataset: Option<SunspotDataset>,

    /// Current control-widget values.
    pub controls: Controls,

    /// Cached output of the smoothing transform (activity chart).
    pub smoothed: Vec<SmoothedPoint>,

    /// Cached output of the periodicity transform (scatter chart).
    pub folded: Vec<PhasePoint>,

    /// Month → colour mapping for the scatter chart.
    pub month_colors: MonthColors,

    /// Index into [`SUN_IMAGE_SOURCES`].
    pub selected_image: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            controls: Controls::default(),
            smoothed: Vec::new(),
            folded: Vec::new(),
            month_colors: MonthColors::default(),
            selected_image: 0,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and compute both derived series.
    pub fn set_dataset(&mut self, dataset: SunspotDataset) {
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute_smoothed();
        self.recompute_folded();
    }

    /// Recompute the activity-chart series from the current controls.
    ///
    /// On a rejected parameter the previous series is kept; only the
    /// message changes. The chart is never cleared by a bad input.
    pub fn recompute_smoothed(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        match transform::smooth(
            dataset,
            self.controls.year_lo,
            self.controls.year_hi,
            self.controls.window,
        ) {
            Ok(series) => {
                self.smoothed = series;
                self.status_message = None;
            }
            Err(err) => {
                log::warn!("smoothing rejected: {err}");
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Recompute the periodicity-chart series from the current controls.
    pub fn recompute_folded(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        match transform::fold(
            dataset,
            self.controls.cycle_length,
            self.controls.month_lo,
            self.controls.month_hi,
        ) {
            Ok(series) => {
                self.folded = series;
                self.status_message = None;
            }
            Err(err) => {
                log::warn!("fold rejected: {err}");
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// URL of the currently selected sun image.
    pub fn selected_image_url(&self) -> &'static str {
        SUN_IMAGE_SOURCES
            .get(self.selected_image)
            .unwrap_or(&SUN_IMAGE_SOURCES[0])
            .url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Observation, SunspotDataset};

    fn tiny_dataset() -> SunspotDataset {
        SunspotDataset::new(vec![
            Observation {
                year: 1950,
                month: 1,
                yr_fraction: 1950.042,
                monthly_mean: 101.0,
            },
            Observation {
                year: 1950,
                month: 2,
                yr_fraction: 1950.123,
                monthly_mean: 95.0,
            },
        ])
    }

    #[test]
    fn loading_a_dataset_populates_both_series() {
        let mut state = AppState::default();
        state.set_dataset(tiny_dataset());
        assert_eq!(state.smoothed.len(), 2);
        assert_eq!(state.folded.len(), 2);
    }

    #[test]
    fn rejected_parameter_keeps_the_previous_series() {
        let mut state = AppState::default();
        state.set_dataset(tiny_dataset());
        let before = state.folded.clone();

        state.controls.cycle_length = 0.0;
        state.recompute_folded();

        assert_eq!(state.folded, before);
        assert!(state.status_message.is_some());
    }
}
