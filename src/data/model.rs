use serde::Serialize;

// ---------------------------------------------------------------------------
// Observation – one cleaned row of the SILSO monthly series
// ---------------------------------------------------------------------------

/// One monthly sunspot observation after cleaning.
///
/// Only the four columns the dashboard uses survive the load; the source
/// file's monthly_std, num_obs and definitive_flag columns are coerced for
/// validation and then discarded. None of the retained fields is ever the
/// sentinel `-1` (rows carrying it are dropped at load time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1–12.
    pub month: i32,
    /// Year as a continuous decimal, e.g. 1749.042 ≈ January 1749.
    /// Serves as the continuous time axis.
    pub yr_fraction: f64,
    /// Mean sunspot number for the month.
    pub monthly_mean: f64,
}

// ---------------------------------------------------------------------------
// SunspotDataset – the complete loaded series
// ---------------------------------------------------------------------------

/// The full cleaned series, in source order (ascending yr_fraction).
///
/// Loaded once and never mutated afterwards; the transforms in
/// [`crate::data::transform`] return new derived sequences instead of
/// touching the rows.
#[derive(Debug, Clone)]
pub struct SunspotDataset {
    observations: Vec<Observation>,
}

impl SunspotDataset {
    /// Wrap cleaned observations, preserving their order.
    pub fn new(observations: Vec<Observation>) -> Self {
        SunspotDataset { observations }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterate the rows in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// First and last yr_fraction of the series, if any rows exist.
    pub fn year_span(&self) -> Option<(f64, f64)> {
        match (self.observations.first(), self.observations.last()) {
            (Some(first), Some(last)) => Some((first.yr_fraction, last.yr_fraction)),
            _ => None,
        }
    }
}
