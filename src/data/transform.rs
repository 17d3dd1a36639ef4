use serde::Serialize;
use thiserror::Error;

use super::model::SunspotDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A transform rejected one of its parameters. Only that recomputation
/// fails; the caller keeps whatever it rendered last.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

fn invalid(name: &'static str, reason: impl Into<String>) -> TransformError {
    TransformError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

// ---------------------------------------------------------------------------
// Smoothing transform
// ---------------------------------------------------------------------------

/// One point of the smoothed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothedPoint {
    pub yr_fraction: f64,
    pub monthly_mean: f64,
    /// Trailing moving average over the last `window` points of the filtered
    /// series; `None` until `window` values have accumulated.
    pub rolling_mean: Option<f64>,
}

/// Filter to `year_lo <= yr_fraction <= year_hi` (inclusive both ends) and
/// compute a strict trailing moving average of monthly_mean.
///
/// The first `window - 1` points carry no rolling value; there is no
/// partial-window fallback at the start of the series. An empty filter
/// result, including `year_lo > year_hi`, yields an empty sequence rather
/// than an error.
pub fn smooth(
    data: &SunspotDataset,
    year_lo: f64,
    year_hi: f64,
    window: usize,
) -> Result<Vec<SmoothedPoint>, TransformError> {
    if !year_lo.is_finite() || !year_hi.is_finite() {
        return Err(invalid("year range", "bounds must be finite numbers"));
    }
    if window == 0 {
        return Err(invalid("window", "window size must be at least 1"));
    }

    let rows: Vec<(f64, f64)> = data
        .iter()
        .filter(|o| o.yr_fraction >= year_lo && o.yr_fraction <= year_hi)
        .map(|o| (o.yr_fraction, o.monthly_mean))
        .collect();

    let mut out = Vec::with_capacity(rows.len());
    let mut running_sum = 0.0;

    for (i, &(yr_fraction, monthly_mean)) in rows.iter().enumerate() {
        running_sum += monthly_mean;
        if i >= window {
            running_sum -= rows[i - window].1;
        }
        let rolling_mean = (i + 1 >= window).then(|| running_sum / window as f64);
        out.push(SmoothedPoint {
            yr_fraction,
            monthly_mean,
            rolling_mean,
        });
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Periodicity transform
// ---------------------------------------------------------------------------

/// One point of the folded series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhasePoint {
    /// `yr_fraction mod cycle_length`, in `[0, cycle_length)`.
    pub phase: f64,
    pub monthly_mean: f64,
    /// Calendar month of the source row, kept for per-month colouring.
    pub month: i32,
}

/// Fold the series onto a single assumed cycle: keep rows with
/// `month_lo <= month <= month_hi` (inclusive) and map each to
/// `(yr_fraction mod cycle_length, monthly_mean)`.
///
/// Multiple cycles of data overlay on the same phase axis; no binning or
/// aggregation is performed. Month bounds outside 1–12 are not an error,
/// they simply match fewer rows. A zero, negative or non-finite
/// `cycle_length` is rejected (modulus is undefined there).
pub fn fold(
    data: &SunspotDataset,
    cycle_length: f64,
    month_lo: i32,
    month_hi: i32,
) -> Result<Vec<PhasePoint>, TransformError> {
    if !cycle_length.is_finite() || cycle_length <= 0.0 {
        return Err(invalid("cycle length", "must be a positive number of years"));
    }

    Ok(data
        .iter()
        .filter(|o| o.month >= month_lo && o.month <= month_hi)
        .map(|o| PhasePoint {
            phase: o.yr_fraction.rem_euclid(cycle_length),
            monthly_mean: o.monthly_mean,
            month: o.month,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
