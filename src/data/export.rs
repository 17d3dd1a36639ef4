use std::path::Path;

use anyhow::{Context, Result};

use super::transform::SmoothedPoint;

// ---------------------------------------------------------------------------
// Derived-series export
// ---------------------------------------------------------------------------

/// Write the smoothed series as CSV (`yr_fraction,monthly_mean,rolling_mean`,
/// rolling_mean empty where undefined).
pub fn write_csv(path: &Path, series: &[SmoothedPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for point in series {
        writer.serialize(point).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

/// Write the smoothed series as a JSON array of records, the layout
/// `pandas.DataFrame.to_json(orient='records')` would produce.
pub fn write_json(path: &Path, series: &[SmoothedPoint]) -> Result<()> {
    let file = std::fs::File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, series).context("writing JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<SmoothedPoint> {
        vec![
            SmoothedPoint {
                yr_fraction: 1749.042,
                monthly_mean: 96.7,
                rolling_mean: None,
            },
            SmoothedPoint {
                yr_fraction: 1749.123,
                monthly_mean: 104.3,
                rolling_mean: Some(100.5),
            },
        ]
    }

    #[test]
    fn csv_export_includes_header_and_blank_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smoothed.csv");

        write_csv(&path, &series()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "yr_fraction,monthly_mean,rolling_mean"
        );
        assert_eq!(lines.next().unwrap(), "1749.042,96.7,");
        assert_eq!(lines.next().unwrap(), "1749.123,104.3,100.5");
    }

    #[test]
    fn json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smoothed.json");

        write_json(&path, &series()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert!(parsed[0]["rolling_mean"].is_null());
        assert_eq!(parsed[1]["rolling_mean"], 100.5);
    }
}
