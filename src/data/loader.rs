use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::model::{Observation, SunspotDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load-time failures. Any of these aborts the whole load; there is no
/// partial or degraded dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading input: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 7 semicolon-separated fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    #[error("line {line}: field '{field}' has non-numeric value '{value}'")]
    Coercion {
        line: usize,
        field: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the SILSO monthly mean sunspot series from a file.
///
/// Expected layout (`SN_m_tot_V2.0.csv`): one record per line, 7
/// semicolon-separated fields in fixed order:
///
/// ```text
/// year;month;yr_fraction;monthly_mean;monthly_std;num_obs;definitive_flag
/// 1749;  1; 1749.042;  96.7;  -1.0;   -1; 1
/// ```
///
/// Whitespace around fields is tolerated. A leading header/metadata line is
/// skipped if it does not parse as a record. Rows where any retained column
/// (year, month, yr_fraction, monthly_mean) equals the sentinel `-1` are
/// dropped.
pub fn load_file(path: &Path) -> Result<SunspotDataset, LoadError> {
    let file = std::fs::File::open(path)?;
    load_reader(file)
}

/// Load the series from any reader. See [`load_file`] for the format.
pub fn load_reader<R: Read>(input: R) -> Result<SunspotDataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut observations = Vec::new();
    let mut dropped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = idx + 1;
        match parse_record(&record, line) {
            Ok(Some(obs)) => observations.push(obs),
            Ok(None) => dropped += 1,
            // Only the very first line may fail parsing: by convention it is
            // an optional header/metadata line.
            Err(err) if idx == 0 => {
                log::debug!("skipping header line: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    if dropped > 0 {
        log::info!("dropped {dropped} rows carrying the -1 sentinel");
    }

    Ok(SunspotDataset::new(observations))
}

// ---------------------------------------------------------------------------
// Record parsing & type coercion
// ---------------------------------------------------------------------------

/// Parse one record into a typed row.
///
/// All 7 columns are coerced before any filtering, so a bad value in a
/// column that is later discarded is still a fatal [`LoadError::Coercion`].
/// Returns `Ok(None)` for rows excluded by the `-1` sentinel.
fn parse_record(record: &StringRecord, line: usize) -> Result<Option<Observation>, LoadError> {
    if record.len() != 7 {
        return Err(LoadError::MalformedRecord {
            line,
            found: record.len(),
        });
    }

    let year = coerce_int(&record[0], line, "year")?;
    let month = coerce_int(&record[1], line, "month")?;
    let yr_fraction = coerce_float(&record[2], line, "yr_fraction")?;
    let monthly_mean = coerce_float(&record[3], line, "monthly_mean")?;
    let _monthly_std = coerce_float(&record[4], line, "monthly_std")?;
    let _num_obs = coerce_int(&record[5], line, "num_obs")?;
    let _definitive_flag = coerce_int(&record[6], line, "definitive_flag")?;

    // -1 marks "no observation recorded"; such rows are excluded outright,
    // not null-coerced.
    let has_sentinel = year == -1 || month == -1 || yr_fraction == -1.0 || monthly_mean == -1.0;
    if has_sentinel {
        return Ok(None);
    }

    Ok(Some(Observation {
        year,
        month,
        yr_fraction,
        monthly_mean,
    }))
}

fn coerce_int(raw: &str, line: usize, field: &'static str) -> Result<i32, LoadError> {
    raw.parse::<i32>().map_err(|_| LoadError::Coercion {
        line,
        field,
        value: raw.to_string(),
    })
}

fn coerce_float(raw: &str, line: usize, field: &'static str) -> Result<f64, LoadError> {
    raw.parse::<f64>().map_err(|_| LoadError::Coercion {
        line,
        field,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FIXTURE: &str = "\
1749; 1; 1749.042;  96.7; -1.0;   -1; 1
1749; 2; 1749.123; 104.3; -1.0;   -1; 1
1749; 3; 1749.204; 116.7; -1.0;   -1; 1
1749; 4; 1749.288;  92.8; -1.0;   -1; 1
";

    #[test]
    fn loads_and_types_valid_rows() {
        let ds = load_reader(FIXTURE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);

        let first = ds.iter().next().unwrap();
        assert_eq!(first.year, 1749);
        assert_eq!(first.month, 1);
        assert_eq!(first.yr_fraction, 1749.042);
        assert_eq!(first.monthly_mean, 96.7);
    }

    #[test]
    fn preserves_source_order() {
        let ds = load_reader(FIXTURE.as_bytes()).unwrap();
        let fractions: Vec<f64> = ds.iter().map(|o| o.yr_fraction).collect();
        assert_eq!(fractions, vec![1749.042, 1749.123, 1749.204, 1749.288]);
    }

    #[test]
    fn trims_field_whitespace() {
        let input = "  1749 ;  1 ;   1749.042 ;   96.7 ; -1.0 ; -1 ; 1\n";
        let ds = load_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.iter().next().unwrap().monthly_mean, 96.7);
    }

    #[test]
    fn drops_exactly_the_sentinel_rows() {
        let input = "\
1749; 1; 1749.042;  96.7; -1.0; -1; 1
1749; 2; 1749.123;  -1.0; -1.0; -1; 1
1749; 3; 1749.204; 116.7; -1.0; -1; 1
1749; 4; 1749.288;  -1.0; -1.0; -1; 1
";
        let ds = load_reader(input.as_bytes()).unwrap();
        // 4 raw rows, 2 carry a -1 monthly_mean.
        assert_eq!(ds.len(), 2);
        assert!(ds.iter().all(|o| o.monthly_mean != -1.0));
        assert!(ds.iter().all(|o| o.year != -1 && o.month != -1));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let input = "\
1749; 1; 1749.042;  96.7; -1.0; -1; 1
1749; 2; 1749.123; 104.3
";
        let err = load_reader(input.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedRecord { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 4);
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_aborts_the_load() {
        let input = "\
1749; 1; 1749.042;  96.7; -1.0; -1; 1
1749; 2; 1749.123;  oops; -1.0; -1; 1
";
        let err = load_reader(input.as_bytes()).unwrap_err();
        match err {
            LoadError::Coercion { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "monthly_mean");
                assert_eq!(value, "oops");
            }
            other => panic!("expected Coercion, got {other:?}"),
        }
    }

    #[test]
    fn bad_discarded_column_is_still_fatal() {
        // monthly_std is dropped after coercion, but coercion happens first.
        let input = "1749; 1; 1749.042; 96.7; n/a; -1; 1\n\
                     1749; 2; 1749.123; 104.3; -1.0; -1; 1\n";
        // First line is forgiven as a header; the same defect later is not.
        let input2 = format!("{FIXTURE}1749; 5; 1749.371; 80.0; n/a; -1; 1\n");
        assert!(load_reader(input.as_bytes()).is_ok());
        assert!(matches!(
            load_reader(input2.as_bytes()),
            Err(LoadError::Coercion { field: "monthly_std", .. })
        ));
    }

    #[test]
    fn leading_header_line_is_skipped() {
        let input = format!("year;month;yr_fraction;mean;std;obs;flag\n{FIXTURE}");
        let ds = load_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let ds = load_reader("".as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn load_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.year_span(), Some((1749.042, 1749.288)));
    }
}
