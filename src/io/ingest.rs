//! Fixation report ingest.
//!
//! This module turns a semicolon-delimited tracker export into
//! `FixationRecord`s that are safe to segment.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Fail-fast rows**: a malformed numeric field aborts the run with the
//!   line and column named, rather than silently skewing the plot
//! - **No caching**: every invocation re-reads the file, so batch runs always
//!   see the dataset as it is on disk

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::FixationRecord;
use crate::error::AppError;

pub const COL_SESSION: &str = "RECORDING_SESSION_LABEL";
pub const COL_TRIAL: &str = "TRIAL_INDEX";
pub const COL_FRAME: &str = "VIDEO_FRAME_INDEX_START";
pub const COL_X: &str = "CURRENT_FIX_X";
pub const COL_Y: &str = "CURRENT_FIX_Y";
pub const COL_DURATION: &str = "CURRENT_FIX_DURATION";

const REQUIRED_COLUMNS: [&str; 6] = [COL_SESSION, COL_TRIAL, COL_FRAME, COL_X, COL_Y, COL_DURATION];

/// Ingest output: parsed records plus how many data rows the file held.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub records: Vec<FixationRecord>,
    pub rows_read: usize,
}

/// Load a fixation report from disk.
pub fn load_fixations(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!(
            "Failed to open fixation report '{}': {e}",
            path.display()
        ))
    })?;
    load_fixations_from_reader(file, &path.display().to_string())
}

/// Load a fixation report from any reader. `source` names the input in errors.
pub fn load_fixations_from_reader<R: Read>(reader: R, source: &str) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read headers of '{source}': {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map, source)?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - the report is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record =
            result.map_err(|e| AppError::input(format!("{source}:{line}: malformed row: {e}")))?;

        records.push(parse_row(&record, &header_map, source, line)?);
    }

    Ok(IngestedData { records, rows_read })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 exports with a BOM prefix on
    // the first header. If we don't strip it, schema validation would
    // incorrectly report the session column as missing.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_uppercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>, source: &str) -> Result<(), AppError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !header_map.contains_key(*name))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::input(format!(
            "'{source}' is missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    source: &str,
    line: usize,
) -> Result<FixationRecord, AppError> {
    let session = get_required(record, header_map, COL_SESSION, source, line)?.to_string();
    let trial = parse_i64(
        get_required(record, header_map, COL_TRIAL, source, line)?,
        COL_TRIAL,
        source,
        line,
    )?;
    let frame = parse_f64(
        get_required(record, header_map, COL_FRAME, source, line)?,
        COL_FRAME,
        source,
        line,
    )?;
    let x = parse_f64(
        get_required(record, header_map, COL_X, source, line)?,
        COL_X,
        source,
        line,
    )?;
    let y = parse_f64(
        get_required(record, header_map, COL_Y, source, line)?,
        COL_Y,
        source,
        line,
    )?;
    let duration_ms = parse_f64(
        get_required(record, header_map, COL_DURATION, source, line)?,
        COL_DURATION,
        source,
        line,
    )?;

    Ok(FixationRecord {
        session,
        trial,
        frame,
        x,
        y,
        duration_ms,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    source: &str,
    line: usize,
) -> Result<&'a str, AppError> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| AppError::input(format!("Missing required column: {name}")))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::input(format!("{source}:{line}: empty value in column {name}")))
}

fn parse_i64(s: &str, column: &str, source: &str, line: usize) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::input(format!("{source}:{line}: invalid integer '{s}' in column {column}")))
}

fn parse_f64(s: &str, column: &str, source: &str, line: usize) -> Result<f64, AppError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => {
            // Exports from locales that write decimal commas are a known
            // failure mode; name it instead of reporting a bare parse error.
            let hint = if s.contains(',') {
                " (decimal commas are not supported; re-export with '.' as the decimal separator)"
            } else {
                ""
            };
            Err(AppError::input(format!(
                "{source}:{line}: invalid number '{s}' in column {column}{hint}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "RECORDING_SESSION_LABEL;TRIAL_INDEX;VIDEO_FRAME_INDEX_START;CURRENT_FIX_X;CURRENT_FIX_Y;CURRENT_FIX_DURATION";

    fn load(body: &str) -> Result<IngestedData, AppError> {
        load_fixations_from_reader(body.as_bytes(), "test.csv")
    }

    #[test]
    fn parses_semicolon_report() {
        let data = load(&format!(
            "{HEADER}\nVPN001;2;5;960.5;540.25;180\nVPN001;2;10;100;200;95.5\n"
        ))
        .unwrap();
        assert_eq!(data.rows_read, 2);
        assert_eq!(data.records.len(), 2);
        let r = &data.records[0];
        assert_eq!(r.session, "VPN001");
        assert_eq!(r.trial, 2);
        assert_eq!(r.frame, 5.0);
        assert_eq!(r.x, 960.5);
        assert_eq!(r.duration_ms, 180.0);
    }

    #[test]
    fn preserves_row_order() {
        let data = load(&format!(
            "{HEADER}\nVPN001;1;15;1;1;1\nVPN001;1;5;2;2;2\nVPN001;1;10;3;3;3\n"
        ))
        .unwrap();
        let frames: Vec<f64> = data.records.iter().map(|r| r.frame).collect();
        assert_eq!(frames, vec![15.0, 5.0, 10.0]);
    }

    #[test]
    fn strips_bom_from_first_header() {
        let data = load(&format!("\u{feff}{HEADER}\nVPN001;1;1;0;0;100\n")).unwrap();
        assert_eq!(data.records.len(), 1);
    }

    #[test]
    fn missing_column_is_named() {
        let err = load("RECORDING_SESSION_LABEL;TRIAL_INDEX\nVPN001;1\n").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("VIDEO_FRAME_INDEX_START"));
    }

    #[test]
    fn non_numeric_field_aborts_with_location() {
        let err = load(&format!("{HEADER}\nVPN001;1;abc;0;0;100\n")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("test.csv:2"), "{msg}");
        assert!(msg.contains(COL_FRAME), "{msg}");
    }

    #[test]
    fn decimal_comma_gets_a_hint() {
        let err = load(&format!("{HEADER}\nVPN001;1;1;960,5;540;100\n")).unwrap_err();
        assert!(err.to_string().contains("decimal commas"), "{err}");
    }
}
