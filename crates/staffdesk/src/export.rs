//! CSV export and structured serialization.
//!
//! An export writes the filtered, sorted view (every page, not just the one
//! on screen) with one header row of column labels.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::output::OutputMode;
use crate::records::Record;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a structured output mode")]
    NotStructured,
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e.to_string())
    }
}

/// `<kind>-export-YYYY-MM-DD.csv`
pub fn default_file_name(kind: &str, today: NaiveDate) -> String {
    format!("{}-export-{}.csv", kind, today.format("%Y-%m-%d"))
}

/// Renders rows as CSV: a label header, then one line per row.
///
/// Quoting follows the `csv` crate's rules, so commas, quotes and newlines
/// inside a cell survive a round trip through any CSV reader.
pub fn to_csv<R: Record>(rows: &[&R]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(R::schema().labels())?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}

/// Writes a CSV export to `path`.
pub fn write_csv<R: Record>(rows: &[&R], path: &Path) -> Result<usize, ExportError> {
    let text = to_csv(rows)?;
    std::fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("exported {} {} rows to {}", rows.len(), R::KIND, path.display());
    Ok(rows.len())
}

/// Serializes data for a structured output mode.
///
/// `Csv` is only meaningful for row lists; use [`to_csv`] for those.
pub fn serialize_structured<T: Serialize>(data: &T, mode: OutputMode) -> Result<String, ExportError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        _ => Err(ExportError::NotStructured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AssetStatus, Condition, InventoryItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn file_name() {
        assert_eq!(
            default_file_name("inventory", date(2024, 3, 7)),
            "inventory-export-2024-03-07.csv"
        );
    }

    #[test]
    fn csv_has_header_and_quotes_when_needed() {
        let a = InventoryItem::new(1, "MacBook Pro 16\"", AssetStatus::Active, Condition::Excellent)
            .assigned("Sarah Johnson", date(2024, 1, 1));
        let b = InventoryItem::new(2, "Cable, USB-C", AssetStatus::Returned, Condition::Fair);

        let text = to_csv(&[&a, &b]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID,Item,Assigned To,Status,Condition,Assigned Date");
        assert_eq!(
            lines[1],
            "1,\"MacBook Pro 16\"\"\",Sarah Johnson,active,excellent,2024-01-01"
        );
        assert_eq!(lines[2], "2,\"Cable, USB-C\",,returned,fair,");
    }

    #[test]
    fn empty_export_is_header_only() {
        let rows: Vec<&InventoryItem> = Vec::new();
        assert_eq!(
            to_csv(&rows).unwrap(),
            "ID,Item,Assigned To,Status,Condition,Assigned Date\n"
        );
    }

    #[test]
    fn write_csv_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.csv");
        let rows: Vec<&InventoryItem> = Vec::new();
        let err = write_csv(&rows, &path).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn structured_json_and_yaml() {
        let data = vec![1, 2];
        assert!(serialize_structured(&data, OutputMode::Json).unwrap().contains('1'));
        assert_eq!(serialize_structured(&data, OutputMode::Yaml).unwrap(), "- 1\n- 2\n");
        assert!(matches!(
            serialize_structured(&data, OutputMode::Text),
            Err(ExportError::NotStructured)
        ));
    }
}
