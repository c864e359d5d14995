use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{StateRecord, SurveyDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Contract violations callers may want to branch on.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a survey dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming the columns, one state per row
/// * `.json` – records orientation: `[{ "state": ..., "abbr": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<SurveyDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one state per row.
///
/// `state` and `abbr` identify the row and their columns must be present.
/// The six metric columns (`poverty`, `age`, `income`, `obesity`, `smokes`,
/// `healthcare`) are parsed as floats; absent columns, short rows and
/// unparseable cells all coerce to `NaN` instead of failing the load.
fn load_csv(path: &Path) -> Result<SurveyDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let state_idx = require_column(&headers, "state")?;
    let abbr_idx = require_column(&headers, "abbr")?;
    let poverty_idx = optional_column(&headers, "poverty");
    let age_idx = optional_column(&headers, "age");
    let income_idx = optional_column(&headers, "income");
    let obesity_idx = optional_column(&headers, "obesity");
    let smokes_idx = optional_column(&headers, "smokes");
    let healthcare_idx = optional_column(&headers, "healthcare");

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        records.push(StateRecord {
            state: row.get(state_idx).unwrap_or("").to_string(),
            abbr: row.get(abbr_idx).unwrap_or("").to_string(),
            poverty: metric_cell(&row, poverty_idx),
            age: metric_cell(&row, age_idx),
            income: metric_cell(&row, income_idx),
            obesity: metric_cell(&row, obesity_idx),
            smokes: metric_cell(&row, smokes_idx),
            healthcare: metric_cell(&row, healthcare_idx),
        });
    }

    Ok(SurveyDataset::from_records(records))
}

fn require_column(headers: &[String], name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn(name).into())
}

fn optional_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Numeric cell → f64, coercing absent or unparseable cells to `NaN`.
fn metric_cell(row: &csv::StringRecord, idx: Option<usize>) -> f64 {
    idx.and_then(|i| row.get(i))
        .map(parse_metric)
        .unwrap_or(f64::NAN)
}

fn parse_metric(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records orientation):
///
/// ```json
/// [
///   {
///     "state": "Alabama", "abbr": "AL",
///     "poverty": 20.1, "age": 38.1, "income": 42018,
///     "obesity": 32.4, "smokes": 23.5, "healthcare": 11.7
///   },
///   ...
/// ]
/// ```
///
/// `state` and `abbr` must be strings; metric fields may be numbers or
/// numeric strings, and anything else coerces to `NaN`.
fn load_json(path: &Path) -> Result<SurveyDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let state = obj
            .get("state")
            .and_then(JsonValue::as_str)
            .ok_or(LoadError::MissingColumn("state"))
            .with_context(|| format!("Row {i}"))?
            .to_string();
        let abbr = obj
            .get("abbr")
            .and_then(JsonValue::as_str)
            .ok_or(LoadError::MissingColumn("abbr"))
            .with_context(|| format!("Row {i}"))?
            .to_string();

        records.push(StateRecord {
            state,
            abbr,
            poverty: json_metric(obj.get("poverty")),
            age: json_metric(obj.get("age")),
            income: json_metric(obj.get("income")),
            obesity: json_metric(obj.get("obesity")),
            smokes: json_metric(obj.get("smokes")),
            healthcare: json_metric(obj.get("healthcare")),
        });
    }

    Ok(SurveyDataset::from_records(records))
}

fn json_metric(val: Option<&JsonValue>) -> f64 {
    match val {
        Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(JsonValue::String(s)) => parse_metric(s),
        _ => f64::NAN,
    }
}
