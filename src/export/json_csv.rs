// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::DayExport;
use crate::models::CalculationResult;
use std::io;

/// Full result, pretty-printed.
pub(crate) fn render_json(result: &CalculationResult) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Per-day rows (header incluso grazie a serde).
pub(crate) fn render_csv(rows: &[DayExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
