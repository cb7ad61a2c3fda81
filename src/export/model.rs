// src/export/model.rs

use crate::models::{CalculationResult, DayField, DayInput};
use crate::utils::formatting::format_hours_display;
use serde::Serialize;

/// Flat per-day row for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub day: String,
    pub start: String,
    pub end: String,
    pub lunch: String,
    /// Empty when the day has no determinable duration.
    pub hours: String,
    pub errors: String,
}

/// One row per input day, in input order.
///
/// Start/end use the normalized display when available, the trimmed raw
/// text otherwise.
pub fn week_to_rows(result: &CalculationResult, days: &[DayInput]) -> Vec<DayExport> {
    days.iter()
        .map(|d| {
            let name = d.day_name.as_str();
            DayExport {
                day: name.to_string(),
                start: result
                    .normalized(name, DayField::Start)
                    .unwrap_or(d.start_time.trim())
                    .to_string(),
                end: result
                    .normalized(name, DayField::End)
                    .unwrap_or(d.end_time.trim())
                    .to_string(),
                lunch: d.lunch_minutes.trim().to_string(),
                hours: result
                    .daily_hours
                    .get(name)
                    .map(|h| format_hours_display(*h))
                    .unwrap_or_default(),
                errors: result.field_errors_for(name).join("; "),
            }
        })
        .collect()
}
