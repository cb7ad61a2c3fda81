use crate::models::{DayField, field_key};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a full week evaluation.
///
/// When `errors` is non-empty, `total_hours`, `hours_to_40` and
/// `friday_clock_out` are `None` and `daily_hours` is empty. Messages,
/// field errors and normalized values are always kept so a caller can show
/// every mistake at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculationResult {
    pub total_hours: Option<f64>,
    /// Positive: hours still missing to 40. Negative: overtime.
    pub hours_to_40: Option<f64>,
    pub friday_clock_out: Option<String>,
    pub daily_hours: BTreeMap<String, f64>,
    /// field key → short label ("Invalid start time", ...)
    pub field_errors: BTreeMap<String, String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub successes: Vec<String>,
    /// field key → canonical display ("8:00 AM")
    pub normalized_times: BTreeMap<String, String>,
}

impl CalculationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Field-error labels belonging to one day, in start/end/lunch order.
    pub fn field_errors_for(&self, day: &str) -> Vec<&str> {
        [DayField::Start, DayField::End, DayField::Lunch]
            .iter()
            .filter_map(|f| self.field_errors.get(&field_key(day, *f)))
            .map(String::as_str)
            .collect()
    }

    pub fn normalized(&self, day: &str, field: DayField) -> Option<&str> {
        self.normalized_times
            .get(&field_key(day, field))
            .map(String::as_str)
    }
}
