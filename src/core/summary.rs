//! Display-ready state derived from a [`CalculationResult`].

use crate::models::day_field::split_field_key;
use crate::models::{CalculationResult, DayInput};
use crate::utils::formatting::{format_hours_display, format_hours_kpi};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub successes: Vec<String>,
    /// Empty when the week has errors.
    pub total_hours_text: String,
    pub hours_to_40_text: String,
    pub hours_to_40_is_overtime: bool,
    pub friday_clock_out_text: String,
    pub daily_hours_text: BTreeMap<String, String>,
    pub field_errors: BTreeMap<String, String>,
    /// Days whose lunch field was left empty.
    pub lunch_warning_days: BTreeSet<String>,
    /// Days with at least one field error.
    pub error_days: BTreeSet<String>,
}

impl WeekSummary {
    pub fn from_result(result: &CalculationResult, days: &[DayInput]) -> Self {
        let daily_hours_text = result
            .daily_hours
            .iter()
            .map(|(day, hours)| (day.clone(), format_hours_display(*hours)))
            .collect();

        let lunch_warning_days = days
            .iter()
            .filter(|d| d.lunch_is_blank())
            .map(|d| d.day_name.clone())
            .collect();

        let error_days = result
            .field_errors
            .keys()
            .filter_map(|k| split_field_key(k))
            .map(|(day, _)| day.to_string())
            .collect();

        Self {
            errors: result.errors.clone(),
            warnings: result.warnings.clone(),
            successes: result.successes.clone(),
            total_hours_text: result.total_hours.map(format_hours_kpi).unwrap_or_default(),
            hours_to_40_text: result.hours_to_40.map(format_hours_kpi).unwrap_or_default(),
            hours_to_40_is_overtime: result.hours_to_40.is_some_and(|h| h < 0.0),
            friday_clock_out_text: result.friday_clock_out.clone().unwrap_or_default(),
            daily_hours_text,
            field_errors: result.field_errors.clone(),
            lunch_warning_days,
            error_days,
        }
    }
}
