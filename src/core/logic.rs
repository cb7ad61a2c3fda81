use crate::core::calculator::{day, friday, week};
use crate::models::{CalculationResult, DayInput};
use std::collections::BTreeSet;

pub struct Core;

impl Core {
    /// Evaluate a full week.
    ///
    /// Every day is processed, so all mistakes are reported in one pass.
    /// Any error blocks totals, daily hours and the Friday clock-out, but
    /// warnings and normalized values gathered so far are kept.
    ///
    /// Day names must be distinct: results are keyed by `day_name`, so two
    /// entries with the same name would be merged.
    pub fn calculate_week(days: &[DayInput]) -> CalculationResult {
        debug_assert!(
            days.iter()
                .map(|d| d.day_name.as_str())
                .collect::<BTreeSet<_>>()
                .len()
                == days.len(),
            "duplicate day names passed to calculate_week"
        );

        let mut result = CalculationResult::default();

        let reports: Vec<day::DayReport> = days.iter().map(day::process_day).collect();

        for report in &reports {
            result.field_errors.extend(report.field_errors());
            result.normalized_times.extend(report.normalized_times());
            result.errors.extend(report.error_lines());
            result.warnings.extend(report.warnings.iter().cloned());
        }

        if result.has_errors() {
            log::debug!("week blocked by {} error(s)", result.errors.len());
            return result;
        }

        let totals = week::aggregate(&reports);
        let projection =
            friday::project(days, &totals, &result.warnings, &result.normalized_times);

        result.total_hours = Some(totals.total_hours);
        result.hours_to_40 = Some(totals.hours_to_40);
        result.daily_hours = totals.daily_hours;
        result.friday_clock_out = projection.clock_out;
        result.warnings.extend(projection.warnings);
        result.successes.extend(projection.successes);
        result.normalized_times.extend(projection.normalized);

        result
    }
}
