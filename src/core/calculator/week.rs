//! Weekly totals and quarter-hour rounding.

use crate::core::calculator::day::DayReport;
use crate::models::day_input::is_friday;
use std::collections::BTreeMap;

/// 40 hours, in minutes.
pub const WEEK_TARGET_MINUTES: i64 = 40 * 60;

/// Aggregated figures for a week without validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekTotals {
    pub total_minutes: i64,
    pub total_hours: f64,
    /// Signed: > 0 still to work, < 0 overtime.
    pub hours_to_40: f64,
    pub daily_hours: BTreeMap<String, f64>,
    /// Minutes of every day except Friday.
    pub pre_friday_minutes: i64,
    /// Friday minutes, when Friday produced a value.
    pub friday_minutes: Option<i64>,
}

/// Round an hour value to the nearest quarter.
///
/// Ties go to the even quarter (`round_ties_even`), then the result is
/// rounded to two decimals the same way to drop float noise.
pub fn round_to_quarter(value: f64) -> f64 {
    let quarters = (value * 4.0).round_ties_even() / 4.0;
    // + 0.0 turns a -0.0 into 0.0
    (quarters * 100.0).round_ties_even() / 100.0 + 0.0
}

pub fn minutes_to_hours(minutes: i64) -> f64 {
    round_to_quarter(minutes as f64 / 60.0)
}

/// Sum the days that produced minutes. Deferred days are skipped entirely.
///
/// Only meaningful when no day is invalid; the orchestrator checks that.
pub fn aggregate(reports: &[DayReport]) -> WeekTotals {
    let mut totals = WeekTotals::default();

    for report in reports {
        let Some(minutes) = report.worked_minutes() else {
            continue;
        };

        totals
            .daily_hours
            .insert(report.day_name.clone(), minutes_to_hours(minutes));
        totals.total_minutes += minutes;

        if is_friday(&report.day_name) {
            totals.friday_minutes = Some(minutes);
        } else {
            totals.pre_friday_minutes += minutes;
        }
    }

    totals.total_hours = minutes_to_hours(totals.total_minutes);
    totals.hours_to_40 = minutes_to_hours(WEEK_TARGET_MINUTES - totals.total_minutes);

    log::debug!(
        "week totals: {} min (pre-Friday {} min), to 40h: {}",
        totals.total_minutes,
        totals.pre_friday_minutes,
        totals.hours_to_40
    );

    totals
}
