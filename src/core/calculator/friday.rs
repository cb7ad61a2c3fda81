//! Friday clock-out projection.

use crate::core::calculator::day::{DEFAULT_LUNCH_MINUTES, parse_lunch};
use crate::core::calculator::time_parser::{format_time, parse_time};
use crate::core::calculator::week::{WEEK_TARGET_MINUTES, WeekTotals};
use crate::models::{DayField, DayInput, field_key};
use std::collections::BTreeMap;

/// Friday start used when the field is empty: 8:00 AM.
pub const DEFAULT_FRIDAY_START_MINUTES: i64 = 8 * 60;

pub const TARGET_REACHED_MESSAGE: &str = "40 hours reached before Friday this week";

/// What the projection adds to the week result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub clock_out: Option<String>,
    pub warnings: Vec<String>,
    pub successes: Vec<String>,
    /// field key → display, for Friday values resolved here
    pub normalized: Vec<(String, String)>,
}

/// Work out when Friday ends.
///
/// * 40h already reached Monday–Thursday: the Friday start is returned
///   (8:00 AM if unknown) together with a success message.
/// * An explicit, valid Friday end wins over any projection.
/// * Otherwise: start + (40h − pre-Friday minutes) + lunch.
///
/// `None` means the clock-out cannot be projected (bad start or lunch,
/// or a lunch so large the clock-out does not fit in minutes).
/// `existing_warnings` is only used to avoid repeating the lunch warning.
pub fn project(
    days: &[DayInput],
    totals: &WeekTotals,
    existing_warnings: &[String],
    normalized: &BTreeMap<String, String>,
) -> Projection {
    let mut out = Projection::default();

    let Some(friday) = days.iter().find(|d| d.is_friday()) else {
        log::debug!("no Friday in the week, skipping projection");
        return out;
    };
    let name = friday.day_name.as_str();
    let start_key = field_key(name, DayField::Start);

    if totals.pre_friday_minutes >= WEEK_TARGET_MINUTES {
        out.successes.push(TARGET_REACHED_MESSAGE.to_string());
        out.clock_out = Some(
            normalized
                .get(&start_key)
                .cloned()
                .unwrap_or_else(|| format_time(DEFAULT_FRIDAY_START_MINUTES)),
        );
        return out;
    }

    // ---- start ----
    let start_raw = friday.start_time.trim();
    let start_minutes = if start_raw.is_empty() {
        out.normalized
            .push((start_key, format_time(DEFAULT_FRIDAY_START_MINUTES)));
        out.warnings.push(format!(
            "{name} start time assumed to be {}",
            format_time(DEFAULT_FRIDAY_START_MINUTES)
        ));
        DEFAULT_FRIDAY_START_MINUTES
    } else {
        let Some(parsed) = parse_time(start_raw, true) else {
            return out;
        };
        out.normalized.push((start_key, parsed.display));
        parsed.minutes
    };

    // ---- lunch ----
    let lunch_raw = friday.lunch_minutes.trim();
    let lunch_minutes = if lunch_raw.is_empty() {
        let text = format!("{name}: lunch assumed to be {DEFAULT_LUNCH_MINUTES} minutes");
        if !existing_warnings.contains(&text) {
            out.warnings.push(text);
        }
        DEFAULT_LUNCH_MINUTES
    } else {
        match parse_lunch(lunch_raw) {
            Some(l) => l,
            None => return out,
        }
    };

    // ---- explicit end ----
    let end_raw = friday.end_time.trim();
    if !end_raw.is_empty()
        && let Some(parsed) = parse_time(end_raw, false)
    {
        out.normalized
            .push((field_key(name, DayField::End), parsed.display.clone()));
        out.clock_out = Some(parsed.display);
        return out;
    }

    // a huge lunch can push the sum past i64: no clock-out then
    let Some(clock_out) = (WEEK_TARGET_MINUTES - totals.pre_friday_minutes)
        .checked_add(lunch_minutes)
        .and_then(|remaining| remaining.checked_add(start_minutes))
    else {
        log::debug!("Friday projection overflowed (lunch={lunch_minutes}), skipping");
        return out;
    };
    let remaining = clock_out - start_minutes;

    log::debug!(
        "Friday projection: start={} lunch={} remaining={} (Friday counted: {:?}) -> {}",
        start_minutes,
        lunch_minutes,
        remaining,
        totals.friday_minutes,
        clock_out
    );

    out.clock_out = Some(format_time(clock_out));
    out
}
