use rworkweek::core::calculator::day::{
    DayCase, DayIssue, DayStatus, parse_lunch, process_day,
};
use rworkweek::models::{DayField, DayInput};

fn day(name: &str, start: &str, end: &str, lunch: &str) -> DayInput {
    DayInput::new(name, start, end, lunch)
}

#[test]
fn test_blank_day_assumes_eight_hours() {
    let r = process_day(&day("Monday", "", "", ""));
    assert_eq!(r.case, DayCase::BothBlank);
    assert_eq!(r.status, DayStatus::Worked(480));
    assert!(r.warnings.is_empty());
    assert!(r.normalized.is_empty());
}

#[test]
fn test_blank_day_lunch_is_validated_but_not_subtracted() {
    let ok = process_day(&day("Monday", " ", "", "30"));
    assert_eq!(ok.worked_minutes(), Some(480));

    let bad = process_day(&day("Monday", "", "", "abc"));
    assert_eq!(bad.issues(), &[DayIssue::InvalidLunchDuration]);
    assert_eq!(bad.error_lines(), vec!["Monday: invalid lunch duration"]);
    assert_eq!(
        bad.field_errors(),
        vec![("Monday_lunch".to_string(), "Invalid lunch duration".to_string())]
    );

    let negative = process_day(&day("Monday", "", "", "-1"));
    assert_eq!(negative.issues(), &[DayIssue::InvalidLunchDuration]);
}

#[test]
fn test_start_only_weekday() {
    let r = process_day(&day("Monday", "8", "", ""));
    assert_eq!(r.case, DayCase::StartOnly);
    assert_eq!(r.status, DayStatus::Worked(480));
    assert_eq!(r.normalized, vec![(DayField::Start, "8:00 AM".to_string())]);

    let bad = process_day(&day("Monday", "asdf", "", ""));
    assert_eq!(bad.issues(), &[DayIssue::InvalidStartTime]);
    assert_eq!(
        bad.field_errors(),
        vec![("Monday_start".to_string(), "Invalid start time".to_string())]
    );

    let bad_lunch = process_day(&day("Monday", "8:00 AM", "", "x"));
    assert_eq!(bad_lunch.issues(), &[DayIssue::InvalidLunchDuration]);
    // start still normalized
    assert_eq!(
        bad_lunch.normalized_times(),
        vec![("Monday_start".to_string(), "8:00 AM".to_string())]
    );
}

#[test]
fn test_friday_start_only_is_in_progress() {
    let r = process_day(&day("Friday", "8:00 AM", "", ""));
    assert_eq!(r.case, DayCase::FridayInProgress);
    assert_eq!(r.status, DayStatus::Deferred);
    assert_eq!(r.worked_minutes(), None);
    assert_eq!(r.warnings, vec!["Friday: lunch assumed to be 60 minutes"]);

    let with_lunch = process_day(&day("friday", "9", "", "45"));
    assert_eq!(with_lunch.case, DayCase::FridayInProgress);
    assert_eq!(with_lunch.status, DayStatus::Deferred);
    assert!(with_lunch.warnings.is_empty());
}

#[test]
fn test_friday_start_only_errors() {
    let bad_start = process_day(&day("Friday", "nope", "", ""));
    assert_eq!(bad_start.issues(), &[DayIssue::InvalidStartTime]);
    assert!(bad_start.warnings.is_empty());

    let bad_lunch = process_day(&day("Friday", "8:00 AM", "", "-5"));
    assert_eq!(bad_lunch.error_lines(), vec!["Friday: invalid lunch duration"]);
    assert_eq!(
        bad_lunch.field_errors(),
        vec![("Friday_lunch".to_string(), "Invalid lunch duration".to_string())]
    );
}

#[test]
fn test_end_only_day() {
    let r = process_day(&day("Monday", "", "5", ""));
    assert_eq!(r.case, DayCase::EndOnly);
    assert_eq!(r.status, DayStatus::Worked(480));
    assert_eq!(r.normalized, vec![(DayField::End, "5:00 PM".to_string())]);

    let bad = process_day(&day("Monday", "", "25:00", ""));
    assert_eq!(bad.error_lines(), vec!["Monday: invalid end time"]);

    let bad_lunch = process_day(&day("Monday", "", "5:00 PM", "abc"));
    assert_eq!(bad_lunch.issues(), &[DayIssue::InvalidLunchDuration]);
}

#[test]
fn test_full_shift_with_default_lunch() {
    let r = process_day(&day("Monday", "8:00 AM", "5:00 PM", ""));
    assert_eq!(r.case, DayCase::Both);
    assert_eq!(r.status, DayStatus::Worked(8 * 60));
    assert_eq!(r.warnings, vec!["Monday: lunch assumed to be 60 minutes"]);
}

#[test]
fn test_full_shift_with_explicit_lunch() {
    // 8 → 8:00 AM, 5 → 5:00 PM
    let r = process_day(&day("Tuesday", "8", "5", "30"));
    assert_eq!(r.worked_minutes(), Some(9 * 60 - 30));
    assert!(r.warnings.is_empty());

    let no_lunch = process_day(&day("Tuesday", "8:00 AM", "9:00 AM", "60"));
    assert_eq!(no_lunch.worked_minutes(), Some(0));
}

#[test]
fn test_full_shift_both_times_invalid() {
    let r = process_day(&day("Monday", "x", "y", ""));
    assert_eq!(
        r.issues(),
        &[DayIssue::InvalidStartTime, DayIssue::InvalidEndTime]
    );
    assert_eq!(
        r.error_lines(),
        vec!["Monday: invalid start time", "Monday: invalid end time"]
    );
    assert!(r.warnings.is_empty());
}

#[test]
fn test_full_shift_keeps_valid_sibling_normalized() {
    let r = process_day(&day("Monday", "8:00 AM", "25:00", "0"));
    assert_eq!(r.issues(), &[DayIssue::InvalidEndTime]);
    assert_eq!(
        r.field_errors(),
        vec![("Monday_end".to_string(), "Invalid end time".to_string())]
    );
    assert_eq!(
        r.normalized_times(),
        vec![("Monday_start".to_string(), "8:00 AM".to_string())]
    );
}

#[test]
fn test_end_before_start() {
    let r = process_day(&day("Monday", "5:00 PM", "8:00 AM", "0"));
    assert_eq!(r.error_lines(), vec!["Monday: end time is before start time"]);
    assert_eq!(
        r.field_errors(),
        vec![("Monday_end".to_string(), "End time before start time".to_string())]
    );

    let same = process_day(&day("Monday", "9:00 AM", "9:00 AM", "0"));
    assert_eq!(same.issues(), &[DayIssue::EndBeforeStart]);
}

#[test]
fn test_lunch_exceeds_shift() {
    let r = process_day(&day("Monday", "8:00 AM", "9:00 AM", "120"));
    assert_eq!(r.worked_minutes(), None);
    assert_eq!(r.error_lines(), vec!["Monday: lunch exceeds shift length"]);
    assert_eq!(
        r.field_errors(),
        vec![("Monday_lunch".to_string(), "Lunch exceeds shift length".to_string())]
    );

    // default lunch longer than a 30 minute shift: warning and error
    let short = process_day(&day("Monday", "8:00 AM", "8:30 AM", ""));
    assert_eq!(short.issues(), &[DayIssue::LunchExceedsShift]);
    assert_eq!(short.warnings.len(), 1);
}

#[test]
fn test_parse_lunch() {
    assert_eq!(parse_lunch("60"), Some(60));
    assert_eq!(parse_lunch(" 0 "), Some(0));
    assert_eq!(parse_lunch("-1"), None);
    assert_eq!(parse_lunch("1.5"), None);
    assert_eq!(parse_lunch("abc"), None);
    assert_eq!(parse_lunch("99999999999999999999"), Some(i64::MAX));
    assert_eq!(parse_lunch("-99999999999999999999"), None);
}

#[test]
fn test_oversized_lunch_is_still_a_number() {
    let blank = process_day(&day("Friday", "", "", "99999999999999999999"));
    assert_eq!(blank.status, DayStatus::Worked(480));

    let shift = process_day(&day("Monday", "8", "5", "99999999999999999999"));
    assert_eq!(shift.issues(), &[DayIssue::LunchExceedsShift]);
}

#[test]
fn test_issue_labels_and_fields() {
    assert_eq!(DayIssue::InvalidStartTime.to_string(), "invalid start time");
    assert_eq!(DayIssue::EndBeforeStart.field(), DayField::End);
    assert_eq!(DayIssue::LunchExceedsShift.field(), DayField::Lunch);
    assert_eq!(DayIssue::InvalidEndTime.label(), "Invalid end time");
}
