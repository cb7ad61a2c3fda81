mod common;
use common::{build_week, four_days_and_friday};
use rworkweek::core::Core;
use rworkweek::core::calculator::friday::{TARGET_REACHED_MESSAGE, project};
use rworkweek::core::calculator::week::WeekTotals;
use std::collections::BTreeMap;

fn totals(pre_friday_minutes: i64) -> WeekTotals {
    WeekTotals {
        pre_friday_minutes,
        ..Default::default()
    }
}

#[test]
fn test_projection_from_explicit_start_and_lunch() {
    let week = build_week(&[("Friday", ("7:30", "", "30"))]);
    let p = project(&week, &totals(32 * 60), &[], &BTreeMap::new());

    // 7:30 AM + 8h + 30 min
    assert_eq!(p.clock_out.as_deref(), Some("4:00 PM"));
    assert!(p.warnings.is_empty());
    assert!(p.successes.is_empty());
    assert_eq!(
        p.normalized,
        vec![("Friday_start".to_string(), "7:30 AM".to_string())]
    );
}

#[test]
fn test_projection_defaults_start_and_lunch() {
    let week = build_week(&[]);
    let p = project(&week, &totals(30 * 60), &[], &BTreeMap::new());

    // 8:00 AM + 10h + 60 min
    assert_eq!(p.clock_out.as_deref(), Some("7:00 PM"));
    assert_eq!(
        p.warnings,
        vec![
            "Friday start time assumed to be 8:00 AM",
            "Friday: lunch assumed to be 60 minutes",
        ]
    );
}

#[test]
fn test_lunch_warning_not_repeated() {
    let week = build_week(&[("Friday", ("8", "", ""))]);
    let existing = vec!["Friday: lunch assumed to be 60 minutes".to_string()];
    let p = project(&week, &totals(32 * 60), &existing, &BTreeMap::new());

    assert!(p.warnings.is_empty());
    assert_eq!(p.clock_out.as_deref(), Some("5:00 PM"));
}

#[test]
fn test_unprojectable_friday_returns_none() {
    let bad_start = build_week(&[("Friday", ("nope", "", ""))]);
    assert_eq!(
        project(&bad_start, &totals(0), &[], &BTreeMap::new()).clock_out,
        None
    );

    let bad_lunch = build_week(&[("Friday", ("8:00 AM", "", "abc"))]);
    assert_eq!(
        project(&bad_lunch, &totals(0), &[], &BTreeMap::new()).clock_out,
        None
    );
}

#[test]
fn test_invalid_friday_end_falls_back_to_projection() {
    let week = build_week(&[("Friday", ("8:00 AM", "99", "0"))]);
    let p = project(&week, &totals(36 * 60), &[], &BTreeMap::new());

    assert_eq!(p.clock_out.as_deref(), Some("12:00 PM"));
}

#[test]
fn test_target_reached_uses_normalized_start() {
    let week = build_week(&[("Friday", ("9", "", ""))]);
    let mut normalized = BTreeMap::new();
    normalized.insert("Friday_start".to_string(), "9:00 AM".to_string());

    let p = project(&week, &totals(41 * 60), &[], &normalized);
    assert_eq!(p.clock_out.as_deref(), Some("9:00 AM"));
    assert_eq!(p.successes, vec![TARGET_REACHED_MESSAGE]);
    assert!(p.warnings.is_empty());

    let p = project(&week, &totals(40 * 60), &[], &BTreeMap::new());
    assert_eq!(p.clock_out.as_deref(), Some("8:00 AM"));
}

#[test]
fn test_huge_friday_lunch_gives_no_clock_out() {
    let week = build_week(&[("Friday", ("8", "", "9223372036854775807"))]);
    let p = project(&week, &totals(32 * 60), &[], &BTreeMap::new());
    assert_eq!(p.clock_out, None);

    let week = four_days_and_friday(("8", "5", "60"), ("8", "", "9223372036854775807"));
    let result = Core::calculate_week(&week);
    assert!(result.errors.is_empty());
    assert_eq!(result.total_hours, Some(32.0));
    assert_eq!(result.friday_clock_out, None);

    let week = four_days_and_friday(("8", "5", "60"), ("8", "", "99999999999999999999"));
    assert_eq!(Core::calculate_week(&week).friday_clock_out, None);
}
