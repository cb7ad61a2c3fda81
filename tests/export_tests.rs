mod common;
use common::{build_week, four_days_and_friday};
use rworkweek::core::Core;
use rworkweek::export::{ExportFormat, ExportLogic, week_to_rows};
use rworkweek::models::DayInput;

#[test]
fn test_export_json_contains_result_fields() {
    let week = four_days_and_friday(("7:00 AM", "7:00 PM", "60"), ("8:00 AM", "", ""));
    let result = Core::calculate_week(&week);

    let json = ExportLogic::render(&result, &week, ExportFormat::Json).expect("render json");
    assert!(json.contains("\"total_hours\": 44.0"));
    assert!(json.contains("\"hours_to_40\": -4.0"));
    assert!(json.contains("\"friday_clock_out\": \"8:00 AM\""));
    assert!(json.contains("\"Monday_start\": \"7:00 AM\""));
}

#[test]
fn test_export_json_nulls_on_error() {
    let week = build_week(&[("Monday", ("asdf", "", ""))]);
    let result = Core::calculate_week(&week);

    let json = ExportLogic::render(&result, &week, ExportFormat::Json).expect("render json");
    assert!(json.contains("\"total_hours\": null"));
    assert!(json.contains("\"friday_clock_out\": null"));
    assert!(json.contains("Monday: invalid start time"));
}

#[test]
fn test_export_csv_rows() {
    let week = build_week(&[
        ("Monday", ("8", "5", "30")),
        ("Tuesday", ("asdf", "", "")),
        ("Friday", ("8:00 AM", "", "")),
    ]);
    let result = Core::calculate_week(&week);

    let csv = ExportLogic::render(&result, &week, ExportFormat::Csv).expect("render csv");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "day,start,end,lunch,hours,errors");
    // week has an error: no hours anywhere
    assert_eq!(lines[1], "Monday,8:00 AM,5:00 PM,30,,");
    assert_eq!(lines[2], "Tuesday,asdf,,,,Invalid start time");
    assert_eq!(lines[5], "Friday,8:00 AM,,,,");
}

#[test]
fn test_rows_carry_daily_hours() {
    let week = build_week(&[("Monday", ("8", "5", "30"))]);
    let result = Core::calculate_week(&week);
    let rows = week_to_rows(&result, &week);

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].hours, "8.5");
    assert_eq!(rows[1].hours, "8");
    assert_eq!(rows[0].errors, "");
}

#[test]
fn test_text_is_not_an_export_format() {
    let week = build_week(&[]);
    let result = Core::calculate_week(&week);
    assert!(ExportLogic::render(&result, &week, ExportFormat::Text).is_err());
}

#[test]
fn test_export_format_from_config() {
    assert_eq!(ExportFormat::from_config("JSON").unwrap(), ExportFormat::Json);
    assert_eq!(ExportFormat::from_config("").unwrap(), ExportFormat::Text);
    assert!(ExportFormat::from_config("xml").is_err());
}

#[test]
fn test_day_entry_parsing() {
    let full = DayInput::from_entry("Monday", Some("8:00,17:00,60")).unwrap();
    assert_eq!(full, DayInput::new("Monday", "8:00", "17:00", "60"));

    let start_only = DayInput::from_entry("Friday", Some("8")).unwrap();
    assert_eq!(start_only, DayInput::new("Friday", "8", "", ""));

    let end_only = DayInput::from_entry("Monday", Some(",5pm")).unwrap();
    assert_eq!(end_only, DayInput::new("Monday", "", "5pm", ""));

    let lunch_only = DayInput::from_entry("Monday", Some(",,30")).unwrap();
    assert_eq!(lunch_only, DayInput::new("Monday", "", "", "30"));

    assert_eq!(
        DayInput::from_entry("Monday", None).unwrap(),
        DayInput::blank("Monday")
    );
    assert!(DayInput::from_entry("Monday", Some("1,2,3,4")).is_err());
}
