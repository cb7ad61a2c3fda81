use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::day::DEFAULT_LUNCH_MINUTES;
use crate::core::{Core, WeekSummary};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{CalculationResult, DayField, DayInput, WORK_WEEK, field_key};
use crate::ui::messages::{error, header, success, warning};
use crate::utils::colors::{colorize_cell, paint, style_for_hours_to_40};
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use ansi_term::{Colour, Style};

/// Handle the `calc` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        monday,
        tuesday,
        wednesday,
        thursday,
        friday,
        format,
        file,
        force,
    } = cmd
    {
        let entries = [monday, tuesday, wednesday, thursday, friday];
        let days = WORK_WEEK
            .iter()
            .zip(entries)
            .map(|(name, entry)| DayInput::from_entry(name, entry.as_deref()))
            .collect::<AppResult<Vec<_>>>()?;

        let result = Core::calculate_week(&days);

        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_config(&cfg.default_format)?,
        };

        match format {
            ExportFormat::Text => print_text(&result, &days, cfg),
            other => ExportLogic::export(&result, &days, other, file.as_deref(), *force)?,
        }

        if result.has_errors() {
            return Err(AppError::Validation(result.errors.len()));
        }
    }
    Ok(())
}

fn print_text(result: &CalculationResult, days: &[DayInput], cfg: &Config) {
    let summary = WeekSummary::from_result(result, days);

    if cfg.show_daily {
        print_day_table(result, &summary, days);
    }

    header("Week");
    let bold = Style::new().bold();

    println!(
        "Total hours      : {}",
        paint(bold, or_dash(&summary.total_hours_text))
    );

    match result.hours_to_40 {
        Some(h) => {
            let minutes = (h * 60.0).round() as i64;
            let note = if summary.hours_to_40_is_overtime {
                format!("{} overtime", mins2readable(-minutes, false, false))
            } else {
                format!("{} left", mins2readable(minutes, false, false))
            };
            println!(
                "Hours to 40      : {} ({note})",
                paint(style_for_hours_to_40(h), &summary.hours_to_40_text)
            );
        }
        None => println!("Hours to 40      : --"),
    }

    println!(
        "Friday clock-out : {}",
        paint(bold, or_dash(&summary.friday_clock_out_text))
    );
    println!();

    for w in &summary.warnings {
        warning(wrap(w, cfg.wrap_width));
    }
    for s in &summary.successes {
        success(wrap(s, cfg.wrap_width));
    }
    for e in &summary.errors {
        error(wrap(e, cfg.wrap_width));
    }
}

fn print_day_table(result: &CalculationResult, summary: &WeekSummary, days: &[DayInput]) {
    let mut table = Table::new(vec![
        Column::new("Day", 9),
        Column::new("Start", 8),
        Column::new("End", 8),
        Column::new("Lunch", 5),
        Column::new("Hours", 5),
    ]);

    for d in days {
        let name = d.day_name.as_str();
        let cell = |field: DayField, raw: &str| {
            let has_error = result
                .field_errors
                .contains_key(&field_key(name, field));
            let text = result.normalized(name, field).unwrap_or(raw.trim());
            colorize_cell(text, has_error)
        };

        let lunch_assumed = summary.lunch_warning_days.contains(name)
            && summary
                .warnings
                .iter()
                .any(|w| w.starts_with(&format!("{name}: lunch assumed")));
        let lunch = if lunch_assumed {
            paint(Colour::Yellow.normal(), &DEFAULT_LUNCH_MINUTES.to_string())
        } else {
            cell(DayField::Lunch, &d.lunch_minutes)
        };

        let day_cell = if summary.error_days.contains(name) {
            paint(Colour::Red.bold(), name)
        } else {
            name.to_string()
        };

        table.add_row(vec![
            day_cell,
            cell(DayField::Start, &d.start_time),
            cell(DayField::End, &d.end_time),
            lunch,
            colorize_cell(
                summary
                    .daily_hours_text
                    .get(name)
                    .map(String::as_str)
                    .unwrap_or(""),
                false,
            ),
        ]);
    }

    println!("{}", table.render());
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "--" } else { s }
}

/// Wrap long message lines, continuation lines indented under the text.
fn wrap(msg: &str, width: usize) -> String {
    let opts = textwrap::Options::new(width.max(20)).subsequent_indent("   ");
    textwrap::wrap(msg, opts).join("\n")
}
