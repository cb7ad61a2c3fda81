//! Free-form time-of-day parsing: "8", "8a", "8:30pm", "16:35", "0830 PM".

use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // hour, optional (colon?) minute, optional a/p/am/pm marker
    Regex::new(r"^([0-9]{1,2})(?::?([0-9]{0,2}))?\s*(a|p|am|pm)?$").expect("valid time regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTime {
    pub minutes: i64,
    pub display: String,
}

/// Parse `raw` into minutes since midnight plus its canonical display.
///
/// Without an am/pm marker, hours 1..=12 follow `assume_am`: under AM,
/// 12 is midnight; under PM, 12 is noon and 1..=11 gain 12 hours.
/// Hours 13..=23 are taken as 24-hour input. Returns `None` for anything
/// else, including an empty string.
pub fn parse_time(raw: &str, assume_am: bool) -> Option<ParsedTime> {
    let raw = raw.trim().to_lowercase();
    if raw.is_empty() {
        return None;
    }

    let caps = TIME_RE.captures(&raw)?;

    let mut hour: i64 = caps.get(1)?.as_str().parse().ok()?;
    let minute: i64 = match caps.get(2).map(|m| m.as_str()) {
        Some(m) if !m.is_empty() => m.parse().ok()?,
        _ => 0,
    };
    let period = caps.get(3).map(|m| match m.as_str() {
        "a" | "am" => Period::Am,
        _ => Period::Pm,
    });

    if hour > 23 || minute > 59 {
        return None;
    }

    match period {
        Some(p) => {
            if hour == 12 {
                hour = 0;
            }
            if p == Period::Pm {
                hour += 12;
            }
        }
        None if hour <= 12 => {
            if assume_am {
                if hour == 12 {
                    hour = 0;
                }
            } else if hour != 12 {
                hour += 12;
            }
        }
        // 13-23: already 24h
        None => {}
    }

    let minutes = hour * 60 + minute;
    Some(ParsedTime {
        minutes,
        display: format_time(minutes),
    })
}

/// Minutes since midnight → `H:MM AM|PM`. Values wrap modulo one day.
pub fn format_time(minutes: i64) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    match NaiveTime::from_num_seconds_from_midnight_opt(m * 60, 0) {
        Some(t) => t.format("%-I:%M %p").to_string(),
        // unreachable: m < 1440
        None => String::new(),
    }
}
