use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Canonical Monday → Friday order used by the CLI.
pub const WORK_WEEK: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Raw entry for one weekday, exactly as typed by the user.
///
/// Strings are kept untrimmed; an empty (or whitespace-only) string means
/// "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayInput {
    pub day_name: String,
    pub start_time: String,
    pub end_time: String,
    pub lunch_minutes: String,
}

impl DayInput {
    pub fn new(
        day_name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        lunch_minutes: impl Into<String>,
    ) -> Self {
        Self {
            day_name: day_name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            lunch_minutes: lunch_minutes.into(),
        }
    }

    /// A day with all three fields left empty.
    pub fn blank(day_name: impl Into<String>) -> Self {
        Self::new(day_name, "", "", "")
    }

    /// Build a day from a CLI entry `START,END,LUNCH`.
    ///
    /// Missing trailing parts are blank: `"8:00"` is start-only, `",5pm"`
    /// end-only, `",,30"` lunch-only. `None` is a blank day.
    pub fn from_entry(day_name: &str, entry: Option<&str>) -> AppResult<Self> {
        let Some(entry) = entry else {
            return Ok(Self::blank(day_name));
        };

        let parts: Vec<&str> = entry.split(',').collect();
        if parts.len() > 3 {
            return Err(AppError::InvalidDayEntry {
                day: day_name.to_string(),
                entry: entry.to_string(),
            });
        }

        let part = |i: usize| parts.get(i).copied().unwrap_or("");
        Ok(Self::new(day_name, part(0), part(1), part(2)))
    }

    pub fn is_friday(&self) -> bool {
        is_friday(&self.day_name)
    }

    pub fn lunch_is_blank(&self) -> bool {
        self.lunch_minutes.trim().is_empty()
    }
}

pub fn is_friday(day_name: &str) -> bool {
    day_name.eq_ignore_ascii_case("friday")
}
