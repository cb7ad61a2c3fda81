//! Per-day validation and worked-minutes derivation.
//!
//! Which of start / end / lunch the user filled in decides how a day is
//! treated (see [`DayCase`]). Every day is evaluated on its own and the
//! outcome comes back as a [`DayReport`]; nothing is shared between days.

use crate::core::calculator::time_parser::parse_time;
use crate::models::{DayField, DayInput, field_key};
use std::num::IntErrorKind;
use thiserror::Error;

/// Minutes assumed for a day that has no complete start/end pair.
pub const ASSUMED_DAY_MINUTES: i64 = 8 * 60;
/// Lunch applied when the lunch field is left empty.
pub const DEFAULT_LUNCH_MINUTES: i64 = 60;

/// Day-completeness case, computed once per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCase {
    /// No start, no end: an 8h day is assumed.
    BothBlank,
    /// Start only (not Friday): start is checked, 8h assumed.
    StartOnly,
    /// Start only on Friday: the day is still running, minutes deferred.
    FridayInProgress,
    /// End only: end is checked, 8h assumed.
    EndOnly,
    /// Full shift: worked = end - start - lunch.
    Both,
}

impl DayCase {
    pub fn classify(day: &DayInput) -> Self {
        let has_start = !day.start_time.trim().is_empty();
        let has_end = !day.end_time.trim().is_empty();

        match (has_start, has_end) {
            (false, false) => DayCase::BothBlank,
            (true, false) if day.is_friday() => DayCase::FridayInProgress,
            (true, false) => DayCase::StartOnly,
            (false, true) => DayCase::EndOnly,
            (true, true) => DayCase::Both,
        }
    }
}

/// Validation problem for a single field of a day.
///
/// `Display` gives the message fragment used in `"<Day>: <msg>"` lines,
/// [`DayIssue::label`] the short text attached to the field key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayIssue {
    #[error("invalid start time")]
    InvalidStartTime,

    #[error("invalid end time")]
    InvalidEndTime,

    #[error("invalid lunch duration")]
    InvalidLunchDuration,

    #[error("end time is before start time")]
    EndBeforeStart,

    #[error("lunch exceeds shift length")]
    LunchExceedsShift,
}

impl DayIssue {
    pub fn field(&self) -> DayField {
        match self {
            DayIssue::InvalidStartTime => DayField::Start,
            DayIssue::InvalidEndTime | DayIssue::EndBeforeStart => DayField::End,
            DayIssue::InvalidLunchDuration | DayIssue::LunchExceedsShift => DayField::Lunch,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayIssue::InvalidStartTime => "Invalid start time",
            DayIssue::InvalidEndTime => "Invalid end time",
            DayIssue::InvalidLunchDuration => "Invalid lunch duration",
            DayIssue::EndBeforeStart => "End time before start time",
            DayIssue::LunchExceedsShift => "Lunch exceeds shift length",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    /// Day contributes this many minutes to the week.
    Worked(i64),
    /// Friday still in progress: left to the Friday projection.
    Deferred,
    Invalid(Vec<DayIssue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub day_name: String,
    pub case: DayCase,
    pub status: DayStatus,
    pub warnings: Vec<String>,
    /// Canonical display of every field that parsed, even on invalid days.
    pub normalized: Vec<(DayField, String)>,
}

impl DayReport {
    fn new(day_name: &str, case: DayCase) -> Self {
        Self {
            day_name: day_name.to_string(),
            case,
            status: DayStatus::Deferred,
            warnings: Vec::new(),
            normalized: Vec::new(),
        }
    }

    pub fn worked_minutes(&self) -> Option<i64> {
        match self.status {
            DayStatus::Worked(m) => Some(m),
            _ => None,
        }
    }

    pub fn issues(&self) -> &[DayIssue] {
        match &self.status {
            DayStatus::Invalid(issues) => issues,
            _ => &[],
        }
    }

    /// `"<Day>: <issue>"` lines, one per issue.
    pub fn error_lines(&self) -> Vec<String> {
        self.issues()
            .iter()
            .map(|i| format!("{}: {}", self.day_name, i))
            .collect()
    }

    /// `(field key, label)` pairs, one per issue.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        self.issues()
            .iter()
            .map(|i| (field_key(&self.day_name, i.field()), i.label().to_string()))
            .collect()
    }

    pub fn normalized_times(&self) -> Vec<(String, String)> {
        self.normalized
            .iter()
            .map(|(f, v)| (field_key(&self.day_name, *f), v.clone()))
            .collect()
    }

    /// Parse a time field, recording its display value on success.
    fn parse_field(&mut self, field: DayField, raw: &str, assume_am: bool) -> Option<i64> {
        let parsed = parse_time(raw, assume_am)?;
        self.normalized.push((field, parsed.display));
        Some(parsed.minutes)
    }

    /// Lunch for a full or in-progress shift: blank means the 60 minute default.
    fn resolve_lunch(&mut self, raw: &str) -> Result<i64, DayIssue> {
        if raw.is_empty() {
            self.warnings.push(format!(
                "{}: lunch assumed to be {} minutes",
                self.day_name, DEFAULT_LUNCH_MINUTES
            ));
            return Ok(DEFAULT_LUNCH_MINUTES);
        }
        parse_lunch(raw).ok_or(DayIssue::InvalidLunchDuration)
    }

    fn full_shift(&mut self, start_raw: &str, end_raw: &str, lunch_raw: &str) -> DayStatus {
        let start = self.parse_field(DayField::Start, start_raw, true);
        let end = self.parse_field(DayField::End, end_raw, false);

        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            (s, e) => {
                let mut issues = Vec::new();
                if s.is_none() {
                    issues.push(DayIssue::InvalidStartTime);
                }
                if e.is_none() {
                    issues.push(DayIssue::InvalidEndTime);
                }
                return DayStatus::Invalid(issues);
            }
        };

        if end <= start {
            return DayStatus::Invalid(vec![DayIssue::EndBeforeStart]);
        }
        let duration = end - start;

        let lunch = match self.resolve_lunch(lunch_raw) {
            Ok(l) => l,
            Err(issue) => return DayStatus::Invalid(vec![issue]),
        };

        if lunch > duration {
            return DayStatus::Invalid(vec![DayIssue::LunchExceedsShift]);
        }

        DayStatus::Worked(duration - lunch)
    }
}

/// Lunch minutes: a non-negative integer, surrounding blanks ignored.
///
/// Digit strings too long for `i64` are still a valid lunch and saturate
/// to `i64::MAX`.
pub fn parse_lunch(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(m) => (m >= 0).then_some(m),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    }
}

/// An 8h day, provided a lunch value (if any) is well formed.
/// The lunch itself is not subtracted.
fn assumed_day(lunch_raw: &str) -> DayStatus {
    if lunch_raw.is_empty() || parse_lunch(lunch_raw).is_some() {
        DayStatus::Worked(ASSUMED_DAY_MINUTES)
    } else {
        DayStatus::Invalid(vec![DayIssue::InvalidLunchDuration])
    }
}

/// Validate one day and work out how many minutes it contributes.
pub fn process_day(day: &DayInput) -> DayReport {
    let start_raw = day.start_time.trim();
    let end_raw = day.end_time.trim();
    let lunch_raw = day.lunch_minutes.trim();

    let case = DayCase::classify(day);
    let mut report = DayReport::new(&day.day_name, case);

    let status = match case {
        DayCase::BothBlank => assumed_day(lunch_raw),

        DayCase::StartOnly => match report.parse_field(DayField::Start, start_raw, true) {
            Some(_) => assumed_day(lunch_raw),
            None => DayStatus::Invalid(vec![DayIssue::InvalidStartTime]),
        },

        DayCase::FridayInProgress => match report.parse_field(DayField::Start, start_raw, true) {
            Some(_) => match report.resolve_lunch(lunch_raw) {
                Ok(_) => DayStatus::Deferred,
                Err(issue) => DayStatus::Invalid(vec![issue]),
            },
            None => DayStatus::Invalid(vec![DayIssue::InvalidStartTime]),
        },

        DayCase::EndOnly => match report.parse_field(DayField::End, end_raw, false) {
            Some(_) => assumed_day(lunch_raw),
            None => DayStatus::Invalid(vec![DayIssue::InvalidEndTime]),
        },

        DayCase::Both => report.full_shift(start_raw, end_raw, lunch_raw),
    };
    report.status = status;

    log::debug!(
        "day {}: case={:?} status={:?}",
        report.day_name,
        report.case,
        report.status
    );

    report
}
