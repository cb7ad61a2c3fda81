//! Field identifiers shared with any presentation layer.
//!
//! A field key is always `"<DayName>_<start|end|lunch>"`, where `<DayName>`
//! is exactly the `day_name` the caller supplied. Front-ends use these keys
//! to attach error labels and normalized values to single input controls,
//! so the format must not change.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayField {
    Start,
    End,
    Lunch,
}

impl DayField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayField::Start => "start",
            DayField::End => "end",
            DayField::Lunch => "lunch",
        }
    }

    /// Convert key suffix → enum
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "start" => Some(DayField::Start),
            "end" => Some(DayField::End),
            "lunch" => Some(DayField::Lunch),
            _ => None,
        }
    }
}

impl fmt::Display for DayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the field key for `day` / `field` (e.g. `Monday_start`).
pub fn field_key(day: &str, field: DayField) -> String {
    format!("{day}_{}", field.as_str())
}

/// Split a field key back into day name and field.
///
/// The split happens on the last `_`, so day names containing underscores
/// still round-trip.
pub fn split_field_key(key: &str) -> Option<(&str, DayField)> {
    let (day, suffix) = key.rsplit_once('_')?;
    Some((day, DayField::from_suffix(suffix)?))
}
