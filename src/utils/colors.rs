//! ANSI color helpers for terminal output.

use ansi_term::{Colour, Style};
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn colouring on/off for the whole process (config `color`).
pub fn set_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

pub fn paint(style: Style, s: &str) -> String {
    if enabled() {
        style.paint(s).to_string()
    } else {
        s.to_string()
    }
}

/// Hours to 40:
/// \>0 → yellow (still to work)
/// \<0 → green (overtime)
/// 0 → bold
pub fn style_for_hours_to_40(value: f64) -> Style {
    if value > 0.0 {
        Colour::Yellow.bold()
    } else if value < 0.0 {
        Colour::Green.bold()
    } else {
        Style::new().bold()
    }
}

/// Grey for empty cells ("" or "--"), red for cells carrying an error.
pub fn colorize_cell(value: &str, has_error: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        paint(Colour::Fixed(244).normal(), "--")
    } else if has_error {
        paint(Colour::Red.normal(), value)
    } else {
        value.to_string()
    }
}
