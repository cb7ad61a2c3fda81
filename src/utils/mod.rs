pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;

// Re-export per comodità
pub use formatting::{format_hours_display, format_hours_kpi};
