pub mod calculator;
pub mod config;
pub mod logic;
pub mod summary;

pub use logic::Core;
pub use summary::WeekSummary;
