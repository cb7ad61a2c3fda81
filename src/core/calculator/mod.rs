pub mod day;
pub mod friday;
pub mod time_parser;
pub mod week;
