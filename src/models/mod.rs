pub mod calculation_result;
pub mod day_field;
pub mod day_input;

pub use calculation_result::CalculationResult;
pub use day_field::{DayField, field_key};
pub use day_input::{DayInput, WORK_WEEK};
