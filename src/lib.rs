pub mod grading;
pub mod output;
pub mod staff;
pub mod temperature;
pub mod validation;
