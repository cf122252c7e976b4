//! Mark/total grading.
//!
//! Raw strings from the mark and total fields are validated, checked against
//! the grading business rules, converted to a percentage and mapped to a
//! letter grade.

pub mod grade;
pub mod types;
pub mod workflow;

pub use grade::grade_for;
pub use types::{GradeOutcome, GradeReport, Letter};
pub use workflow::{MARK_FIELD, TOTAL_FIELD, evaluate_grade};
