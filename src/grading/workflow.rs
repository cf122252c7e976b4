use crate::grading::grade::grade_for;
use crate::grading::types::{GradeOutcome, GradeReport};
use crate::validation::{ValidationError, validate_numeric_input};
use tracing::info;

/// Label used in messages about the mark field.
pub const MARK_FIELD: &str = "student's mark";
/// Label used in messages about the total field.
pub const TOTAL_FIELD: &str = "total marks possible";

/// Grades a raw mark against a raw total.
///
/// Never fails: every validation or business-rule error is turned into
/// [`GradeOutcome::Failure`] carrying the message to show the user.
#[tracing::instrument(level = "debug")]
pub fn evaluate_grade(mark_raw: &str, total_raw: &str) -> GradeOutcome {
    match grade_inputs(mark_raw, total_raw) {
        Ok(report) => {
            info!(
                mark = report.mark,
                total = report.total,
                percentage = report.percentage,
                letter = %report.letter,
                "Grade computed"
            );
            GradeOutcome::Success(report)
        }
        Err(e) => {
            info!(reason = %e, "Grade rejected");
            GradeOutcome::Failure {
                reason: e.to_string(),
            }
        }
    }
}

fn grade_inputs(mark_raw: &str, total_raw: &str) -> Result<GradeReport, ValidationError> {
    let mark = validate_numeric_input(mark_raw, MARK_FIELD)?;
    let total = validate_numeric_input(total_raw, TOTAL_FIELD)?;

    if mark < 0.0 {
        return Err(ValidationError::NegativeMark);
    }
    if total <= 0.0 {
        return Err(ValidationError::NonPositiveTotal);
    }
    if mark > total {
        return Err(ValidationError::MarkExceedsTotal { mark, total });
    }

    let percentage = mark / total * 100.0;

    Ok(GradeReport {
        mark,
        total,
        percentage,
        letter: grade_for(percentage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::types::Letter;

    #[test]
    fn test_half_marks_is_e() {
        let outcome = evaluate_grade("50", "100");
        let report = outcome.report().unwrap();
        assert_eq!(report.percentage, 50.0);
        assert_eq!(report.letter, Letter::E);
    }

    #[test]
    fn test_full_marks() {
        let report = evaluate_grade("20", "20").report().cloned().unwrap();
        assert_eq!(report.percentage, 100.0);
        assert_eq!(report.letter, Letter::A);
    }

    #[test]
    fn test_mark_exceeding_total_fails_with_both_values() {
        let outcome = evaluate_grade("60", "50");
        let reason = outcome.reason().unwrap();
        assert!(reason.contains("60"));
        assert!(reason.contains("50"));
        assert_eq!(
            reason,
            "Student mark (60) cannot exceed total marks possible (50)."
        );
    }

    #[test]
    fn test_negative_mark_fails() {
        assert!(!evaluate_grade("-1", "10").is_success());
    }

    #[test]
    fn test_zero_total_fails() {
        let outcome = evaluate_grade("10", "0");
        assert_eq!(
            outcome.reason(),
            Some(ValidationError::NonPositiveTotal.to_string().as_str())
        );
    }

    #[test]
    fn test_mark_checked_before_total() {
        let outcome = evaluate_grade("", "");
        let reason = outcome.reason().unwrap();
        assert!(reason.contains(MARK_FIELD));

        let outcome = evaluate_grade("5", "x");
        assert!(outcome.reason().unwrap().contains(TOTAL_FIELD));
    }

    #[test]
    fn test_zero_mark_is_f() {
        let report = evaluate_grade("0", "10").report().cloned().unwrap();
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.letter, Letter::F);
    }

    #[test]
    fn test_decimal_inputs_keep_precision() {
        let report = evaluate_grade("18.5", "20").report().cloned().unwrap();
        assert_eq!(report.mark, 18.5);
        assert!((report.percentage - 92.5).abs() < 1e-9);
        assert_eq!(report.letter, Letter::A);
    }
}
