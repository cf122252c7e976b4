use crate::grading::types::Letter;

/// Converts a percentage into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | >= 80   | B     |
/// | >= 70   | C     |
/// | >= 60   | D     |
/// | >= 50   | E     |
/// | < 50    | F     |
///
/// The percentage is not clamped, so anything above 100 is still an A.
pub fn grade_for(percentage: f64) -> Letter {
    match percentage {
        p if p >= 90.0 => Letter::A,
        p if p >= 80.0 => Letter::B,
        p if p >= 70.0 => Letter::C,
        p if p >= 60.0 => Letter::D,
        p if p >= 50.0 => Letter::E,
        _ => Letter::F,
    }
}
