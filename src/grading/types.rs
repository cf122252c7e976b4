//! Data types produced by the grading workflow.

use serde::Serialize;
use std::fmt;

/// Letter grade assigned from fixed percentage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
        };
        f.write_str(s)
    }
}

/// A successfully graded mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub mark: f64,
    pub total: f64,
    pub percentage: f64,
    pub letter: Letter,
}

/// Result of one grading request, consumed directly by the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GradeOutcome {
    Success(GradeReport),
    Failure { reason: String },
}

impl GradeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GradeOutcome::Success(_))
    }

    pub fn report(&self) -> Option<&GradeReport> {
        match self {
            GradeOutcome::Success(report) => Some(report),
            GradeOutcome::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            GradeOutcome::Success(_) => None,
            GradeOutcome::Failure { reason } => Some(reason),
        }
    }
}
