//! Strict validation of user-entered decimal strings.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Zero or more digits, an optional point, then at least one digit.
/// ASCII-only so that other Unicode digit classes are rejected.
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]+$").expect("decimal pattern is valid"));

/// Maximum number of digits allowed after the decimal point.
pub const MAX_DECIMAL_PLACES: usize = 2;

/// A rejected input. Every variant renders a complete message that can be
/// shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter the {field}. The {field} field cannot be empty.")]
    Empty { field: String },

    #[error("Invalid {field} format. Please enter only numerical values (e.g., 16, 18.5).")]
    Format { field: String },

    #[error("Invalid {field} number format. Please enter a valid numerical value.")]
    Parse { field: String },

    #[error("Please limit {field} decimal places to maximum 2 digits (e.g., 16.50).")]
    DecimalPlaces { field: String },

    #[error("Negative student marks are not allowed. Please enter a mark that is 0 or higher.")]
    NegativeMark,

    #[error(
        "Total marks must be greater than 0. Please enter a positive value for total marks."
    )]
    NonPositiveTotal,

    #[error("Student mark ({mark}) cannot exceed total marks possible ({total}).")]
    MarkExceedsTotal { mark: f64, total: f64 },
}

/// A value that passed [`validate_numeric_input`], together with the label of
/// the field it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericFieldValue {
    pub field: String,
    pub value: f64,
}

impl NumericFieldValue {
    /// Validates `raw` for the field named `field`.
    pub fn parse(raw: &str, field: &str) -> Result<Self, ValidationError> {
        let value = validate_numeric_input(raw, field)?;
        Ok(Self {
            field: field.to_string(),
            value,
        })
    }
}

/// Validates a raw decimal string and returns its value.
///
/// Rules are applied in order and the first failure wins:
///
/// 1. surrounding whitespace is trimmed and the result must not be empty
/// 2. the text must match `\d*\.?\d+` (so `.5` is accepted, `5.` is not)
/// 3. the text is parsed as `f64`
/// 4. at most two digits may follow the decimal point
///
/// The parsed value is returned without rounding.
pub fn validate_numeric_input(raw: &str, field: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        debug!(field, "Rejected empty input");
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }

    if !DECIMAL_PATTERN.is_match(trimmed) {
        debug!(field, input = trimmed, "Rejected malformed number");
        return Err(ValidationError::Format {
            field: field.to_string(),
        });
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::Parse {
        field: field.to_string(),
    })?;

    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.len() > MAX_DECIMAL_PLACES {
            debug!(field, input = trimmed, "Rejected too many decimal places");
            return Err(ValidationError::DecimalPlaces {
                field: field.to_string(),
            });
        }
    }

    Ok(value)
}
