use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the staff table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub name: String,
    pub position: String,
    pub office: String,
    pub extension: String,
    pub start_date: NaiveDate,
    /// Salary as displayed, e.g. `$320,800`.
    #[serde(rename = "salary")]
    pub salary_display: String,
}

impl StaffRecord {
    pub fn new(
        name: &str,
        position: &str,
        office: &str,
        extension: &str,
        start_date: NaiveDate,
        salary_display: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            office: office.to_string(),
            extension: extension.to_string(),
            start_date,
            salary_display: salary_display.to_string(),
        }
    }

    /// Numeric salary with every `$` and `,` stripped.
    ///
    /// Like an integer parse of the remaining text, leading digits are used
    /// and anything after them is ignored. The result is a float so digit runs
    /// of any length still compare by magnitude. Returns `None` when no digits
    /// lead.
    pub fn salary_amount(&self) -> Option<f64> {
        parse_salary(&self.salary_display)
    }
}

pub(crate) fn parse_salary(display: &str) -> Option<f64> {
    let stripped: String = display.chars().filter(|c| *c != '$' && *c != ',').collect();
    let stripped = stripped.trim_start();

    let (sign, digits) = match stripped.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, stripped.strip_prefix('+').unwrap_or(stripped)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary_strips_symbols() {
        assert_eq!(parse_salary("$85,600"), Some(85_600.0));
        assert_eq!(parse_salary("$1,200,000"), Some(1_200_000.0));
        assert_eq!(parse_salary("320800"), Some(320_800.0));
    }

    #[test]
    fn test_parse_salary_ignores_trailing_text() {
        assert_eq!(parse_salary("$1,000.99"), Some(1_000.0));
        assert_eq!(parse_salary("$90,000 p.a."), Some(90_000.0));
    }

    #[test]
    fn test_parse_salary_wider_than_i64() {
        let huge = parse_salary("$99,999,999,999,999,999,999").unwrap();
        let larger = parse_salary("$999,999,999,999,999,999,999").unwrap();
        assert!(huge > i64::MAX as f64);
        assert!(larger > huge);
    }

    #[test]
    fn test_parse_salary_without_digits() {
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("$"), None);
        assert_eq!(parse_salary("n/a"), None);
    }

    #[test]
    fn test_salary_amount() {
        let r = StaffRecord::new(
            "Tiger Nixon",
            "System Architect",
            "Edinburgh",
            "5421",
            NaiveDate::from_ymd_opt(2011, 4, 25).unwrap(),
            "$320,800",
        );
        assert_eq!(r.salary_amount(), Some(320_800.0));
    }
}
