//! Display formatting and persistence for computed results.
//!
//! Numbers are rounded to two decimals here and nowhere else. Also supports
//! JSON serialization and CSV export of staff tables.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::grading::GradeOutcome;
use crate::staff::{SortField, SortState, StaffRecord};
use crate::temperature::{Conversion, EMPTY_STATE_MESSAGE, Scale, TemperatureReading};
use csv::WriterBuilder;
use std::fs::File;

/// Formats a value with exactly two decimal places.
pub fn format_2dp(value: f64) -> String {
    format!("{value:.2}")
}

/// One line per scale, e.g. `Fahrenheit: 32.00°F`. The scale the value was
/// entered in is marked with `(input)`.
pub fn format_conversion(conversion: &Conversion, input: Scale) -> String {
    Scale::ALL
        .iter()
        .map(|&scale| {
            let marker = if scale == input { " (input)" } else { "" };
            format!(
                "{}: {}{}{}",
                scale.label(),
                format_2dp(conversion.get(scale)),
                scale.symbol(),
                marker,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts raw text entered on `input` scale, or returns the empty-state
/// message when it holds no number.
pub fn format_temperature_input(raw: &str, input: Scale) -> String {
    match TemperatureReading::parse(raw, input) {
        Some(reading) => format_conversion(&reading.convert(), input),
        None => EMPTY_STATE_MESSAGE.to_string(),
    }
}

/// The message shown after a grading request, e.g.
/// `Mark: 18.5/20 (92.5%) = Grade: A`.
pub fn format_outcome(outcome: &GradeOutcome) -> String {
    match outcome {
        GradeOutcome::Success(report) => format!(
            "Mark: {}/{} ({:.1}%) = Grade: {}",
            report.mark, report.total, report.percentage, report.letter,
        ),
        GradeOutcome::Failure { reason } => reason.clone(),
    }
}

/// Both sort button labels on one line.
pub fn format_sort_buttons(state: &SortState) -> String {
    format!(
        "[{}]  [{}]",
        state.button_label(SortField::Name),
        state.button_label(SortField::Salary)
    )
}

/// Renders the displayed columns (name, position, office, salary) as a
/// fixed-width text table.
pub fn render_table(records: &[StaffRecord]) -> String {
    let mut rows: Vec<[&str; 4]> = vec![["Name", "Position", "Office", "Salary"]];
    rows.extend(records.iter().map(|r| {
        [
            r.name.as_str(),
            r.position.as_str(),
            r.office.as_str(),
            r.salary_display.as_str(),
        ]
    }));

    let mut widths = [0usize; 4];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes any result as pretty-printed JSON.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes records to a CSV file, replacing any existing content.
///
/// The header matches what [`crate::staff::loader::load_staff_csv`] reads.
pub fn write_staff_csv(path: &str, records: &[StaffRecord]) -> Result<()> {
    debug!(path, rows = records.len(), "Writing staff CSV");

    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::evaluate_grade;
    use crate::staff::dataset::default_staff;
    use crate::staff::loader::load_staff_csv;
    use crate::staff::sort_records;
    use crate::temperature::convert_temperature;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_format_2dp() {
        assert_eq!(format_2dp(32.0), "32.00");
        assert_eq!(format_2dp(273.15), "273.15");
        assert_eq!(format_2dp(66.666_666), "66.67");
    }

    #[test]
    fn test_format_conversion_marks_input_scale() {
        let text = format_conversion(&convert_temperature(100.0, Scale::Celsius), Scale::Celsius);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Celsius: 100.00°C (input)",
                "Fahrenheit: 212.00°F",
                "Kelvin: 373.15K",
            ]
        );
    }

    #[test]
    fn test_format_temperature_input() {
        let text = format_temperature_input("32", Scale::Fahrenheit);
        assert!(text.contains("Celsius: 0.00°C"));
        assert!(text.contains("Fahrenheit: 32.00°F (input)"));

        assert_eq!(
            format_temperature_input("abc", Scale::Kelvin),
            "Enter a temperature to see conversions"
        );
        assert_eq!(format_temperature_input("", Scale::Celsius), EMPTY_STATE_MESSAGE);
    }

    #[test]
    fn test_format_outcome() {
        assert_eq!(
            format_outcome(&evaluate_grade("2", "3")),
            "Mark: 2/3 (66.7%) = Grade: D"
        );
        assert_eq!(
            format_outcome(&evaluate_grade("18.5", "20")),
            "Mark: 18.5/20 (92.5%) = Grade: A"
        );

        let text = format_outcome(&evaluate_grade("", "3"));
        assert_eq!(
            text,
            "Please enter the student's mark. The student's mark field cannot be empty."
        );
    }

    #[test]
    fn test_format_sort_buttons() {
        let state = SortState::default().next(SortField::Salary);
        assert_eq!(
            format_sort_buttons(&state),
            "[Sort by Name ↕]  [Sort by Salary ↑]"
        );
    }

    #[test]
    fn test_render_table_sorted_by_salary() {
        let (sorted, _) = sort_records(&default_staff(), SortField::Salary, SortState::default());
        let table = render_table(&sorted);
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Name"));
        assert!(header.ends_with("Salary"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("Doris Wilder"));
        assert!(first.ends_with("$85,600"));
        assert!(lines.last().unwrap().starts_with("Angelica Ramos"));
        assert_eq!(table.lines().count(), sorted.len() + 1);
    }

    #[test]
    fn test_to_json_does_not_panic() {
        to_json(&evaluate_grade("1", "2")).unwrap();
    }

    #[test]
    fn test_write_staff_csv_reloads() {
        let path = temp_path("coursework_core_test_export.csv");
        let _ = fs::remove_file(&path);

        let staff = default_staff();
        write_staff_csv(&path, &staff).unwrap();
        assert!(Path::new(&path).exists());

        let reloaded = load_staff_csv(&path).unwrap();
        assert_eq!(reloaded, staff);

        fs::remove_file(&path).unwrap();
    }
}
