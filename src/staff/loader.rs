use crate::staff::record::StaffRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Loads staff records from a CSV file with the header
/// `name,position,office,extension,start_date,salary`.
///
/// Dates use `YYYY-MM-DD`. Row order in the file is the table's natural order.
pub fn load_staff_csv(path: impl AsRef<Path>) -> Result<Vec<StaffRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open staff CSV: {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: StaffRecord = result
            .with_context(|| format!("Invalid staff row {} in {}", i + 1, path.display()))?;
        rows.push(record);
    }

    info!(path = %path.display(), rows = rows.len(), "Staff dataset loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_load_staff_csv() {
        let path = temp_path("coursework_core_test_load.csv");
        fs::write(
            &path,
            "name,position,office,extension,start_date,salary\n\
             Tiger Nixon,System Architect,Edinburgh,5421,2011-04-25,\"$320,800\"\n\
             Ashton Cox,Junior Technical Author,San Francisco,1562,2009-01-12,\"$86,000\"\n",
        )
        .unwrap();

        let rows = load_staff_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Ashton Cox");
        assert_eq!(rows[1].salary_display, "$86,000");
        assert_eq!(rows[0].start_date.to_string(), "2011-04-25");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_staff_csv_bad_date() {
        let path = temp_path("coursework_core_test_bad_date.csv");
        fs::write(
            &path,
            "name,position,office,extension,start_date,salary\n\
             Tiger Nixon,System Architect,Edinburgh,5421,25/04/2011,$1\n",
        )
        .unwrap();

        let err = load_staff_csv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("row 1"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_staff_csv(temp_path("coursework_core_does_not_exist.csv")).is_err());
    }
}
