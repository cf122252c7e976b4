use crate::staff::record::StaffRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Column a staff table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Salary,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => f.write_str("name"),
            SortField::Salary => f.write_str("salary"),
        }
    }
}

impl SortField {
    /// Column name as shown on its sort button.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Salary => "Salary",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "salary" => Ok(SortField::Salary),
            other => Err(format!("cannot sort by '{other}' (expected name or salary)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Which column is sorted and in which direction.
///
/// Owned by the caller and threaded through every [`sort_records`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub active_field: Option<SortField>,
    pub direction: Direction,
}

impl SortState {
    /// Applies the toggle policy for a click on `field`: the same field flips
    /// direction, a different field starts ascending.
    pub fn next(self, field: SortField) -> Self {
        let direction = if self.active_field == Some(field) {
            self.direction.flipped()
        } else {
            Direction::Ascending
        };
        Self {
            active_field: Some(field),
            direction,
        }
    }

    /// Arrow shown on the sort button for `field`: `↑` or `↓` on the active
    /// column, `↕` on any other.
    pub fn indicator(&self, field: SortField) -> &'static str {
        match (self.active_field == Some(field), self.direction) {
            (false, _) => "↕",
            (true, Direction::Ascending) => "↑",
            (true, Direction::Descending) => "↓",
        }
    }

    /// Full button text, e.g. `Sort by Salary ↓`.
    pub fn button_label(&self, field: SortField) -> String {
        format!("Sort by {} {}", field.label(), self.indicator(field))
    }
}

/// Natural ascending order for `field`.
///
/// Names compare by code point after lowercasing, not by locale collation,
/// so accented initials sort after `z`. Salaries without leading digits sort
/// before every parsed amount.
fn compare(a: &StaffRecord, b: &StaffRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Salary => match (a.salary_amount(), b.salary_amount()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Sorts a copy of `records` by `field` and returns it with the updated state.
///
/// Calling twice with the same field toggles the direction each time. The
/// sort is stable in both directions, so records that compare equal keep
/// their relative order from `records`.
pub fn sort_records(
    records: &[StaffRecord],
    field: SortField,
    state: SortState,
) -> (Vec<StaffRecord>, SortState) {
    let state = state.next(field);
    debug!(%field, direction = ?state.direction, rows = records.len(), "Sorting staff records");

    let mut sorted = records.to_vec();
    match state.direction {
        Direction::Ascending => sorted.sort_by(|a, b| compare(a, b, field)),
        Direction::Descending => sorted.sort_by(|a, b| compare(b, a, field)),
    }

    (sorted, state)
}
