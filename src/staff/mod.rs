//! Staff table records and their sorting.
//!
//! The dataset is built once at start-up, either from the built-in rows in
//! [`dataset`] or from a CSV file via [`loader`], and is never reordered in
//! place. [`sorter`] always hands back a new ordered copy.

pub mod dataset;
pub mod loader;
pub mod record;
pub mod sorter;

pub use record::StaffRecord;
pub use sorter::{Direction, SortField, SortState, sort_records};
