//! Report export.
//!
//! Exports render a [`BatchReport`](crate::models::BatchReport) as it was
//! computed; they never recalculate figures.

mod batch_csv;

pub use batch_csv::{CSV_COLUMNS, batch_csv_string, csv_file_name, write_batch_csv};
