//! Aggregation pipeline: raw records → clean rows → per-(year, category)
//! series with yearly totals and percentage shares.

pub mod cleaner;
pub mod grouper;
pub mod loader;

pub use cleaner::{clean, CleanRecord};
pub use grouper::{aggregate, aggregate_raw};
pub use loader::{load_csv, load_csv_reader};
