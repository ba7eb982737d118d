//! Output module for persisting the harvested dataset
//!
//! This module handles:
//! - The `DatasetSink` trait for pluggable persistence
//! - CSV serialization of the final record table
//! - Run statistics for terminal display

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::CsvSink;
pub use stats::{print_statistics, HarvestStats};
pub use traits::{DatasetSink, OutputError, OutputResult};
