//! Dataset sink trait and output error types

use crate::record::PaperRecord;
use thiserror::Error;

/// Errors that can occur while persisting the dataset
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write dataset: {0}")]
    Write(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for dataset sinks
///
/// A sink accepts the final ordered record list and persists it. Sinks see
/// only completed records; partial or streaming writes are not part of the
/// contract.
pub trait DatasetSink {
    /// Persists the full record list, in the order given
    fn write(&self, records: &[PaperRecord]) -> OutputResult<()>;
}
