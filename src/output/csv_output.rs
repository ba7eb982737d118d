//! CSV dataset sink
//!
//! Writes the harvested records as a delimited table with the columns
//! `title, authors, abstract, pdf_url`. The author list is rendered as one
//! comma-and-space-joined cell.

use crate::output::traits::{DatasetSink, OutputResult};
use crate::record::PaperRecord;
use std::path::{Path, PathBuf};

/// Sink that persists records to a CSV file
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSink for CsvSink {
    fn write(&self, records: &[PaperRecord]) -> OutputResult<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;
        tracing::info!("Wrote {} records to {}", records.len(), self.path.display());

        Ok(())
    }
}
