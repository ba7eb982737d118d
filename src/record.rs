//! Data model for harvested paper metadata
//!
//! The types here follow the lifecycle of a harvest run: `ListingEntry`
//! values are created once from the index page, each successful detail fetch
//! produces exactly one `PaperRecord`, and the coordinator assembles them
//! into a `HarvestOutcome` in discovery order.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Placeholder written for fields that could not be extracted.
///
/// Records always carry all four fields; a missing abstract or PDF link is
/// represented by this sentinel, never by an empty or absent value.
pub const MISSING_FIELD: &str = "N/A";

/// One paper discovered on the index page
///
/// Immutable once created; entries are read-only inputs to the detail
/// workers and are never re-fetched.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    /// Paper title, taken from the listing anchor text
    pub title: String,

    /// Absolute URL of the paper's detail page
    pub detail_url: Url,
}

/// Fully extracted metadata for one paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    pub title: String,

    /// Authors in document order, duplicates preserved
    #[serde(serialize_with = "serialize_authors")]
    pub authors: Vec<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: String,

    pub pdf_url: String,
}

impl PaperRecord {
    /// Renders the author list as a single display string
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }
}

fn serialize_authors<S: Serializer>(authors: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&authors.join(", "))
}

/// A detail fetch that did not produce a record
///
/// The paper is dropped from the dataset; the failure is reported in the
/// harvest outcome instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// The URL that failed
    pub url: String,

    /// Human-readable cause (HTTP status or transport message)
    pub cause: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.cause)
    }
}

/// Result of a completed harvest run
#[derive(Debug)]
pub struct HarvestOutcome {
    /// Successful records, in index-page discovery order
    pub records: Vec<PaperRecord>,

    /// Detail fetches that failed and were dropped
    pub failures: Vec<FetchFailure>,

    /// Number of entries discovered on the index page
    pub discovered: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl HarvestOutcome {
    /// Number of papers dropped due to detail fetch failures
    pub fn dropped(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
