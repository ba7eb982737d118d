//! Crawler module for page fetching and metadata extraction
//!
//! This module contains the core harvest logic, including:
//! - HTTP fetching with bounded retry for transient failures
//! - Structural extraction of listing entries and citation metadata
//! - Per-paper detail workers
//! - Overall harvest coordination under a concurrency bound

mod coordinator;
mod extractor;
mod fetcher;
mod worker;

pub use coordinator::Coordinator;
pub use extractor::{extract_detail, extract_listing, DetailFields};
pub use fetcher::{build_http_client, fetch_page, RetryPolicy};
pub use worker::process_entry;

use crate::config::Config;
use crate::record::HarvestOutcome;
use crate::HarvestError;

/// Runs a complete harvest operation
///
/// This is the main entry point for harvesting a proceedings listing. It
/// will:
/// 1. Build the shared HTTP client
/// 2. Fetch the index page and extract the paper listing
/// 3. Fetch every detail page under the configured concurrency bound
/// 4. Assemble the records in discovery order
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(HarvestOutcome)` - Records plus any per-paper failures
/// * `Err(HarvestError)` - The index page could not be fetched
pub async fn harvest(config: Config) -> Result<HarvestOutcome, HarvestError> {
    Coordinator::new(config)?.run().await
}
