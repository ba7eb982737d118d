//! Harvest coordinator - main orchestration logic
//!
//! This module contains the run loop that coordinates the whole harvest:
//! - Fetching the index page (fatal on failure)
//! - Extracting the paper listing
//! - Dispatching detail workers under the concurrency bound
//! - Joining all workers and restoring discovery order
//! - Counting dropped papers without aborting the batch

use crate::config::Config;
use crate::crawler::extractor::extract_listing;
use crate::crawler::fetcher::{build_http_client, fetch_page, RetryPolicy};
use crate::crawler::worker::process_entry;
use crate::record::{FetchFailure, HarvestOutcome, PaperRecord};
use crate::HarvestError;
use reqwest::Client;
use scraper::Html;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Main harvest coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    index_url: Url,
}

impl Coordinator {
    /// Creates a new coordinator from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(HarvestError)` - Invalid index URL or client build failure
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.http)?;
        let index_url = Url::parse(&config.harvest.index_url)?;

        Ok(Self {
            config,
            client,
            index_url,
        })
    }

    /// Runs the harvest to completion
    pub async fn run(&self) -> Result<HarvestOutcome, HarvestError> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Runs the harvest, stopping early if the token is cancelled
    ///
    /// The run proceeds in two phases. The index fetch is sequential: all
    /// later work depends on it, and its failure is fatal. Detail fetches
    /// then run concurrently, bounded by a semaphore sized from
    /// `max-concurrent-fetches`; a cancelled token stops permit acquisition
    /// (no new fetches) and abandons in-flight workers, so no record from a
    /// cancelled fetch reaches the outcome.
    ///
    /// Per-item failures never abort the batch. They are logged, counted,
    /// and reported in the outcome; the surviving records are returned in
    /// index-page discovery order regardless of completion order.
    pub async fn run_with_cancellation(
        &self,
        cancel: CancellationToken,
    ) -> Result<HarvestOutcome, HarvestError> {
        let started = Instant::now();
        let retry = RetryPolicy::new(
            self.config.harvest.max_retries,
            Duration::from_millis(self.config.harvest.retry_delay_ms),
        );

        // Phase 1: the index page. Nothing can be harvested without it.
        tracing::info!("Fetching index page: {}", self.index_url);
        let body = fetch_page(&self.client, self.index_url.as_str(), &retry)
            .await
            .map_err(|f| HarvestError::IndexFetch {
                url: f.url,
                cause: f.cause,
            })?;

        let entries = {
            let document = Html::parse_document(&body);
            extract_listing(&document, &self.index_url)
        };

        if entries.is_empty() {
            tracing::warn!(
                "No paper entries found on {}; check the listing markup",
                self.index_url
            );
            return Ok(HarvestOutcome {
                records: Vec::new(),
                failures: Vec::new(),
                discovered: 0,
                elapsed: started.elapsed(),
            });
        }

        let discovered = entries.len();
        tracing::info!(
            "Discovered {} papers, fetching details ({} max in flight)",
            discovered,
            self.config.harvest.max_concurrent_fetches
        );

        // Phase 2: fan out one worker per entry, gated by the semaphore.
        let semaphore = Arc::new(Semaphore::new(
            self.config.harvest.max_concurrent_fetches as usize,
        ));
        let mut handles = Vec::with_capacity(discovered);

        for (index, entry) in entries.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let client = self.client.clone();
            let retry = retry.clone();
            let cancel = cancel.clone();

            handles.push(tokio::spawn(async move {
                let _permit = tokio::select! {
                    _ = cancel.cancelled() => return (index, None),
                    permit = semaphore.acquire_owned() => match permit {
                        Ok(permit) => permit,
                        Err(_) => return (index, None),
                    },
                };

                let result = tokio::select! {
                    _ = cancel.cancelled() => None,
                    result = process_entry(&client, &entry, &retry) => Some(result),
                };

                (index, result)
            }));
        }

        // All-or-nothing batch join: every worker settles before assembly.
        // Workers carry their discovery index, so completion order is
        // irrelevant to the final dataset order.
        let mut slots: Vec<Option<Result<PaperRecord, FetchFailure>>> =
            (0..discovered).map(|_| None).collect();

        for handle in handles {
            match handle.await {
                Ok((index, result)) => slots[index] = result,
                Err(e) => tracing::error!("Detail worker panicked: {}", e),
            }
        }

        if cancel.is_cancelled() {
            tracing::warn!("Harvest cancelled, discarding partial results");
            return Err(HarvestError::Cancelled);
        }

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for slot in slots.into_iter().flatten() {
            match slot {
                Ok(record) => records.push(record),
                Err(failure) => {
                    tracing::warn!("Dropping paper {}: {}", failure.url, failure.cause);
                    failures.push(failure);
                }
            }
        }

        tracing::info!(
            "Harvest complete: {} records, {} dropped, {:?} elapsed",
            records.len(),
            failures.len(),
            started.elapsed()
        );

        Ok(HarvestOutcome {
            records,
            failures,
            discovered,
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HarvestConfig, HttpConfig, OutputConfig};

    fn create_test_config(index_url: &str) -> Config {
        Config {
            harvest: HarvestConfig {
                index_url: index_url.to_string(),
                max_concurrent_fetches: 4,
                max_retries: 0,
                retry_delay_ms: 0,
            },
            http: HttpConfig::default(),
            output: OutputConfig {
                dataset_path: "./papers.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_coordinator_creation() {
        let config = create_test_config("https://openaccess.thecvf.com/CVPR2024");
        assert!(Coordinator::new(config).is_ok());
    }

    #[test]
    fn test_coordinator_rejects_unparseable_index_url() {
        let config = create_test_config("not a url");
        let result = Coordinator::new(config);
        assert!(matches!(result, Err(HarvestError::UrlParse(_))));
    }

    // Full run behavior is covered by the wiremock integration tests.
}
