//! Detail worker - fetch and extract one paper's metadata
//!
//! A worker handles exactly one listing entry: fetch the detail page, parse
//! it, extract the citation fields, and combine them with the entry's title
//! into a `PaperRecord`. Workers share nothing mutable, so any number of
//! them can run concurrently for distinct entries.

use crate::crawler::extractor::extract_detail;
use crate::crawler::fetcher::{fetch_page, RetryPolicy};
use crate::record::{FetchFailure, ListingEntry, PaperRecord};
use reqwest::Client;
use scraper::Html;

/// Processes one listing entry into a record
///
/// On a fetch failure the paper is dropped entirely: the failure propagates
/// unchanged and no title-only record is synthesized. Extraction itself
/// cannot fail; missing fields resolve to sentinels.
pub async fn process_entry(
    client: &Client,
    entry: &ListingEntry,
    retry: &RetryPolicy,
) -> Result<PaperRecord, FetchFailure> {
    let body = fetch_page(client, entry.detail_url.as_str(), retry).await?;

    // Parse and extract synchronously; the document must not live across an
    // await point.
    let fields = {
        let document = Html::parse_document(&body);
        extract_detail(&document)
    };

    Ok(PaperRecord {
        title: entry.title.clone(),
        authors: fields.authors,
        abstract_text: fields.abstract_text,
        pdf_url: fields.pdf_url,
    })
}
