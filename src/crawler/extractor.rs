//! HTML field extraction for listing and detail pages
//!
//! Two pure extraction modes over a parsed document:
//! - Listing mode: the index page's paper-title rows (`dt.ptitle`) become
//!   `ListingEntry` values with absolute detail URLs
//! - Detail mode: citation metadata (`citation_author`, `citation_pdf_url`)
//!   and the abstract container become per-paper fields
//!
//! Neither mode touches the network or mutates anything; calling an
//! extractor twice on the same document yields identical results.

use crate::record::{ListingEntry, MISSING_FIELD};
use scraper::{Html, Selector};
use url::Url;

/// Per-paper fields pulled from a detail page
///
/// Missing abstract or PDF metadata resolves to the `"N/A"` sentinel, never
/// to an absent value; a page without author metadata yields an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    /// Authors in document order, duplicates preserved
    pub authors: Vec<String>,

    pub abstract_text: String,

    pub pdf_url: String,
}

/// Extracts paper entries from the index page, in document order
///
/// Each `dt.ptitle` row must contain an anchor: the title is the anchor's
/// trimmed text and the detail URL is the href resolved against `base_url`.
/// Rows with no anchor, or an href that does not resolve, are silently
/// skipped. An empty result is a valid outcome, not an error.
///
/// # Example
///
/// ```
/// use paper_harvest::crawler::extract_listing;
/// use scraper::Html;
/// use url::Url;
///
/// let html = r#"<dl><dt class="ptitle"><a href="/html/paper.html">A Paper</a></dt></dl>"#;
/// let doc = Html::parse_document(html);
/// let base = Url::parse("https://openaccess.thecvf.com/CVPR2024").unwrap();
/// let entries = extract_listing(&doc, &base);
/// assert_eq!(entries[0].title, "A Paper");
/// assert_eq!(entries[0].detail_url.as_str(), "https://openaccess.thecvf.com/html/paper.html");
/// ```
pub fn extract_listing(document: &Html, base_url: &Url) -> Vec<ListingEntry> {
    let mut entries = Vec::new();

    let Ok(title_selector) = Selector::parse("dt.ptitle") else {
        return entries;
    };
    let Ok(anchor_selector) = Selector::parse("a") else {
        return entries;
    };

    for row in document.select(&title_selector) {
        // Malformed rows without a linked anchor are dropped, not an error
        let Some(anchor) = row.select(&anchor_selector).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let title = anchor.text().collect::<String>().trim().to_string();

        match base_url.join(href) {
            Ok(detail_url) => entries.push(ListingEntry { title, detail_url }),
            Err(e) => {
                tracing::debug!("Skipping listing entry with unresolvable href '{}': {}", href, e);
            }
        }
    }

    entries
}

/// Extracts author, abstract, and PDF metadata from a detail page
pub fn extract_detail(document: &Html) -> DetailFields {
    DetailFields {
        authors: extract_authors(document),
        abstract_text: extract_abstract(document),
        pdf_url: extract_pdf_url(document),
    }
}

/// Collects every `citation_author` meta content value in document order
fn extract_authors(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse(r#"meta[name="citation_author"]"#) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|meta| meta.value().attr("content"))
        .map(|content| content.to_string())
        .collect()
}

/// Trimmed text of the abstract container, or the sentinel if absent
fn extract_abstract(document: &Html) -> String {
    let Ok(selector) = Selector::parse("div#abstract") else {
        return MISSING_FIELD.to_string();
    };

    document
        .select(&selector)
        .next()
        .map(|div| div.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

/// Content of the `citation_pdf_url` meta tag, or the sentinel if absent
fn extract_pdf_url(document: &Html) -> String {
    let Ok(selector) = Selector::parse(r#"meta[name="citation_pdf_url"]"#) else {
        return MISSING_FIELD.to_string();
    };

    document
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.to_string())
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}
