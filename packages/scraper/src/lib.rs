#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Staff directory extraction from heterogeneous HTML tables.
//!
//! Every athletics or department site lays out its staff table differently.
//! [`columns`] infers which header holds which [`Field`], [`rows`] turns
//! each body row into a normalized [`Record`] whether the name sits in a
//! `<th>` or a `<td>`, and [`organization`] finds the publishing
//! organization. [`html_table::DirectoryTableScraper`] wires those together
//! per page and [`scrape_all`] walks a list of pages in order.

pub mod cells;
pub mod columns;
pub mod html_table;
pub mod organization;
pub mod progress;
pub mod rows;

use std::collections::BTreeMap;
use std::sync::Arc;

use scraper::Selector;
use staff_directory_models::{Field, Record};

use crate::html_table::DirectoryTableScraper;
use crate::progress::ProgressCallback;

/// Browser user agent sent with every request. Several athletics sites
/// refuse the default `reqwest` agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Errors that can occur during scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A selector or header could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Why a page contributed no records.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The page could not be fetched.
    #[error("failed to load the page: {0}")]
    Fetch(#[source] ScrapeError),

    /// The page has no table.
    #[error("no table found")]
    NoTable,

    /// The table's headers do not cover every field.
    #[error("missing expected columns: {}", join_fields(.missing))]
    MissingColumns {
        /// Fields with no matching header.
        missing: Vec<Field>,
    },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A page that was skipped, with the reason.
#[derive(Debug)]
pub struct SkippedPage {
    /// Page URL.
    pub url: String,
    /// Why it yielded nothing.
    pub reason: SkipReason,
}

/// Result of scraping a list of pages.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Records from every page, in page order then row order.
    pub records: Vec<Record>,
    /// Pages that yielded nothing, in page order.
    pub skipped: Vec<SkippedPage>,
}

impl ScrapeReport {
    /// Folds one page's outcome into the report.
    fn push_page(&mut self, url: &str, outcome: Result<Vec<Record>, SkipReason>) {
        match outcome {
            Ok(records) => {
                if records.is_empty() {
                    log::info!("No rows in table on page: {url}");
                } else {
                    log::info!("Data found on page: {url} ({} records)", records.len());
                }
                self.records.extend(records);
            }
            Err(reason) => {
                log::warn!("Skipping page {url}: {reason}");
                self.skipped.push(SkippedPage {
                    url: url.to_owned(),
                    reason,
                });
            }
        }
    }
}

/// HTTP configuration shared by every page request.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Additional HTTP headers to include in requests.
    pub headers: BTreeMap<String, String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new().with_header("User-Agent", DEFAULT_USER_AGENT)
    }
}

impl ScrapeConfig {
    /// Creates an empty `ScrapeConfig` with no extra headers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: BTreeMap::new(),
        }
    }

    /// Adds an HTTP header to include in requests.
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Builds a [`reqwest::Client`] with the configured headers.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] if a header name or value is invalid or the
    /// client cannot be built.
    pub fn build_client(&self) -> Result<reqwest::Client, ScrapeError> {
        let mut header_map = reqwest::header::HeaderMap::new();
        for (key, value) in &self.headers {
            let name = reqwest::header::HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| ScrapeError::Parse(format!("invalid header name '{key}': {e}")))?;
            let val = reqwest::header::HeaderValue::from_str(value)
                .map_err(|e| ScrapeError::Parse(format!("invalid header value '{value}': {e}")))?;
            header_map.insert(name, val);
        }
        reqwest::Client::builder()
            .default_headers(header_map)
            .build()
            .map_err(ScrapeError::Http)
    }
}

/// Parses a CSS selector string, returning a [`ScrapeError`] on failure.
pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Parse(format!("invalid CSS selector '{selector}': {e}")))
}

/// Scrapes every page in `urls` one after another, in order.
///
/// A page that fails to load, has no table, or has an unusable table is
/// recorded in [`ScrapeReport::skipped`] and the walk continues.
///
/// # Errors
///
/// Returns [`ScrapeError`] only if the HTTP client cannot be built.
pub async fn scrape_all<S: AsRef<str>>(
    scraper: &DirectoryTableScraper,
    urls: &[S],
    progress: &Arc<dyn ProgressCallback>,
) -> Result<ScrapeReport, ScrapeError> {
    let client = scraper.config().build_client()?;
    let mut report = ScrapeReport::default();

    progress.set_total(urls.len() as u64);

    for url in urls {
        let url = url.as_ref();
        progress.set_message(url.to_owned());
        log::debug!("Fetching {url}");

        let outcome = scraper.fetch_page(&client, url).await;
        report.push_page(url, outcome);

        progress.inc(1);
    }

    log::info!(
        "Scrape complete: {} records from {} page(s), {} skipped",
        report.records.len(),
        urls.len(),
        report.skipped.len()
    );
    progress.finish(format!(
        "{} records from {} page(s)",
        report.records.len(),
        urls.len()
    ));

    Ok(report)
}
