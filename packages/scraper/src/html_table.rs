//! Staff directory table scraper.
//!
//! Fetches an HTML page, locates its first `<table>`, resolves the header
//! columns and extracts one [`Record`] per body row. The organization name
//! is looked up once per page when the run asks for it.

use scraper::{Html, Selector};
use staff_directory_models::{ExtractOptions, Record};

use crate::cells::{header_texts, row_cells};
use crate::columns::{ColumnResolution, resolve_columns};
use crate::organization::OrganizationLocator;
use crate::rows::extract_record;
use crate::{ScrapeConfig, ScrapeError, SkipReason, parse_selector};

/// Scraper that extracts staff records from a directory table.
///
/// The default selectors work with standard `<table>` / `<thead>` /
/// `<tbody>` markup. Use the builder methods to customise them for
/// non-standard layouts.
#[derive(Debug, Clone)]
pub struct DirectoryTableScraper {
    /// Shared HTTP configuration.
    config: ScrapeConfig,
    /// Output schema options.
    options: ExtractOptions,
    /// Organization name lookup.
    organization: OrganizationLocator,
    /// Selector for the target table element (first match wins).
    table_selector: Selector,
    /// Selector for the header section inside the table.
    header_selector: Selector,
    /// Selector for the body section inside the table (first match wins).
    body_selector: Selector,
    /// Selector for rows inside the body section.
    row_selector: Selector,
}

impl DirectoryTableScraper {
    /// Creates a new `DirectoryTableScraper` with default selectors and a
    /// browser user agent.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            config: ScrapeConfig::default(),
            options,
            organization: OrganizationLocator::default(),
            table_selector: Selector::parse("table").unwrap_or_else(|_| unreachable!()),
            header_selector: Selector::parse("thead").unwrap_or_else(|_| unreachable!()),
            body_selector: Selector::parse("tbody").unwrap_or_else(|_| unreachable!()),
            row_selector: Selector::parse("tr").unwrap_or_else(|_| unreachable!()),
        }
    }

    /// Overrides the selector used to locate the table element.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if `selector` is not valid CSS.
    pub fn with_table_selector(mut self, selector: &str) -> Result<Self, ScrapeError> {
        self.table_selector = parse_selector(selector)?;
        Ok(self)
    }

    /// Overrides the selector used to locate the header section.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if `selector` is not valid CSS.
    pub fn with_header_selector(mut self, selector: &str) -> Result<Self, ScrapeError> {
        self.header_selector = parse_selector(selector)?;
        Ok(self)
    }

    /// Overrides the selector used to locate the body section. Only the
    /// first match inside the table is read.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if `selector` is not valid CSS.
    pub fn with_body_selector(mut self, selector: &str) -> Result<Self, ScrapeError> {
        self.body_selector = parse_selector(selector)?;
        Ok(self)
    }

    /// Replaces the organization locator.
    #[must_use]
    pub fn with_organization_locator(mut self, locator: OrganizationLocator) -> Self {
        self.organization = locator;
        self
    }

    /// Adds an HTTP header to include in requests.
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.config = self.config.with_header(key, value);
        self
    }

    /// Returns a reference to the underlying HTTP configuration.
    #[must_use]
    pub const fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Returns the output schema options.
    #[must_use]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Fetches `url` and extracts its records.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::Fetch`] on transport errors or a non-success
    /// status, otherwise whatever [`Self::scrape_document`] returns.
    pub async fn fetch_page(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> Result<Vec<Record>, SkipReason> {
        let body = fetch_text(client, url).await.map_err(SkipReason::Fetch)?;
        self.scrape_document(&body, url)
    }

    /// Extracts records from an already-fetched page.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::NoTable`] when the page has no table and
    /// [`SkipReason::MissingColumns`] when its headers do not cover every
    /// field. No partial record set is ever returned.
    pub fn scrape_document(&self, html: &str, url: &str) -> Result<Vec<Record>, SkipReason> {
        let document = Html::parse_document(html);

        // ── Locate the table ────────────────────────────────────────────
        let table = document
            .select(&self.table_selector)
            .next()
            .ok_or(SkipReason::NoTable)?;

        let organization = self
            .options
            .include_organization
            .then(|| self.organization.locate(&document, url));

        // ── Resolve columns ─────────────────────────────────────────────
        let headers = table
            .select(&self.header_selector)
            .next()
            .map(header_texts)
            .unwrap_or_default();
        log::debug!("Headers found: {headers:?} on page: {url}");

        let columns = match resolve_columns(&headers) {
            ColumnResolution::Complete(columns) => columns,
            ColumnResolution::Incomplete { missing } => {
                return Err(SkipReason::MissingColumns { missing });
            }
        };

        // ── Extract body rows ───────────────────────────────────────────
        let Some(body) = table.select(&self.body_selector).next() else {
            return Ok(Vec::new());
        };
        let records = body
            .select(&self.row_selector)
            .map(|row| extract_record(&row_cells(row), &columns, organization.as_deref()))
            .collect();

        Ok(records)
    }
}

/// GETs `url`, failing on a non-success status.
async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
