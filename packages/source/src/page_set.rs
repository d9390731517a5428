//! Config-driven page set definition.
//!
//! [`PageSet`] captures everything needed to scrape a group of directory
//! pages in a serializable config struct: which URLs, which output schema,
//! and any selector overrides for sites that stray from plain
//! `<table>`/`<thead>`/`<tbody>` markup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use staff_directory_models::ExtractOptions;
use staff_directory_scraper::ScrapeError;
use staff_directory_scraper::html_table::DirectoryTableScraper;
use staff_directory_scraper::organization::OrganizationLocator;

use crate::SourceError;

/// A named list of directory pages and how to scrape them.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSet {
    /// Unique identifier (e.g., `"mens_soccer"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Page URLs, scraped in this order.
    pub urls: Vec<String>,
    /// Output schema. Both flags default to `true`.
    #[serde(flatten)]
    pub options: ExtractOptions,
    /// Optional selector and label overrides.
    #[serde(default)]
    pub overrides: Overrides,
}

/// Per-set overrides of the scraper's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    /// CSS selector for the staff table.
    pub table_selector: Option<String>,
    /// CSS selector for the header section inside the table.
    pub header_selector: Option<String>,
    /// CSS selector for the body section inside the table.
    pub body_selector: Option<String>,
    /// CSS selector for the banner containing the organization heading.
    pub banner_selector: Option<String>,
    /// CSS selector for the heading inside the banner.
    pub heading_selector: Option<String>,
    /// CSS selector for the metadata tag naming the organization.
    pub meta_selector: Option<String>,
    /// Label used when a page names no organization.
    pub organization_fallback: Option<String>,
    /// Tokens stripped from organization names (replaces the default list).
    pub boilerplate: Option<Vec<String>>,
    /// Extra HTTP headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl PageSet {
    /// Returns the page set identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds a scraper configured for this set.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if an override selector is invalid.
    pub fn scraper(&self) -> Result<DirectoryTableScraper, ScrapeError> {
        let overrides = &self.overrides;

        let mut locator = OrganizationLocator::default();
        if let Some(sel) = &overrides.banner_selector {
            locator = locator.with_banner_selector(sel)?;
        }
        if let Some(sel) = &overrides.heading_selector {
            locator = locator.with_heading_selector(sel)?;
        }
        if let Some(sel) = &overrides.meta_selector {
            locator = locator.with_meta_selector(sel)?;
        }
        if let Some(fallback) = &overrides.organization_fallback {
            locator = locator.with_fallback(fallback);
        }
        if let Some(tokens) = &overrides.boilerplate {
            locator = locator.with_boilerplate(tokens.iter().cloned());
        }

        let mut scraper =
            DirectoryTableScraper::new(self.options).with_organization_locator(locator);
        if let Some(sel) = &overrides.table_selector {
            scraper = scraper.with_table_selector(sel)?;
        }
        if let Some(sel) = &overrides.header_selector {
            scraper = scraper.with_header_selector(sel)?;
        }
        if let Some(sel) = &overrides.body_selector {
            scraper = scraper.with_body_selector(sel)?;
        }
        for (key, value) in &overrides.headers {
            scraper = scraper.with_header(key, value);
        }

        Ok(scraper)
    }

    fn validate(self) -> Result<Self, SourceError> {
        if self.urls.is_empty() {
            return Err(SourceError::Invalid {
                id: self.id,
                message: "no urls configured".to_owned(),
            });
        }
        Ok(self)
    }
}

/// Parses a TOML string into a [`PageSet`].
///
/// # Errors
///
/// Returns [`SourceError`] if the TOML is malformed or lists no URLs.
pub fn parse_page_set(toml_str: &str) -> Result<PageSet, SourceError> {
    toml::de::from_str::<PageSet>(toml_str)?.validate()
}

/// Reads and parses a page set TOML file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub fn load_page_set(path: &Path) -> Result<PageSet, SourceError> {
    log::debug!("Loading page set from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_page_set(&contents)
}
