#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Field identities, normalized staff records and the flat output schema.
//!
//! Every page scraped by `staff_directory_scraper` produces [`Record`]s in
//! this shape, no matter how the source table arranged its columns.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Value substituted for any field that could not be located in a row.
pub const PLACEHOLDER: &str = "N/A";

/// A logical column of a staff directory table.
///
/// Variants are declared in header-matching precedence order; see
/// [`Field::ALL`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    /// Person's full name
    Name,
    /// Job title (e.g., "Head Coach")
    Title,
    /// One or more phone numbers
    Phone,
    /// Email address
    Email,
}

impl Field {
    /// All fields in the order header keywords are tested.
    pub const ALL: [Self; 4] = [Self::Name, Self::Title, Self::Phone, Self::Email];

    /// Lower-case substring that identifies this field in a header cell.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

/// A raw name split into its first token and the remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameParts {
    /// First whitespace-separated token.
    pub first: String,
    /// Every remaining token, joined by a single space.
    pub last: String,
}

impl NameParts {
    /// Splits `raw` on whitespace. An empty or blank name yields two empty
    /// strings.
    #[must_use]
    pub fn split(raw: &str) -> Self {
        let mut tokens = raw.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_owned();
        let last = tokens.collect::<Vec<_>>().join(" ");
        Self { first, last }
    }
}

/// One normalized staff directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Publishing organization. `None` when the run does not resolve
    /// organizations.
    pub organization: Option<String>,
    /// Job title.
    pub title: String,
    /// Raw trimmed name as it appeared in the table.
    pub name: String,
    /// `name` split into first/last components.
    pub name_parts: NameParts,
    /// Deduplicated, sorted phone tokens joined by single spaces.
    pub phone: String,
    /// Email address with any `mailto:` prefix removed.
    pub email: String,
}

impl Record {
    /// Renders the record as a flat row matching [`ExtractOptions::headers`].
    #[must_use]
    pub fn to_row(&self, options: &ExtractOptions) -> Vec<String> {
        let mut row = Vec::with_capacity(options.headers().len());
        if options.include_organization {
            row.push(self.organization.clone().unwrap_or_default());
        }
        row.push(self.title.clone());
        if options.split_name {
            row.push(self.name_parts.first.clone());
            row.push(self.name_parts.last.clone());
        } else {
            row.push(self.name.clone());
        }
        row.push(self.phone.clone());
        row.push(self.email.clone());
        row
    }
}

/// Selects which of the observed output schemas a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Resolve the publishing organization once per page and emit an
    /// `Organization` column.
    #[serde(default = "default_true")]
    pub include_organization: bool,
    /// Emit `First Name`/`Last Name` instead of a single `Name` column.
    #[serde(default = "default_true")]
    pub split_name: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_organization: true,
            split_name: true,
        }
    }
}

impl ExtractOptions {
    /// Column headers of the flat output table.
    #[must_use]
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = Vec::with_capacity(6);
        if self.include_organization {
            headers.push("Organization");
        }
        headers.push("Title");
        if self.split_name {
            headers.extend(["First Name", "Last Name"]);
        } else {
            headers.push("Name");
        }
        headers.extend(["Phone", "Email"]);
        headers
    }
}
