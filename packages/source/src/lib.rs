#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Page set definitions for the staff directory scraper.
//!
//! A page set is a named list of directory page URLs plus the output
//! options and selector overrides used to scrape them. Sets ship embedded
//! in the binary ([`registry`]) or are loaded from a TOML file at runtime
//! ([`page_set::load_page_set`]).

pub mod page_set;
pub mod registry;

/// Errors that can occur while loading page sets.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// TOML parsing failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No page set with the requested id.
    #[error("Unknown page set: {0}")]
    NotFound(String),

    /// The page set parsed but cannot be used.
    #[error("Invalid page set '{id}': {message}")]
    Invalid {
        /// Page set id.
        id: String,
        /// Description of what went wrong.
        message: String,
    },
}
