//! Page set registry. Loads all page sets from embedded TOML configs.
//!
//! Each `.toml` file in `packages/source/sets/` is baked into the binary at
//! compile time via [`include_str!`]. Adding a set means adding a TOML file
//! and listing it below.

use crate::SourceError;
use crate::page_set::{PageSet, parse_page_set};

/// TOML configs embedded at compile time.
const PAGE_SET_TOMLS: &[(&str, &str)] = &[
    ("mens_soccer", include_str!("../sets/mens_soccer.toml")),
    (
        "mens_soccer_split",
        include_str!("../sets/mens_soccer_split.toml"),
    ),
];

/// Page set used when none is named.
pub const DEFAULT_PAGE_SET: &str = "mens_soccer";

/// Returns all embedded page sets.
///
/// # Panics
///
/// Panics if any embedded TOML config is malformed.
#[must_use]
pub fn all_page_sets() -> Vec<PageSet> {
    PAGE_SET_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_page_set(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Finds an embedded page set by id.
///
/// # Errors
///
/// Returns [`SourceError::NotFound`] if no set has that id.
pub fn find_page_set(id: &str) -> Result<PageSet, SourceError> {
    all_page_sets()
        .into_iter()
        .find(|set| set.id == id)
        .ok_or_else(|| SourceError::NotFound(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_page_sets() {
        assert_eq!(all_page_sets().len(), PAGE_SET_TOMLS.len());
    }

    #[test]
    fn page_set_ids_match_file_names() {
        for ((file, _), set) in PAGE_SET_TOMLS.iter().zip(all_page_sets()) {
            assert_eq!(*file, set.id);
        }
    }

    #[test]
    fn page_set_ids_are_unique() {
        let sets = all_page_sets();
        let mut ids: Vec<&str> = sets.iter().map(PageSet::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sets.len());
    }

    #[test]
    fn default_set_exists_with_both_schemas_shipped() {
        let default = find_page_set(DEFAULT_PAGE_SET).unwrap();
        assert_eq!(default.urls.len(), 11);
        assert!(default.options.include_organization);
        assert!(!default.options.split_name);

        let split = find_page_set("mens_soccer_split").unwrap();
        assert_eq!(split.urls.len(), 5);
        assert!(split.options.split_name);
    }

    #[test]
    fn every_set_builds_a_scraper() {
        for set in all_page_sets() {
            assert!(set.scraper().is_ok(), "{}: scraper failed to build", set.id);
        }
    }

    #[test]
    fn unknown_set_is_not_found() {
        assert!(matches!(
            find_page_set("curling"),
            Err(SourceError::NotFound(id)) if id == "curling"
        ));
    }
}
