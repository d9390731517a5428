//! Organization name discovery.
//!
//! Athletics sites usually carry the school name either in the page
//! banner's `<h1>` or in the Open Graph `og:site_name` tag. Both often end
//! in a generic label ("Duke Athletics") that is stripped.

use scraper::{Html, Selector};

use crate::{ScrapeError, parse_selector};

/// Label used when a page names no organization.
pub const UNKNOWN_ORGANIZATION: &str = "Unknown University";

/// Tokens removed from a discovered organization name by default.
pub const DEFAULT_BOILERPLATE: &[&str] = &["Athletics"];

/// Locates the publishing organization's name in a parsed page.
#[derive(Debug, Clone)]
pub struct OrganizationLocator {
    /// Banner container searched first.
    banner_selector: Selector,
    /// Heading inside the banner that holds the name.
    heading_selector: Selector,
    /// Metadata tag whose `content` attribute is the fallback source.
    meta_selector: Selector,
    /// Returned when neither source yields text.
    fallback: String,
    /// Substrings stripped from a discovered name.
    boilerplate: Vec<String>,
}

impl Default for OrganizationLocator {
    fn default() -> Self {
        Self {
            banner_selector: Selector::parse("header.main-header")
                .unwrap_or_else(|_| unreachable!()),
            heading_selector: Selector::parse("h1").unwrap_or_else(|_| unreachable!()),
            meta_selector: Selector::parse(r#"meta[property="og:site_name"]"#)
                .unwrap_or_else(|_| unreachable!()),
            fallback: UNKNOWN_ORGANIZATION.to_owned(),
            boilerplate: DEFAULT_BOILERPLATE.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

impl OrganizationLocator {
    /// Overrides the banner container selector.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if `selector` is not valid CSS.
    pub fn with_banner_selector(mut self, selector: &str) -> Result<Self, ScrapeError> {
        self.banner_selector = parse_selector(selector)?;
        Ok(self)
    }

    /// Overrides the heading selector applied inside the banner.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if `selector` is not valid CSS.
    pub fn with_heading_selector(mut self, selector: &str) -> Result<Self, ScrapeError> {
        self.heading_selector = parse_selector(selector)?;
        Ok(self)
    }

    /// Overrides the metadata tag selector.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Parse`] if `selector` is not valid CSS.
    pub fn with_meta_selector(mut self, selector: &str) -> Result<Self, ScrapeError> {
        self.meta_selector = parse_selector(selector)?;
        Ok(self)
    }

    /// Overrides the fallback label.
    #[must_use]
    pub fn with_fallback(mut self, fallback: &str) -> Self {
        fallback.clone_into(&mut self.fallback);
        self
    }

    /// Replaces the boilerplate tokens stripped from discovered names.
    #[must_use]
    pub fn with_boilerplate<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boilerplate = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Finds the raw organization name, trying the banner heading first and
    /// the metadata tag second. Blank values count as missing.
    #[must_use]
    pub fn find(&self, document: &Html) -> Option<String> {
        let from_banner = document
            .select(&self.banner_selector)
            .next()
            .and_then(|banner| banner.select(&self.heading_selector).next())
            .map(|heading| heading.text().collect::<String>().trim().to_owned())
            .filter(|name| !name.is_empty());

        from_banner.or_else(|| {
            document
                .select(&self.meta_selector)
                .next()
                .and_then(|meta| meta.value().attr("content"))
                .map(|content| content.trim().to_owned())
                .filter(|name| !name.is_empty())
        })
    }

    /// Returns the cleaned organization name for a page, or the fallback
    /// label when none is present.
    #[must_use]
    pub fn locate(&self, document: &Html, url: &str) -> String {
        let Some(name) = self.find(document) else {
            log::warn!("Organization name not found on page: {url}");
            return self.fallback.clone();
        };

        self.strip_boilerplate(&name)
    }

    fn strip_boilerplate(&self, name: &str) -> String {
        self.boilerplate
            .iter()
            .filter(|token| !token.is_empty())
            .fold(name.to_owned(), |acc, token| acc.replace(token.as_str(), ""))
            .trim()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(html: &str) -> String {
        OrganizationLocator::default().locate(&Html::parse_document(html), "test://page")
    }

    #[test]
    fn prefers_banner_heading() {
        let html = r#"<html><head><meta property="og:site_name" content="Meta Name"></head>
            <body><header class="main-header"><h1> Duke Athletics </h1></header></body></html>"#;
        assert_eq!(locate(html), "Duke");
    }

    #[test]
    fn ignores_headings_outside_banner() {
        let html = r#"<html><head><meta property="og:site_name" content="UAB Athletics"></head>
            <body><h1>Coaching Staff</h1><header class="site-header"><h1>Other</h1></header></body></html>"#;
        assert_eq!(locate(html), "UAB");
    }

    #[test]
    fn falls_back_to_meta_when_heading_blank() {
        let html = r#"<html><head><meta property="og:site_name" content=" Boston University Athletics "></head>
            <body><header class="main-header"><h1>  </h1></header></body></html>"#;
        assert_eq!(locate(html), "Boston University");
    }

    #[test]
    fn returns_fallback_label() {
        assert_eq!(locate("<html><body><p>hi</p></body></html>"), UNKNOWN_ORGANIZATION);
    }

    #[test]
    fn fallback_label_is_not_stripped() {
        let locator = OrganizationLocator::default().with_fallback("Unknown Athletics");
        let doc = Html::parse_document("<html></html>");
        assert_eq!(locator.locate(&doc, "test://page"), "Unknown Athletics");
    }

    #[test]
    fn custom_boilerplate_tokens() {
        let locator = OrganizationLocator::default().with_boilerplate(["Sports", "Official Site of"]);
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:site_name" content="Official Site of Fordham Sports"></head></html>"#,
        );
        assert_eq!(locator.locate(&doc, "test://page"), "Fordham");
    }

    #[test]
    fn custom_banner_selector() {
        let locator = OrganizationLocator::default()
            .with_banner_selector("div#masthead")
            .unwrap();
        let doc = Html::parse_document(
            r#"<html><body><div id="masthead"><h1>MIT Athletics</h1></div></body></html>"#,
        );
        assert_eq!(locator.find(&doc).as_deref(), Some("MIT Athletics"));
    }

    #[test]
    fn rejects_invalid_selector() {
        assert!(matches!(
            OrganizationLocator::default().with_meta_selector("meta[["),
            Err(ScrapeError::Parse(_))
        ));
    }

    #[test]
    fn custom_heading_selector() {
        let locator = OrganizationLocator::default()
            .with_heading_selector("a.logo")
            .unwrap();
        let doc = Html::parse_document(
            r#"<html><body><header class="main-header"><h1>Menu</h1><a class="logo">Yale Athletics</a></header></body></html>"#,
        );
        assert_eq!(locator.locate(&doc, "test://page"), "Yale");
    }
}
