//! Table cell projections.
//!
//! The extraction logic never touches the DOM directly. Each `<th>`/`<td>`
//! is reduced to a [`RawCell`] holding the handful of readings the row
//! extractor needs: its kind, its visible text, its visible text with
//! spaces between elements, and the target of its first hyperlink.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

static LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

static HEADER_CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));

static HEADER_DATA_CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// Whether a cell is a row/column label or an ordinary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `<th>`
    Header,
    /// `<td>`
    Data,
}

/// A table cell reduced to its readable projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
    /// Header or data cell.
    pub kind: CellKind,
    /// Text nodes concatenated as-is, trimmed.
    pub text: String,
    /// Text nodes joined with a single space, trimmed. Keeps numbers that
    /// live in sibling elements apart.
    pub spaced_text: String,
    /// `href` of the first hyperlink inside the cell.
    pub link: Option<String>,
}

impl RawCell {
    /// Builds a data cell whose text readings are both `text`.
    #[must_use]
    pub fn data(text: &str) -> Self {
        Self::new(CellKind::Data, text)
    }

    /// Builds a header cell whose text readings are both `text`.
    #[must_use]
    pub fn header(text: &str) -> Self {
        Self::new(CellKind::Header, text)
    }

    fn new(kind: CellKind, text: &str) -> Self {
        Self {
            kind,
            text: text.trim().to_owned(),
            spaced_text: text.trim().to_owned(),
            link: None,
        }
    }

    /// Attaches a hyperlink target.
    #[must_use]
    pub fn with_link(mut self, href: &str) -> Self {
        self.link = Some(href.to_owned());
        self
    }

    /// Projects a `<th>` or `<td>` element. Returns `None` for any other
    /// element.
    #[must_use]
    pub fn from_element(element: ElementRef<'_>) -> Option<Self> {
        let kind = match element.value().name() {
            "th" => CellKind::Header,
            "td" => CellKind::Data,
            _ => return None,
        };

        let text = element.text().collect::<String>().trim().to_owned();
        let spaced_text = element.text().collect::<Vec<_>>().join(" ").trim().to_owned();
        let link = element
            .select(&LINK_SEL)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_owned);

        Some(Self {
            kind,
            text,
            spaced_text,
            link,
        })
    }

    /// Whether this is a `<th>` cell.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.kind == CellKind::Header
    }
}

/// Collects the direct `<th>`/`<td>` children of a `<tr>` in document
/// order.
#[must_use]
pub fn row_cells(row: ElementRef<'_>) -> Vec<RawCell> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter_map(RawCell::from_element)
        .collect()
}

/// Reads the lower-cased, trimmed header texts of a `<thead>`.
///
/// Uses its `<th>` cells, or its `<td>` cells when there are no `<th>`.
#[must_use]
pub fn header_texts(thead: ElementRef<'_>) -> Vec<String> {
    let mut cells: Vec<ElementRef<'_>> = thead.select(&HEADER_CELL_SEL).collect();
    if cells.is_empty() {
        cells = thead.select(&HEADER_DATA_CELL_SEL).collect();
    }

    cells
        .into_iter()
        .map(|el| el.text().collect::<String>().trim().to_lowercase())
        .collect()
}
