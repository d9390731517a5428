//! Row extraction.
//!
//! Directory tables come in two shapes. Some render the person's name as a
//! row header (`<th>`), others keep every value in `<td>` cells. Column
//! positions from [`ColumnMap`] count the name column in both cases, so a
//! row whose name lives in a `<th>` reads its data cells one position to the
//! left.

use std::collections::BTreeSet;

use staff_directory_models::{Field, NameParts, PLACEHOLDER, Record};

use crate::cells::RawCell;
use crate::columns::ColumnMap;

/// Structural shape of one body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape<'a> {
    /// First cell is a `<th>` holding the name; `data` excludes it.
    NameInHeader {
        /// The name cell.
        name: &'a RawCell,
        /// Remaining data cells in order.
        data: Vec<&'a RawCell>,
    },
    /// Every field, name included, is a data cell.
    NameInData {
        /// Data cells in order.
        data: Vec<&'a RawCell>,
    },
}

impl<'a> RowShape<'a> {
    /// Classifies a row by its first cell.
    #[must_use]
    pub fn resolve(cells: &'a [RawCell]) -> Self {
        let data = cells.iter().filter(|cell| !cell.is_header()).collect();
        match cells.first() {
            Some(first) if first.is_header() => Self::NameInHeader { name: first, data },
            _ => Self::NameInData { data },
        }
    }
}

/// Turns one row into a [`Record`]. Never fails: any field whose cell
/// cannot be found becomes [`PLACEHOLDER`].
#[must_use]
pub fn extract_record(
    cells: &[RawCell],
    columns: &ColumnMap,
    organization: Option<&str>,
) -> Record {
    let fields = match RowShape::resolve(cells) {
        RowShape::NameInHeader { name, data } => name_in_header(name, &data, columns),
        RowShape::NameInData { data } => name_in_data(&data, columns),
    };

    Record {
        organization: organization.map(str::to_owned),
        title: fields.title,
        name_parts: NameParts::split(&fields.name),
        name: fields.name,
        phone: clean_phone(&fields.phone),
        email: fields.email,
    }
}

/// Field values read from a row before phone cleanup.
struct RowFields {
    name: String,
    title: String,
    phone: String,
    email: String,
}

fn name_in_header(name: &RawCell, data: &[&RawCell], columns: &ColumnMap) -> RowFields {
    let cell = |field| {
        columns
            .index(field)
            .checked_sub(1)
            .and_then(|i| data.get(i).copied())
    };

    RowFields {
        name: name.text.clone(),
        title: text_or_placeholder(cell(Field::Title)),
        phone: phone_text(cell(Field::Phone)),
        email: email_address(cell(Field::Email)),
    }
}

fn name_in_data(data: &[&RawCell], columns: &ColumnMap) -> RowFields {
    let cell = |field| data.get(columns.index(field)).copied();

    RowFields {
        name: text_or_placeholder(cell(Field::Name)),
        title: text_or_placeholder(cell(Field::Title)),
        phone: phone_text(cell(Field::Phone)),
        email: email_address(cell(Field::Email)),
    }
}

fn text_or_placeholder(cell: Option<&RawCell>) -> String {
    cell.map_or_else(|| PLACEHOLDER.to_owned(), |c| c.text.clone())
}

fn phone_text(cell: Option<&RawCell>) -> String {
    cell.map_or_else(|| PLACEHOLDER.to_owned(), |c| c.spaced_text.clone())
}

/// Reads an email address from a cell's hyperlink target.
///
/// The visible text is never used since it is often a label like "Email".
#[must_use]
pub fn email_address(cell: Option<&RawCell>) -> String {
    cell.and_then(|c| c.link.as_deref())
        .map_or_else(
            || PLACEHOLDER.to_owned(),
            |href| href.strip_prefix("mailto:").unwrap_or(href).to_owned(),
        )
}

/// Canonicalizes a phone cell: whitespace tokens, deduplicated and sorted,
/// joined by single spaces.
///
/// Sites often render the same number twice (link text plus visible text),
/// so duplicates collapse while distinct numbers in one cell survive.
#[must_use]
pub fn clean_phone(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use crate::columns::resolve_columns;

    use super::*;

    fn columns(headers: &[&str]) -> ColumnMap {
        *resolve_columns(headers).complete().unwrap()
    }

    fn canonical() -> ColumnMap {
        columns(&["name", "title", "phone", "email address"])
    }

    #[test]
    fn extracts_name_from_header_cell() {
        let cells = vec![
            RawCell::header("Jane Doe"),
            RawCell::data("Head Coach"),
            RawCell::data("555-0100 555-0100"),
            RawCell::data("Email").with_link("mailto:jane@x.edu"),
        ];

        let record = extract_record(&cells, &canonical(), None);

        assert_eq!(record.title, "Head Coach");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.name_parts.first, "Jane");
        assert_eq!(record.name_parts.last, "Doe");
        assert_eq!(record.phone, "555-0100");
        assert_eq!(record.email, "jane@x.edu");
        assert_eq!(record.organization, None);
    }

    #[test]
    fn extracts_name_from_data_cell() {
        let cells = vec![
            RawCell::data("Jordan A. Smith"),
            RawCell::data("Assistant Coach"),
            RawCell::data("555-2222 555-1111"),
            RawCell::data("jsmith@x.edu").with_link("mailto:jsmith@x.edu"),
        ];

        let record = extract_record(&cells, &canonical(), Some("Duke"));

        assert_eq!(record.organization.as_deref(), Some("Duke"));
        assert_eq!(record.title, "Assistant Coach");
        assert_eq!(record.name_parts.first, "Jordan");
        assert_eq!(record.name_parts.last, "A. Smith");
        assert_eq!(record.phone, "555-1111 555-2222");
        assert_eq!(record.email, "jsmith@x.edu");
    }

    #[test]
    fn header_rows_shift_indices_left() {
        let map = columns(&["email", "name", "phone", "title"]);
        let cells = vec![
            RawCell::header("Pat Lee"),
            RawCell::data("pat@x.edu"),
            RawCell::data("555-4444"),
        ];

        let record = extract_record(&cells, &map, None);

        // title is header 3 -> data index 2, out of bounds
        assert_eq!(record.title, PLACEHOLDER);
        // phone is header 2 -> data index 1
        assert_eq!(record.phone, "555-4444");
        // email is header 0 -> no data cell before the name
        assert_eq!(record.email, PLACEHOLDER);
        assert_eq!(record.name, "Pat Lee");
    }

    #[test]
    fn data_rows_read_indices_unshifted() {
        let map = columns(&["title", "name", "email", "phone"]);
        let cells = vec![
            RawCell::data("Director"),
            RawCell::data("Sam Roe"),
            RawCell::data("x").with_link("sam@x.edu"),
            RawCell::data("555-3333"),
        ];

        let record = extract_record(&cells, &map, None);

        assert_eq!(record.title, "Director");
        assert_eq!(record.name, "Sam Roe");
        assert_eq!(record.email, "sam@x.edu");
        assert_eq!(record.phone, "555-3333");
    }

    #[test]
    fn short_row_degrades_per_field() {
        let cells = vec![RawCell::data("Sam Roe"), RawCell::data("Director")];

        let record = extract_record(&cells, &canonical(), None);

        assert_eq!(record.name, "Sam Roe");
        assert_eq!(record.title, "Director");
        assert_eq!(record.phone, PLACEHOLDER);
        assert_eq!(record.email, PLACEHOLDER);
    }

    #[test]
    fn empty_row_is_all_placeholders() {
        let record = extract_record(&[], &canonical(), None);

        assert_eq!(record.name, PLACEHOLDER);
        assert_eq!(record.title, PLACEHOLDER);
        assert_eq!(record.phone, PLACEHOLDER);
        assert_eq!(record.email, PLACEHOLDER);
        assert_eq!(record.name_parts.first, PLACEHOLDER);
        assert_eq!(record.name_parts.last, "");
    }

    #[test]
    fn header_only_row_keeps_name() {
        let record = extract_record(&[RawCell::header("Alex Kim")], &canonical(), None);

        assert_eq!(record.name, "Alex Kim");
        assert_eq!(record.title, PLACEHOLDER);
        assert_eq!(record.phone, PLACEHOLDER);
        assert_eq!(record.email, PLACEHOLDER);
    }

    #[test]
    fn email_ignores_visible_text() {
        assert_eq!(
            email_address(Some(&RawCell::data("coach@example.edu"))),
            PLACEHOLDER
        );
        assert_eq!(
            email_address(Some(
                &RawCell::data("Email Coach").with_link("mailto:coach@example.edu")
            )),
            "coach@example.edu"
        );
    }

    #[test]
    fn email_keeps_link_without_mailto_prefix() {
        assert_eq!(
            email_address(Some(&RawCell::data("x").with_link("coach@example.edu"))),
            "coach@example.edu"
        );
        assert_eq!(email_address(None), PLACEHOLDER);
    }

    #[test]
    fn phone_dedupes_and_sorts() {
        assert_eq!(
            clean_phone("555-1111 555-1111 555-2222"),
            "555-1111 555-2222"
        );
        assert_eq!(clean_phone("555-2222\n  555-1111"), "555-1111 555-2222");
        assert_eq!(clean_phone(""), "");
        assert_eq!(clean_phone(PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn phone_cleanup_is_idempotent() {
        for raw in ["555-0100 555-0100", "b a c a", "  ", "Office: 555-0100 Cell: 555-0199"] {
            let once = clean_phone(raw);
            assert_eq!(clean_phone(&once), once);
        }
    }

    #[test]
    fn resolves_row_shape_from_first_cell() {
        let cells = vec![RawCell::data("a"), RawCell::header("b"), RawCell::data("c")];
        let RowShape::NameInData { data } = RowShape::resolve(&cells) else {
            panic!("expected data row");
        };
        assert_eq!(data.len(), 2);

        let cells = vec![RawCell::header("a"), RawCell::data("b")];
        assert!(matches!(
            RowShape::resolve(&cells),
            RowShape::NameInHeader { data, .. } if data.len() == 1
        ));
    }
}
