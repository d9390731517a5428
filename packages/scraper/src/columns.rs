//! Column resolution from free-text table headers.
//!
//! Header wording differs on every site ("Name", "Full Name", "Email
//! Address", "Phone #", ...), so each header is matched against an ordered
//! list of keyword rules rather than exact labels.

use staff_directory_models::Field;

/// Zero-based header position of every [`Field`] in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    name: usize,
    title: usize,
    phone: usize,
    email: usize,
}

impl ColumnMap {
    /// Header position of `field`.
    #[must_use]
    pub const fn index(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name,
            Field::Title => self.title,
            Field::Phone => self.phone,
            Field::Email => self.email,
        }
    }
}

/// Outcome of resolving a table's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnResolution {
    /// Every field was found.
    Complete(ColumnMap),
    /// At least one field has no header; the table must be skipped.
    Incomplete {
        /// Fields with no matching header, in precedence order.
        missing: Vec<Field>,
    },
}

impl ColumnResolution {
    /// Returns the map when resolution succeeded.
    #[must_use]
    pub const fn complete(&self) -> Option<&ColumnMap> {
        match self {
            Self::Complete(map) => Some(map),
            Self::Incomplete { .. } => None,
        }
    }
}

/// Maps header texts to field positions.
///
/// `headers` must already be lower-cased and trimmed. Each header is tested
/// against the keywords of [`Field::ALL`] in order and is assigned to the
/// first field whose keyword it contains. A later header assigned to the
/// same field replaces the earlier position. Headers matching no keyword
/// are ignored.
#[must_use]
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> ColumnResolution {
    let mut slots: [Option<usize>; 4] = [None; 4];

    for (position, header) in headers.iter().enumerate() {
        let header = header.as_ref();
        let matched = Field::ALL
            .iter()
            .enumerate()
            .find(|(_, field)| header.contains(field.keyword()));

        if let Some((slot, field)) = matched {
            if let Some(previous) = slots[slot] {
                log::trace!("header {position} ({header:?}) replaces {previous} for {field}");
            } else {
                log::trace!("header {position} ({header:?}) -> {field}");
            }
            slots[slot] = Some(position);
        }
    }

    match slots {
        [Some(name), Some(title), Some(phone), Some(email)] => {
            ColumnResolution::Complete(ColumnMap {
                name,
                title,
                phone,
                email,
            })
        }
        _ => ColumnResolution::Incomplete {
            missing: Field::ALL
                .iter()
                .zip(slots)
                .filter(|(_, slot)| slot.is_none())
                .map(|(field, _)| *field)
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(headers: &[&str]) -> ColumnMap {
        *resolve_columns(headers)
            .complete()
            .expect("headers should resolve")
    }

    #[test]
    fn resolves_canonical_headers() {
        let map = complete(&["name", "title", "phone", "email address"]);
        assert_eq!(map.index(Field::Name), 0);
        assert_eq!(map.index(Field::Title), 1);
        assert_eq!(map.index(Field::Phone), 2);
        assert_eq!(map.index(Field::Email), 3);
    }

    #[test]
    fn resolves_any_column_order() {
        let map = complete(&["email", "phone number", "position title", "full name"]);
        assert_eq!(map.index(Field::Email), 0);
        assert_eq!(map.index(Field::Phone), 1);
        assert_eq!(map.index(Field::Title), 2);
        assert_eq!(map.index(Field::Name), 3);
    }

    #[test]
    fn ignores_unrelated_headers() {
        let map = complete(&["photo", "name", "title", "office", "phone", "email"]);
        assert_eq!(map.index(Field::Name), 1);
        assert_eq!(map.index(Field::Email), 5);
    }

    #[test]
    fn rejects_missing_email() {
        assert_eq!(
            resolve_columns(&["name", "title", "phone"]),
            ColumnResolution::Incomplete {
                missing: vec![Field::Email]
            }
        );
    }

    #[test]
    fn rejects_empty_header_row() {
        let headers: [&str; 0] = [];
        assert_eq!(
            resolve_columns(&headers),
            ColumnResolution::Incomplete {
                missing: Field::ALL.to_vec()
            }
        );
    }

    #[test]
    fn is_case_sensitive_on_prepared_input() {
        // Callers lower-case headers before resolving.
        assert!(resolve_columns(&["NAME", "TITLE", "PHONE", "EMAIL"])
            .complete()
            .is_none());
    }

    #[test]
    fn first_rule_wins_for_overlapping_header() {
        let map = complete(&["name/title", "title", "phone", "email"]);
        assert_eq!(map.index(Field::Name), 0);
        assert_eq!(map.index(Field::Title), 1);
    }

    #[test]
    fn overlapping_header_takes_its_first_rule_only() {
        // "name/title" is a name header, so no header is left for title.
        assert_eq!(
            resolve_columns(&["name", "name/title", "phone", "email"]),
            ColumnResolution::Incomplete {
                missing: vec![Field::Title]
            }
        );
    }

    #[test]
    fn last_header_for_a_field_wins() {
        let map = complete(&["first name", "last name", "title", "phone", "email"]);
        assert_eq!(map.index(Field::Name), 1);
        assert_eq!(map.index(Field::Title), 2);
        assert_eq!(map.index(Field::Phone), 3);
        assert_eq!(map.index(Field::Email), 4);
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        assert_eq!(
            resolve_columns(&["phone", "bio"]),
            ColumnResolution::Incomplete {
                missing: vec![Field::Name, Field::Title, Field::Email]
            }
        );
    }
}
