//! `ORDER BY` clause builder and the column allow-list check.

use std::fmt;

use paddock_types::ListOrder;
use tracing::debug;

/// A column name taken from an entity's allow-list.
///
/// The only way to obtain one is [`SafeColumn::lookup`], and the wrapped
/// text is the allow-list's own `'static` string, so a `SafeColumn` is always
/// fit to splice into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SafeColumn(&'static str);

impl SafeColumn {
    pub fn lookup(allow_list: &'static [&'static str], field: &str) -> Option<Self> {
        allow_list.iter().copied().find(|column| *column == field).map(SafeColumn)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SafeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Append `ORDER BY <column> <ASC|DESC>` when the requested field is on the
/// allow-list. Absent, empty and unknown fields leave `query` as it is.
pub fn apply_order(query: String, allow_list: &'static [&'static str], order: Option<&ListOrder>) -> String {
    let Some(order) = order else {
        return query;
    };

    match SafeColumn::lookup(allow_list, &order.field) {
        Some(column) => format!("{query} ORDER BY {column} {}", order.direction),
        None => {
            if !order.field.is_empty() {
                debug!(field = %order.field, "ignoring order on unknown column");
            }
            query
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use paddock_types::Direction;
    use tracing_test::traced_test;

    const RACE_COLUMNS: &[&str] =
        &["id", "meeting_id", "name", "number", "visible", "advertised_start_time"];

    fn order(field: &str, direction: Direction) -> ListOrder {
        ListOrder::new(field, direction)
    }

    #[test]
    fn absent_order_is_a_no_op() {
        assert_eq!(apply_order("SELECT * FROM races".into(), RACE_COLUMNS, None), "SELECT * FROM races");
    }

    #[test]
    fn empty_field_is_a_no_op() {
        let o = ListOrder::default();
        assert_eq!(apply_order("SELECT * FROM races".into(), RACE_COLUMNS, Some(&o)), "SELECT * FROM races");
    }

    #[test]
    fn orders_ascending() {
        let o = order("advertised_start_time", Direction::Asc);
        assert_eq!(
            apply_order("SELECT * FROM races".into(), RACE_COLUMNS, Some(&o)),
            "SELECT * FROM races ORDER BY advertised_start_time ASC"
        );
    }

    #[test]
    fn orders_descending() {
        let o = order("advertised_start_time", Direction::Desc);
        assert_eq!(
            apply_order("SELECT * FROM races".into(), RACE_COLUMNS, Some(&o)),
            "SELECT * FROM races ORDER BY advertised_start_time DESC"
        );
    }

    #[test]
    fn every_allowed_column_is_accepted() {
        for column in RACE_COLUMNS {
            let o = order(column, Direction::Asc);
            assert_eq!(
                apply_order("q".into(), RACE_COLUMNS, Some(&o)),
                format!("q ORDER BY {column} ASC")
            );
        }
    }

    #[test]
    #[traced_test]
    fn unknown_field_is_dropped_silently() {
        let o = order("invalid_field", Direction::Desc);
        assert_eq!(apply_order("SELECT * FROM events".into(), RACE_COLUMNS, Some(&o)), "SELECT * FROM events");
        assert!(logs_contain("ignoring order on unknown column"));
    }

    #[test]
    fn injection_attempts_are_dropped() {
        for field in [
            "name; DROP TABLE races",
            "id DESC, (SELECT 1)",
            "NAME",
            " name",
            "name ",
            "races.name",
        ] {
            let o = order(field, Direction::Asc);
            assert_eq!(apply_order("SELECT * FROM races".into(), RACE_COLUMNS, Some(&o)), "SELECT * FROM races");
        }
    }

    #[test]
    fn lookup_returns_the_allow_list_text() {
        let field = String::from("number");
        let column = SafeColumn::lookup(RACE_COLUMNS, &field).unwrap();
        assert_eq!(column.as_str(), "number");
        assert!(std::ptr::eq(column.as_str(), RACE_COLUMNS[3]));
        assert!(SafeColumn::lookup(RACE_COLUMNS, "").is_none());
    }
}
