//! Dynamic list-query construction.
//!
//! Only two things are ever interpolated into SQL text: fixed fragments
//! owned by an [`EntityKind`](crate::EntityKind), and column names that have
//! passed [`SafeColumn::lookup`]. Filter values always travel as bound
//! parameters.

mod filter;
mod order;

pub use filter::{GroupFilter, apply_filter};
pub use order::{SafeColumn, apply_order};

use paddock_types::ListOrder;

use crate::kind::EntityKind;

/// A composed statement and its positional parameters, in `?` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sql: String,
    pub args: Vec<i64>,
}

impl ListQuery {
    /// Build the list statement for `K`: base template, then filter, then
    /// order.
    pub fn compose<K: EntityKind>(filter: Option<&K::Filter>, order: Option<&ListOrder>) -> Self {
        let (sql, args) = apply_filter(K::BASE_QUERY, K::GROUP_COLUMN, filter);
        let sql = apply_order(sql, K::COLUMNS, order);
        Self { sql, args }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
