//! Read-only listing engine for races and events.
//!
//! A list call runs the same four stages for every entity kind:
//!
//! 1. start from the kind's fixed `SELECT` ([`EntityKind::BASE_QUERY`]);
//! 2. [`query::apply_filter`] appends `WHERE` predicates, with every
//!    caller-supplied value passed as a bound `?` parameter;
//! 3. [`query::apply_order`] appends `ORDER BY` only for allow-listed columns;
//! 4. [`mapper`] scans each row into the wire record and derives its status.
//!
//! [`ListingRepo`] wires the stages to a [`sqlx::SqlitePool`] and seeds its
//! table exactly once per process through [`EntityRepo::init`].

pub mod error;
pub mod kind;
pub mod mapper;
pub mod query;
pub mod repo;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use kind::{EntityKind, Events, Races};
pub use query::{GroupFilter, ListQuery, SafeColumn};
pub use repo::{DEFAULT_SEED_ROWS, EntityRepo, ListingRepo, connect, connect_memory};

pub use sqlx::SqlitePool;
