//! SQLite-backed listing repository.
//!
//! [`EntityRepo`] is the interface the services talk to; [`ListingRepo`] is
//! the one implementation, generic over the entity kind. Swapping the store
//! means implementing [`EntityRepo`] for another type.

use std::future::Future;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use paddock_types::ListOrder;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::kind::EntityKind;
use crate::mapper;
use crate::query::ListQuery;
use crate::seed;

/// Default number of synthetic rows inserted by [`EntityRepo::init`].
pub const DEFAULT_SEED_ROWS: u32 = 100;

/// Open (or create) the SQLite database at `url`.
///
/// `url` is any sqlx SQLite URL, e.g. `"sqlite://racing.db"`.
pub async fn connect(url: &str, max_connections: u32) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// A private in-memory database behind a single pinned connection.
///
/// Every `:memory:` connection is its own database, so the pool must never
/// open a second one or recycle the first.
pub async fn connect_memory() -> StoreResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Read access to one entity kind.
pub trait EntityRepo<K: EntityKind>: Send + Sync + 'static {
    /// Create and seed the backing table. Runs once; later and concurrent
    /// callers receive the outcome of that single run.
    fn init(&self) -> impl Future<Output = StoreResult<()>> + Send;

    /// List records matching `filter`, sorted by `order` when its field is
    /// allow-listed.
    fn list(
        &self,
        filter: Option<&K::Filter>,
        order: Option<&ListOrder>,
    ) -> impl Future<Output = StoreResult<Vec<K::Record>>> + Send;

    /// Fetch one record by id. `Ok(None)` when it does not exist.
    fn get(&self, id: i64) -> impl Future<Output = StoreResult<Option<K::Record>>> + Send;
}

pub struct ListingRepo<K: EntityKind> {
    pool: SqlitePool,
    seed_rows: u32,
    init: OnceCell<Result<(), Arc<StoreError>>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: EntityKind> ListingRepo<K> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            seed_rows: DEFAULT_SEED_ROWS,
            init: OnceCell::new(),
            _kind: PhantomData,
        }
    }

    /// Number of rows to seed on [`EntityRepo::init`]; `0` only creates the
    /// table.
    pub fn with_seed_rows(mut self, rows: u32) -> Self {
        self.seed_rows = rows;
        self
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl<K: EntityKind> std::fmt::Debug for ListingRepo<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingRepo")
            .field("table", &K::TABLE)
            .field("seed_rows", &self.seed_rows)
            .field("initialised", &self.init.initialized())
            .finish()
    }
}

impl<K: EntityKind> EntityRepo<K> for ListingRepo<K> {
    async fn init(&self) -> StoreResult<()> {
        let outcome = self
            .init
            .get_or_init(|| async {
                info!(table = K::TABLE, rows = self.seed_rows, "initialising repository");
                seed::prepare::<K>(&self.pool, self.seed_rows)
                    .await
                    .map_err(Arc::new)
            })
            .await;
        outcome.clone().map_err(StoreError::Init)
    }

    async fn list(
        &self,
        filter: Option<&K::Filter>,
        order: Option<&ListOrder>,
    ) -> StoreResult<Vec<K::Record>> {
        let ListQuery { sql, args } = ListQuery::compose::<K>(filter, order);
        debug!(table = K::TABLE, %sql, ?args, "listing");

        let mut query = sqlx::query(&sql);
        for arg in &args {
            query = query.bind(*arg);
        }

        let records = mapper::map_rows::<K, _>(query.fetch(&self.pool)).await?;
        debug!(table = K::TABLE, count = records.len(), "listed");
        Ok(records)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<K::Record>> {
        let sql = format!("{} WHERE id = ?", K::BASE_QUERY);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        mapper::map_optional::<K>(row)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
