//! PostgreSQL connection pool.
//!
//! A deadpool-managed pool of diesel-async connections. Connections are
//! opened lazily, so building a pool never touches the network.

use diesel_async::pooled_connection::deadpool::Pool as DeadPool;
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::pg_tls::establish_tls_connection;
use super::util::to_diesel_error;

/// Diesel error type alias.
pub type DbError = diesel::result::Error;

/// Pooled PostgreSQL connection.
pub type PgConn = deadpool::managed::Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgPool {
    pool: DeadPool<AsyncPgConnection>,
    database_url: String,
    no_tls: bool,
}

impl PgPool {
    /// Create a new pool. TLS is used unless `no_tls` is set.
    pub fn new(database_url: &str, max_size: usize, no_tls: bool) -> Result<Self, DbError> {
        let mgr = if no_tls {
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url)
        } else {
            let mut manager_config = ManagerConfig::default();
            manager_config.custom_setup = Box::new(establish_tls_connection);
            AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_config(
                database_url,
                manager_config,
            )
        };
        let pool = DeadPool::builder(mgr)
            .max_size(max_size.max(1))
            .build()
            .map_err(to_diesel_error)?;
        Ok(Self {
            pool,
            database_url: database_url.to_string(),
            no_tls,
        })
    }

    /// Get a connection.
    pub async fn get(&self) -> Result<PgConn, DbError> {
        self.pool.get().await.map_err(to_diesel_error)
    }

    /// Round-trip a `SELECT 1`.
    pub async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.get().await?;
        diesel::sql_query("SELECT 1").execute(&mut conn).await?;
        Ok(())
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn no_tls(&self) -> bool {
        self.no_tls
    }
}
