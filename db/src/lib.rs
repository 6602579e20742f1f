#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::env;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{
    self as diesel_r2d2, ConnectionManager, CustomizeConnection, Pool, PooledConnection,
};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn get_conn(pool: &DbPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

/// Builds a pool for the database named by `DATABASE_URL`.
pub fn new_pool() -> Result<DbPool, errors::Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| errors::Error::InternalServerError("DATABASE_URL must be set".into()))?;

    pool_from_url(&database_url)
}

/// Milliseconds a connection waits on a locked database before giving up.
const BUSY_TIMEOUT_MS: u32 = 5000;

/// Pragmas applied to every pooled connection. Writers wait on the file lock
/// for up to `busy_timeout_ms` instead of failing with SQLITE_BUSY.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel_r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel_r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;",
            self.busy_timeout_ms
        ))
        .map_err(diesel_r2d2::Error::QueryError)
    }
}

pub fn pool_from_url(database_url: &str) -> Result<DbPool, errors::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: BUSY_TIMEOUT_MS,
        }))
        .build(manager)?;

    Ok(pool)
}

/// Applies any embedded migrations the database has not seen yet.
pub fn run_migrations(pool: &DbPool) -> Result<(), errors::Error> {
    let mut pooled = get_conn(pool)?;
    let conn: &mut SqliteConnection = &mut pooled;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| errors::Error::MigrationError(err.to_string()))?;

    for version in &applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
