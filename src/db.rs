use crate::error_handler::CustomError;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type Pool = diesel::r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = diesel::r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Writers wait on SQLite's internal lock instead of failing with SQLITE_BUSY.
#[derive(Debug)]
struct BusyTimeout;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for BusyTimeout {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn init(database_url: &str) -> Pool {
    // Every pooled connection to ":memory:" is a distinct database, so tests
    // must see exactly one connection.
    let pool_size = match cfg!(test) {
        true => 1,
        false => 10,
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = diesel::r2d2::Pool::builder()
        .max_size(pool_size)
        .connection_customizer(Box::new(BusyTimeout))
        .build(manager)
        .expect("Failed to create db pool");

    let mut conn = pool.get().expect("Failed to get db connection from pool");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    pool
}

pub fn connection(pool: &Pool) -> Result<DbConnection, CustomError> {
    pool.get()
        .map_err(|e| CustomError::new(500, format!("Failed getting db connection: {}", e)))
}
