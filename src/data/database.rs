use crate::api::config::Config;
use diesel::result;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use once_cell::sync::OnceCell;

pub struct Database {
    pool: Option<&'static Pool<AsyncMysqlConnection>>,
}

impl Database {
    pub async fn new() -> Self {
        let pool = DB_POOL
            .get_or_try_init(create_pool)
            .map_err(|e| tracing::error!("Failed to create database connection pool: {}", e))
            .ok();

        Database { pool }
    }

    /// Checks out a pooled connection. Pool failures are reported as diesel
    /// errors so repositories only deal with one error type.
    pub async fn get_connection(&self) -> Result<Object<AsyncMysqlConnection>, result::Error> {
        let pool = self.pool.ok_or_else(|| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new("Database connection pool is not available".to_string()),
            )
        })?;

        pool.get().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }
}

/// Lazily initialized global database connection pool
static DB_POOL: OnceCell<Pool<AsyncMysqlConnection>> = OnceCell::new();

fn create_pool() -> Result<Pool<AsyncMysqlConnection>, String> {
    let config = Config::get().map_err(|e| e.to_string())?;

    let manager = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(&config.database_url);
    let pool = Pool::builder(manager).build().map_err(|e| e.to_string())?;

    tracing::info!("DB connection pool created");

    Ok(pool)
}

/// Id generated by the last INSERT on this connection.
pub async fn last_insert_id(conn: &mut AsyncMysqlConnection) -> Result<i32, result::Error> {
    use diesel_async::RunQueryDsl;

    use diesel::sql_types::{BigInt, Unsigned};

    let id: u64 = diesel::select(diesel::dsl::sql::<Unsigned<BigInt>>("LAST_INSERT_ID()"))
        .get_result(conn)
        .await?;

    i32::try_from(id).map_err(|_| {
        result::Error::DeserializationError(format!("insert id {} out of range", id).into())
    })
}
