use crate::Error;
use lightbnb_core::params;
use log::{info, trace};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Database backend used by the repository
pub type Database = sqlx::Postgres;

const SUPPORTED_SCHEMES: [&str; 2] = ["postgres", "postgresql"];

/// Connection settings of the [`Repository`].
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: url::Url,
    /// Maximum number of connections kept by the pool
    pub max_connections: u32,
    /// Maximum time spent waiting for a free connection before failing
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn new(db_url: url::Url) -> Self {
        Self {
            db_url,
            max_connections: params::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(params::DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    pub fn try_from_str(db_url: &str) -> Result<Self, Error> {
        let url = url::Url::parse(db_url).map_err(|e| Error::bad_config(e.to_string()))?;
        Ok(Self::new(url))
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Returns the database url without credentials, suitable for logging.
    pub fn redacted_url(&self) -> String {
        let mut url = self.db_url.clone();
        // Fails only for urls that cannot carry credentials at all
        let _ = url.set_password(None);
        url.to_string()
    }

    fn validate(&self) -> Result<(), Error> {
        if !SUPPORTED_SCHEMES.contains(&self.db_url.scheme()) {
            return Err(Error::bad_config(format!(
                "unsupported database scheme `{}`",
                self.db_url.scheme()
            )));
        }

        if self.max_connections == 0 {
            return Err(Error::bad_config("max connections must be greater than zero"));
        }

        Ok(())
    }
}

/// Handle to the database connection pool.
///
/// The handle is cheap to clone, all clones share the same pool. Each query
/// borrows a connection from the pool and gives it back once completed,
/// whatever the outcome.
#[derive(Clone)]
pub struct Repository {
    pool: sqlx::Pool<Database>,
}

impl Repository {
    /// Opens the connection pool described by `config`.
    pub async fn try_new(config: &Config) -> Result<Self, Error> {
        config.validate()?;

        trace!(
            "opening pool with {} connections on `{}`",
            config.max_connections,
            config.redacted_url()
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(config.db_url.as_str())
            .await?;

        info!("connected to `{}`", config.redacted_url());

        Ok(Self { pool })
    }

    /// Wraps an already opened pool.
    pub fn from_pool(pool: sqlx::Pool<Database>) -> Self {
        Self { pool }
    }

    /// Returns the pool used as executor by the queries
    pub fn pool(&self) -> &sqlx::Pool<Database> {
        &self.pool
    }

    /// Closes the pool, waiting for checked out connections to be returned.
    /// Any operation issued after this call fails.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    /// Schema used by the database tests
    pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

    /// Repository built on top of the throwaway pool provided by `sqlx::test`.
    pub struct Repository(super::Repository);

    impl Repository {
        pub fn new(pool: sqlx::Pool<super::Database>) -> Self {
            Self(super::Repository::from_pool(pool))
        }
    }

    impl std::ops::Deref for Repository {
        type Target = super::Repository;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
}
