#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Any failure reported by the database: connectivity, constraint
    /// violations, malformed statements or parameters.
    #[error("backend error :: {0}")]
    BackendError(#[from] sqlx::Error),
    #[error("bad configuration :: {0}")]
    BadConfig(String),
}

impl Error {
    pub fn bad_config(msg: impl Into<String>) -> Self {
        Self::BadConfig(msg.into())
    }

    /// Returns `true` if the store rejected the statement because of a unique
    /// constraint (e.g. an email already registered).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::BackendError(sqlx::Error::Database(err)) => err.is_unique_violation(),
            _ => false,
        }
    }

    /// Returns `true` if the statement referenced a missing row (e.g. an unknown owner).
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::BackendError(sqlx::Error::Database(err)) => err.is_foreign_key_violation(),
            _ => false,
        }
    }
}
