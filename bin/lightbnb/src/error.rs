use lightbnb_repo as repo;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("repository error :: {0}")]
    RepositoryError(#[from] repo::Error),
    #[error("serialization error :: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("io error :: {0}")]
    IoError(#[from] std::io::Error),
}
