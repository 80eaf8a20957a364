pub mod core;
pub use self::core::{Config, Database, Repository};

#[cfg(any(test, feature = "testing"))]
pub use self::core::testing;

mod facades;
pub use facades::*;

mod error;
pub use error::Error;

// Private to module exports
mod sql_models;
use sql_models::*;
