//! Row records and the statements reading or writing them.
//!
//! Every query accepts any [`sqlx::Executor`] bound to [`crate::Database`], so
//! the same function runs on the pool (a connection is borrowed for the single
//! statement) or on an already acquired connection.
mod user;
pub use user::*;

mod property;
pub use property::*;

mod reservation;
pub use reservation::*;
