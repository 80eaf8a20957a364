//! Facades expose the operations of the data-access layer.
//!
//! Each operation is a single statement executed on the shared pool. Failures
//! are logged and handed back to the caller untouched, lookups that find no
//! row return `None`.
mod facade_user;
pub use facade_user::*;

mod facade_property;
pub use facade_property::*;

mod facade_reservation;
pub use facade_reservation::*;
