//! This module defines the intermediate representation used to build the
//! property search statement: a list of row-level conditions rendered, together
//! with the aggregate filter and the limit, into SQL text plus an ordered list
//! of positional parameters.
//!
//! Values never end up inside the SQL text, they are always referenced through
//! `$n` placeholders and must be bound by the executor in the order given by
//! [`Statement::params`].
mod filter;
pub use filter::*;

mod builder;
pub use builder::*;
