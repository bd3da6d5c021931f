#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
