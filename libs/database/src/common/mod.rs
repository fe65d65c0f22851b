//! Common utilities shared across the database crate

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
