//! Error and result types for the ormkv key codec crates.
//!
//! Two error families are kept apart:
//!
//! - [`Error`]: recoverable, value-specific failures raised by size, encode,
//!   and decode calls (`FieldTooLong`, `TruncatedInput`, ...). All fallible
//!   codec operations return [`Result<T>`].
//! - [`ContractViolation`]: a key shape that is assembled incorrectly. These
//!   surface once, when the key shape is built, never per value.

pub mod error;
pub mod result;

pub use error::{ContractViolation, Error};
pub use result::Result;
