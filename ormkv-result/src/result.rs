use crate::error::Error;

/// Result type alias used throughout ormkv.
pub type Result<T> = std::result::Result<T, Error>;
