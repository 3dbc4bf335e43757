mod error;

pub use error::Error;

/// Result type for the command line interface.
pub type Result<T> = std::result::Result<T, Error>;
