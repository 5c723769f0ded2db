//! Error types for the sorter engine

use std::io;
use thiserror::Error;

/// Sorter error type
#[derive(Error, Debug)]
pub enum SortError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Registry error: {0}")]
    Registry(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SortError>;
