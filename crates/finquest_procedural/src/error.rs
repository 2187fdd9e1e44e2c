//! # Generation Error Types
//!
//! All errors that can occur while loading content or generating levels.
//!
//! An unknown world id is deliberately absent: it resolves to the default
//! world and is reported through `GeneratedLevel::used_fallback`.

use thiserror::Error;

/// Errors that can occur in content generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Level numbers start at 1.
    #[error("invalid level number {0}: levels start at 1")]
    InvalidLevelNumber(u32),

    /// A level id that does not have the `<world>_l<number>` shape.
    #[error("invalid level identifier: {0:?}")]
    InvalidLevelId(String),

    /// Selection from an empty pool.
    #[error("empty selection pool")]
    EmptyPool,

    /// Content tables failed to parse or validate.
    #[error("invalid content configuration: {0}")]
    InvalidConfig(String),

    /// Content file could not be read.
    #[error("could not read content file: {0}")]
    Io(String),
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
