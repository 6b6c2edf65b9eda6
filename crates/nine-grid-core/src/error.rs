//! Error types for Nine Grid.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// The number of columns must be at least one.
    #[error("span count must be at least 1, got {0}")]
    InvalidSpanCount(usize),

    /// The display cap must be at least one.
    #[error("max count must be at least 1, got {0}")]
    InvalidMaxCount(usize),

    /// The spacing between cells must be finite and non-negative.
    #[error("item margin must be finite and non-negative, got {0}")]
    InvalidItemMargin(f32),

    /// The display scale factor must be finite and positive.
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScaleFactor(f32),

    /// A configuration document could not be parsed.
    #[error("failed to parse grid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration could not be serialized.
    #[error("failed to serialize grid configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
