//! Error types for the accent-engine core.

use thiserror::Error;

/// Errors produced at the crate's parse and construction boundaries.
///
/// Resolution operations (matching, solving, selection) never return these:
/// they are total and degrade to `None` or an empty result on bad input.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string could not be parsed as `#rrggbb`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A token catalog could not be deserialized or failed validation.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A preset name was not recognized.
    #[error("unknown preset '{0}' (expected default, pastel, vibrant, dark, or high-contrast)")]
    UnknownPreset(String),
}
