#![deny(unsafe_code)]
//! Core types and operations for the accent-engine color resolution system.
//!
//! Resolves arbitrary input colors against a design-token catalog while
//! balancing perceptual closeness (OKLab distance), WCAG-style contrast
//! floors, and mutual hue separation. Provides color types (`Srgb`,
//! `OkLab`, `OkLch`), the `TokenCatalog` model, nearest-token matching,
//! the contrast-constrained lightness solver, hue-distant multi-selection,
//! key-background and soft-border derivation, tonal-scale contrast
//! boundaries, and the `Xorshift64` PRNG for replayable selections.
//!
//! Everything is pure and synchronous. Resolution operations are total:
//! malformed input degrades to `None` or an empty result, and errors are
//! reserved for the parse boundaries (`Srgb::from_hex`,
//! `TokenCatalog::from_json_str`, `Preset::from_str`).

pub mod boundary;
pub mod color;
pub mod contrast;
pub mod error;
pub mod matcher;
pub mod preset;
pub mod prng;
pub mod selector;
pub mod solver;
pub mod surface;
pub mod token;

pub use boundary::ContrastBoundaries;
pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::PaletteError;
pub use matcher::{MatchResult, TokenRef};
pub use preset::Preset;
pub use prng::Xorshift64;
pub use surface::KeyBackground;
pub use token::{Classification, Token, TokenCatalog};
