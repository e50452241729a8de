//! Styleconf Library
//!
//! Configuration core for a source formatter and its plugins.
//!
//! Defines the formatting options record, loads it from the built-in
//! defaults, a config file, or the environment, validates it eagerly, and
//! holds it read-only for the lifetime of a formatting run. The formatting
//! engine and the import-sort and utility-class-sort plugins consume the
//! loaded options; they are not part of this crate.

pub mod config;
pub mod error;

pub use config::{ConfigManager, FormatOptions, OptionsStore, QuoteStyle, TrailingComma};
pub use error::ConfigError;

/// Common result type for the configuration core
pub type Result<T> = std::result::Result<T, ConfigError>;
