//! Loaded-Options Store
//!
//! Holds the validated formatting options for the lifetime of a run.

use super::FormatOptions;
use crate::error::ConfigError;
use crate::Result;
use std::sync::OnceLock;

/// One-way unloaded -> loaded cell for the active formatting options.
///
/// Constructed once at startup and passed by reference to every consumer.
/// Initialization is serialized by the cell; reads after load take no lock.
/// The first successful load wins; later loads return the stored value.
#[derive(Debug)]
pub struct OptionsStore {
    cell: OnceLock<FormatOptions>,
}

impl OptionsStore {
    /// Create an empty (unloaded) store
    pub fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Load the built-in default options
    pub fn load(&self) -> Result<&FormatOptions> {
        self.load_with(FormatOptions::default())
    }

    /// Load a prepared options value.
    ///
    /// Validation failures leave the store unloaded; no partial value is
    /// ever observable through [`get`](Self::get).
    pub fn load_with(&self, options: FormatOptions) -> Result<&FormatOptions> {
        options.validate()?;
        Ok(self.cell.get_or_init(|| options))
    }

    /// Get the loaded options
    pub fn get(&self) -> Result<&FormatOptions> {
        self.cell.get().ok_or(ConfigError::Uninitialized)
    }

    /// Whether a load has completed
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for OptionsStore {
    fn default() -> Self {
        Self::new()
    }
}
