//! Loaders that read arena content from files.
//!
//! Every loader offers `parse` for in-memory sources and `load` for a path;
//! failures carry the offending file or template in their message.

pub mod classes;
pub mod config;
pub mod equipment;
pub mod factory;

pub use classes::{ClassCatalog, ClassLoader};
pub use config::ConfigLoader;
pub use equipment::{Equipment, EquipmentLoader};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
