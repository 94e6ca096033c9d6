//! Content factory for building catalogs from a data directory.

use std::path::{Path, PathBuf};

use arena_core::{ArenaConfig, Catalogs, Registry, UnitClassTemplate};

use crate::builtin;
use crate::loaders::{ClassLoader, ConfigLoader, Equipment, EquipmentLoader, LoadResult};

pub const EQUIPMENT_FILE: &str = "equipment.json";
pub const CLASSES_FILE: &str = "classes.ron";
pub const CONFIG_FILE: &str = "arena.toml";

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── equipment.json   (required)
/// ├── classes.ron      (optional, built-in classes otherwise)
/// └── arena.toml       (optional, default config otherwise)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load weapons and shields from `equipment.json`.
    pub fn load_equipment(&self) -> LoadResult<Equipment> {
        EquipmentLoader::load(&self.data_dir.join(EQUIPMENT_FILE))
    }

    /// Load unit classes from `classes.ron`, or the built-in classes when the
    /// file does not exist.
    pub fn load_classes(&self) -> LoadResult<Registry<UnitClassTemplate>> {
        let path = self.data_dir.join(CLASSES_FILE);
        if path.exists() {
            ClassLoader::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no class catalog, using built-in classes");
            Ok(builtin::sample_classes()?)
        }
    }

    /// Load every catalog the arena needs.
    pub fn load_catalogs(&self) -> LoadResult<Catalogs> {
        let Equipment { weapons, shields } = self.load_equipment()?;
        let classes = self.load_classes()?;
        tracing::info!(
            data_dir = %self.data_dir.display(),
            classes = classes.len(),
            weapons = weapons.len(),
            shields = shields.len(),
            "content loaded"
        );
        Ok(Catalogs {
            classes,
            weapons,
            shields,
        })
    }

    /// Load arena configuration from `arena.toml`, or the default config when
    /// the file does not exist.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join(CONFIG_FILE);
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(ArenaConfig::default())
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
