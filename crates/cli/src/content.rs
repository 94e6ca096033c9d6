//! Content and configuration shared by every command.

use std::path::Path;

use anyhow::Result;
use arena_content::{ContentFactory, builtin, loaders::factory::EQUIPMENT_FILE};
use arena_core::Catalogs;
use arena_runtime::RuntimeConfig;

/// Catalogs and runtime config for a data directory.
///
/// A directory without an equipment file falls back to the built-in samples.
/// Environment overrides apply on top of `arena.toml`.
pub fn load(data_dir: &Path) -> Result<(Catalogs, RuntimeConfig)> {
    let factory = ContentFactory::new(data_dir);
    if !data_dir.join(EQUIPMENT_FILE).exists() {
        tracing::warn!(
            data_dir = %data_dir.display(),
            "no equipment file, using built-in content"
        );
        let config = RuntimeConfig::default().with_env();
        return Ok((builtin::sample_catalogs()?, config));
    }

    let catalogs = factory.load_catalogs()?;
    let config = RuntimeConfig::new(factory.load_config()?).with_env();
    Ok((catalogs, config))
}
