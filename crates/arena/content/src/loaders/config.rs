//! Arena configuration loader.

use std::path::Path;

use anyhow::Context;
use arena_core::ArenaConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ArenaConfig`] from TOML files.
///
/// Missing keys keep their defaults; the skill chance is clamped to `[0, 1]`.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn parse(content: &str) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena config TOML: {}", e))?;
        let chance = config.ai_skill_chance;
        Ok(config.with_ai_skill_chance(chance))
    }

    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("energy_regen_per_turn = 4\nrng_seed = 7\n").unwrap();
        assert_eq!(config.energy_regen_per_turn, 4);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.overcharge_damage_mult, 1.5);
    }

    #[test]
    fn skill_chance_is_clamped_on_load() {
        let config = ConfigLoader::parse("ai_skill_chance = 3.0").unwrap();
        assert_eq!(config.ai_skill_chance, 1.0);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("energy_regen_per_turn = \"lots\"").is_err());
    }
}
