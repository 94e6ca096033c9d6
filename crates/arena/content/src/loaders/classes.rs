//! Unit class catalog loader.

use std::path::Path;

use anyhow::Context;
use arena_core::{Registry, UnitClassTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::validate::validate_class;

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<UnitClassTemplate>,
}

/// Loader for unit classes from RON files.
pub struct ClassLoader;

impl ClassLoader {
    pub fn parse(content: &str) -> LoadResult<Registry<UnitClassTemplate>> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        let mut registry = Registry::new();
        for class in catalog.classes {
            validate_class(&class)?;
            registry.register(class)?;
        }
        Ok(registry)
    }

    pub fn load(path: &Path) -> LoadResult<Registry<UnitClassTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::CatalogError;

    const CLASSES: &str = r#"
(
    classes: [
        (slug: "interceptor", name: "Interceptor", hull_max: 40, energy_max: 25, shield_mod: 1.1, attack_mod: 1.0),
        (slug: "destroyer", name: "Destroyer", hull_max: 55, energy_max: 20, shield_mod: 0.9, attack_mod: 1.2),
    ],
)
"#;

    #[test]
    fn loads_classes() {
        let classes = ClassLoader::parse(CLASSES).unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.get("destroyer").unwrap().hull_max, 55);
    }

    #[test]
    fn duplicate_class_is_rejected() {
        let doubled = r#"(classes: [
            (slug: "a", name: "A", hull_max: 1, energy_max: 1, shield_mod: 1.0, attack_mod: 1.0),
            (slug: "a", name: "B", hull_max: 2, energy_max: 2, shield_mod: 1.0, attack_mod: 1.0),
        ])"#;
        let err = ClassLoader::parse(doubled).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::AlreadyExists { .. })
        ));
    }
}
