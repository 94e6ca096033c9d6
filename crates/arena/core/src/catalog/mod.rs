//! Template registries keyed by slug.
//!
//! Registries are explicit objects built once at startup (usually by
//! `arena-content`) and handed to whoever needs lookups. They are append-only:
//! a slug collision is a data bug and fails registration.

mod templates;

pub use templates::{ShieldTemplate, Template, UnitClassTemplate, WeaponKind, WeaponTemplate};

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{CoreError, ErrorSeverity};
use crate::unit::{CombatUnit, Side};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} '{slug}' not found")]
    NotFound { kind: &'static str, slug: String },

    #[error("{kind} '{slug}' is already registered")]
    AlreadyExists { kind: &'static str, slug: String },

    /// Slugs must be non-empty, lowercase and free of whitespace.
    #[error("invalid {kind} slug '{slug}'")]
    InvalidSlug { kind: &'static str, slug: String },
}

impl CoreError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } | Self::InvalidSlug { .. } => ErrorSeverity::Validation,
            Self::AlreadyExists { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "CATALOG_NOT_FOUND",
            Self::AlreadyExists { .. } => "CATALOG_ALREADY_EXISTS",
            Self::InvalidSlug { .. } => "CATALOG_INVALID_SLUG",
        }
    }
}

/// Returns true if `slug` is usable as a registry key.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.chars().any(char::is_whitespace)
        && !slug.chars().any(char::is_uppercase)
}

/// Append-only lookup table of shared templates.
#[derive(Debug)]
pub struct Registry<T> {
    entries: BTreeMap<String, Arc<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: Template> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template under its own slug.
    pub fn register(&mut self, template: T) -> Result<Arc<T>, CatalogError> {
        let slug = template.slug().to_owned();
        if !is_valid_slug(&slug) {
            return Err(CatalogError::InvalidSlug { kind: T::KIND, slug });
        }
        if self.entries.contains_key(&slug) {
            return Err(CatalogError::AlreadyExists { kind: T::KIND, slug });
        }
        let template = Arc::new(template);
        self.entries.insert(slug, Arc::clone(&template));
        Ok(template)
    }

    pub fn get(&self, slug: &str) -> Result<Arc<T>, CatalogError> {
        self.entries
            .get(slug)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                kind: T::KIND,
                slug: slug.to_owned(),
            })
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Templates in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.values()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Names the class and equipment a unit is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitLoadout {
    pub name: String,
    pub unit_class: String,
    pub weapon: String,
    pub shield: String,
}

impl UnitLoadout {
    pub fn new(
        name: impl Into<String>,
        unit_class: impl Into<String>,
        weapon: impl Into<String>,
        shield: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_class: unit_class.into(),
            weapon: weapon.into(),
            shield: shield.into(),
        }
    }
}

/// Template lookups the arena's callers depend on.
pub trait CatalogProvider {
    fn unit_class(&self, slug: &str) -> Result<Arc<UnitClassTemplate>, CatalogError>;

    fn weapon(&self, slug: &str) -> Result<Arc<WeaponTemplate>, CatalogError>;

    fn shield(&self, slug: &str) -> Result<Arc<ShieldTemplate>, CatalogError>;

    /// Builds a unit at full hull, energy and shield charge.
    fn build_unit(&self, side: Side, loadout: &UnitLoadout) -> Result<CombatUnit, CatalogError> {
        Ok(CombatUnit::new(
            loadout.name.clone(),
            side,
            self.unit_class(&loadout.unit_class)?,
            self.weapon(&loadout.weapon)?,
            self.shield(&loadout.shield)?,
        ))
    }
}

/// The three template registries bundled together.
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    pub classes: Registry<UnitClassTemplate>,
    pub weapons: Registry<WeaponTemplate>,
    pub shields: Registry<ShieldTemplate>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogProvider for Catalogs {
    fn unit_class(&self, slug: &str) -> Result<Arc<UnitClassTemplate>, CatalogError> {
        self.classes.get(slug)
    }

    fn weapon(&self, slug: &str) -> Result<Arc<WeaponTemplate>, CatalogError> {
        self.weapons.get(slug)
    }

    fn shield(&self, slug: &str) -> Result<Arc<ShieldTemplate>, CatalogError> {
        self.shields.get(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shield(slug: &str) -> ShieldTemplate {
        ShieldTemplate {
            slug: slug.into(),
            name: "Test".into(),
            capacity: 10,
            efficiency: 0.5,
            regen: 1,
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = Registry::new();
        registry.register(shield("shield_b")).unwrap();
        registry.register(shield("shield_a")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("shield_a").unwrap().capacity, 10);
        assert_eq!(
            registry.slugs().collect::<Vec<_>>(),
            vec!["shield_a", "shield_b"]
        );
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let mut registry = Registry::new();
        registry.register(shield("shield_a")).unwrap();
        let err = registry.register(shield("shield_a")).unwrap_err();
        assert_eq!(
            err,
            CatalogError::AlreadyExists {
                kind: "shield",
                slug: "shield_a".into()
            }
        );
        assert_eq!(err.error_code(), "CATALOG_ALREADY_EXISTS");
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let registry: Registry<ShieldTemplate> = Registry::new();
        let err = registry.get("nope").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { kind: "shield", .. }));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn slugs_must_be_lowercase_without_spaces() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register(shield("Shield")),
            Err(CatalogError::InvalidSlug { .. })
        ));
        assert!(matches!(
            registry.register(shield("big shield")),
            Err(CatalogError::InvalidSlug { .. })
        ));
        assert!(matches!(
            registry.register(shield("")),
            Err(CatalogError::InvalidSlug { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn build_unit_reports_missing_parts() {
        let mut catalogs = Catalogs::new();
        catalogs
            .classes
            .register(UnitClassTemplate::new("scout", "Scout", 30, 20, 1.0, 1.0))
            .unwrap();
        catalogs.shields.register(shield("shield_a")).unwrap();

        let loadout = UnitLoadout::new("Alpha", "scout", "missing_gun", "shield_a");
        let err = catalogs.build_unit(Side::Player, &loadout).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { kind: "weapon", .. }));
    }
}
