//! Data-driven arena content.
//!
//! This crate turns data files into `arena-core` registries and configuration:
//! - Equipment catalogs (weapons and shields, JSON)
//! - Unit classes (RON)
//! - Arena configuration (TOML)
//!
//! It also ships the built-in sample content used when no data directory is
//! available, and the validation rules every loaded template must satisfy.

pub mod builtin;
pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use validate::{ContentError, validate_class, validate_shield, validate_weapon};

#[cfg(feature = "loaders")]
pub use loaders::{
    ClassCatalog, ClassLoader, ConfigLoader, ContentFactory, Equipment, EquipmentLoader,
};
