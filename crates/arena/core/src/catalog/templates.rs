//! Immutable templates: unit classes, weapons and shields.

use strum::{AsRefStr, Display, EnumString};

/// Anything a [`Registry`](super::Registry) can hold.
pub trait Template {
    /// Catalog name used in error messages (`"weapon"`, `"shield"`, ...).
    const KIND: &'static str;

    fn slug(&self) -> &str;
}

/// Hull and energy pools plus the class-level combat modifiers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitClassTemplate {
    pub slug: String,
    pub name: String,
    pub hull_max: u32,
    pub energy_max: u32,
    /// Multiplies the efficiency of this unit's own shield when it is hit.
    pub shield_mod: f64,
    /// Multiplies outgoing damage.
    pub attack_mod: f64,
}

impl UnitClassTemplate {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        hull_max: u32,
        energy_max: u32,
        shield_mod: f64,
        attack_mod: f64,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            hull_max,
            energy_max,
            shield_mod,
            attack_mod,
        }
    }
}

impl Template for UnitClassTemplate {
    const KIND: &'static str = "unit class";

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeaponKind {
    Laser,
    Railgun,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponTemplate {
    pub slug: String,
    pub name: String,
    pub kind: WeaponKind,
    pub dmg_min: u32,
    pub dmg_max: u32,
    pub energy_cost: u32,
    /// Fraction of damage that bypasses the defender's shield entirely.
    pub shield_ignore: f64,
    /// Hit chance in `[0, 1]`; a roll at or below it hits.
    pub accuracy: f64,
}

impl Template for WeaponTemplate {
    const KIND: &'static str = "weapon";

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldTemplate {
    pub slug: String,
    pub name: String,
    pub capacity: u32,
    /// Fraction of non-ignored damage the shield can soak, subject to charge.
    pub efficiency: f64,
    /// Charge recovered at the end of every turn.
    pub regen: u32,
}

impl Template for ShieldTemplate {
    const KIND: &'static str = "shield";

    fn slug(&self) -> &str {
        &self.slug
    }
}
