//! Built-in sample content.
//!
//! Used by quick fights and the CLI when no data directory supplies its own
//! classes or equipment.

use arena_core::{
    CatalogError, Catalogs, Registry, ShieldTemplate, UnitClassTemplate, WeaponKind,
    WeaponTemplate,
};

pub const INTERCEPTOR: &str = "interceptor";
pub const DESTROYER: &str = "destroyer";
pub const RAILGUN_MK1: &str = "railgun_mk1";
pub const SHIELD_HEAVY: &str = "shield_heavy";

pub fn sample_classes() -> Result<Registry<UnitClassTemplate>, CatalogError> {
    let mut classes = Registry::new();
    classes.register(UnitClassTemplate::new(
        INTERCEPTOR,
        "Interceptor",
        40,
        25,
        1.1,
        1.0,
    ))?;
    classes.register(UnitClassTemplate::new(
        DESTROYER,
        "Destroyer",
        55,
        20,
        0.9,
        1.2,
    ))?;
    Ok(classes)
}

pub fn sample_weapons() -> Result<Registry<WeaponTemplate>, CatalogError> {
    let mut weapons = Registry::new();
    weapons.register(WeaponTemplate {
        slug: RAILGUN_MK1.into(),
        name: "Railgun Mk.I".into(),
        kind: WeaponKind::Railgun,
        dmg_min: 10,
        dmg_max: 10,
        energy_cost: 10,
        shield_ignore: 0.0,
        accuracy: 1.0,
    })?;
    Ok(weapons)
}

pub fn sample_shields() -> Result<Registry<ShieldTemplate>, CatalogError> {
    let mut shields = Registry::new();
    shields.register(ShieldTemplate {
        slug: SHIELD_HEAVY.into(),
        name: "Heavy Shield".into(),
        capacity: 30,
        efficiency: 1.0,
        regen: 3,
    })?;
    Ok(shields)
}

/// All built-in classes and equipment.
pub fn sample_catalogs() -> Result<Catalogs, CatalogError> {
    Ok(Catalogs {
        classes: sample_classes()?,
        weapons: sample_weapons()?,
        shields: sample_shields()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_class, validate_shield, validate_weapon};
    use arena_core::{CatalogProvider, Side, UnitLoadout};

    #[test]
    fn samples_are_valid() {
        let catalogs = sample_catalogs().unwrap();
        assert_eq!(catalogs.classes.len(), 2);
        for class in catalogs.classes.iter() {
            validate_class(class).unwrap();
        }
        for weapon in catalogs.weapons.iter() {
            validate_weapon(weapon).unwrap();
        }
        for shield in catalogs.shields.iter() {
            validate_shield(shield).unwrap();
        }
    }

    #[test]
    fn sample_loadout_builds_full_unit() {
        let catalogs = sample_catalogs().unwrap();
        let loadout = UnitLoadout::new("Omega", DESTROYER, RAILGUN_MK1, SHIELD_HEAVY);

        let unit = catalogs.build_unit(Side::Ai, &loadout).unwrap();

        assert_eq!(unit.hull(), 55);
        assert_eq!(unit.energy(), 20);
        assert_eq!(unit.shield_charge(), 30);
    }
}
