//! Equipment catalog loader.
//!
//! Two JSON shapes are accepted:
//!
//! ```text
//! { "weapons": [ {...}, ... ], "shields": [ {...}, ... ] }
//! [ {weapon or shield}, ... ]
//! ```
//!
//! In the flat form an item is a weapon if it has `kind` or `dmg_min`, and a
//! shield if it has `capacity` or `efficiency`. Anything else is skipped.

use std::path::Path;

use anyhow::{Context, bail};
use arena_core::{Registry, ShieldTemplate, WeaponTemplate};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::loaders::{LoadResult, read_file};
use crate::validate::{validate_shield, validate_weapon};

/// Weapons and shields loaded from one equipment file.
#[derive(Clone, Debug, Default)]
pub struct Equipment {
    pub weapons: Registry<WeaponTemplate>,
    pub shields: Registry<ShieldTemplate>,
}

/// Loader for equipment catalogs from JSON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    pub fn parse(content: &str) -> LoadResult<Equipment> {
        let payload: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment JSON: {}", e))?;

        let (raw_weapons, raw_shields) = match payload {
            Value::Object(mut sections) => (
                take_section(&mut sections, "weapons")?,
                take_section(&mut sections, "shields")?,
            ),
            Value::Array(items) => classify(items),
            _ => bail!("equipment JSON must be an object or a list of objects"),
        };

        let mut equipment = Equipment::default();
        for raw in raw_weapons {
            let weapon: WeaponTemplate = decode("weapon", raw)?;
            validate_weapon(&weapon)?;
            equipment.weapons.register(weapon)?;
        }
        for raw in raw_shields {
            let shield: ShieldTemplate = decode("shield", raw)?;
            validate_shield(&shield)?;
            equipment.shields.register(shield)?;
        }

        tracing::debug!(
            weapons = equipment.weapons.len(),
            shields = equipment.shields.len(),
            "equipment loaded"
        );
        Ok(equipment)
    }

    pub fn load(path: &Path) -> LoadResult<Equipment> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }
}

/// Removes a section from the top-level object; a missing section is empty.
fn take_section(sections: &mut Map<String, Value>, name: &str) -> LoadResult<Vec<Value>> {
    match sections.remove(name) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) if items.iter().all(Value::is_object) => Ok(items),
        Some(_) => bail!("equipment section '{}' must be a list of objects", name),
    }
}

fn classify(items: Vec<Value>) -> (Vec<Value>, Vec<Value>) {
    let mut weapons = Vec::new();
    let mut shields = Vec::new();
    for item in items {
        let Some(fields) = item.as_object() else {
            continue;
        };
        let is_weapon = fields.contains_key("kind") || fields.contains_key("dmg_min");
        let is_shield = fields.contains_key("capacity") || fields.contains_key("efficiency");
        match (is_weapon, is_shield) {
            (true, true) => {
                weapons.push(item.clone());
                shields.push(item);
            }
            (true, false) => weapons.push(item),
            (false, true) => shields.push(item),
            (false, false) => {}
        }
    }
    (weapons, shields)
}

fn decode<T: DeserializeOwned>(kind: &str, raw: Value) -> LoadResult<T> {
    let slug = raw
        .get("slug")
        .and_then(Value::as_str)
        .unwrap_or("<no slug>")
        .to_owned();
    serde_json::from_value(raw).with_context(|| format!("invalid {} '{}'", kind, slug))
}
