//! List the content of a data directory.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::content;

/// List unit classes, weapons and shields
#[derive(Parser, Debug)]
pub struct Catalog {}

impl Catalog {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let (catalogs, _) = content::load(data_dir)?;

        println!("{}", style("Classes").bold());
        for class in catalogs.classes.iter() {
            println!(
                "  {:<14} {:<14} hull {:>3}  energy {:>3}  shield x{:.2}  attack x{:.2}",
                style(&class.slug).cyan(),
                class.name,
                class.hull_max,
                class.energy_max,
                class.shield_mod,
                class.attack_mod,
            );
        }

        println!("{}", style("Weapons").bold());
        for weapon in catalogs.weapons.iter() {
            println!(
                "  {:<14} {:<14} {:<8} dmg {:>2}-{:<2}  cost {:>2}  ignore {:.2}  acc {:.2}",
                style(&weapon.slug).cyan(),
                weapon.name,
                weapon.kind,
                weapon.dmg_min,
                weapon.dmg_max,
                weapon.energy_cost,
                weapon.shield_ignore,
                weapon.accuracy,
            );
        }

        println!("{}", style("Shields").bold());
        for shield in catalogs.shields.iter() {
            println!(
                "  {:<14} {:<14} capacity {:>3}  eff {:.2}  regen {:>2}",
                style(&shield.slug).cyan(),
                shield.name,
                shield.capacity,
                shield.efficiency,
                shield.regen,
            );
        }

        Ok(())
    }
}
