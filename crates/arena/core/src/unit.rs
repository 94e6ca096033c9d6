//! Combat units: immutable templates plus live resource state.

use std::fmt;
use std::sync::Arc;

use strum::{AsRefStr, Display, EnumString};

use crate::catalog::{ShieldTemplate, UnitClassTemplate, WeaponTemplate};

/// Which seat a unit occupies. Doubles as the controller tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player, Side::Ai];

    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

/// A ship in a fight.
///
/// Resource invariants hold after every public method:
/// `hull <= hull_max`, `energy <= energy_max`, `shield_charge <= capacity`.
/// Hull only ever goes down during a fight.
#[derive(Clone, Debug)]
pub struct CombatUnit {
    name: String,
    side: Side,
    class: Arc<UnitClassTemplate>,
    weapon: Arc<WeaponTemplate>,
    shield: Arc<ShieldTemplate>,
    hull: u32,
    energy: u32,
    shield_charge: u32,
    skill_used: bool,
}

impl CombatUnit {
    /// Creates a unit at full hull, energy and shield charge.
    pub fn new(
        name: impl Into<String>,
        side: Side,
        class: Arc<UnitClassTemplate>,
        weapon: Arc<WeaponTemplate>,
        shield: Arc<ShieldTemplate>,
    ) -> Self {
        Self {
            name: name.into(),
            side,
            hull: class.hull_max,
            energy: class.energy_max,
            shield_charge: shield.capacity,
            class,
            weapon,
            shield,
            skill_used: false,
        }
    }

    /// Overrides the current hull, clamped to `hull_max`.
    #[must_use]
    pub fn with_hull(mut self, hull: u32) -> Self {
        self.hull = hull.min(self.class.hull_max);
        self
    }

    /// Overrides the current energy, clamped to `energy_max`.
    #[must_use]
    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = energy.min(self.class.energy_max);
        self
    }

    /// Overrides the current shield charge, clamped to capacity.
    #[must_use]
    pub fn with_shield_charge(mut self, charge: u32) -> Self {
        self.shield_charge = charge.min(self.shield.capacity);
        self
    }

    pub(crate) fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn class(&self) -> &UnitClassTemplate {
        &self.class
    }

    pub fn weapon(&self) -> &WeaponTemplate {
        &self.weapon
    }

    pub fn shield(&self) -> &ShieldTemplate {
        &self.shield
    }

    pub fn hull(&self) -> u32 {
        self.hull
    }

    pub fn hull_max(&self) -> u32 {
        self.class.hull_max
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn energy_max(&self) -> u32 {
        self.class.energy_max
    }

    pub fn shield_charge(&self) -> u32 {
        self.shield_charge
    }

    pub fn skill_used(&self) -> bool {
        self.skill_used
    }

    pub fn is_alive(&self) -> bool {
        self.hull > 0
    }

    pub fn can_fire(&self) -> bool {
        self.energy >= self.weapon.energy_cost
    }

    pub fn spend_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_sub(amount);
    }

    pub fn regen_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_add(amount).min(self.class.energy_max);
    }

    pub fn regen_shield(&mut self) {
        self.shield_charge = self
            .shield_charge
            .saturating_add(self.shield.regen)
            .min(self.shield.capacity);
    }

    /// Pulls every resource back into range. Never raises hull.
    pub fn clamp_state(&mut self) {
        self.hull = self.hull.min(self.class.hull_max);
        self.energy = self.energy.min(self.class.energy_max);
        self.shield_charge = self.shield_charge.min(self.shield.capacity);
    }

    /// Applies a resolved hit: charge first, then hull, each floored at zero.
    pub fn take_hit(&mut self, shield_absorbed: u32, hull_damage: u32) {
        self.shield_charge = self.shield_charge.saturating_sub(shield_absorbed);
        self.hull = self.hull.saturating_sub(hull_damage);
    }

    pub fn mark_skill_used(&mut self) {
        self.skill_used = true;
    }

    pub fn view(&self) -> UnitView {
        UnitView {
            name: self.name.clone(),
            side: self.side,
            class_name: self.class.name.clone(),
            weapon_name: self.weapon.name.clone(),
            shield_name: self.shield.name.clone(),
            hull: self.hull,
            hull_max: self.class.hull_max,
            energy: self.energy,
            energy_max: self.class.energy_max,
            shield_charge: self.shield_charge,
            shield_capacity: self.shield.capacity,
            skill_used: self.skill_used,
        }
    }
}

/// Compact resource line used by diagnostic snapshots.
impl fmt::Display for CombatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hull={}/{}, sh={}/{}, en={}/{}",
            self.hull,
            self.class.hull_max,
            self.shield_charge,
            self.shield.capacity,
            self.energy,
            self.class.energy_max
        )
    }
}

/// Read-only copy of a unit's display state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitView {
    pub name: String,
    pub side: Side,
    pub class_name: String,
    pub weapon_name: String,
    pub shield_name: String,
    pub hull: u32,
    pub hull_max: u32,
    pub energy: u32,
    pub energy_max: u32,
    pub shield_charge: u32,
    pub shield_capacity: u32,
    pub skill_used: bool,
}
