use std::fmt;

/// Immutable result of one shot.
///
/// On a hit `shield_absorbed + hull_damage == damage_before_shield`. On a miss
/// or a refused shot every damage field is zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub hit: bool,
    /// Weapon cost once a shot is attempted, zero when the attacker could not fire.
    pub energy_spent: u32,
    pub accuracy_roll: f64,
    pub weapon_slug: String,
    pub raw_damage_roll: u32,
    pub damage_before_shield: u32,
    pub shield_absorbed: u32,
    pub hull_damage: u32,
    /// Trace of every computed quantity, for debug views.
    pub notes: Vec<String>,
}

impl AttackOutcome {
    pub const INSUFFICIENT_ENERGY: &'static str = "insufficient energy";

    /// The shot that never left the barrel.
    pub fn insufficient_energy(weapon_slug: impl Into<String>) -> Self {
        Self {
            hit: false,
            energy_spent: 0,
            accuracy_roll: 1.0,
            weapon_slug: weapon_slug.into(),
            raw_damage_roll: 0,
            damage_before_shield: 0,
            shield_absorbed: 0,
            hull_damage: 0,
            notes: vec![Self::INSUFFICIENT_ENERGY.to_owned()],
        }
    }

    pub(crate) fn miss(
        weapon_slug: impl Into<String>,
        energy_spent: u32,
        accuracy_roll: f64,
        notes: Vec<String>,
    ) -> Self {
        Self {
            hit: false,
            energy_spent,
            accuracy_roll,
            weapon_slug: weapon_slug.into(),
            raw_damage_roll: 0,
            damage_before_shield: 0,
            shield_absorbed: 0,
            hull_damage: 0,
            notes,
        }
    }

    /// True when the attacker lacked the energy to fire at all.
    pub fn was_refused(&self) -> bool {
        !self.hit && self.energy_spent == 0
    }
}

/// One-line summary used in the combat log, without the attacker's name.
impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.was_refused() {
            return f.write_str("not enough energy to fire");
        }
        if !self.hit {
            return write!(f, "miss (energy -{})", self.energy_spent);
        }
        write!(
            f,
            "hit (energy -{}), damage before shield {}, shield absorbed {}, hull {}",
            self.energy_spent, self.damage_before_shield, self.shield_absorbed, self.hull_damage
        )
    }
}
