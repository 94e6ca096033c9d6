/// Per-shot modifiers produced by a skill and consumed by exactly one attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackContext {
    /// Multiplies the rolled damage after the class attack modifier.
    pub damage_multiplier: f64,
    /// Added to the weapon's shield ignore before clamping to `[0, 1]`.
    pub extra_shield_ignore: f64,
    /// Multiplies the defender's effective shield efficiency.
    pub shield_efficiency_factor: f64,
}

impl AttackContext {
    pub const DEFAULT: Self = Self {
        damage_multiplier: 1.0,
        extra_shield_ignore: 0.0,
        shield_efficiency_factor: 1.0,
    };

    pub const fn new(
        damage_multiplier: f64,
        extra_shield_ignore: f64,
        shield_efficiency_factor: f64,
    ) -> Self {
        Self {
            damage_multiplier,
            extra_shield_ignore,
            shield_efficiency_factor,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for AttackContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}
