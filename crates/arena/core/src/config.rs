//! Fight configuration and difficulty tiers.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Tunable parameters of a fight.
///
/// Every field has a default so partial configuration files load cleanly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Flat energy restored to both units at the end of every resolved turn.
    pub energy_regen_per_turn: u32,

    /// Seed applied on `start()`/`reset()`. `None` draws a fresh seed.
    pub rng_seed: Option<u64>,

    /// Chance in `[0, 1]` that the AI opportunistically casts a skill before
    /// a plain shot.
    pub ai_skill_chance: f64,

    /// Damage multiplier carried by an Overcharge shot.
    pub overcharge_damage_mult: f64,

    /// Multiplier on the defender's shield efficiency for an EMP shot.
    pub emp_shield_eff_factor: f64,

    /// Additional shield ignore for an EMP shot.
    pub emp_extra_ignore: f64,
}

impl ArenaConfig {
    pub const DEFAULT_ENERGY_REGEN_PER_TURN: u32 = 3;
    pub const DEFAULT_AI_SKILL_CHANCE: f64 = 0.10;
    pub const DEFAULT_OVERCHARGE_DAMAGE_MULT: f64 = 1.50;
    pub const DEFAULT_EMP_SHIELD_EFF_FACTOR: f64 = 0.50;
    pub const DEFAULT_EMP_EXTRA_IGNORE: f64 = 0.00;

    pub fn new() -> Self {
        Self {
            energy_regen_per_turn: Self::DEFAULT_ENERGY_REGEN_PER_TURN,
            rng_seed: None,
            ai_skill_chance: Self::DEFAULT_AI_SKILL_CHANCE,
            overcharge_damage_mult: Self::DEFAULT_OVERCHARGE_DAMAGE_MULT,
            emp_shield_eff_factor: Self::DEFAULT_EMP_SHIELD_EFF_FACTOR,
            emp_extra_ignore: Self::DEFAULT_EMP_EXTRA_IGNORE,
        }
    }

    #[must_use]
    pub fn with_energy_regen(mut self, per_turn: u32) -> Self {
        self.energy_regen_per_turn = per_turn;
        self
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Sets the opportunistic skill chance, clamped to `[0, 1]`.
    ///
    /// A NaN input falls back to the default chance.
    #[must_use]
    pub fn with_ai_skill_chance(mut self, chance: f64) -> Self {
        self.ai_skill_chance = if chance.is_nan() {
            Self::DEFAULT_AI_SKILL_CHANCE
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }

    #[must_use]
    pub fn with_overcharge_damage_mult(mut self, mult: f64) -> Self {
        self.overcharge_damage_mult = mult;
        self
    }

    #[must_use]
    pub fn with_emp(mut self, shield_eff_factor: f64, extra_ignore: f64) -> Self {
        self.emp_shield_eff_factor = shield_eff_factor;
        self.emp_extra_ignore = extra_ignore;
        self
    }

    /// The skill chance as used by the arena, re-clamped in case the value
    /// was deserialized directly.
    pub fn effective_ai_skill_chance(&self) -> f64 {
        if self.ai_skill_chance.is_nan() {
            return Self::DEFAULT_AI_SKILL_CHANCE;
        }
        self.ai_skill_chance.clamp(0.0, 1.0)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// AI difficulty tier.
///
/// Each tier sets how eagerly the AI reaches for EMP (against a charged
/// shield) and Overcharge (to finish a damaged opponent).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parses a difficulty name, mapping anything unrecognised to `Normal`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }

    /// EMP fires only while the defender's shield charge is strictly above this.
    pub const fn emp_shield_threshold(self) -> u32 {
        match self {
            Self::Easy => 15,
            Self::Normal => 8,
            Self::Hard => 1,
        }
    }

    /// Fraction of the defender's maximum hull at or below which Overcharge fires.
    pub const fn overcharge_hull_fraction(self) -> f64 {
        match self {
            Self::Easy => 0.25,
            Self::Normal => 0.35,
            Self::Hard => 0.45,
        }
    }

    /// Overcharge hull trigger for a concrete maximum, truncated to whole points.
    pub fn overcharge_hull_threshold(self, hull_max: u32) -> u32 {
        (self.overcharge_hull_fraction() * f64::from(hull_max)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ArenaConfig::default();
        assert_eq!(config.energy_regen_per_turn, 3);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.ai_skill_chance, 0.10);
        assert_eq!(config.overcharge_damage_mult, 1.5);
        assert_eq!(config.emp_shield_eff_factor, 0.5);
        assert_eq!(config.emp_extra_ignore, 0.0);
    }

    #[test]
    fn skill_chance_is_clamped() {
        assert_eq!(ArenaConfig::new().with_ai_skill_chance(2.5).ai_skill_chance, 1.0);
        assert_eq!(ArenaConfig::new().with_ai_skill_chance(-1.0).ai_skill_chance, 0.0);
        assert_eq!(
            ArenaConfig::new().with_ai_skill_chance(f64::NAN).ai_skill_chance,
            ArenaConfig::DEFAULT_AI_SKILL_CHANCE
        );
    }

    #[test]
    fn difficulty_parses_leniently() {
        assert_eq!(Difficulty::parse_lenient("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::parse_lenient(" easy "), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient("nightmare"), Difficulty::Normal);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn difficulty_thresholds() {
        assert_eq!(Difficulty::Easy.emp_shield_threshold(), 15);
        assert_eq!(Difficulty::Normal.emp_shield_threshold(), 8);
        assert_eq!(Difficulty::Hard.emp_shield_threshold(), 1);
        assert_eq!(Difficulty::Normal.overcharge_hull_threshold(40), 14);
        assert_eq!(Difficulty::Hard.overcharge_hull_threshold(55), 24);
        assert_eq!(Difficulty::Easy.overcharge_hull_threshold(50), 12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let config: ArenaConfig =
            serde_json::from_str(r#"{"energy_regen_per_turn": 5, "rng_seed": 11}"#).unwrap();
        assert_eq!(config.energy_regen_per_turn, 5);
        assert_eq!(config.rng_seed, Some(11));
        assert_eq!(config.ai_skill_chance, ArenaConfig::DEFAULT_AI_SKILL_CHANCE);

        let difficulty: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(difficulty, Difficulty::Hard);
    }
}
