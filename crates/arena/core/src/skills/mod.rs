//! Skills and cooldowns.
//!
//! A skill is a row in a small strategy table ([`SkillKind`]): a fixed energy
//! cost, a usability check, and an effect description. The arena translates a
//! successful use into an [`AttackContext`] for the next shot. Two independent
//! gates apply: the per-side cooldown counters in [`CooldownTable`] and the
//! once-per-fight flag on the unit.

mod cooldown;

pub use cooldown::CooldownTable;

use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::combat::AttackContext;
use crate::config::ArenaConfig;
use crate::error::{CoreError, ErrorSeverity};
use crate::unit::CombatUnit;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillKind {
    /// Amplifies the next shot's damage.
    Overcharge,
    /// Suppresses the target's shield for the next shot.
    Emp,
}

impl SkillKind {
    /// Turns a skill stays unavailable after use, before the same-turn tick.
    pub const COOLDOWN_TURNS: u32 = 2;

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Overcharge => "overcharge",
            Self::Emp => "emp",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Overcharge => "Overcharge",
            Self::Emp => "EMP",
        }
    }

    pub const fn energy_cost(self) -> u32 {
        match self {
            Self::Overcharge => 20,
            Self::Emp => 25,
        }
    }

    pub const fn can_use(self, energy: u32) -> bool {
        energy >= self.energy_cost()
    }

    /// Checks the user's energy and describes the effect. Spends nothing.
    pub fn execute(self, user: &CombatUnit, _target: &CombatUnit) -> SkillResult {
        if !self.can_use(user.energy()) {
            return SkillResult {
                success: false,
                energy_spent: 0,
                description: format!("{}: not enough energy", self.name()),
            };
        }
        let description = match self {
            Self::Overcharge => "Overcharge: next shot amplified",
            Self::Emp => "EMP: target shields suppressed",
        };
        SkillResult {
            success: true,
            energy_spent: self.energy_cost(),
            description: description.to_owned(),
        }
    }

    /// Shot modifiers granted by a successful use.
    pub fn attack_context(self, config: &ArenaConfig) -> AttackContext {
        match self {
            Self::Overcharge => AttackContext::new(config.overcharge_damage_mult, 0.0, 1.0),
            Self::Emp => {
                AttackContext::new(1.0, config.emp_extra_ignore, config.emp_shield_eff_factor)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillResult {
    pub success: bool,
    pub energy_spent: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("skill '{slug}' not found")]
    NotFound { slug: String },

    #[error("skill '{slug}' is already registered")]
    AlreadyExists { slug: String },
}

impl CoreError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Validation,
            Self::AlreadyExists { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "SKILL_NOT_FOUND",
            Self::AlreadyExists { .. } => "SKILL_ALREADY_EXISTS",
        }
    }
}

/// Slug to skill lookup.
#[derive(Clone, Debug, Default)]
pub struct SkillRegistry {
    skills: BTreeMap<String, SkillKind>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in skill under its own slug.
    pub fn standard() -> Self {
        let skills = SkillKind::iter()
            .map(|kind| (kind.slug().to_owned(), kind))
            .collect();
        Self { skills }
    }

    pub fn register(&mut self, slug: impl Into<String>, kind: SkillKind) -> Result<(), SkillError> {
        let slug = slug.into();
        if self.skills.contains_key(&slug) {
            return Err(SkillError::AlreadyExists { slug });
        }
        self.skills.insert(slug, kind);
        Ok(())
    }

    pub fn create(&self, slug: &str) -> Result<SkillKind, SkillError> {
        self.skills
            .get(slug)
            .copied()
            .ok_or_else(|| SkillError::NotFound {
                slug: slug.to_owned(),
            })
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.skills.contains_key(slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(SkillKind::Overcharge.slug(), "overcharge");
        assert_eq!(SkillKind::Emp.slug(), "emp");
        assert_eq!(SkillKind::Emp.name(), "EMP");
        assert_eq!(SkillKind::Overcharge.energy_cost(), 20);
        assert_eq!(SkillKind::Emp.energy_cost(), 25);
        assert!(SkillKind::Emp.can_use(25));
        assert!(!SkillKind::Emp.can_use(24));
    }

    #[test]
    fn contexts_follow_config() {
        let config = ArenaConfig::default().with_overcharge_damage_mult(2.0).with_emp(0.25, 0.1);
        assert_eq!(
            SkillKind::Overcharge.attack_context(&config),
            AttackContext::new(2.0, 0.0, 1.0)
        );
        assert_eq!(
            SkillKind::Emp.attack_context(&config),
            AttackContext::new(1.0, 0.1, 0.25)
        );
    }

    #[test]
    fn registry_rejects_duplicates_and_unknowns() {
        let mut registry = SkillRegistry::standard();
        assert!(registry.contains("overcharge"));
        assert_eq!(registry.create("emp"), Ok(SkillKind::Emp));
        assert_eq!(
            registry.register("emp", SkillKind::Emp),
            Err(SkillError::AlreadyExists { slug: "emp".into() })
        );
        assert!(matches!(
            registry.create("warp"),
            Err(SkillError::NotFound { .. })
        ));
    }
}
