//! Combat rules and turn orchestration for one-on-one ship duels.
//!
//! `arena-core` owns the numeric heart of a fight: attack resolution with
//! shield absorption and bypass, end-of-turn regeneration, the once-per-fight
//! skill gate with per-side cooldowns, and the difficulty-gated AI policy.
//! All state mutation for a fight flows through [`arena::Arena`]; templates are
//! looked up through the registries in [`catalog`].
pub mod ai;
pub mod arena;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod error;
pub mod rng;
pub mod skills;
pub mod unit;

pub use ai::{AiDecision, AiTurnReport};
pub use arena::{Arena, ArenaError, CombatLog, FightResult, SkillAttack};
pub use catalog::{
    CatalogError, CatalogProvider, Catalogs, Registry, ShieldTemplate, Template,
    UnitClassTemplate, UnitLoadout, WeaponKind, WeaponTemplate,
};
pub use combat::{AttackContext, AttackOutcome, resolve_attack};
pub use config::{ArenaConfig, Difficulty};
pub use error::{CoreError, ErrorSeverity};
pub use rng::{PcgRng, RandomSource, ScriptedRng};
pub use skills::{CooldownTable, SkillError, SkillKind, SkillRegistry, SkillResult};
pub use unit::{CombatUnit, Side, UnitView};
