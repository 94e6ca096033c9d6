//! Difficulty-gated AI policy.
//!
//! The policy is a small behavior tree ticked once per AI turn against an
//! [`AiTurn`] blackboard that borrows the arena:
//!
//! ```text
//! Selector
//! ├── Sequence: cannot fire            → pass
//! ├── Sequence: EMP ready & affordable
//! │             & player shield > T    → EMP shot
//! ├── Sequence: Overcharge ready & affordable
//! │             & player hull ≤ F·max  → Overcharge shot
//! └── attack (with its own random skill roll)
//! ```
//!
//! `T` and `F` come from [`Difficulty`]. A heuristic skill shot also spends
//! the AI's once-per-fight skill.

mod node;
mod policy;

pub use node::{Action, AiNode, Condition, Inverter, Selector, Sequence, Status};
pub use policy::policy;

use crate::arena::{Arena, ArenaError};
use crate::combat::AttackOutcome;
use crate::config::Difficulty;
use crate::skills::SkillKind;
use crate::unit::{CombatUnit, Side};

/// Which branch the AI took.
#[derive(Clone, Debug, PartialEq)]
pub enum AiDecision {
    /// Not enough energy to fire; the turn was passed.
    Passed,
    /// A heuristic skill shot.
    SkillShot {
        skill: SkillKind,
        outcome: AttackOutcome,
    },
    /// A regular `attack()`, including its opportunistic skill roll.
    Attack(AttackOutcome),
}

impl AiDecision {
    pub fn outcome(&self) -> Option<&AttackOutcome> {
        match self {
            Self::Passed => None,
            Self::SkillShot { outcome, .. } | Self::Attack(outcome) => Some(outcome),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AiTurnReport {
    pub difficulty: Difficulty,
    pub decision: AiDecision,
}

/// Blackboard for one AI turn.
pub struct AiTurn<'a> {
    arena: &'a mut Arena,
    decision: Option<AiDecision>,
    error: Option<ArenaError>,
}

impl<'a> AiTurn<'a> {
    pub(crate) fn new(arena: &'a mut Arena) -> Self {
        Self {
            arena,
            decision: None,
            error: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.arena.difficulty()
    }

    pub fn ai(&self) -> Option<&CombatUnit> {
        self.arena.ai().ok()
    }

    pub fn player(&self) -> Option<&CombatUnit> {
        self.arena.player().ok()
    }

    /// Skill is off cooldown, affordable, and the AI has not spent its skill.
    pub fn skill_available(&self, skill: SkillKind) -> bool {
        let Some(ai) = self.ai() else {
            return false;
        };
        self.arena.cooldown_table().is_ready(Side::Ai, skill)
            && ai.energy() >= skill.energy_cost()
            && !ai.skill_used()
    }

    pub fn pass(&mut self) -> Status {
        let result = self.arena.pass_turn();
        self.settle(result.map(|()| AiDecision::Passed))
    }

    pub fn skill_shot(&mut self, skill: SkillKind) -> Status {
        let result = self.arena.ai_skill_shot(skill);
        self.settle(result.map(|outcome| AiDecision::SkillShot { skill, outcome }))
    }

    pub fn attack(&mut self) -> Status {
        let result = self.arena.attack();
        self.settle(result.map(AiDecision::Attack))
    }

    fn settle(&mut self, result: Result<AiDecision, ArenaError>) -> Status {
        match result {
            Ok(decision) => {
                self.decision = Some(decision);
                Status::Success
            }
            Err(err) => {
                tracing::warn!(%err, "ai action failed");
                self.error = Some(err);
                Status::Failure
            }
        }
    }

    /// The decision taken, or the first error an action hit.
    pub(crate) fn finish(self) -> Result<AiDecision, ArenaError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.decision.ok_or(ArenaError::NotStarted)
    }
}
