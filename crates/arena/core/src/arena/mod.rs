//! Turn orchestration for a single fight.
//!
//! [`Arena`] owns both units, the turn marker, the random source, the per-side
//! cooldowns and the combat log. Every mutating operation resolves at most one
//! shot, runs end-of-turn regeneration for both units, and hands the turn to
//! the other side unless the fight just ended.
//!
//! One `Arena` is one fight. It is not synchronised; hosts serving several
//! clients keep one instance per session behind their own lock.

mod log;

pub use log::CombatLog;

use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumString};

use crate::ai::{self, AiNode, AiTurn, AiTurnReport};
use crate::combat::{AttackContext, AttackOutcome, resolve_attack};
use crate::config::{ArenaConfig, Difficulty};
use crate::error::{CoreError, ErrorSeverity};
use crate::rng::{PcgRng, RandomSource};
use crate::skills::{CooldownTable, SkillError, SkillKind, SkillRegistry};
use crate::unit::{CombatUnit, Side, UnitView};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// An operation needed both units before `start()` installed them.
    #[error("fight has not started")]
    NotStarted,

    #[error("fight is already over")]
    FightFinished,

    #[error(transparent)]
    UnknownSkill(#[from] SkillError),
}

impl CoreError for ArenaError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotStarted => ErrorSeverity::Internal,
            Self::FightFinished => ErrorSeverity::Recoverable,
            Self::UnknownSkill(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "ARENA_NOT_STARTED",
            Self::FightFinished => "ARENA_FIGHT_FINISHED",
            Self::UnknownSkill(err) => err.error_code(),
        }
    }
}

/// How a finished fight ended, from the player's seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FightResult {
    Win,
    Loss,
    Draw,
}

/// Result of a player skill command that reached the shot.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillAttack {
    pub skill: SkillKind,
    /// False when the shot went out without the skill's effect (skill already
    /// spent this fight, or not enough energy to cast).
    pub applied: bool,
    pub outcome: AttackOutcome,
}

#[derive(Clone, Debug)]
pub(crate) struct Fighters {
    pub(crate) player: CombatUnit,
    pub(crate) ai: CombatUnit,
}

impl Fighters {
    pub(crate) fn get(&self, side: Side) -> &CombatUnit {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut CombatUnit {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// `(attacker, defender)` for the given attacking side.
    fn engage(&mut self, attacker: Side) -> (&mut CombatUnit, &mut CombatUnit) {
        match attacker {
            Side::Player => (&mut self.player, &mut self.ai),
            Side::Ai => (&mut self.ai, &mut self.player),
        }
    }

    fn is_finished(&self) -> bool {
        !self.player.is_alive() || !self.ai.is_alive()
    }
}

/// One fight between a player unit and an AI unit.
pub struct Arena {
    config: ArenaConfig,
    rng: Box<dyn RandomSource + Send>,
    skills: SkillRegistry,
    fighters: Option<Fighters>,
    turn: Side,
    difficulty: Difficulty,
    cooldowns: CooldownTable,
    log: CombatLog,
}

impl Arena {
    /// Creates an idle arena with a PCG source and the built-in skills.
    pub fn new(config: ArenaConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => PcgRng::seeded(seed),
            None => PcgRng::from_entropy(),
        };
        Self::with_rng(config, Box::new(rng))
    }

    /// Creates an idle arena drawing from a caller-supplied source.
    pub fn with_rng(config: ArenaConfig, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            config,
            rng,
            skills: SkillRegistry::standard(),
            fighters: None,
            turn: Side::Player,
            difficulty: Difficulty::default(),
            cooldowns: CooldownTable::new(),
            log: CombatLog::new(),
        }
    }

    // ===== lifecycle =====

    /// Installs both units and starts a fresh fight on the player's turn.
    ///
    /// Units are installed as given; their side tags are forced to match the
    /// seat they take. Any previous fight state is discarded.
    pub fn start(&mut self, mut player: CombatUnit, mut ai: CombatUnit, difficulty: Difficulty) {
        player.set_side(Side::Player);
        ai.set_side(Side::Ai);
        tracing::info!(
            player = player.name(),
            ai = ai.name(),
            %difficulty,
            "fight started"
        );

        self.fighters = Some(Fighters { player, ai });
        self.turn = Side::Player;
        self.difficulty = difficulty;
        self.cooldowns.clear();
        self.log.clear();
        self.rng.reseed(self.config.rng_seed);
        self.log.push("Fight started. Player's turn.");
    }

    /// Drops both units and returns to the idle state.
    pub fn reset(&mut self) {
        self.fighters = None;
        self.turn = Side::Player;
        self.cooldowns.clear();
        self.log.clear();
        self.rng.reseed(self.config.rng_seed);
        self.log.push("Fight reset");
        tracing::info!("fight reset");
    }

    // ===== commands =====

    /// The side to move fires its weapon.
    ///
    /// When the AI is attacking it first gets a small chance to cast a skill it
    /// has not used yet.
    pub fn attack(&mut self) -> Result<AttackOutcome, ArenaError> {
        self.ensure_running()?;
        let attacker = self.turn;

        let ctx = self.maybe_apply_ai_skill(attacker)?;
        let outcome = self.fire(attacker, ctx)?;
        self.snapshot("after-damage")?;
        self.end_turn()?;
        Ok(outcome)
    }

    /// The side to move skips its shot. Regeneration and the swap still happen.
    pub fn pass_turn(&mut self) -> Result<(), ArenaError> {
        self.ensure_running()?;
        self.log.push(format!("{}: pass", self.turn));
        tracing::debug!(side = %self.turn, "turn passed");
        self.snapshot("before-pass-regen")?;
        self.end_turn()
    }

    /// Player fires with a skill.
    ///
    /// Returns `Ok(None)` without acting when it is not the player's turn, the
    /// fight is over, or the skill is on cooldown. The cooldown is set and all
    /// cooldowns tick once whenever the shot is taken, even if the skill itself
    /// could not be applied.
    pub fn attack_with_player_skill(
        &mut self,
        slug: &str,
    ) -> Result<Option<SkillAttack>, ArenaError> {
        let skill = self.skills.create(slug)?;
        if self.is_finished()? || self.turn != Side::Player {
            return Ok(None);
        }
        if !self.cooldowns.is_ready(Side::Player, skill) {
            self.log.push(format!("Skill {slug} on cooldown"));
            tracing::warn!(
                skill = slug,
                remaining = self.cooldowns.remaining(Side::Player, skill),
                "skill requested on cooldown"
            );
            return Ok(None);
        }

        let (ctx, applied) = self.apply_skill(Side::Player, skill)?;
        let outcome = self.fire(Side::Player, ctx)?;
        self.snapshot("after-damage")?;
        self.end_turn()?;

        self.cooldowns.set(Side::Player, skill, SkillKind::COOLDOWN_TURNS);
        self.cooldowns.tick();

        Ok(Some(SkillAttack {
            skill,
            applied,
            outcome,
        }))
    }

    /// Runs the AI policy for one turn.
    ///
    /// Returns `Ok(None)` when it is not the AI's turn or the fight is over.
    /// Cooldowns tick exactly once per AI turn, whichever branch fired.
    pub fn take_ai_turn(&mut self) -> Result<Option<AiTurnReport>, ArenaError> {
        if self.is_finished()? || self.turn != Side::Ai {
            return Ok(None);
        }
        let difficulty = self.difficulty;

        let mut turn = AiTurn::new(self);
        ai::policy(difficulty).tick(&mut turn);
        let decision = turn.finish()?;

        self.cooldowns.tick();
        tracing::debug!(%difficulty, ?decision, "ai turn resolved");
        Ok(Some(AiTurnReport {
            difficulty,
            decision,
        }))
    }

    // ===== read access =====

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_started(&self) -> bool {
        self.fighters.is_some()
    }

    /// True once either hull has reached zero.
    pub fn is_finished(&self) -> Result<bool, ArenaError> {
        Ok(self.fighters()?.is_finished())
    }

    /// The outcome from the player's seat, once the fight is over.
    pub fn result(&self) -> Option<FightResult> {
        let fighters = self.fighters.as_ref()?;
        match (fighters.player.is_alive(), fighters.ai.is_alive()) {
            (true, true) => None,
            (true, false) => Some(FightResult::Win),
            (false, true) => Some(FightResult::Loss),
            (false, false) => Some(FightResult::Draw),
        }
    }

    pub fn unit(&self, side: Side) -> Result<&CombatUnit, ArenaError> {
        Ok(self.fighters()?.get(side))
    }

    pub fn player(&self) -> Result<&CombatUnit, ArenaError> {
        self.unit(Side::Player)
    }

    pub fn ai(&self) -> Result<&CombatUnit, ArenaError> {
        self.unit(Side::Ai)
    }

    /// Display copies of `(player, ai)`.
    pub fn views(&self) -> Result<(UnitView, UnitView), ArenaError> {
        let fighters = self.fighters()?;
        Ok((fighters.player.view(), fighters.ai.view()))
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn ui_log(&self) -> Vec<&str> {
        self.log.ui_entries().collect()
    }

    pub fn cooldowns(&self, side: Side) -> BTreeMap<SkillKind, u32> {
        self.cooldowns.snapshot(side)
    }

    pub fn skills(&self) -> &SkillRegistry {
        &self.skills
    }

    // ===== turn mechanics =====

    pub(crate) fn fighters(&self) -> Result<&Fighters, ArenaError> {
        self.fighters.as_ref().ok_or(ArenaError::NotStarted)
    }

    pub(crate) fn cooldown_table(&self) -> &CooldownTable {
        &self.cooldowns
    }

    fn ensure_running(&self) -> Result<(), ArenaError> {
        if self.is_finished()? {
            return Err(ArenaError::FightFinished);
        }
        Ok(())
    }

    /// Resolves one shot for `attacker` and applies it to both units.
    fn fire(&mut self, attacker: Side, ctx: AttackContext) -> Result<AttackOutcome, ArenaError> {
        let fighters = self.fighters.as_mut().ok_or(ArenaError::NotStarted)?;
        let (shooter, target) = fighters.engage(attacker);

        let outcome = resolve_attack(shooter, target, self.rng.as_mut(), &ctx);
        shooter.spend_energy(outcome.energy_spent);
        if outcome.hit {
            target.take_hit(outcome.shield_absorbed, outcome.hull_damage);
        }

        tracing::debug!(
            attacker = shooter.name(),
            hit = outcome.hit,
            roll = outcome.accuracy_roll,
            damage = outcome.damage_before_shield,
            absorbed = outcome.shield_absorbed,
            hull_damage = outcome.hull_damage,
            target_hull = target.hull(),
            "shot resolved"
        );
        self.log.push(format!("{}: {}", shooter.name(), outcome));
        Ok(outcome)
    }

    /// Regenerates both units, then swaps the turn unless the fight is over.
    fn end_turn(&mut self) -> Result<(), ArenaError> {
        let regen = self.config.energy_regen_per_turn;
        let fighters = self.fighters.as_mut().ok_or(ArenaError::NotStarted)?;
        for side in Side::BOTH {
            let unit = fighters.get_mut(side);
            unit.regen_energy(regen);
            unit.regen_shield();
            unit.clamp_state();
        }
        self.log.push(format!(
            "{} +{regen} energy, shields recharge",
            CombatLog::REGEN_MARKER
        ));
        self.snapshot("after-regen")?;

        if let Some(result) = self.result() {
            self.log.push(format!("Fight over: {result}"));
            tracing::info!(%result, "fight finished");
        } else {
            self.turn = self.turn.opponent();
            self.log.push(format!("Turn: {}", self.turn));
        }
        self.snapshot("after-swap")
    }

    fn snapshot(&mut self, label: &str) -> Result<(), ArenaError> {
        let fighters = self.fighters.as_ref().ok_or(ArenaError::NotStarted)?;
        self.log
            .snapshot(label, self.turn, &fighters.player, &fighters.ai);
        Ok(())
    }

    /// Casts `skill` for `side` if the once-per-fight flag and energy allow.
    ///
    /// Returns the context for the next shot and whether the skill took effect.
    fn apply_skill(
        &mut self,
        side: Side,
        skill: SkillKind,
    ) -> Result<(AttackContext, bool), ArenaError> {
        let fighters = self.fighters.as_mut().ok_or(ArenaError::NotStarted)?;
        let (user, target) = fighters.engage(side);

        if user.skill_used() {
            self.log.push(format!(
                "{side}: {} unavailable, skill already used this fight",
                skill.name()
            ));
            return Ok((AttackContext::default(), false));
        }
        if !skill.can_use(user.energy()) {
            self.log
                .push(format!("{side}: tried {}, not enough energy", skill.name()));
            return Ok((AttackContext::default(), false));
        }

        let result = skill.execute(user, target);
        if !result.success {
            self.log.push(format!("{side}: {}", result.description));
            return Ok((AttackContext::default(), false));
        }
        user.spend_energy(result.energy_spent);
        user.mark_skill_used();

        self.log.push(format!("{side}: uses {}", result.description));
        tracing::debug!(%side, skill = skill.slug(), energy = user.energy(), "skill cast");
        Ok((skill.attack_context(&self.config), true))
    }

    /// The AI's random pre-shot skill roll. Draws nothing for the player or
    /// once the AI has spent its skill.
    fn maybe_apply_ai_skill(&mut self, attacker: Side) -> Result<AttackContext, ArenaError> {
        if attacker != Side::Ai || self.fighters()?.ai.skill_used() {
            return Ok(AttackContext::default());
        }
        if self.rng.next_f64() >= self.config.effective_ai_skill_chance() {
            return Ok(AttackContext::default());
        }
        let skill = if self.rng.next_f64() < 0.5 {
            SkillKind::Overcharge
        } else {
            SkillKind::Emp
        };
        tracing::debug!(skill = skill.slug(), "ai opportunistic skill roll succeeded");
        Ok(self.apply_skill(Side::Ai, skill)?.0)
    }

    /// Heuristic AI skill shot: cast, fire with the skill's context, end the
    /// turn, and start the skill's cooldown.
    pub(crate) fn ai_skill_shot(&mut self, skill: SkillKind) -> Result<AttackOutcome, ArenaError> {
        self.ensure_running()?;
        let (ctx, _) = self.apply_skill(Side::Ai, skill)?;
        let outcome = self.fire(Side::Ai, ctx)?;
        self.snapshot("after-damage")?;
        self.end_turn()?;
        self.cooldowns.set(Side::Ai, skill, SkillKind::COOLDOWN_TURNS);
        Ok(outcome)
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("config", &self.config)
            .field("fighters", &self.fighters)
            .field("turn", &self.turn)
            .field("difficulty", &self.difficulty)
            .field("cooldowns", &self.cooldowns)
            .field("log_len", &self.log.len())
            .finish_non_exhaustive()
    }
}
