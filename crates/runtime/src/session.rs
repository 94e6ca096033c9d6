//! One player's fight and everything that happens around it.
//!
//! A [`FightSession`] owns exactly one [`Arena`]. Every player command is
//! followed by the AI's replies until control returns to the player or the
//! fight ends, and a finished fight is folded into the session's stats once.

use arena_content::builtin;
use arena_core::{
    AiTurnReport, Arena, AttackOutcome, CatalogProvider, Catalogs, Difficulty, FightResult,
    Registry, Side, SkillAttack, Template, UnitLoadout,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::stats::SessionStats;

/// What the player's command did.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerMove {
    Attack(AttackOutcome),
    Pass,
    Skill(SkillAttack),
    /// The fight was over, it was not the player's turn, or the skill was on
    /// cooldown. Nothing changed.
    Ignored,
}

/// Result of one player command and the AI turns it triggered.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnSummary {
    pub player: PlayerMove,
    pub ai_turns: Vec<AiTurnReport>,
    pub result: Option<FightResult>,
}

pub struct FightSession {
    arena: Arena,
    catalogs: Catalogs,
    player_loadout: UnitLoadout,
    ai_loadout: UnitLoadout,
    difficulty: Difficulty,
    max_auto_ai_turns: usize,
    stats: SessionStats,
    recorded: bool,
}

impl FightSession {
    /// Builds both units from the catalogs and starts a fight.
    pub fn start(
        catalogs: &Catalogs,
        player_loadout: UnitLoadout,
        ai_loadout: UnitLoadout,
        difficulty: Difficulty,
        config: &RuntimeConfig,
    ) -> Result<Self> {
        let mut session = Self {
            arena: Arena::new(config.arena.clone()),
            catalogs: catalogs.clone(),
            player_loadout,
            ai_loadout,
            difficulty,
            max_auto_ai_turns: config.max_auto_ai_turns,
            stats: SessionStats::default(),
            recorded: false,
        };
        session.restart()?;
        Ok(session)
    }

    /// Starts the default matchup: an interceptor against a destroyer, both
    /// on the standard railgun and heavy shield (or the first available
    /// equipment when those are missing).
    pub fn quick_fight(catalogs: &Catalogs, config: &RuntimeConfig) -> Result<Self> {
        let (player, ai) = Self::default_loadouts(catalogs)?;
        Self::start(catalogs, player, ai, Difficulty::default(), config)
    }

    /// The player and AI loadouts used by [`quick_fight`](Self::quick_fight).
    pub fn default_loadouts(catalogs: &Catalogs) -> Result<(UnitLoadout, UnitLoadout)> {
        let weapon = preferred_slug(&catalogs.weapons, builtin::RAILGUN_MK1)?;
        let shield = preferred_slug(&catalogs.shields, builtin::SHIELD_HEAVY)?;
        Ok((
            UnitLoadout::new("Alpha", builtin::INTERCEPTOR, weapon.clone(), shield.clone()),
            UnitLoadout::new("Omega", builtin::DESTROYER, weapon, shield),
        ))
    }

    /// Starts a fresh fight with the same loadouts and difficulty.
    ///
    /// Session stats carry over.
    pub fn restart(&mut self) -> Result<()> {
        let player = self.catalogs.build_unit(Side::Player, &self.player_loadout)?;
        let ai = self.catalogs.build_unit(Side::Ai, &self.ai_loadout)?;
        self.arena.start(player, ai, self.difficulty);
        self.recorded = false;
        tracing::info!(
            player = %self.player_loadout.name,
            ai = %self.ai_loadout.name,
            difficulty = %self.difficulty,
            "session fight started"
        );
        Ok(())
    }

    pub fn player_attack(&mut self) -> Result<TurnSummary> {
        let player = if self.players_turn()? {
            PlayerMove::Attack(self.arena.attack()?)
        } else {
            PlayerMove::Ignored
        };
        self.follow_up(player)
    }

    pub fn player_pass(&mut self) -> Result<TurnSummary> {
        let player = if self.players_turn()? {
            self.arena.pass_turn()?;
            PlayerMove::Pass
        } else {
            PlayerMove::Ignored
        };
        self.follow_up(player)
    }

    /// Fires a skill-assisted shot. An unknown slug is an error even when the
    /// player cannot act.
    pub fn player_skill(&mut self, slug: &str) -> Result<TurnSummary> {
        let player = match self.arena.attack_with_player_skill(slug)? {
            Some(shot) => PlayerMove::Skill(shot),
            None => PlayerMove::Ignored,
        };
        self.follow_up(player)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_loadout(&self) -> &UnitLoadout {
        &self.player_loadout
    }

    pub fn ai_loadout(&self) -> &UnitLoadout {
        &self.ai_loadout
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Clears the session's record without touching the current fight.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Replaces the stats, e.g. with values restored by the host.
    pub fn set_stats(&mut self, stats: SessionStats) {
        self.stats = stats;
    }

    fn players_turn(&self) -> Result<bool> {
        Ok(!self.arena.is_finished()? && self.arena.turn() == Side::Player)
    }

    fn follow_up(&mut self, player: PlayerMove) -> Result<TurnSummary> {
        let ai_turns = self.run_ai()?;
        let result = self.record_result();
        Ok(TurnSummary {
            player,
            ai_turns,
            result,
        })
    }

    fn run_ai(&mut self) -> Result<Vec<AiTurnReport>> {
        let mut reports = Vec::new();
        for _ in 0..self.max_auto_ai_turns {
            if self.arena.is_finished()? || self.arena.turn() == Side::Player {
                break;
            }
            match self.arena.take_ai_turn()? {
                Some(report) => reports.push(report),
                None => break,
            }
        }
        Ok(reports)
    }

    fn record_result(&mut self) -> Option<FightResult> {
        let result = self.arena.result()?;
        if !self.recorded {
            self.stats.bump(result);
            self.recorded = true;
            tracing::info!(%result, fights = self.stats.fights, "fight recorded");
        }
        Some(result)
    }
}

impl std::fmt::Debug for FightSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FightSession")
            .field("player_loadout", &self.player_loadout)
            .field("ai_loadout", &self.ai_loadout)
            .field("difficulty", &self.difficulty)
            .field("stats", &self.stats)
            .field("result", &self.arena.result())
            .finish_non_exhaustive()
    }
}

/// `preferred` if the registry has it, else the first slug in it.
fn preferred_slug<T: Template>(registry: &Registry<T>, preferred: &str) -> Result<String> {
    if registry.contains(preferred) {
        return Ok(preferred.to_owned());
    }
    registry
        .slugs()
        .next()
        .map(str::to_owned)
        .ok_or(RuntimeError::EmptyCatalog { kind: T::KIND })
}
