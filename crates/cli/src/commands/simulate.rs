//! Headless fights for balance checks.

use std::path::Path;

use anyhow::Result;
use arena_core::{Difficulty, Side, SkillKind};
use arena_runtime::{FightSession, SessionStats};
use clap::Parser;
use console::style;

use crate::content;

/// Player commands allowed per fight before it is abandoned.
const MAX_COMMANDS: usize = 500;

/// Run headless fights and report the results
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Number of fights
    #[arg(long, default_value_t = 100)]
    pub fights: u32,

    /// AI difficulty: easy, normal or hard
    #[arg(
        long,
        default_value = "normal",
        ignore_case = true,
        value_parser = super::difficulty_parser()
    )]
    pub difficulty: Difficulty,

    /// Base seed; fight `i` uses `seed + i`
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Simulate {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let (catalogs, config) = content::load(data_dir)?;
        let difficulty = self.difficulty;
        let (player, ai) = FightSession::default_loadouts(&catalogs)?;

        let mut stats = SessionStats::default();
        let mut abandoned = 0u32;
        for i in 0..self.fights {
            let mut config = config.clone();
            if let Some(seed) = self.seed {
                config.arena.rng_seed = Some(seed.wrapping_add(u64::from(i)));
            }
            let mut session =
                FightSession::start(&catalogs, player.clone(), ai.clone(), difficulty, &config)?;

            match play_out(&mut session)? {
                Some(result) => stats.bump(result),
                None => abandoned += 1,
            }
        }

        println!(
            "{} {} fights, {} vs {} on {}",
            style("Simulated").bold(),
            self.fights,
            player.unit_class,
            ai.unit_class,
            difficulty
        );
        println!(
            "  wins {}  losses {}  draws {}  winrate {:.1}%",
            style(stats.wins).green(),
            style(stats.losses).red(),
            style(stats.draws).yellow(),
            stats.winrate() * 100.0
        );
        if abandoned > 0 {
            println!(
                "  {} fights hit the {} command limit",
                style(abandoned).yellow(),
                MAX_COMMANDS
            );
        }
        Ok(())
    }
}

/// Attacks every turn, firing Overcharge once as soon as the skill and the
/// shot after it are both affordable.
fn play_out(session: &mut FightSession) -> Result<Option<arena_core::FightResult>> {
    for _ in 0..MAX_COMMANDS {
        if let Some(result) = session.arena().result() {
            return Ok(Some(result));
        }
        let arena = session.arena();
        let player = arena.unit(Side::Player)?;
        let skill = SkillKind::Overcharge;
        let overcharge = !player.skill_used()
            && arena.cooldowns(Side::Player)[&skill] == 0
            && player.energy() >= skill.energy_cost() + player.weapon().energy_cost;

        if overcharge {
            session.player_skill(skill.slug())?;
        } else {
            session.player_attack()?;
        }
    }
    Ok(session.arena().result())
}
