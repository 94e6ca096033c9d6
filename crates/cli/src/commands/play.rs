//! Interactive fight on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use arena_core::{Difficulty, FightResult, SkillKind, UnitLoadout};
use arena_runtime::{FightSession, SessionStats};
use clap::Parser;
use console::style;

use crate::content;

/// Play an interactive fight
#[derive(Parser, Debug)]
pub struct Play {
    /// AI difficulty: easy, normal or hard
    #[arg(
        long,
        default_value = "normal",
        ignore_case = true,
        value_parser = super::difficulty_parser()
    )]
    pub difficulty: Difficulty,

    /// Fixed RNG seed for a reproducible fight
    #[arg(long)]
    pub seed: Option<u64>,

    /// Your ship's name
    #[arg(long, default_value = "Alpha")]
    pub name: String,

    /// Unit class slug for your ship
    #[arg(long)]
    pub player_class: Option<String>,

    /// Weapon slug for your ship
    #[arg(long)]
    pub weapon: Option<String>,

    /// Shield slug for your ship
    #[arg(long)]
    pub shield: Option<String>,

    /// Opponent's name
    #[arg(long)]
    pub ai_name: Option<String>,

    /// Unit class slug for the opponent
    #[arg(long)]
    pub ai_class: Option<String>,

    /// Weapon slug for the opponent
    #[arg(long)]
    pub ai_weapon: Option<String>,

    /// Shield slug for the opponent
    #[arg(long)]
    pub ai_shield: Option<String>,
}

enum Input {
    Attack,
    Pass,
    Skill(SkillKind),
    Restart,
    ResetStats,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "a" | "attack" => Self::Attack,
            "p" | "pass" => Self::Pass,
            "o" | "overcharge" => Self::Skill(SkillKind::Overcharge),
            "e" | "emp" => Self::Skill(SkillKind::Emp),
            "r" | "restart" => Self::Restart,
            "s" | "reset-stats" => Self::ResetStats,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl Play {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let (catalogs, mut config) = content::load(data_dir)?;
        if self.seed.is_some() {
            config.arena.rng_seed = self.seed;
        }

        let difficulty = self.difficulty;
        let (player, ai) = self.loadouts(&catalogs)?;
        let mut session = FightSession::start(&catalogs, player, ai, difficulty, &config)?;

        println!(
            "{} {} vs {} ({})",
            style("Fight:").bold(),
            style(&session.player_loadout().name).green(),
            style(&session.ai_loadout().name).red(),
            difficulty
        );
        print_help();

        let mut printed = 0;
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            printed = print_new_log(&session, printed);
            print_status(&session)?;
            if let Some(result) = session.arena().result() {
                print_result(result, session.stats());
            }

            print!("{} ", style(">").bold());
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };

            match Input::parse(&line?) {
                Input::Attack => {
                    session.player_attack()?;
                }
                Input::Pass => {
                    session.player_pass()?;
                }
                Input::Skill(skill) => {
                    session.player_skill(skill.slug())?;
                }
                Input::Restart => {
                    session.restart()?;
                    printed = 0;
                }
                Input::ResetStats => {
                    session.reset_stats();
                    println!("{} session stats cleared", style("*").cyan());
                }
                Input::Help => print_help(),
                Input::Quit => break,
                Input::Unknown(other) if other.is_empty() => {}
                Input::Unknown(other) => {
                    println!("{} unknown command '{}'", style("?").yellow(), other);
                }
            }
        }

        let stats = session.stats();
        println!(
            "Session: {} fights, {} wins, {} losses, {} draws",
            stats.fights, stats.wins, stats.losses, stats.draws
        );
        Ok(())
    }

    /// The default matchup with the loadout flags of each side applied.
    fn loadouts(&self, catalogs: &arena_core::Catalogs) -> Result<(UnitLoadout, UnitLoadout)> {
        let (mut player, mut ai) = FightSession::default_loadouts(catalogs)?;
        player.name = self.name.clone();
        override_loadout(&mut player, &self.player_class, &self.weapon, &self.shield);

        if let Some(name) = &self.ai_name {
            ai.name = name.clone();
        }
        override_loadout(&mut ai, &self.ai_class, &self.ai_weapon, &self.ai_shield);
        Ok((player, ai))
    }
}

fn override_loadout(
    loadout: &mut UnitLoadout,
    class: &Option<String>,
    weapon: &Option<String>,
    shield: &Option<String>,
) {
    if let Some(class) = class {
        loadout.unit_class = class.clone();
    }
    if let Some(weapon) = weapon {
        loadout.weapon = weapon.clone();
    }
    if let Some(shield) = shield {
        loadout.shield = shield.clone();
    }
}

fn print_help() {
    println!(
        "Commands: {} {} {} {} {} {} {}",
        style("[a]ttack").cyan(),
        style("[p]ass").cyan(),
        style("[o]vercharge").cyan(),
        style("[e]mp").cyan(),
        style("[r]estart").cyan(),
        style("reset-[s]tats").cyan(),
        style("[q]uit").cyan(),
    );
}

/// Prints log lines added since the last call and returns the new count.
fn print_new_log(session: &FightSession, printed: usize) -> usize {
    let lines = session.arena().ui_log();
    let start = if printed > lines.len() { 0 } else { printed };
    for line in &lines[start..] {
        println!("  {}", style(line).dim());
    }
    lines.len()
}

fn print_status(session: &FightSession) -> Result<()> {
    let arena = session.arena();
    let (player, ai) = arena.views()?;
    println!(
        "{} {} | {} {} | turn: {}",
        style(&player.name).green(),
        arena.player()?,
        style(&ai.name).red(),
        arena.ai()?,
        arena.turn()
    );
    let cooldowns = arena.cooldowns(arena_core::Side::Player);
    let skill = if player.skill_used {
        "spent".to_owned()
    } else {
        cooldowns
            .iter()
            .map(|(skill, turns)| format!("{skill}: {turns}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("  skill: {}", skill);
    Ok(())
}

fn print_result(result: FightResult, stats: &SessionStats) {
    let banner = match result {
        FightResult::Win => style("VICTORY").green().bold(),
        FightResult::Loss => style("DEFEAT").red().bold(),
        FightResult::Draw => style("DRAW").yellow().bold(),
    };
    println!(
        "{} winrate {:.1}% over {} fights. [r]estart or [q]uit.",
        banner,
        stats.winrate() * 100.0,
        stats.fights
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_shortcuts() {
        assert!(matches!(Input::parse("attack"), Input::Attack));
        assert!(matches!(Input::parse(" P "), Input::Pass));
        assert!(matches!(
            Input::parse("emp"),
            Input::Skill(SkillKind::Emp)
        ));
        assert!(matches!(
            Input::parse("o"),
            Input::Skill(SkillKind::Overcharge)
        ));
        assert!(matches!(Input::parse("q"), Input::Quit));
        assert!(matches!(Input::parse("reset-stats"), Input::ResetStats));
        assert!(matches!(Input::parse("warp"), Input::Unknown(s) if s == "warp"));
    }

    #[test]
    fn loadout_flags_override_the_player_only() {
        let catalogs = arena_content::builtin::sample_catalogs().unwrap();
        let play = Play::try_parse_from(["play", "--name", "Vega", "--player-class", "destroyer"])
            .unwrap();

        let (player, ai) = play.loadouts(&catalogs).unwrap();

        assert_eq!(player.name, "Vega");
        assert_eq!(player.unit_class, "destroyer");
        assert_eq!(player.weapon, "railgun_mk1");
        assert_eq!(ai.unit_class, "destroyer");
        assert_eq!(ai.name, "Omega");
    }

    #[test]
    fn opponent_flags_override_the_ai_only() {
        let catalogs = arena_content::builtin::sample_catalogs().unwrap();
        let play = Play::try_parse_from([
            "play",
            "--ai-name",
            "Nemesis",
            "--ai-class",
            "interceptor",
            "--ai-weapon",
            "railgun_mk1",
            "--ai-shield",
            "shield_heavy",
        ])
        .unwrap();

        let (player, ai) = play.loadouts(&catalogs).unwrap();

        assert_eq!(ai.name, "Nemesis");
        assert_eq!(ai.unit_class, "interceptor");
        assert_eq!(ai.weapon, "railgun_mk1");
        assert_eq!(ai.shield, "shield_heavy");
        assert_eq!(player.name, "Alpha");
        assert_eq!(player.unit_class, "interceptor");

        let session = FightSession::start(
            &catalogs,
            player,
            ai,
            play.difficulty,
            &arena_runtime::RuntimeConfig::default(),
        )
        .unwrap();
        assert_eq!(session.arena().ai().unwrap().name(), "Nemesis");
    }

    #[test]
    fn difficulty_flag_rejects_unknown_tiers() {
        let play = Play::try_parse_from(["play", "--difficulty", "HARD"]).unwrap();
        assert_eq!(play.difficulty, Difficulty::Hard);
        assert_eq!(Play::try_parse_from(["play"]).unwrap().difficulty, Difficulty::Normal);
        assert!(Play::try_parse_from(["play", "--difficulty", "hrad"]).is_err());
    }
}
