//! Property-style checks over many seeded fights.

use std::sync::Arc;

use arena_core::{
    Arena, ArenaConfig, CombatUnit, Difficulty, ShieldTemplate, Side, UnitClassTemplate,
    WeaponKind, WeaponTemplate,
};
use strum::IntoEnumIterator;

fn laser() -> Arc<WeaponTemplate> {
    Arc::new(WeaponTemplate {
        slug: "laser_mk1".into(),
        name: "Laser Mk1".into(),
        kind: WeaponKind::Laser,
        dmg_min: 8,
        dmg_max: 14,
        energy_cost: 10,
        shield_ignore: 0.10,
        accuracy: 0.85,
    })
}

fn railgun() -> Arc<WeaponTemplate> {
    Arc::new(WeaponTemplate {
        slug: "railgun_mk1".into(),
        name: "Railgun Mk1".into(),
        kind: WeaponKind::Railgun,
        dmg_min: 12,
        dmg_max: 20,
        energy_cost: 14,
        shield_ignore: 0.25,
        accuracy: 0.75,
    })
}

fn shield() -> Arc<ShieldTemplate> {
    Arc::new(ShieldTemplate {
        slug: "shield_basic".into(),
        name: "Basic Shield".into(),
        capacity: 30,
        efficiency: 0.6,
        regen: 3,
    })
}

fn units() -> (CombatUnit, CombatUnit) {
    let interceptor = Arc::new(UnitClassTemplate::new(
        "interceptor",
        "Interceptor",
        40,
        25,
        1.1,
        1.0,
    ));
    let destroyer = Arc::new(UnitClassTemplate::new(
        "destroyer",
        "Destroyer",
        55,
        20,
        0.9,
        1.2,
    ));
    (
        CombatUnit::new("Alpha", Side::Player, interceptor, laser(), shield()),
        CombatUnit::new("Omega", Side::Ai, destroyer, railgun(), shield()),
    )
}

fn assert_bounds(unit: &CombatUnit) {
    assert!(unit.hull() <= unit.hull_max());
    assert!(unit.energy() <= unit.energy_max());
    assert!(unit.shield_charge() <= unit.shield().capacity);
}

#[test]
fn fights_respect_resource_and_turn_invariants() {
    for seed in 0..60u64 {
        for difficulty in Difficulty::iter() {
            let config = ArenaConfig::default()
                .with_rng_seed(Some(seed))
                .with_ai_skill_chance(0.3);
            let mut arena = Arena::new(config);
            let (player, ai) = units();
            arena.start(player, ai, difficulty);

            let mut steps = 0;
            while !arena.is_finished().unwrap() && steps < 500 {
                steps += 1;
                let hull_before = (arena.player().unwrap().hull(), arena.ai().unwrap().hull());
                let defender_charge = arena.unit(arena.turn().opponent()).unwrap().shield_charge();
                let mover = arena.turn();

                let outcome = match mover {
                    Side::Player if steps % 7 == 0 => arena
                        .attack_with_player_skill(if seed % 2 == 0 { "emp" } else { "overcharge" })
                        .unwrap()
                        .map(|shot| shot.outcome),
                    Side::Player if steps % 11 == 0 => {
                        arena.pass_turn().unwrap();
                        None
                    }
                    Side::Player => Some(arena.attack().unwrap()),
                    Side::Ai => arena
                        .take_ai_turn()
                        .unwrap()
                        .and_then(|report| report.decision.outcome().cloned()),
                };

                if let Some(outcome) = outcome {
                    assert!(outcome.shield_absorbed <= defender_charge);
                    if outcome.hit {
                        assert_eq!(
                            outcome.shield_absorbed + outcome.hull_damage,
                            outcome.damage_before_shield
                        );
                    } else {
                        assert_eq!(outcome.damage_before_shield, 0);
                    }
                }

                let player = arena.player().unwrap();
                let ai = arena.ai().unwrap();
                assert_bounds(player);
                assert_bounds(ai);
                assert!(player.hull() <= hull_before.0, "player hull regenerated");
                assert!(ai.hull() <= hull_before.1, "ai hull regenerated");

                if arena.is_finished().unwrap() {
                    assert!(arena.result().is_some());
                } else if arena.turn() == mover {
                    // only a cooldown no-op may leave the turn in place
                    assert_eq!(mover, Side::Player);
                }
            }
        }
    }
}
