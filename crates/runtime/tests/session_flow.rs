use arena_content::{ContentFactory, builtin};
use arena_core::{AiDecision, ArenaConfig, ArenaError, FightResult, SkillKind};
use arena_runtime::{
    FightSession, PlayerMove, RuntimeConfig, RuntimeError, SessionStats, SessionStore,
};

/// Built-in content with the opportunistic AI roll disabled. The sample
/// railgun never misses and always deals 10, so fights are fully determined.
fn session() -> FightSession {
    let catalogs = builtin::sample_catalogs().unwrap();
    let config = RuntimeConfig::new(ArenaConfig::default().with_ai_skill_chance(0.0));
    FightSession::quick_fight(&catalogs, &config).unwrap()
}

#[test]
fn attack_is_answered_by_the_ai() {
    let mut session = session();

    let summary = session.player_attack().unwrap();

    let PlayerMove::Attack(shot) = &summary.player else {
        panic!("expected an attack, got {:?}", summary.player);
    };
    // destroyer shield: efficiency 1.0 * 0.9 soaks 9 of 10
    assert_eq!(shot.shield_absorbed, 9);
    assert_eq!(shot.hull_damage, 1);

    assert_eq!(summary.ai_turns.len(), 1);
    let AiDecision::Attack(reply) = &summary.ai_turns[0].decision else {
        panic!("expected a plain attack");
    };
    // 10 * 1.2 = 12, fully soaked by a full interceptor shield
    assert_eq!(reply.damage_before_shield, 12);
    assert_eq!(reply.hull_damage, 0);

    assert_eq!(summary.result, None);
    let arena = session.arena();
    assert_eq!(arena.player().unwrap().hull(), 40);
    assert_eq!(arena.ai().unwrap().hull(), 54);
    assert_eq!(arena.turn(), arena_core::Side::Player);
}

#[test]
fn pass_hands_over_to_the_ai() {
    let mut session = session();

    let summary = session.player_pass().unwrap();

    assert_eq!(summary.player, PlayerMove::Pass);
    assert_eq!(summary.ai_turns.len(), 1);
    assert_eq!(session.arena().turn(), arena_core::Side::Player);
}

#[test]
fn overcharge_can_leave_too_little_energy_to_fire() {
    let mut session = session();

    let summary = session.player_skill("overcharge").unwrap();

    let PlayerMove::Skill(shot) = &summary.player else {
        panic!("expected a skill shot");
    };
    assert_eq!(shot.skill, SkillKind::Overcharge);
    assert!(shot.applied);
    // 25 energy - 20 for the skill leaves 5, short of the railgun's 10
    assert!(shot.outcome.was_refused());
    assert!(session.arena().player().unwrap().skill_used());
}

#[test]
fn unknown_skill_is_an_error() {
    let mut session = session();

    let err = session.player_skill("warp").unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Arena(ArenaError::UnknownSkill(_))
    ));
}

#[test]
fn finished_fight_is_recorded_once() {
    let mut session = session();

    let mut result = None;
    for _ in 0..1_000 {
        result = session.player_attack().unwrap().result;
        if result.is_some() {
            break;
        }
    }
    let result = result.expect("fight should finish");
    assert_eq!(session.stats().fights, 1);

    let again = session.player_attack().unwrap();
    assert_eq!(again.player, PlayerMove::Ignored);
    assert!(again.ai_turns.is_empty());
    assert_eq!(again.result, Some(result));
    assert_eq!(session.player_pass().unwrap().player, PlayerMove::Ignored);
    assert_eq!(session.stats().fights, 1);

    session.restart().unwrap();
    assert_eq!(session.arena().result(), None);
    assert_eq!(session.arena().player().unwrap().hull(), 40);
    assert_eq!(session.stats().fights, 1);

    let expected = match result {
        FightResult::Win => SessionStats { fights: 1, wins: 1, ..SessionStats::default() },
        FightResult::Loss => SessionStats { fights: 1, losses: 1, ..SessionStats::default() },
        FightResult::Draw => SessionStats { fights: 1, draws: 1, ..SessionStats::default() },
    };
    assert_eq!(*session.stats(), expected);

    session.reset_stats();
    assert_eq!(*session.stats(), SessionStats::default());
    assert_eq!(session.arena().player().unwrap().hull(), 40);
}

#[test]
fn seeded_sessions_replay_identically() {
    let catalogs = builtin::sample_catalogs().unwrap();
    let config = RuntimeConfig::new(ArenaConfig::default().with_rng_seed(Some(7)));
    let play = || {
        let mut session = FightSession::quick_fight(&catalogs, &config).unwrap();
        for _ in 0..20 {
            session.player_attack().unwrap();
        }
        session.arena().log().entries().to_vec()
    };

    assert_eq!(play(), play());
}

#[test]
fn store_hosts_sessions_from_shipped_content() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let factory = ContentFactory::new(data_dir);
    let catalogs = factory.load_catalogs().unwrap();
    let config = RuntimeConfig::new(factory.load_config().unwrap());

    let mut store = SessionStore::new(&config);
    let id = store.create(FightSession::quick_fight(&catalogs, &config).unwrap());

    let session = store.get_mut(id).unwrap();
    assert_eq!(session.player_loadout().weapon, "railgun_mk1");
    assert_eq!(session.ai_loadout().shield, "shield_heavy");
    session.player_pass().unwrap();
    assert_eq!(store.len(), 1);
}
