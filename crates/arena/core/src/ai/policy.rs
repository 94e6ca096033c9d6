use super::{Action, AiNode, AiTurn, Condition, Inverter, Selector, Sequence};
use crate::config::Difficulty;
use crate::skills::SkillKind;

/// Builds the AI decision tree for a difficulty tier.
pub fn policy(difficulty: Difficulty) -> Selector {
    let emp_threshold = difficulty.emp_shield_threshold();

    Selector::new(vec![
        Box::new(Sequence::new(vec![
            Box::new(Inverter::new(Box::new(Condition::new(
                "ai can fire",
                |turn: &AiTurn<'_>| turn.ai().is_some_and(|ai| ai.can_fire()),
            )))),
            Box::new(Action::new(|turn: &mut AiTurn<'_>| turn.pass())),
        ])),
        skill_branch(
            SkillKind::Emp,
            Condition::new("player shield above threshold", move |turn: &AiTurn<'_>| {
                turn.player()
                    .is_some_and(|player| player.shield_charge() > emp_threshold)
            }),
        ),
        skill_branch(
            SkillKind::Overcharge,
            Condition::new("player hull in finishing range", move |turn: &AiTurn<'_>| {
                turn.player().is_some_and(|player| {
                    player.hull() <= difficulty.overcharge_hull_threshold(player.hull_max())
                })
            }),
        ),
        Box::new(Action::new(|turn: &mut AiTurn<'_>| turn.attack())),
    ])
}

fn skill_branch(skill: SkillKind, trigger: impl AiNode + 'static) -> Box<dyn AiNode> {
    Box::new(Sequence::new(vec![
        Box::new(Condition::new(skill.slug(), move |turn: &AiTurn<'_>| {
            turn.skill_available(skill)
        })),
        Box::new(trigger),
        Box::new(Action::new(move |turn: &mut AiTurn<'_>| turn.skill_shot(skill))),
    ]))
}
