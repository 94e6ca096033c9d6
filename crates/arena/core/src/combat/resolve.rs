use super::{AttackContext, AttackOutcome};
use crate::rng::RandomSource;
use crate::unit::CombatUnit;

/// Nearest-integer rounding with ties to even, floored at zero.
pub fn round_nearest(x: f64) -> u32 {
    x.round_ties_even().max(0.0) as u32
}

/// Rounds halves up. Used only for shield absorption.
pub fn round_half_up(x: f64) -> u32 {
    (x + 0.5).floor().max(0.0) as u32
}

pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Resolves one shot from `attacker` at `defender`.
///
/// Neither unit is mutated. Draw order is fixed: one accuracy roll, then one
/// damage roll on a hit.
pub fn resolve_attack<R>(
    attacker: &CombatUnit,
    defender: &CombatUnit,
    rng: &mut R,
    ctx: &AttackContext,
) -> AttackOutcome
where
    R: RandomSource + ?Sized,
{
    let weapon = attacker.weapon();

    if !attacker.can_fire() {
        return AttackOutcome::insufficient_energy(weapon.slug.clone());
    }

    let roll = rng.next_f64();
    let hit = roll <= weapon.accuracy;

    let mut notes = vec![format!(
        "accuracy: roll={roll:.3} vs acc={:.3}",
        weapon.accuracy
    )];
    if !ctx.is_default() {
        notes.push(format!(
            "ctx: dmgx={:.2}, ignore+={:.2}, shield_eff*={:.2}",
            ctx.damage_multiplier, ctx.extra_shield_ignore, ctx.shield_efficiency_factor
        ));
    }

    if !hit {
        return AttackOutcome::miss(weapon.slug.clone(), weapon.energy_cost, roll, notes);
    }

    let dmg_roll = rng.range_inclusive(weapon.dmg_min, weapon.dmg_max);
    let modified =
        round_nearest(f64::from(dmg_roll) * attacker.class().attack_mod * ctx.damage_multiplier);

    let ignore = clamp01(weapon.shield_ignore + ctx.extra_shield_ignore);
    let shield_eff = clamp01(
        defender.shield().efficiency * defender.class().shield_mod * ctx.shield_efficiency_factor,
    );

    let nonignored = round_nearest(f64::from(modified) * (1.0 - ignore)).min(modified);
    let ignored_direct = modified - nonignored;

    let absorb_potential = round_half_up(f64::from(nonignored) * shield_eff).min(nonignored);
    let shield_absorbed = absorb_potential.min(defender.shield_charge());
    let hull_damage = (nonignored - shield_absorbed) + ignored_direct;

    notes.push(format!(
        "dmg_roll={dmg_roll} -> mod={modified} | ignore={ignore:.2} nonignored={nonignored} | \
         shield_eff={shield_eff:.2} absorb<=({absorb_potential}) -> {shield_absorbed} | \
         hull={hull_damage}"
    ));

    AttackOutcome {
        hit: true,
        energy_spent: weapon.energy_cost,
        accuracy_roll: roll,
        weapon_slug: weapon.slug.clone(),
        raw_damage_roll: dmg_roll,
        damage_before_shield: modified,
        shield_absorbed,
        hull_damage,
        notes,
    }
}
