use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::SkillKind;
use crate::unit::Side;

/// Remaining cooldown turns per side and skill. Zero means ready.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooldownTable {
    remaining: BTreeMap<(Side, SkillKind), u32>,
}

impl CooldownTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self, side: Side, skill: SkillKind) -> u32 {
        self.remaining.get(&(side, skill)).copied().unwrap_or(0)
    }

    pub fn is_ready(&self, side: Side, skill: SkillKind) -> bool {
        self.remaining(side, skill) == 0
    }

    /// Raises the counter to `turns`; a longer running cooldown is kept.
    pub fn set(&mut self, side: Side, skill: SkillKind, turns: u32) {
        let entry = self.remaining.entry((side, skill)).or_insert(0);
        *entry = (*entry).max(turns);
    }

    /// One turn passes for every counter on both sides.
    pub fn tick(&mut self) {
        for value in self.remaining.values_mut() {
            *value = value.saturating_sub(1);
        }
    }

    /// Every skill's counter for one side, ready ones included.
    pub fn snapshot(&self, side: Side) -> BTreeMap<SkillKind, u32> {
        SkillKind::iter()
            .map(|skill| (skill, self.remaining(side, skill)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.remaining.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_the_longer_cooldown() {
        let mut table = CooldownTable::new();
        table.set(Side::Player, SkillKind::Emp, 3);
        table.set(Side::Player, SkillKind::Emp, 2);
        assert_eq!(table.remaining(Side::Player, SkillKind::Emp), 3);
    }

    #[test]
    fn tick_floors_at_zero_for_both_sides() {
        let mut table = CooldownTable::new();
        table.set(Side::Player, SkillKind::Overcharge, 2);
        table.set(Side::Ai, SkillKind::Emp, 1);
        table.tick();
        assert_eq!(table.remaining(Side::Player, SkillKind::Overcharge), 1);
        assert!(table.is_ready(Side::Ai, SkillKind::Emp));
        table.tick();
        table.tick();
        assert!(table.is_ready(Side::Player, SkillKind::Overcharge));
    }

    #[test]
    fn snapshot_lists_every_skill() {
        let mut table = CooldownTable::new();
        table.set(Side::Ai, SkillKind::Emp, 2);
        let snapshot = table.snapshot(Side::Ai);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[&SkillKind::Emp], 2);
        assert_eq!(snapshot[&SkillKind::Overcharge], 0);
        table.clear();
        assert!(table.is_ready(Side::Ai, SkillKind::Emp));
    }
}
