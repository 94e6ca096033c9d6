use crate::unit::{CombatUnit, Side};

/// Append-only, human-readable record of a fight.
///
/// Diagnostic snapshot lines start with [`CombatLog::SNAPSHOT_MARKER`]; they and
/// regeneration lines are hidden by [`CombatLog::ui_entries`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatLog {
    lines: Vec<String>,
}

impl CombatLog {
    pub const SNAPSHOT_MARKER: &'static str = "[SNAP:";
    /// Prefix of the end-of-turn regeneration line.
    pub const REGEN_MARKER: &'static str = "Regen:";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn snapshot(
        &mut self,
        label: &str,
        turn: Side,
        player: &CombatUnit,
        ai: &CombatUnit,
    ) {
        self.lines.push(format!(
            "{}{label}] turn={turn} | P({player}) | A({ai})",
            Self::SNAPSHOT_MARKER
        ));
    }

    pub fn entries(&self) -> &[String] {
        &self.lines
    }

    /// Entries a player would want to read.
    pub fn ui_entries(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| Self::is_user_facing(line))
    }

    pub fn is_user_facing(line: &str) -> bool {
        !line.starts_with(Self::SNAPSHOT_MARKER) && !line.starts_with(Self::REGEN_MARKER)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
