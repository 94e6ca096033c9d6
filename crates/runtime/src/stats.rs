//! Per-session fight bookkeeping.

use arena_core::FightResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Win/loss counters for one player session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    pub fights: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SessionStats {
    /// Restores stats persisted by a host, treating missing fields as zero.
    ///
    /// Absent or malformed input yields empty stats.
    pub fn from_partial(raw: Option<&Value>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::deserialize(raw) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!(%err, "discarding malformed session stats");
                Self::default()
            }
        }
    }

    /// Share of fights won, `0.0` before the first fight.
    pub fn winrate(&self) -> f64 {
        if self.fights == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.fights)
        }
    }

    pub fn bump(&mut self, result: FightResult) {
        self.fights += 1;
        match result {
            FightResult::Win => self.wins += 1,
            FightResult::Loss => self.losses += 1,
            FightResult::Draw => self.draws += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Counters plus the winrate as a percentage rounded to one decimal.
    pub fn dump(&self) -> Value {
        serde_json::json!({
            "fights": self.fights,
            "wins": self.wins,
            "losses": self.losses,
            "draws": self.draws,
            "winrate": (self.winrate() * 1000.0).round() / 10.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn winrate_of_empty_stats_is_zero() {
        assert_eq!(SessionStats::default().winrate(), 0.0);
    }

    #[test]
    fn bump_counts_each_result() {
        let mut stats = SessionStats::default();
        stats.bump(FightResult::Win);
        stats.bump(FightResult::Win);
        stats.bump(FightResult::Loss);
        stats.bump(FightResult::Draw);

        assert_eq!(
            stats,
            SessionStats {
                fights: 4,
                wins: 2,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(stats.winrate(), 0.5);

        stats.reset();
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn from_partial_tolerates_gaps() {
        let raw = json!({"fights": 3, "wins": 2});
        let stats = SessionStats::from_partial(Some(&raw));
        assert_eq!(stats.fights, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 0);

        assert_eq!(SessionStats::from_partial(None), SessionStats::default());
        assert_eq!(
            SessionStats::from_partial(Some(&json!({"fights": "many"}))),
            SessionStats::default()
        );
    }

    #[test]
    fn dump_reports_percentage() {
        let stats = SessionStats {
            fights: 3,
            wins: 2,
            losses: 1,
            draws: 0,
        };
        let dumped = stats.dump();
        assert_eq!(dumped["winrate"], json!(66.7));
        assert_eq!(dumped["fights"], json!(3));
    }
}
