//! Runtime configuration.

use std::env;
use std::time::Duration;

use arena_core::ArenaConfig;

/// Settings for the session host.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Configuration handed to every new arena.
    pub arena: ArenaConfig,
    /// Upper bound on AI turns run after a single player command.
    pub max_auto_ai_turns: usize,
    /// Idle time after which a session is dropped by `SessionStore::gc`.
    pub session_ttl: Duration,
    /// Sessions kept after TTL eviction; the least recently used go first.
    pub max_sessions: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            max_auto_ai_turns: 8,
            session_ttl: Duration::from_secs(30 * 60),
            max_sessions: 1000,
        }
    }
}

impl RuntimeConfig {
    pub fn new(arena: ArenaConfig) -> Self {
        Self {
            arena,
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_RNG_SEED` - Fixed seed, used only if it is all ASCII digits
    /// - `AI_SKILL_CHANCE` - Opportunistic AI skill chance, clamped to `[0, 1]`;
    ///   an unparseable value falls back to 0.10
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Applies the environment on top of this configuration.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_vars(|key| env::var(key).ok())
    }

    /// Applies variables from an arbitrary lookup.
    #[must_use]
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(seed) = lookup("ARENA_RNG_SEED").as_deref().and_then(parse_seed) {
            self.arena.rng_seed = Some(seed);
        }

        if let Some(raw) = lookup("AI_SKILL_CHANCE") {
            let chance = raw
                .trim()
                .parse::<f64>()
                .unwrap_or(ArenaConfig::DEFAULT_AI_SKILL_CHANCE);
            self.arena = self.arena.with_ai_skill_chance(chance);
        }

        self
    }
}

fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.max_auto_ai_turns, 8);
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
        assert_eq!(config.max_sessions, 1000);
        assert_eq!(config.arena, ArenaConfig::default());
    }

    #[test]
    fn reads_seed_and_chance() {
        let config = RuntimeConfig::default()
            .with_vars(vars(&[("ARENA_RNG_SEED", "1234"), ("AI_SKILL_CHANCE", "0.4")]));
        assert_eq!(config.arena.rng_seed, Some(1234));
        assert_eq!(config.arena.ai_skill_chance, 0.4);
    }

    #[test]
    fn non_digit_seed_is_ignored() {
        for raw in ["-5", "12ab", "", "1e3"] {
            let config = RuntimeConfig::default().with_vars(vars(&[("ARENA_RNG_SEED", raw)]));
            assert_eq!(config.arena.rng_seed, None, "seed {raw:?}");
        }
    }

    #[test]
    fn bad_chance_falls_back_and_clamps() {
        let config =
            RuntimeConfig::default().with_vars(vars(&[("AI_SKILL_CHANCE", "often")]));
        assert_eq!(config.arena.ai_skill_chance, 0.10);

        let config = RuntimeConfig::default().with_vars(vars(&[("AI_SKILL_CHANCE", "7")]));
        assert_eq!(config.arena.ai_skill_chance, 1.0);
    }

    #[test]
    fn unset_variables_keep_base() {
        let base = ArenaConfig::default()
            .with_rng_seed(Some(9))
            .with_ai_skill_chance(0.3);
        let config = RuntimeConfig::new(base.clone()).with_vars(vars(&[]));
        assert_eq!(config.arena, base);
    }
}
