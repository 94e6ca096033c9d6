//! Session storage with idle eviction.
//!
//! The store is a plain map; hosts serving concurrent requests wrap it in a
//! `Mutex` so each session is touched by one request at a time.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::session::FightSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Entry {
    session: FightSession,
    touched: Instant,
}

pub struct SessionStore {
    entries: HashMap<SessionId, Entry>,
    next_id: u64,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
            ttl: config.session_ttl,
            max_sessions: config.max_sessions,
        }
    }

    /// Stores a session under a fresh id, collecting stale sessions first.
    pub fn create(&mut self, session: FightSession) -> SessionId {
        self.create_at(session, Instant::now())
    }

    /// Looks up a session and marks it as recently used.
    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut FightSession> {
        self.get_mut_at(id, Instant::now())
    }

    pub fn get(&self, id: SessionId) -> Option<&FightSession> {
        self.entries.get(&id).map(|entry| &entry.session)
    }

    pub fn remove(&mut self, id: SessionId) -> Option<FightSession> {
        self.entries.remove(&id).map(|entry| entry.session)
    }

    /// Drops sessions idle longer than the TTL, then the least recently used
    /// sessions beyond the size limit. Returns how many were dropped.
    pub fn gc(&mut self) -> usize {
        self.gc_at(Instant::now())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn create_at(&mut self, session: FightSession, now: Instant) -> SessionId {
        self.gc_at(now);
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                session,
                touched: now,
            },
        );
        tracing::debug!(%id, sessions = self.entries.len(), "session created");
        id
    }

    fn get_mut_at(&mut self, id: SessionId, now: Instant) -> Result<&mut FightSession> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(RuntimeError::SessionNotFound(id))?;
        entry.touched = now;
        Ok(&mut entry.session)
    }

    fn gc_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.touched) <= ttl);

        if self.entries.len() > self.max_sessions {
            let mut by_age: Vec<(Instant, SessionId)> = self
                .entries
                .iter()
                .map(|(id, entry)| (entry.touched, *id))
                .collect();
            by_age.sort_unstable();
            let excess = self.entries.len() - self.max_sessions;
            for (_, id) in by_age.into_iter().take(excess) {
                self.entries.remove(&id);
            }
        }

        let dropped = before - self.entries.len();
        if dropped > 0 {
            tracing::info!(dropped, remaining = self.entries.len(), "sessions collected");
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use arena_content::builtin;

    use super::*;

    fn config(max_sessions: usize) -> RuntimeConfig {
        RuntimeConfig {
            max_sessions,
            session_ttl: Duration::from_secs(60),
            ..RuntimeConfig::default()
        }
    }

    fn session() -> FightSession {
        let catalogs = builtin::sample_catalogs().unwrap();
        FightSession::quick_fight(&catalogs, &RuntimeConfig::default()).unwrap()
    }

    #[test]
    fn create_get_remove() {
        let mut store = SessionStore::new(&config(10));
        let id = store.create(session());

        assert_eq!(store.len(), 1);
        assert!(store.get_mut(id).is_ok());
        assert!(store.remove(id).is_some());
        assert_eq!(
            store.get_mut(id).err(),
            Some(RuntimeError::SessionNotFound(id))
        );
    }

    #[test]
    fn idle_sessions_expire() {
        let mut store = SessionStore::new(&config(10));
        let start = Instant::now();
        let stale = store.create_at(session(), start);
        let fresh = store.create_at(session(), start);

        store.get_mut_at(fresh, start + Duration::from_secs(50)).unwrap();
        let dropped = store.gc_at(start + Duration::from_secs(90));

        assert_eq!(dropped, 1);
        assert!(store.get(stale).is_none());
        assert!(store.get(fresh).is_some());
    }

    #[test]
    fn oldest_sessions_go_beyond_the_limit() {
        let mut store = SessionStore::new(&config(2));
        let start = Instant::now();
        let first = store.create_at(session(), start);
        let second = store.create_at(session(), start + Duration::from_secs(1));
        let third = store.create_at(session(), start + Duration::from_secs(2));
        // the limit applies on the next collection
        assert_eq!(store.len(), 3);

        store.get_mut_at(first, start + Duration::from_secs(3)).unwrap();
        store.gc_at(start + Duration::from_secs(4));

        assert_eq!(store.len(), 2);
        assert!(store.get(first).is_some());
        assert!(store.get(second).is_none());
        assert!(store.get(third).is_some());
    }
}
