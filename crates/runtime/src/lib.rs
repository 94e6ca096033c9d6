//! Session host for arena fights.
//!
//! This crate wraps `arena-core` for a long-lived host process:
//! - [`session`] owns one [`Arena`](arena_core::Arena) per player session and
//!   drives the AI after every player command
//! - [`stats`] keeps per-session win/loss bookkeeping
//! - [`store`] maps session ids to sessions with TTL-based eviction
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod session;
pub mod stats;
pub mod store;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use session::{FightSession, PlayerMove, TurnSummary};
pub use stats::SessionStats;
pub use store::{SessionId, SessionStore};
