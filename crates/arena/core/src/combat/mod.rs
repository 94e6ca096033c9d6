//! Attack resolution.
//!
//! [`resolve_attack`] is pure with respect to both units: it reads their state,
//! draws from the random source, and returns an [`AttackOutcome`] the caller
//! applies. Skills influence a shot only through an [`AttackContext`].

mod context;
mod outcome;
mod resolve;

pub use context::AttackContext;
pub use outcome::AttackOutcome;
pub use resolve::{clamp01, resolve_attack, round_half_up, round_nearest};
