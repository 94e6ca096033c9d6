mod catalog;
mod play;
mod simulate;

use arena_core::Difficulty;
use clap::builder::{PossibleValuesParser, TypedValueParser};

pub use catalog::Catalog;
pub use play::Play;
pub use simulate::Simulate;

/// Accepts only the known tiers, so a typo fails instead of falling back.
fn difficulty_parser() -> impl TypedValueParser<Value = Difficulty> {
    PossibleValuesParser::new(["easy", "normal", "hard"])
        .map(|raw| Difficulty::parse_lenient(&raw))
}
