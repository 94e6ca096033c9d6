//! Random source for hit rolls and damage variance.
//!
//! The arena owns exactly one source per fight and threads it through every
//! resolution call. Seeding the source makes a fight reproducible: the same
//! seed and the same command sequence replay the same fight.

use std::collections::VecDeque;

/// Supplier of uniform randomness for combat resolution.
///
/// Only [`next_u32`](Self::next_u32) and [`reseed`](Self::reseed) are required.
/// Test doubles may override the derived methods to script exact rolls.
pub trait RandomSource {
    /// Next raw 32-bit output.
    fn next_u32(&mut self) -> u32;

    /// Replaces the generator state. `None` draws a fresh seed.
    fn reseed(&mut self, seed: Option<u64>);

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform integer in `[min, max]` inclusive. Returns `min` when the
    /// range is empty or degenerate.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + ((u64::from(self.next_u32()) * span) >> 32) as u32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit LCG state, 32-bit output permuted by an
/// xorshift and a state-dependent rotation.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.seed_with(seed);
        rng
    }

    /// Creates a generator from OS entropy.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    fn seed_with(&mut self, seed: u64) {
        self.state = 0;
        self.step();
        self.state = self.state.wrapping_add(seed);
        self.step();
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }

    fn reseed(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => self.seed_with(seed),
            None => self.seed_with(rand::random::<u64>()),
        }
    }
}

/// Deterministic source that replays scripted values.
///
/// Floats are served from the script, then `default_float` forever. Integer
/// draws take the next scripted value clamped into the requested range, or the
/// range's lower bound once the script runs out.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    floats: VecDeque<f64>,
    ints: VecDeque<u32>,
    default_float: f64,
}

impl ScriptedRng {
    pub const DEFAULT_FLOAT: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            floats: VecDeque::new(),
            ints: VecDeque::new(),
            default_float: Self::DEFAULT_FLOAT,
        }
    }

    #[must_use]
    pub fn with_floats(mut self, floats: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(floats);
        self
    }

    #[must_use]
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    #[must_use]
    pub fn with_default_float(mut self, value: f64) -> Self {
        self.default_float = value;
        self
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    /// Scripts are replayed as-is; reseeding is a no-op.
    fn reseed(&mut self, _seed: Option<u64>) {}

    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(self.default_float)
    }

    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.ints
            .pop_front()
            .map_or(min, |value| value.clamp(min, max))
    }
}
