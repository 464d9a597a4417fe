//! RNG oracle for reproducible randomness.
//!
//! The engine never owns a random source. Callers inject an [`RngOracle`]
//! that maps a seed to a value, and every random decision derives its own
//! seed with [`compute_seed`]. Given the same game seed, a round shuffles
//! exactly the same way, which makes role assignment replayable and lets
//! tests pin down exact permutations.

/// Seed-addressed random number source.
///
/// Implementations must be pure: the same seed always yields the same value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform-ish index in `0..bound`. Returns 0 for an empty range.
    fn below(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32(seed) % bound
    }
}

/// PCG-XSH-RR generator evaluated as a single step from the seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Seed contexts, one per kind of random decision.
pub mod context {
    /// Fisher-Yates swap index during role assignment.
    pub const SHUFFLE: u32 = 1;
    /// Choice from the fallback word pool.
    pub const FALLBACK: u32 = 2;
    /// Generation entropy token and prompt vibe.
    pub const ENTROPY: u32 = 3;
}

/// Derive a decision seed from the round seed and decision coordinates.
///
/// * `game_seed` - drawn once per round start
/// * `nonce` - distinguishes rounds or draws that share a game seed
/// * `index` - position inside the decision (e.g. the shuffle step)
/// * `context` - one of the constants in [`context`]
pub fn compute_seed(game_seed: u64, nonce: u64, index: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (index as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
