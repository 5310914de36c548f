//! The core mixing algorithm: seed-to-value transformation and chaining.
//!
//! Everything in this module is a `const fn` over `u32` with wrapping
//! arithmetic, so raw values can be derived at compile time:
//!
//! ```
//! const RAW: u32 = seedmix::mixer::raw_value(98765);
//! assert_eq!(RAW, 3_364_759_479);
//! ```
//!
//! The algorithm chains three differently-sized iteration counts through
//! one avalanche step and binds the parts together, which decorrelates the
//! output bits even for low-entropy seeds such as small integers or
//! clock-derived values. It is NOT collision- or prediction-resistant.

/// Multiplier of the avalanche step.
const HASH_MULTIPLIER: u32 = 0x27d4_eb2d;

/// Golden-ratio additive constant of the combine step.
const GOLDEN_RATIO: u32 = 0x9E37_79B9;

/// Iteration counts of the three chained parts of [`raw_value`].
const PART_ROUNDS: (u32, u32, u32) = (5, 7, 3);

/// Multiplicative/xor avalanche step.
///
/// Small input changes flip a large, spread-out set of output bits.
#[must_use]
pub const fn hash_step(value: u32) -> u32 {
    value.wrapping_mul(HASH_MULTIPLIER) ^ (value >> 16)
}

/// Binds two values non-linearly.
///
/// All arithmetic wraps modulo 2^32; shifted-out bits are discarded.
#[must_use]
pub const fn combine(a: u32, b: u32) -> u32 {
    (a ^ (b << 7))
        .wrapping_add(b ^ (a >> 3))
        .wrapping_add(GOLDEN_RATIO)
}

/// Applies `value = combine(value, hash_step(value))` for `rounds` rounds.
#[must_use]
pub const fn iterate(seed: u32, rounds: u32) -> u32 {
    let mut value = seed;
    let mut round = 0;
    while round < rounds {
        value = combine(value, hash_step(value));
        round += 1;
    }
    value
}

/// The full mixed 32-bit output for a seed.
///
/// Three parts are chained (each part seeding the next with a different
/// round count) and then bound together, so every output bit depends on
/// the whole seed. Total, deterministic, and stable across platforms;
/// distinct seeds may collide.
#[must_use]
pub const fn raw_value(seed: u32) -> u32 {
    let part1 = iterate(seed, PART_ROUNDS.0);
    let part2 = iterate(part1, PART_ROUNDS.1);
    let part3 = iterate(part2, PART_ROUNDS.2);
    combine(part1, combine(part2, part3))
}
