//! Error types for seed-driven value derivation.
//!
//! The error taxonomy is deliberately small: every operation in this crate
//! is a pure computation that either produces a defined result or rejects
//! its input up front. Nothing fails mid-derivation.

use thiserror::Error;

/// Errors raised by generator construction and value derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An inverted integer range was passed to a range-bounded operation.
    #[error("empty integer range: min {min} exceeds max {max}")]
    EmptyIntRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },

    /// An inverted or NaN floating-point range was passed to a
    /// range-bounded operation.
    #[error("empty float range: min {min} does not precede max {max}")]
    EmptyFloatRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// An inverted character range was passed to a range-bounded operation.
    #[error("empty character range: min {min:?} exceeds max {max:?}")]
    EmptyCharRange {
        /// Requested lower bound.
        min: char,
        /// Requested upper bound.
        max: char,
    },

    /// A character mapping produced a code point that is not a Unicode
    /// scalar value (the surrogate gap).
    #[error("code point {value:#x} is not a Unicode scalar value")]
    UnassignedCodePoint {
        /// The offending code point.
        value: u32,
    },

    /// A clock string did not have the `HH:MM:SS` shape.
    #[error("malformed clock string {input:?}: expected HH:MM:SS")]
    MalformedClock {
        /// The rejected input.
        input: String,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
