//! Seedmix: deterministic, seed-driven value derivation for Rust.
//!
//! # Overview
//!
//! Seedmix produces reproducible sequences of primitive values (integers,
//! booleans, floats, characters, strings) and derived structures (arrays,
//! shuffles, pairs) from a single 32-bit seed. There is no runtime entropy
//! source anywhere in the crate: the same seed yields the same outputs on
//! every run, every platform, and every compilation. This makes it suitable
//! for deterministic test fixtures, procedural content generation, and
//! build-time constant derivation.
//!
//! # Core Guarantees
//!
//! - **Determinism**: every operation is a pure function of its seed
//! - **Value semantics**: a [`Generator`] is an immutable `Copy` value, not
//!   an object with hidden mutable state; advancing yields a new generator
//! - **Defined arithmetic**: all mixing is wrapping `u32` arithmetic; there
//!   are no overflow failure modes
//! - **Fail-fast validation**: inverted ranges and malformed clock strings
//!   are rejected with typed errors before anything is derived
//! - **Const evaluation**: the core mixing pathway is `const fn`, so raw
//!   values can be derived at compile time
//!
//! Seedmix is NOT cryptographically secure and must never be used where
//! prediction resistance matters.
//!
//! # Module Structure
//!
//! - [`mixer`]: the core mixing algorithm (`hash_step`, `combine`,
//!   `iterate`, `raw_value`)
//! - [`generator`]: the [`Generator`] value type and scalar adapters
//! - [`sequence`]: sequence builders (arrays, shuffles, strings, pairs) and
//!   the [`RawStream`] iterator
//! - [`seed`]: clock-string seed derivation
//! - [`error`]: error types
//! - [`tracing_compat`]: feature-gated tracing macros
//!
//! # Example
//!
//! ```
//! use seedmix::Generator;
//!
//! let gen = Generator::new(98765);
//! assert_eq!(gen.raw_value(), 3_364_759_479);
//!
//! // Compile-time derivation through the const mixing pathway.
//! const RAW: u32 = seedmix::mixer::raw_value(98765);
//! assert_eq!(RAW, gen.raw_value());
//!
//! let dice = gen.int_in_range(1, 6).expect("valid range");
//! assert!((1..=6).contains(&dice));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod generator;
pub mod mixer;
pub mod seed;
pub mod sequence;
pub mod tracing_compat;

pub use error::{Error, Result};
pub use generator::Generator;
pub use seed::seed_from_clock;
pub use sequence::RawStream;
