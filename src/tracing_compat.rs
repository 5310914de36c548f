//! Tracing compatibility layer for structured logging.
//!
//! This module provides a unified interface for tracing that works whether
//! or not the `tracing-integration` feature is enabled:
//!
//! - **With feature enabled**: re-exports event macros from the `tracing`
//!   crate for full functionality.
//! - **Without feature**: no-op macros that compile to nothing for zero
//!   runtime overhead.
//!
//! The mixing hot path is never logged; events fire only on the cold paths
//! (seed derivation, redraw loops).
//!
//! # Feature Flag
//!
//! ```toml
//! seedmix = { version = "0.1", features = ["tracing-integration"] }
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, error, info, trace, warn};

// When tracing is disabled, provide no-op macros
#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! No-op implementations when tracing is disabled.

    /// No-op trace-level logging macro.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info-level logging macro.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op warn-level logging macro.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error-level logging macro.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    // Re-export the macros at module level
    pub use crate::{debug, error, info, trace, warn};
}

#[cfg(not(feature = "tracing-integration"))]
pub use noop::*;
