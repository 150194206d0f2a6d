//! Conditional logging macros.
//!
//! Placement and string-keyed conversion emit events through these. With the
//! `tracing` feature enabled they re-export the `tracing` macros; without it
//! they expand to no-ops so the default build carries no logging overhead.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
