//! Logging for layout and file output.
//!
//! `debug!` and `warn!` forward to `tracing` when the crate is built with the
//! `tracing` feature and compile to nothing otherwise, so the library carries
//! no subscriber setup of its own.

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
