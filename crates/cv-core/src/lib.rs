//! cv-core: stable foundation for cycleview.
//!
//! Contains:
//! - units (unit systems, conversion profiles, display scaling)
//! - format (fixed/exponential display formatting)
//! - error (shared error types)

pub mod error;
pub mod format;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CvError, CvResult, ensure_finite};
pub use format::*;
pub use units::*;
