//! rt-core: stable foundation for reachtrack.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - angle (heading canonicalization)
//! - error (shared error types)

pub mod angle;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use angle::*;
pub use error::{RtError, RtResult};
pub use numeric::*;
