//! Admissible control sets.
//!
//! A `ControlBound` describes the set of control inputs a vehicle may
//! apply and answers membership and projection queries. Bounds are built
//! once when a dynamics model is configured and are immutable afterwards;
//! the dynamics evaluation layer never enforces them (clamping is the
//! planner's job), but optimal-control synthesis saturates at their
//! extremes.
//!
//! Variants:
//! - [`IntervalBound`] — scalar `[lower, upper]`
//! - [`BoxBound`] — independent per-axis limits
//! - [`EllipsoidBound`] — quadratic constraint around a center

pub mod bound;
pub mod box_bound;
pub mod ellipsoid;
pub mod error;
pub mod interval;

pub use bound::ControlBound;
pub use box_bound::BoxBound;
pub use ellipsoid::EllipsoidBound;
pub use error::{ControlError, ControlResult};
pub use interval::IntervalBound;
