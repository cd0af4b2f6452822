//! Wire-format configuration records.
//!
//! Flat, versioned serde structs that carry a dynamics model's tunable
//! parameters across a process or service boundary, so a running planner
//! can be reconfigured without rebuilding. One record type per vehicle
//! model, plus [`DynamicsSpec`], a tagged union used to select a model at
//! startup.
//!
//! These are plain data: building an actual model from a record lives in
//! the dynamics crate.

pub mod error;
pub mod schema;
pub mod validate;

pub use error::{WireError, WireResult};
pub use schema::{
    DynamicsSpec, PlanarDubinsConfig, PointKinematicsConfig, QuadrotorDecoupledConfig,
    WIRE_VERSION,
};
