//! Vehicle dynamics models for reachability-based safety control.
//!
//! Every model implements the [`Dynamics`] contract: evaluate the state
//! derivative for simulation, and synthesize the control that extremizes
//! the safety Hamiltonian given the value-function gradient supplied by
//! an external reachability solver. Models are immutable once
//! constructed, hold no scratch state, and may be queried concurrently
//! from any number of threads.
//!
//! Concrete models:
//! - [`PlanarDubinsDynamics`] — unicycle at constant forward speed,
//!   scalar yaw-rate control on an interval.
//! - [`QuadrotorDecoupled6D`] — decoupled-axis quadrotor with
//!   pitch/roll/thrust control in a box.
//! - [`PointKinematics`] — velocity-controlled point mass; has no
//!   Hamiltonian law and reports optimal control as unimplemented.
//!
//! Model selection at startup goes through [`AnyDynamics::from_spec`]
//! with a tagged wire record.

pub mod dynamics;
pub mod error;
pub mod planar_dubins;
pub mod point_kinematics;
pub mod quadrotor;
pub mod select;

pub use dynamics::Dynamics;
pub use error::{DynamicsError, DynamicsResult};
pub use planar_dubins::PlanarDubinsDynamics;
pub use point_kinematics::PointKinematics;
pub use quadrotor::QuadrotorDecoupled6D;
pub use select::AnyDynamics;
