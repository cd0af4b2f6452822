//! Position + velocity state for decoupled-axis vehicle models.

use crate::vehicle::VehicleState;
use nalgebra::{Vector3, Vector6};
use rt_core::Real;

/// 3-D position and velocity, six coordinates total.
///
/// Coordinate order in the raw vector is `(x, y, z, vx, vy, vz)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionVelocity {
    position: Vector3<Real>,
    velocity: Vector3<Real>,
}

impl PositionVelocity {
    pub fn new(position: Vector3<Real>, velocity: Vector3<Real>) -> Self {
        Self { position, velocity }
    }

    pub fn position(&self) -> Vector3<Real> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<Real> {
        self.velocity
    }
}

impl VehicleState for PositionVelocity {
    type Vector = Vector6<Real>;

    fn dim(&self) -> usize {
        6
    }

    fn to_vector(&self) -> Vector6<Real> {
        Vector6::new(
            self.position[0],
            self.position[1],
            self.position[2],
            self.velocity[0],
            self.velocity[1],
            self.velocity[2],
        )
    }

    fn from_vector(v: &Vector6<Real>) -> Self {
        Self {
            position: Vector3::new(v[0], v[1], v[2]),
            velocity: Vector3::new(v[3], v[4], v[5]),
        }
    }
}
