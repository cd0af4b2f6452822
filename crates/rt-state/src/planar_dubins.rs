//! Planar Dubins-car configuration.

use crate::vehicle::VehicleState;
use nalgebra::Vector3;
use rt_core::{Real, wrap_to_pi};

/// Configuration of a planar Dubins vehicle: position and heading.
///
/// The heading is canonicalized to `[-pi, pi)` on construction; positions
/// are unconstrained reals. Values are never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarDubins3D {
    x: Real,
    y: Real,
    theta: Real,
}

impl PlanarDubins3D {
    /// Create a state, wrapping the heading into the canonical range.
    pub fn new(x: Real, y: Real, theta: Real) -> Self {
        Self {
            x,
            y,
            theta: wrap_to_pi(theta),
        }
    }

    pub fn x(&self) -> Real {
        self.x
    }

    pub fn y(&self) -> Real {
        self.y
    }

    /// Heading in `[-pi, pi)`.
    pub fn theta(&self) -> Real {
        self.theta
    }
}

impl VehicleState for PlanarDubins3D {
    type Vector = Vector3<Real>;

    fn dim(&self) -> usize {
        3
    }

    fn to_vector(&self) -> Vector3<Real> {
        Vector3::new(self.x, self.y, self.theta)
    }

    fn from_vector(v: &Vector3<Real>) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
