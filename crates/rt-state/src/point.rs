//! Point-mass configuration of arbitrary dimension.

use crate::vehicle::VehicleState;
use nalgebra::DVector;
use rt_core::Real;

/// An n-dimensional configuration with no orientation, used by purely
/// kinematic (velocity-controlled) models.
#[derive(Debug, Clone, PartialEq)]
pub struct PointState {
    q: DVector<Real>,
}

impl PointState {
    pub fn new(q: DVector<Real>) -> Self {
        Self { q }
    }

    pub fn from_slice(q: &[Real]) -> Self {
        Self {
            q: DVector::from_column_slice(q),
        }
    }

    pub fn configuration(&self) -> &DVector<Real> {
        &self.q
    }
}

impl VehicleState for PointState {
    type Vector = DVector<Real>;

    fn dim(&self) -> usize {
        self.q.len()
    }

    fn to_vector(&self) -> DVector<Real> {
        self.q.clone()
    }

    fn from_vector(v: &DVector<Real>) -> Self {
        Self { q: v.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_and_dim() {
        let s = PointState::from_slice(&[1.0, -2.0, 0.5]);
        assert_eq!(s.dim(), 3);
        assert_eq!(PointState::from_vector(&s.to_vector()), s);
    }
}
