//! Velocity-controlled point-mass kinematics.

use crate::dynamics::Dynamics;
use crate::error::{DynamicsError, DynamicsResult};
use nalgebra::DVector;
use rt_control::{BoxBound, ControlBound, ControlError};
use rt_core::Real;
use rt_state::PointState;
use rt_wire::PointKinematicsConfig;
use tracing::debug;

/// A point mass whose control IS its velocity, bounded per axis. Useful
/// for geometric planners that work directly in configuration space.
///
/// There is no Hamiltonian law for this model: `optimal_control` reports
/// the capability as unimplemented rather than inventing a number.
#[derive(Debug, Clone, PartialEq)]
pub struct PointKinematics {
    bound: BoxBound,
}

impl PointKinematics {
    /// Create from a per-axis speed bound (at least one axis).
    pub fn new(bound: BoxBound) -> DynamicsResult<Self> {
        if bound.dim() == 0 {
            return Err(DynamicsError::Bound(ControlError::InvalidArg {
                what: "kinematic speed bound needs at least one axis",
            }));
        }
        Ok(Self { bound })
    }

    /// Create from the flat parameter list: `n` minimum speeds followed
    /// by `n` maximum speeds.
    pub fn from_params(bound_params: &[Real]) -> DynamicsResult<Self> {
        Self::new(BoxBound::from_params(bound_params)?)
    }

    pub fn bound(&self) -> &BoxBound {
        &self.bound
    }

    /// Configuration-space dimension this model moves in.
    pub fn dim(&self) -> usize {
        self.bound.dim()
    }

    /// Time to traverse from `x1` to `x2` moving at the extreme
    /// admissible speed toward the goal in every axis; the slowest axis
    /// dominates. Infinite when some axis cannot make progress in the
    /// required direction.
    pub fn best_possible_time(&self, x1: &PointState, x2: &PointState) -> Real {
        assert_eq!(
            x1.configuration().len(),
            self.dim(),
            "state dimension {} does not match bound dimension {}",
            x1.configuration().len(),
            self.dim()
        );
        assert_eq!(x2.configuration().len(), self.dim());

        let mut time: Real = 0.0;
        for i in 0..self.dim() {
            let delta = x2.configuration()[i] - x1.configuration()[i];
            let axis_time = if delta > 0.0 {
                let v = self.bound.upper()[i];
                if v > 0.0 { delta / v } else { Real::INFINITY }
            } else if delta < 0.0 {
                let v = self.bound.lower()[i];
                if v < 0.0 { delta / v } else { Real::INFINITY }
            } else {
                0.0
            };
            time = time.max(axis_time);
        }
        time
    }
}

impl Dynamics for PointKinematics {
    type State = PointState;
    type Control = DVector<Real>;
    type Config = PointKinematicsConfig;

    fn evaluate(&self, x: &PointState, u: &DVector<Real>) -> DVector<Real> {
        assert_eq!(
            u.len(),
            x.configuration().len(),
            "control dimension {} does not match configuration dimension {}",
            u.len(),
            x.configuration().len()
        );
        u.clone()
    }

    fn optimal_control(
        &self,
        _x: &PointState,
        _value_gradient: &DVector<Real>,
    ) -> DynamicsResult<DVector<Real>> {
        Err(DynamicsError::Unimplemented {
            model: "PointKinematics",
            operation: "optimal_control",
        })
    }

    fn control_bound(&self) -> &dyn ControlBound<DVector<Real>> {
        &self.bound
    }

    fn to_config(&self) -> PointKinematicsConfig {
        PointKinematicsConfig::new(
            self.bound.lower().as_slice().to_vec(),
            self.bound.upper().as_slice().to_vec(),
        )
    }

    fn from_config(config: &PointKinematicsConfig) -> DynamicsResult<Self> {
        config.validate()?;
        let bound = BoxBound::new(
            DVector::from_column_slice(&config.min_speed),
            DVector::from_column_slice(&config.max_speed),
        )?;
        let model = Self::new(bound)?;
        debug!(dim = model.dim(), "configured point kinematics");
        Ok(model)
    }
}
