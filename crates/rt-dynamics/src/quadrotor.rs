//! Decoupled-axis quadrotor dynamics.

use crate::dynamics::Dynamics;
use crate::error::{DynamicsError, DynamicsResult};
use nalgebra::{DVector, Vector3, Vector6};
use rt_control::{BoxBound, ControlBound};
use rt_core::Real;
use rt_state::PositionVelocity;
use rt_wire::QuadrotorDecoupledConfig;
use tracing::debug;

/// Standard gravity [m/s^2].
pub const GRAVITY: Real = 9.81;

const PARAM_COUNT: usize = 6;

/// Near-hover quadrotor with the three axes decoupled. State is position
/// and velocity; controls are `(pitch, roll, thrust)` in a box:
///
/// ```text
/// p_dot  = v
/// vx_dot =  g tan(pitch)
/// vy_dot = -g tan(roll)
/// vz_dot =  thrust - g
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrotorDecoupled6D {
    bound: BoxBound,
}

impl QuadrotorDecoupled6D {
    /// Create from a three-axis control bound.
    pub fn new(bound: BoxBound) -> DynamicsResult<Self> {
        if bound.dim() != 3 {
            return Err(DynamicsError::BadParamCount {
                model: "QuadrotorDecoupled6D",
                expected: 2 * 3,
                got: 2 * bound.dim(),
            });
        }
        Ok(Self { bound })
    }

    /// Create from the flat bound parameter list
    /// `[pitch_lo, roll_lo, thrust_lo, pitch_hi, roll_hi, thrust_hi]`.
    pub fn from_params(bound_params: &[Real]) -> DynamicsResult<Self> {
        if bound_params.len() != PARAM_COUNT {
            return Err(DynamicsError::BadParamCount {
                model: "QuadrotorDecoupled6D",
                expected: PARAM_COUNT,
                got: bound_params.len(),
            });
        }
        Self::new(BoxBound::from_params(bound_params)?)
    }

    pub fn bound(&self) -> &BoxBound {
        &self.bound
    }
}

impl Dynamics for QuadrotorDecoupled6D {
    type State = PositionVelocity;
    type Control = Vector3<Real>;
    type Config = QuadrotorDecoupledConfig;

    fn evaluate(&self, x: &PositionVelocity, u: &Vector3<Real>) -> Vector6<Real> {
        let v = x.velocity();
        Vector6::new(
            v[0],
            v[1],
            v[2],
            GRAVITY * u[0].tan(),
            -GRAVITY * u[1].tan(),
            u[2] - GRAVITY,
        )
    }

    // Each control couples to exactly one velocity-gradient component,
    // monotonically (tan is increasing), so the Hamiltonian extremum is
    // per-axis bang-bang. Pitch and thrust couple positively, roll
    // negatively. Ties take the endpoint selected for a positive
    // gradient.
    fn optimal_control(
        &self,
        _x: &PositionVelocity,
        value_gradient: &Vector6<Real>,
    ) -> DynamicsResult<Vector3<Real>> {
        let lower = self.bound.lower();
        let upper = self.bound.upper();
        let pitch = if value_gradient[3] >= 0.0 {
            upper[0]
        } else {
            lower[0]
        };
        let roll = if value_gradient[4] >= 0.0 {
            lower[1]
        } else {
            upper[1]
        };
        let thrust = if value_gradient[5] >= 0.0 {
            upper[2]
        } else {
            lower[2]
        };
        Ok(Vector3::new(pitch, roll, thrust))
    }

    fn control_bound(&self) -> &dyn ControlBound<Vector3<Real>> {
        &self.bound
    }

    fn to_config(&self) -> QuadrotorDecoupledConfig {
        let lower = self.bound.lower();
        let upper = self.bound.upper();
        QuadrotorDecoupledConfig::new(
            lower[0].abs().max(upper[0].abs()),
            lower[1].abs().max(upper[1].abs()),
            lower[2],
            upper[2],
        )
    }

    fn from_config(config: &QuadrotorDecoupledConfig) -> DynamicsResult<Self> {
        config.validate()?;
        let bound = BoxBound::new(
            DVector::from_column_slice(&[-config.max_pitch, -config.max_roll, config.min_thrust]),
            DVector::from_column_slice(&[config.max_pitch, config.max_roll, config.max_thrust]),
        )?;
        let model = Self::new(bound)?;
        debug!(
            max_pitch = config.max_pitch,
            max_roll = config.max_roll,
            "configured decoupled quadrotor dynamics"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::{Tolerances, nearly_equal};
    use rt_state::VehicleState;

    fn model() -> QuadrotorDecoupled6D {
        // pitch/roll in [-0.2, 0.2] rad, thrust in [4.0, 16.0] m/s^2
        QuadrotorDecoupled6D::from_params(&[-0.2, -0.2, 4.0, 0.2, 0.2, 16.0]).unwrap()
    }

    fn state() -> PositionVelocity {
        PositionVelocity::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.5, -0.5, 0.1))
    }

    #[test]
    fn derivative_formula() {
        let d = model();
        let u = Vector3::new(0.1, -0.05, 12.0);
        let dot = d.evaluate(&state(), &u);
        let tol = Tolerances::default();
        assert_eq!(dot[0], 0.5);
        assert_eq!(dot[1], -0.5);
        assert_eq!(dot[2], 0.1);
        assert!(nearly_equal(dot[3], GRAVITY * 0.1_f64.tan(), tol));
        assert!(nearly_equal(dot[4], -GRAVITY * (-0.05_f64).tan(), tol));
        assert!(nearly_equal(dot[5], 12.0 - GRAVITY, tol));
    }

    #[test]
    fn hover_thrust_cancels_gravity() {
        let d = model();
        let u = Vector3::new(0.0, 0.0, GRAVITY);
        let dot = d.evaluate(&state(), &u);
        assert_eq!(dot[3], 0.0);
        assert_eq!(dot[4], 0.0);
        assert_eq!(dot[5], 0.0);
    }

    #[test]
    fn bang_bang_per_axis() {
        let d = model();
        let x = state();

        // Positive velocity gradients everywhere: pitch and thrust go
        // high (positive coupling), roll goes low (negative coupling).
        let g = Vector6::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let u = d.optimal_control(&x, &g).unwrap();
        assert_eq!(u, Vector3::new(0.2, -0.2, 16.0));

        let g = Vector6::new(0.0, 0.0, 0.0, -1.0, -1.0, -1.0);
        let u = d.optimal_control(&x, &g).unwrap();
        assert_eq!(u, Vector3::new(-0.2, 0.2, 4.0));
    }

    #[test]
    fn optimal_control_is_admissible() {
        let d = model();
        let g = Vector6::new(0.2, -0.1, 0.4, -0.9, 0.3, 0.0);
        let u = d.optimal_control(&state(), &g).unwrap();
        assert!(d.bound().contains(&u));
    }

    #[test]
    fn position_gradient_components_are_ignored() {
        // Position gradients enter the Hamiltonian through terms that do
        // not depend on u.
        let d = model();
        let g1 = Vector6::new(5.0, -5.0, 5.0, 1.0, 1.0, 1.0);
        let g2 = Vector6::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        assert_eq!(
            d.optimal_control(&state(), &g1).unwrap(),
            d.optimal_control(&state(), &g2).unwrap()
        );
    }

    #[test]
    fn from_params_requires_six_values() {
        assert!(matches!(
            QuadrotorDecoupled6D::from_params(&[-0.2, 0.2]),
            Err(DynamicsError::BadParamCount {
                expected: 6,
                got: 2,
                ..
            })
        ));
        assert!(QuadrotorDecoupled6D::from_params(&[]).is_err());
    }

    #[test]
    fn config_round_trip_reproduces_parameters() {
        let d = model();
        let cfg = d.to_config();
        assert_eq!(cfg.max_pitch, 0.2);
        assert_eq!(cfg.max_roll, 0.2);
        assert_eq!(cfg.min_thrust, 4.0);
        assert_eq!(cfg.max_thrust, 16.0);

        let fresh = QuadrotorDecoupled6D::from_config(&cfg).unwrap();
        assert_eq!(fresh.to_config(), cfg);
        assert_eq!(fresh.bound(), d.bound());
    }

    #[test]
    fn derivative_dimension_matches_state() {
        let d = model();
        let x = state();
        let dot = d.evaluate(&x, &Vector3::new(0.0, 0.0, GRAVITY));
        assert_eq!(dot.len(), x.dim());
    }
}
