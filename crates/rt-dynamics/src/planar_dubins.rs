//! Planar Dubins-car dynamics.

use crate::dynamics::Dynamics;
use crate::error::{DynamicsError, DynamicsResult};
use nalgebra::Vector3;
use rt_control::{ControlBound, IntervalBound};
use rt_core::Real;
use rt_state::PlanarDubins3D;
use rt_wire::PlanarDubinsConfig;
use tracing::debug;

/// Unicycle kinematics at constant forward speed:
///
/// ```text
/// x_dot     = v cos(theta)
/// y_dot     = v sin(theta)
/// theta_dot = u
/// ```
///
/// with scalar yaw-rate control `u` on an interval bound.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarDubinsDynamics {
    speed: Real,
    bound: IntervalBound,
}

impl PlanarDubinsDynamics {
    /// Create from a forward speed (`>= 0`, finite) and a yaw-rate bound.
    pub fn new(speed: Real, bound: IntervalBound) -> DynamicsResult<Self> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(DynamicsError::NonPhysical {
                what: "forward speed",
                value: speed,
            });
        }
        Ok(Self { speed, bound })
    }

    /// Create from a forward speed and the flat bound parameter list
    /// `[u_lower, u_upper]`. Any other arity is a configuration error
    /// and produces no model.
    pub fn from_params(speed: Real, bound_params: &[Real]) -> DynamicsResult<Self> {
        let bound = IntervalBound::from_params(bound_params)?;
        Self::new(speed, bound)
    }

    /// Constant forward speed.
    pub fn speed(&self) -> Real {
        self.speed
    }

    /// Largest yaw-rate magnitude the bound admits.
    pub fn max_yaw_rate(&self) -> Real {
        self.bound.max_magnitude()
    }

    pub fn bound(&self) -> &IntervalBound {
        &self.bound
    }
}

impl Dynamics for PlanarDubinsDynamics {
    type State = PlanarDubins3D;
    type Control = Real;
    type Config = PlanarDubinsConfig;

    fn evaluate(&self, x: &PlanarDubins3D, u: &Real) -> Vector3<Real> {
        Vector3::new(
            self.speed * x.theta().cos(),
            self.speed * x.theta().sin(),
            *u,
        )
    }

    // The Hamiltonian is
    //   H(u) = g_x v cos(theta) + g_y v sin(theta) + g_theta u;
    // only the last term depends on u, so the extremum over the interval
    // is at an endpoint selected by the sign of g_theta. Ties at
    // g_theta = 0 take the upper endpoint. The dynamics are linear in u
    // and the bound is state-independent, so the state is irrelevant
    // here.
    fn optimal_control(
        &self,
        _x: &PlanarDubins3D,
        value_gradient: &Vector3<Real>,
    ) -> DynamicsResult<Real> {
        let g_theta = value_gradient[2];
        Ok(if g_theta >= 0.0 {
            self.bound.upper()
        } else {
            self.bound.lower()
        })
    }

    fn control_bound(&self) -> &dyn ControlBound<Real> {
        &self.bound
    }

    fn to_config(&self) -> PlanarDubinsConfig {
        PlanarDubinsConfig::new(self.speed, self.max_yaw_rate())
    }

    fn from_config(config: &PlanarDubinsConfig) -> DynamicsResult<Self> {
        config.validate()?;
        let bound = IntervalBound::symmetric(config.max_yaw_rate)?;
        let model = Self::new(config.speed, bound)?;
        debug!(
            speed = model.speed,
            max_yaw_rate = config.max_yaw_rate,
            "configured planar Dubins dynamics"
        );
        Ok(model)
    }
}
