//! Startup-time model selection.

use crate::dynamics::Dynamics;
use crate::error::DynamicsResult;
use crate::planar_dubins::PlanarDubinsDynamics;
use crate::point_kinematics::PointKinematics;
use crate::quadrotor::QuadrotorDecoupled6D;
use rt_wire::DynamicsSpec;
use tracing::debug;

/// A dynamics model chosen by vehicle class at configuration time.
///
/// The variants have different state and control types, so per-step
/// queries go through the concrete model (planners are generic over
/// [`Dynamics`]); this union covers the configuration plumbing that has
/// to handle "some vehicle" before the types are pinned down.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDynamics {
    PlanarDubins(PlanarDubinsDynamics),
    QuadrotorDecoupled(QuadrotorDecoupled6D),
    PointKinematics(PointKinematics),
}

impl AnyDynamics {
    /// Build the model a wire spec names.
    pub fn from_spec(spec: &DynamicsSpec) -> DynamicsResult<Self> {
        let model = match spec {
            DynamicsSpec::PlanarDubins(cfg) => {
                Self::PlanarDubins(PlanarDubinsDynamics::from_config(cfg)?)
            }
            DynamicsSpec::QuadrotorDecoupled(cfg) => {
                Self::QuadrotorDecoupled(QuadrotorDecoupled6D::from_config(cfg)?)
            }
            DynamicsSpec::PointKinematics(cfg) => {
                Self::PointKinematics(PointKinematics::from_config(cfg)?)
            }
        };
        debug!(model = model.model_name(), "selected dynamics model");
        Ok(model)
    }

    /// The wire spec reproducing this model's parameters.
    pub fn to_spec(&self) -> DynamicsSpec {
        match self {
            Self::PlanarDubins(d) => DynamicsSpec::PlanarDubins(d.to_config()),
            Self::QuadrotorDecoupled(d) => DynamicsSpec::QuadrotorDecoupled(d.to_config()),
            Self::PointKinematics(d) => DynamicsSpec::PointKinematics(d.to_config()),
        }
    }

    pub fn model_name(&self) -> &'static str {
        match self {
            Self::PlanarDubins(_) => "PlanarDubins",
            Self::QuadrotorDecoupled(_) => "QuadrotorDecoupled",
            Self::PointKinematics(_) => "PointKinematics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_wire::{PlanarDubinsConfig, PointKinematicsConfig, QuadrotorDecoupledConfig};

    #[test]
    fn selects_by_tag() {
        let spec = DynamicsSpec::PlanarDubins(PlanarDubinsConfig::new(1.0, 2.0));
        let model = AnyDynamics::from_spec(&spec).unwrap();
        assert_eq!(model.model_name(), "PlanarDubins");
        assert_eq!(model.to_spec(), spec);
    }

    #[test]
    fn spec_round_trip_for_every_model() {
        let specs = [
            DynamicsSpec::PlanarDubins(PlanarDubinsConfig::new(0.8, 1.5)),
            DynamicsSpec::QuadrotorDecoupled(QuadrotorDecoupledConfig::new(0.1, 0.1, 4.0, 16.0)),
            DynamicsSpec::PointKinematics(PointKinematicsConfig::new(
                vec![-1.0, -1.0],
                vec![1.0, 1.0],
            )),
        ];
        for spec in specs {
            let model = AnyDynamics::from_spec(&spec).unwrap();
            assert_eq!(model.to_spec(), spec);
        }
    }

    #[test]
    fn invalid_spec_is_rejected() {
        let spec = DynamicsSpec::PlanarDubins(PlanarDubinsConfig::new(-1.0, 2.0));
        assert!(AnyDynamics::from_spec(&spec).is_err());
    }
}
