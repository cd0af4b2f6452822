//! Record definitions.

use serde::{Deserialize, Serialize};

/// Current wire schema version. Records missing the field deserialize
/// with the current version.
pub const WIRE_VERSION: u32 = 1;

fn default_version() -> u32 {
    WIRE_VERSION
}

/// Parameters of a planar Dubins-car model.
///
/// `speed` is the constant forward velocity; `max_yaw_rate` is the
/// symmetric turn-rate limit (the admissible set is
/// `[-max_yaw_rate, max_yaw_rate]`). Both must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarDubinsConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub speed: f64,
    pub max_yaw_rate: f64,
}

impl PlanarDubinsConfig {
    pub fn new(speed: f64, max_yaw_rate: f64) -> Self {
        Self {
            version: WIRE_VERSION,
            speed,
            max_yaw_rate,
        }
    }
}

/// Parameters of a decoupled-axis quadrotor model.
///
/// Pitch and roll limits are symmetric; thrust has an explicit range
/// because hover sits at `thrust = g`, not at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrotorDecoupledConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub max_pitch: f64,
    pub max_roll: f64,
    pub min_thrust: f64,
    pub max_thrust: f64,
}

impl QuadrotorDecoupledConfig {
    pub fn new(max_pitch: f64, max_roll: f64, min_thrust: f64, max_thrust: f64) -> Self {
        Self {
            version: WIRE_VERSION,
            max_pitch,
            max_roll,
            min_thrust,
            max_thrust,
        }
    }
}

/// Parameters of a velocity-controlled point-mass model: per-axis speed
/// limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointKinematicsConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub min_speed: Vec<f64>,
    pub max_speed: Vec<f64>,
}

impl PointKinematicsConfig {
    pub fn new(min_speed: Vec<f64>, max_speed: Vec<f64>) -> Self {
        Self {
            version: WIRE_VERSION,
            min_speed,
            max_speed,
        }
    }
}

/// Startup-time model selection: one record per vehicle class, tagged by
/// model name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum DynamicsSpec {
    PlanarDubins(PlanarDubinsConfig),
    QuadrotorDecoupled(QuadrotorDecoupledConfig),
    PointKinematics(PointKinematicsConfig),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dubins_json_round_trip() {
        let cfg = PlanarDubinsConfig::new(1.5, 2.0);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PlanarDubinsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn version_defaults_when_absent() {
        let cfg: PlanarDubinsConfig =
            serde_json::from_str(r#"{"speed": 1.0, "max_yaw_rate": 0.5}"#).unwrap();
        assert_eq!(cfg.version, WIRE_VERSION);
    }

    #[test]
    fn spec_is_tagged_by_model() {
        let spec = DynamicsSpec::PlanarDubins(PlanarDubinsConfig::new(1.0, 2.0));
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains(r#""model":"PlanarDubins""#));
        let back: DynamicsSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn point_kinematics_round_trip() {
        let spec = DynamicsSpec::PointKinematics(PointKinematicsConfig::new(
            vec![-1.0, -1.0],
            vec![1.0, 1.0],
        ));
        let json = serde_json::to_string(&spec).unwrap();
        let back: DynamicsSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
