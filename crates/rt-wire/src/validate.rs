//! Record validation at the deserialization boundary.

use crate::error::{WireError, WireResult};
use crate::schema::{
    DynamicsSpec, PlanarDubinsConfig, PointKinematicsConfig, QuadrotorDecoupledConfig,
    WIRE_VERSION,
};

fn check_version(version: u32) -> WireResult<()> {
    if version > WIRE_VERSION {
        return Err(WireError::UnsupportedVersion {
            got: version,
            supported: WIRE_VERSION,
        });
    }
    Ok(())
}

fn check_non_negative(value: f64, field: &'static str) -> WireResult<()> {
    if !value.is_finite() {
        return Err(WireError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(WireError::Negative { field, value });
    }
    Ok(())
}

fn check_finite(value: f64, field: &'static str) -> WireResult<()> {
    if !value.is_finite() {
        return Err(WireError::NonFinite { field, value });
    }
    Ok(())
}

impl PlanarDubinsConfig {
    pub fn validate(&self) -> WireResult<()> {
        check_version(self.version)?;
        check_non_negative(self.speed, "speed")?;
        check_non_negative(self.max_yaw_rate, "max_yaw_rate")?;
        Ok(())
    }
}

impl QuadrotorDecoupledConfig {
    pub fn validate(&self) -> WireResult<()> {
        check_version(self.version)?;
        check_non_negative(self.max_pitch, "max_pitch")?;
        check_non_negative(self.max_roll, "max_roll")?;
        check_finite(self.min_thrust, "min_thrust")?;
        check_finite(self.max_thrust, "max_thrust")?;
        if self.min_thrust > self.max_thrust {
            return Err(WireError::InvertedLimits {
                field: "thrust",
                lower: self.min_thrust,
                upper: self.max_thrust,
            });
        }
        Ok(())
    }
}

impl PointKinematicsConfig {
    pub fn validate(&self) -> WireResult<()> {
        check_version(self.version)?;
        if self.min_speed.len() != self.max_speed.len() {
            return Err(WireError::LengthMismatch {
                min_len: self.min_speed.len(),
                max_len: self.max_speed.len(),
            });
        }
        if self.min_speed.is_empty() {
            return Err(WireError::Empty);
        }
        for (lo, hi) in self.min_speed.iter().zip(&self.max_speed) {
            check_finite(*lo, "min_speed")?;
            check_finite(*hi, "max_speed")?;
            if lo > hi {
                return Err(WireError::InvertedLimits {
                    field: "speed axis",
                    lower: *lo,
                    upper: *hi,
                });
            }
        }
        Ok(())
    }
}

impl DynamicsSpec {
    pub fn validate(&self) -> WireResult<()> {
        match self {
            DynamicsSpec::PlanarDubins(cfg) => cfg.validate(),
            DynamicsSpec::QuadrotorDecoupled(cfg) => cfg.validate(),
            DynamicsSpec::PointKinematics(cfg) => cfg.validate(),
        }
    }
}
