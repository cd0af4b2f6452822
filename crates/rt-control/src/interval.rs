//! Scalar interval bound.

use crate::bound::ControlBound;
use crate::error::{ControlError, ControlResult};
use rt_core::Real;

/// Closed interval `[lower, upper]` for a scalar control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalBound {
    lower: Real,
    upper: Real,
}

impl IntervalBound {
    /// Create from explicit limits. Limits must be finite and ordered.
    pub fn new(lower: Real, upper: Real) -> ControlResult<Self> {
        if !lower.is_finite() {
            return Err(ControlError::NonFinite {
                what: "interval lower limit",
                value: lower,
            });
        }
        if !upper.is_finite() {
            return Err(ControlError::NonFinite {
                what: "interval upper limit",
                value: upper,
            });
        }
        if lower > upper {
            return Err(ControlError::InvertedLimits {
                what: "interval",
                lower,
                upper,
            });
        }
        Ok(Self { lower, upper })
    }

    /// Create the symmetric interval `[-limit, limit]`.
    pub fn symmetric(limit: Real) -> ControlResult<Self> {
        if !limit.is_finite() {
            return Err(ControlError::NonFinite {
                what: "interval symmetric limit",
                value: limit,
            });
        }
        if limit < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "symmetric limit must be non-negative",
            });
        }
        Self::new(-limit, limit)
    }

    /// Create from a flat parameter list `[lower, upper]`.
    pub fn from_params(params: &[Real]) -> ControlResult<Self> {
        if params.len() != 2 {
            return Err(ControlError::BadParamCount {
                expected: "exactly 2".into(),
                got: params.len(),
            });
        }
        Self::new(params[0], params[1])
    }

    pub fn lower(&self) -> Real {
        self.lower
    }

    pub fn upper(&self) -> Real {
        self.upper
    }

    /// Largest magnitude the interval admits.
    pub fn max_magnitude(&self) -> Real {
        self.lower.abs().max(self.upper.abs())
    }
}

impl ControlBound<Real> for IntervalBound {
    fn contains(&self, u: &Real) -> bool {
        self.lower <= *u && *u <= self.upper
    }

    fn project(&self, u: &Real) -> Real {
        u.clamp(self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_and_projection() {
        let b = IntervalBound::new(-2.0, 2.0).unwrap();
        assert!(b.contains(&0.0));
        assert!(b.contains(&2.0));
        assert!(b.contains(&-2.0));
        assert!(!b.contains(&2.0001));

        assert_eq!(b.project(&3.0), 2.0);
        assert_eq!(b.project(&-5.0), -2.0);
        assert_eq!(b.project(&1.25), 1.25);
    }

    #[test]
    fn from_params_requires_two_values() {
        assert!(IntervalBound::from_params(&[-1.0, 1.0]).is_ok());
        assert!(matches!(
            IntervalBound::from_params(&[1.0]),
            Err(ControlError::BadParamCount { got: 1, .. })
        ));
        assert!(matches!(
            IntervalBound::from_params(&[0.0, 1.0, 2.0]),
            Err(ControlError::BadParamCount { got: 3, .. })
        ));
    }

    #[test]
    fn rejects_bad_limits() {
        assert!(IntervalBound::new(1.0, -1.0).is_err());
        assert!(IntervalBound::new(Real::NAN, 1.0).is_err());
        assert!(IntervalBound::new(0.0, Real::INFINITY).is_err());
        assert!(IntervalBound::symmetric(-1.0).is_err());
    }

    #[test]
    fn symmetric_limits() {
        let b = IntervalBound::symmetric(2.5).unwrap();
        assert_eq!(b.lower(), -2.5);
        assert_eq!(b.upper(), 2.5);
        assert_eq!(b.max_magnitude(), 2.5);
    }
}
