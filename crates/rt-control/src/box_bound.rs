//! Per-axis box bound.

use crate::bound::ControlBound;
use crate::error::{ControlError, ControlResult};
use nalgebra::{DVector, Vector3};
use rt_core::Real;

/// Axis-aligned box: independent `[lower_i, upper_i]` per control axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxBound {
    lower: DVector<Real>,
    upper: DVector<Real>,
}

impl BoxBound {
    /// Create from explicit per-axis limits of equal dimension.
    pub fn new(lower: DVector<Real>, upper: DVector<Real>) -> ControlResult<Self> {
        if lower.len() != upper.len() {
            return Err(ControlError::DimensionMismatch {
                what: "box limit vectors",
                expected: lower.len(),
                got: upper.len(),
            });
        }
        for i in 0..lower.len() {
            if !lower[i].is_finite() {
                return Err(ControlError::NonFinite {
                    what: "box lower limit",
                    value: lower[i],
                });
            }
            if !upper[i].is_finite() {
                return Err(ControlError::NonFinite {
                    what: "box upper limit",
                    value: upper[i],
                });
            }
            if lower[i] > upper[i] {
                return Err(ControlError::InvertedLimits {
                    what: "box axis",
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Create from a flat parameter list: `n` lowers followed by `n` uppers.
    pub fn from_params(params: &[Real]) -> ControlResult<Self> {
        if params.is_empty() || params.len() % 2 != 0 {
            return Err(ControlError::BadParamCount {
                expected: "a positive even count (lowers then uppers)".into(),
                got: params.len(),
            });
        }
        let n = params.len() / 2;
        Self::new(
            DVector::from_column_slice(&params[..n]),
            DVector::from_column_slice(&params[n..]),
        )
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &DVector<Real> {
        &self.lower
    }

    pub fn upper(&self) -> &DVector<Real> {
        &self.upper
    }

    fn contains_slice(&self, u: &[Real]) -> bool {
        assert_eq!(
            u.len(),
            self.dim(),
            "control dimension {} does not match box dimension {}",
            u.len(),
            self.dim()
        );
        u.iter()
            .enumerate()
            .all(|(i, ui)| self.lower[i] <= *ui && *ui <= self.upper[i])
    }
}

impl ControlBound<DVector<Real>> for BoxBound {
    fn contains(&self, u: &DVector<Real>) -> bool {
        self.contains_slice(u.as_slice())
    }

    fn project(&self, u: &DVector<Real>) -> DVector<Real> {
        assert_eq!(u.len(), self.dim());
        DVector::from_fn(self.dim(), |i, _| u[i].clamp(self.lower[i], self.upper[i]))
    }
}

// Fixed-size view for three-axis control spaces.
impl ControlBound<Vector3<Real>> for BoxBound {
    fn contains(&self, u: &Vector3<Real>) -> bool {
        self.contains_slice(u.as_slice())
    }

    fn project(&self, u: &Vector3<Real>) -> Vector3<Real> {
        assert_eq!(self.dim(), 3);
        Vector3::from_fn(|i, _| u[i].clamp(self.lower[i], self.upper[i]))
    }
}
