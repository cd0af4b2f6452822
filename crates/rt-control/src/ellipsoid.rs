//! Axis-aligned ellipsoid bound.

use crate::bound::ControlBound;
use crate::error::{ControlError, ControlResult};
use nalgebra::DVector;
use rt_core::Real;

/// Rounding slack on the quadratic level at the boundary, so that exact
/// projections onto the surface still count as members.
const LEVEL_TOL: Real = 1e-9;

/// Quadratic constraint `sum(((u_i - c_i)/a_i)^2) <= 1` with center `c`
/// and positive semi-axes `a`.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipsoidBound {
    center: DVector<Real>,
    semi_axes: DVector<Real>,
}

impl EllipsoidBound {
    /// Create from a center and per-axis semi-axes (all positive, finite).
    pub fn new(center: DVector<Real>, semi_axes: DVector<Real>) -> ControlResult<Self> {
        if center.len() != semi_axes.len() {
            return Err(ControlError::DimensionMismatch {
                what: "ellipsoid center/semi-axes",
                expected: center.len(),
                got: semi_axes.len(),
            });
        }
        for i in 0..center.len() {
            if !center[i].is_finite() {
                return Err(ControlError::NonFinite {
                    what: "ellipsoid center",
                    value: center[i],
                });
            }
            if !semi_axes[i].is_finite() {
                return Err(ControlError::NonFinite {
                    what: "ellipsoid semi-axis",
                    value: semi_axes[i],
                });
            }
            if semi_axes[i] <= 0.0 {
                return Err(ControlError::InvalidArg {
                    what: "ellipsoid semi-axes must be positive",
                });
            }
        }
        Ok(Self { center, semi_axes })
    }

    /// Create from a flat parameter list: `n` center entries followed by
    /// `n` semi-axes.
    pub fn from_params(params: &[Real]) -> ControlResult<Self> {
        if params.is_empty() || params.len() % 2 != 0 {
            return Err(ControlError::BadParamCount {
                expected: "a positive even count (center then semi-axes)".into(),
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
        self.center.len()
    }

    pub fn center(&self) -> &DVector<Real> {
        &self.center
    }

    pub fn semi_axes(&self) -> &DVector<Real> {
        &self.semi_axes
    }

    /// Quadratic level of `u`: `< 1` inside, `1` on the surface.
    pub fn level(&self, u: &DVector<Real>) -> Real {
        assert_eq!(
            u.len(),
            self.dim(),
            "control dimension {} does not match ellipsoid dimension {}",
            u.len(),
            self.dim()
        );
        (0..self.dim())
            .map(|i| {
                let r = (u[i] - self.center[i]) / self.semi_axes[i];
                r * r
            })
            .sum()
    }

    // Euclidean projection onto the surface for an exterior point.
    //
    // KKT stationarity gives w_i = c_i + d_i * a_i^2 / (a_i^2 + lam) with
    // d = u - c, and the multiplier solves
    //   g(lam) = sum((a_i d_i)^2 / (a_i^2 + lam)^2) - 1 = 0.
    // g is convex and decreasing for lam >= 0 and g(0) > 0 outside the
    // set, so Newton from lam = 0 climbs monotonically to the root.
    fn project_exterior(&self, u: &DVector<Real>) -> DVector<Real> {
        const MAX_ITERATIONS: usize = 100;
        const G_TOL: Real = 1e-13;

        let d = u - &self.center;
        let mut lam = 0.0_f64;
        for _ in 0..MAX_ITERATIONS {
            let mut g = -1.0;
            let mut dg = 0.0;
            for i in 0..self.dim() {
                let a2 = self.semi_axes[i] * self.semi_axes[i];
                let den = a2 + lam;
                let t = a2 * d[i] / den;
                g += t * t / a2;
                dg += -2.0 * t * t / (a2 * den);
            }
            if g.abs() <= G_TOL {
                break;
            }
            lam -= g / dg;
        }

        DVector::from_fn(self.dim(), |i, _| {
            let a2 = self.semi_axes[i] * self.semi_axes[i];
            self.center[i] + d[i] * a2 / (a2 + lam)
        })
    }
}

impl ControlBound<DVector<Real>> for EllipsoidBound {
    fn contains(&self, u: &DVector<Real>) -> bool {
        self.level(u) <= 1.0 + LEVEL_TOL
    }

    fn project(&self, u: &DVector<Real>) -> DVector<Real> {
        if self.contains(u) {
            return u.clone();
        }
        self.project_exterior(u)
    }
}
