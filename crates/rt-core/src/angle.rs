//! Heading canonicalization.

use crate::numeric::Real;
use std::f64::consts::PI;

/// Wrap an angle to the canonical range `[-pi, pi)`.
///
/// All heading-like state coordinates are stored in this range. Derivatives
/// and value-function gradients are plain reals and must NOT be wrapped.
pub fn wrap_to_pi(theta: Real) -> Real {
    let two_pi = 2.0 * PI;
    let wrapped = (theta + PI).rem_euclid(two_pi) - PI;
    // rem_euclid can land exactly on the open upper endpoint after rounding.
    if wrapped >= PI { -PI } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn identity_inside_range() {
        let tol = Tolerances::default();
        assert!(nearly_equal(wrap_to_pi(0.0), 0.0, tol));
        assert!(nearly_equal(wrap_to_pi(1.5), 1.5, tol));
        assert!(nearly_equal(wrap_to_pi(-3.0), -3.0, tol));
    }

    #[test]
    fn wraps_full_turns() {
        let tol = Tolerances::default();
        assert!(nearly_equal(wrap_to_pi(2.0 * PI), 0.0, tol));
        assert!(nearly_equal(wrap_to_pi(-2.0 * PI), 0.0, tol));
        assert!(nearly_equal(wrap_to_pi(PI + 0.5), -PI + 0.5, tol));
        // Odd multiples of pi land on the wrap seam; either side is the
        // same point on the circle.
        assert!(wrap_to_pi(3.0 * PI).cos() < -1.0 + 1e-12);
    }

    #[test]
    fn upper_endpoint_is_open() {
        assert_eq!(wrap_to_pi(PI), -PI);
        assert!(wrap_to_pi(PI - 1e-9) < PI);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn always_in_canonical_range(theta in -1e6_f64..1e6_f64) {
                let w = wrap_to_pi(theta);
                prop_assert!((-PI..PI).contains(&w));
            }

            #[test]
            fn periodic_in_two_pi(theta in -1e3_f64..1e3_f64) {
                let a = wrap_to_pi(theta);
                let b = wrap_to_pi(theta + 2.0 * PI);
                // Compare on the circle: inputs a few ulps from the wrap
                // seam may come out on opposite sides of it.
                let diff = a - b;
                prop_assert!(diff.sin().abs() < 1e-9 && diff.cos() > 0.0);
            }
        }
    }
}
