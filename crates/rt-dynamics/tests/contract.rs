//! The contract as a generic caller sees it: one code path that works
//! for any vehicle class, with unimplemented capabilities surfaced as a
//! branch, not a number.

use nalgebra::{DVector, Vector3};
use rt_dynamics::{Dynamics, DynamicsError, PlanarDubinsDynamics, PointKinematics};
use rt_state::{PlanarDubins3D, PointState, VehicleState};

/// Synthesize a safety control if the model supports it, checking the
/// result against the model's own bound.
fn saturating_control<D: Dynamics>(
    d: &D,
    x: &D::State,
    g: &<D::State as VehicleState>::Vector,
) -> Option<D::Control> {
    match d.optimal_control(x, g) {
        Ok(u) => {
            assert!(d.control_bound().contains(&u));
            Some(u)
        }
        Err(DynamicsError::Unimplemented { .. }) => None,
        Err(e) => panic!("unexpected synthesis error: {e}"),
    }
}

#[test]
fn dubins_supports_synthesis() {
    let d = PlanarDubinsDynamics::from_params(1.0, &[-2.0, 2.0]).unwrap();
    let x = PlanarDubins3D::new(0.0, 0.0, 0.5);
    let u = saturating_control(&d, &x, &Vector3::new(0.0, 0.0, -0.3));
    assert_eq!(u, Some(-2.0));
}

#[test]
fn point_kinematics_reports_unimplemented() {
    let d = PointKinematics::from_params(&[-1.0, -1.0, 1.0, 1.0]).unwrap();
    let x = PointState::from_slice(&[0.0, 0.0]);
    let g = DVector::from_column_slice(&[1.0, 0.0]);
    assert_eq!(saturating_control(&d, &x, &g), None);
}

#[test]
fn bounds_are_queryable_through_the_trait() {
    let d = PlanarDubinsDynamics::from_params(1.0, &[-2.0, 2.0]).unwrap();
    assert!(d.control_bound().contains(&1.99));
    assert!(!d.control_bound().contains(&2.01));
    assert_eq!(d.control_bound().project(&5.0), 2.0);
}
