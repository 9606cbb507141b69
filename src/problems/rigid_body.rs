use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// Coefficients of Euler's equations for a free rigid body, built from its principal moments of
/// inertia.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyParams {
    pub i1: f64,
    pub i2: f64,
    pub i3: f64,
}

impl Default for RigidBodyParams {
    fn default() -> Self {
        Self {
            i1: -2.0,
            i2: 1.25,
            i3: -0.5,
        }
    }
}

fn rigid_body(u: &DVector<f64>, p: &RigidBodyParams, _t: f64, du: &mut DVector<f64>) {
    let (y1, y2, y3) = (u[0], u[1], u[2]);
    du[0] = p.i1 * y2 * y3;
    du[1] = p.i2 * y1 * y3;
    du[2] = p.i3 * y1 * y2;
}

fn rigid_body_jacobian(u: &DVector<f64>, p: &RigidBodyParams, _t: f64, jac: &mut DMatrix<f64>) {
    let (y1, y2, y3) = (u[0], u[1], u[2]);
    jac[(0, 0)] = 0.0;
    jac[(0, 1)] = p.i1 * y3;
    jac[(0, 2)] = p.i1 * y2;
    jac[(1, 0)] = p.i2 * y3;
    jac[(1, 1)] = 0.0;
    jac[(1, 2)] = p.i2 * y1;
    jac[(2, 0)] = p.i3 * y2;
    jac[(2, 1)] = p.i3 * y1;
    jac[(2, 2)] = 0.0;
}

/// Euler's equations of a rigid body without external forces, on `[0, 10]` starting from
/// `[1, 0, 0.9]`.
pub fn rigid_body_problem() -> OdeProblem<DVector<f64>, RigidBodyParams> {
    OdeBuilder::new(ProblemName::RigidBody.as_str())
        .p(RigidBodyParams::default())
        .u0(DVector::from_vec(vec![1.0, 0.0, 0.9]))
        .tspan(0.0, 10.0)
        .rhs_inplace(rigid_body)
        .jacobian(rigid_body_jacobian)
        .build()
        .expect("rigid_body problem is valid")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::problems::test_utils::{assert_jacobian_matches, assert_overwrites_buffer};

    #[test]
    fn test_rigid_body() {
        let problem = rigid_body_problem();
        assert!(!problem.is_stiff());
        assert_eq!(problem.tspan(), (&0.0, &10.0));
        let du = problem.evaluate_derivative(problem.u0(), 0.0);
        assert_eq!(du, DVector::from_vec(vec![0.0, 1.125, 0.0]));
        problem.verify().unwrap();
    }

    #[test]
    fn test_rigid_body_invariant() {
        // d/dt (i2 y1^2 - i1 y2^2) = 2 y1 y2 y3 (i2 i1 - i1 i2) = 0
        let problem = rigid_body_problem();
        let u = DVector::from_vec(vec![0.3, -0.7, 0.5]);
        let du = problem.evaluate_derivative(&u, 0.0);
        let p = problem.p();
        let rate = 2.0 * (p.i2 * u[0] * du[0] - p.i1 * u[1] * du[1]);
        assert_relative_eq!(rate, 0.0, epsilon = 1e-14);
        assert_overwrites_buffer(&problem, &u);
        assert_jacobian_matches(&problem, &u);
    }
}
