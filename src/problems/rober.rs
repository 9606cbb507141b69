use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// Reaction rates of Robertson's chemical kinetics problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoberParams {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
}

impl Default for RoberParams {
    fn default() -> Self {
        Self {
            k1: 0.04,
            k2: 3e7,
            k3: 1e4,
        }
    }
}

fn rober(u: &DVector<f64>, p: &RoberParams, _t: f64, du: &mut DVector<f64>) {
    let (y1, y2, y3) = (u[0], u[1], u[2]);
    du[0] = -p.k1 * y1 + p.k3 * y2 * y3;
    du[1] = p.k1 * y1 - p.k2 * y2 * y2 - p.k3 * y2 * y3;
    du[2] = p.k2 * y2 * y2;
}

fn rober_jacobian(u: &DVector<f64>, p: &RoberParams, _t: f64, jac: &mut DMatrix<f64>) {
    let (y2, y3) = (u[1], u[2]);
    jac[(0, 0)] = -p.k1;
    jac[(0, 1)] = p.k3 * y3;
    jac[(0, 2)] = p.k3 * y2;
    jac[(1, 0)] = p.k1;
    jac[(1, 1)] = -2.0 * p.k2 * y2 - p.k3 * y3;
    jac[(1, 2)] = -p.k3 * y2;
    jac[(2, 0)] = 0.0;
    jac[(2, 1)] = 2.0 * p.k2 * y2;
    jac[(2, 2)] = 0.0;
}

/// Robertson's stiff chemical kinetics problem on `[0, 1e11]`, starting from `[1, 0, 0]`.
pub fn rober_problem() -> OdeProblem<DVector<f64>, RoberParams> {
    OdeBuilder::new(ProblemName::Rober.as_str())
        .p(RoberParams::default())
        .u0(DVector::from_vec(vec![1.0, 0.0, 0.0]))
        .tspan(0.0, 1e11)
        // dy1/dt = -k1 y1 + k3 y2 y3
        // dy2/dt =  k1 y1 - k2 y2^2 - k3 y2 y3
        // dy3/dt =  k2 y2^2
        .rhs_inplace(rober)
        .jacobian(rober_jacobian)
        .stiff(true)
        .build()
        .expect("rober problem is valid")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::problems::test_utils::{assert_jacobian_matches, assert_overwrites_buffer};

    #[test]
    fn test_rober() {
        let problem = rober_problem();
        assert!(problem.is_stiff());
        assert_eq!(problem.tspan(), (&0.0, &1e11));
        let du = problem.evaluate_derivative(problem.u0(), 0.0);
        assert_eq!(du, DVector::from_vec(vec![-0.04, 0.04, 0.0]));
        problem.verify().unwrap();
    }

    #[test]
    fn test_rober_conserves_mass() {
        let problem = rober_problem();
        let u = DVector::from_vec(vec![0.9, 2e-5, 0.1]);
        let du = problem.evaluate_derivative(&u, 0.0);
        assert_relative_eq!(du.sum(), 0.0, epsilon = 1e-12);
        assert_overwrites_buffer(&problem, &u);
    }

    #[test]
    fn test_rober_jacobian() {
        let problem = rober_problem();
        assert_jacobian_matches(&problem, &DVector::from_vec(vec![0.9, 2e-5, 0.1]));
        let jac = problem.evaluate_jacobian(problem.u0(), 0.0).unwrap();
        assert_eq!(
            jac,
            DMatrix::from_row_slice(3, 3, &[-0.04, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.0])
        );
    }
}
