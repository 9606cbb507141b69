use nalgebra::{DMatrix, DVector};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// End of the integration interval.
pub const HIRES_T1: f64 = 321.8122;

fn hires(u: &DVector<f64>, _p: &(), _t: f64, du: &mut DVector<f64>) {
    let (y1, y2, y3, y4) = (u[0], u[1], u[2], u[3]);
    let (y5, y6, y7, y8) = (u[4], u[5], u[6], u[7]);
    du[0] = -1.71 * y1 + 0.43 * y2 + 8.32 * y3 + 0.0007;
    du[1] = 1.71 * y1 - 8.75 * y2;
    du[2] = -10.03 * y3 + 0.43 * y4 + 0.035 * y5;
    du[3] = 8.32 * y2 + 1.71 * y3 - 1.12 * y4;
    du[4] = -1.745 * y5 + 0.43 * y6 + 0.43 * y7;
    du[5] = -280.0 * y6 * y8 + 0.69 * y4 + 1.71 * y5 - 0.43 * y6 + 0.69 * y7;
    du[6] = 280.0 * y6 * y8 - 1.81 * y7;
    du[7] = -280.0 * y6 * y8 + 1.81 * y7;
}

fn hires_jacobian(u: &DVector<f64>, _p: &(), _t: f64, jac: &mut DMatrix<f64>) {
    let (y6, y8) = (u[5], u[7]);
    jac.fill(0.0);
    jac[(0, 0)] = -1.71;
    jac[(0, 1)] = 0.43;
    jac[(0, 2)] = 8.32;
    jac[(1, 0)] = 1.71;
    jac[(1, 1)] = -8.75;
    jac[(2, 2)] = -10.03;
    jac[(2, 3)] = 0.43;
    jac[(2, 4)] = 0.035;
    jac[(3, 1)] = 8.32;
    jac[(3, 2)] = 1.71;
    jac[(3, 3)] = -1.12;
    jac[(4, 4)] = -1.745;
    jac[(4, 5)] = 0.43;
    jac[(4, 6)] = 0.43;
    jac[(5, 3)] = 0.69;
    jac[(5, 4)] = 1.71;
    jac[(5, 5)] = -0.43 - 280.0 * y8;
    jac[(5, 6)] = 0.69;
    jac[(5, 7)] = -280.0 * y6;
    jac[(6, 5)] = 280.0 * y8;
    jac[(6, 6)] = -1.81;
    jac[(6, 7)] = 280.0 * y6;
    jac[(7, 5)] = -280.0 * y8;
    jac[(7, 6)] = 1.81;
    jac[(7, 7)] = -280.0 * y6;
}

/// The HIRES plant physiology model: eight stiff reaction equations for the growth of a plant
/// under light, on `[0, 321.8122]`.
pub fn hires_problem() -> OdeProblem<DVector<f64>, ()> {
    OdeBuilder::new(ProblemName::Hires.as_str())
        .u0(DVector::from_vec(vec![
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0057,
        ]))
        .tspan(0.0, HIRES_T1)
        .rhs_inplace(hires)
        .jacobian(hires_jacobian)
        .stiff(true)
        .build()
        .expect("hires problem is valid")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::problems::test_utils::{assert_jacobian_matches, assert_overwrites_buffer};

    #[test]
    fn test_hires() {
        let problem = hires_problem();
        assert_eq!(problem.nstates(), 8);
        assert!(problem.is_stiff());
        assert_eq!(*problem.t1(), 321.8122);
        let du = problem.evaluate_derivative(problem.u0(), 0.0);
        assert_relative_eq!(
            du,
            DVector::from_vec(vec![-1.7093, 1.71, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            epsilon = 1e-12
        );
        problem.verify().unwrap();
    }

    #[test]
    fn test_hires_jacobian() {
        let problem = hires_problem();
        let u = DVector::from_vec(vec![0.7, 0.1, 0.05, 0.2, 0.3, 0.4, 0.1, 0.002]);
        assert_overwrites_buffer(&problem, &u);
        assert_jacobian_matches(&problem, &u);
        assert_jacobian_matches(&problem, problem.u0());
    }
}
