use std::ops::Range;

use nalgebra::DVector;

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// Number of bodies; body `j` (0-based) has mass `j + 1`.
pub const NBODIES: usize = 7;

/// Positions in `x` and `y`, followed by the velocities in `x` and `y`.
pub const X: Range<usize> = 0..NBODIES;
pub const Y: Range<usize> = NBODIES..2 * NBODIES;
pub const VX: Range<usize> = 2 * NBODIES..3 * NBODIES;
pub const VY: Range<usize> = 3 * NBODIES..4 * NBODIES;

fn mass(j: usize) -> f64 {
    (j + 1) as f64
}

fn pleiades(u: &DVector<f64>, _p: &(), _t: f64, du: &mut DVector<f64>) {
    let (x, y) = (&u.as_slice()[X], &u.as_slice()[Y]);
    for i in 0..NBODIES {
        du[X.start + i] = u[VX.start + i];
        du[Y.start + i] = u[VY.start + i];

        let mut ax = 0.0;
        let mut ay = 0.0;
        for j in (0..NBODIES).filter(|&j| j != i) {
            let dx = x[j] - x[i];
            let dy = y[j] - y[i];
            let r = (dx * dx + dy * dy).powf(1.5);
            ax += mass(j) * dx / r;
            ay += mass(j) * dy / r;
        }
        du[VX.start + i] = ax;
        du[VY.start + i] = ay;
    }
}

/// Seven point masses in the plane under mutual gravitation, on `[0, 3]`.
pub fn pleiades_problem() -> OdeProblem<DVector<f64>, ()> {
    #[rustfmt::skip]
    let u0 = vec![
        // x
        3.0, 3.0, -1.0, -3.0, 2.0, -2.0, 2.0,
        // y
        3.0, -3.0, 2.0, 0.0, 0.0, -4.0, 4.0,
        // x'
        0.0, 0.0, 0.0, 0.0, 0.0, 1.75, -1.5,
        // y'
        0.0, 0.0, 0.0, -1.25, 1.0, 0.0, 0.0,
    ];
    OdeBuilder::new(ProblemName::Pleiades.as_str())
        .u0(DVector::from_vec(u0))
        .tspan(0.0, 3.0)
        .rhs_inplace(pleiades)
        .build()
        .expect("pleiades problem is valid")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::problems::test_utils::assert_overwrites_buffer;

    #[test]
    fn test_pleiades() {
        let problem = pleiades_problem();
        assert_eq!(problem.nstates(), 28);
        assert_eq!(problem.tspan(), (&0.0, &3.0));
        let du = problem.evaluate_derivative(problem.u0(), 0.0);
        assert_eq!(du.rows(X.start, NBODIES), problem.u0().rows(VX.start, NBODIES));
        assert_eq!(du.rows(Y.start, NBODIES), problem.u0().rows(VY.start, NBODIES));
        assert_overwrites_buffer(&problem, problem.u0());
        problem.verify().unwrap();
    }

    #[test]
    fn test_pleiades_momentum() {
        // pairwise forces cancel, so the mass weighted accelerations sum to zero
        let problem = pleiades_problem();
        let du = problem.evaluate_derivative(problem.u0(), 0.0);
        let px: f64 = (0..NBODIES).map(|i| mass(i) * du[VX.start + i]).sum();
        let py: f64 = (0..NBODIES).map(|i| mass(i) * du[VY.start + i]).sum();
        assert_relative_eq!(px, 0.0, epsilon = 1e-12);
        assert_relative_eq!(py, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pleiades_two_bodies() {
        // body 0 at (3, 3) and body 1 at (3, -3) attract along y
        let problem = pleiades_problem();
        let mut u = DVector::zeros(28);
        let far = 1e8;
        for i in 2..NBODIES {
            u[X.start + i] = far * i as f64;
            u[Y.start + i] = far;
        }
        u[X.start] = 3.0;
        u[Y.start] = 3.0;
        u[X.start + 1] = 3.0;
        u[Y.start + 1] = -3.0;
        let du = problem.evaluate_derivative(&u, 0.0);
        assert_relative_eq!(du[VY.start], 2.0 * -6.0 / 216.0, max_relative = 1e-10);
        assert_relative_eq!(du[VY.start + 1], 1.0 * 6.0 / 216.0, max_relative = 1e-10);
        assert_relative_eq!(du[VX.start], 0.0, epsilon = 1e-12);
    }
}
