//! Linear problem with a constant diagonal mass matrix, `M u' = A u`.

use nalgebra::{DMatrix, DVector};

use crate::{
    catalog::ProblemName,
    problems::{random_matrix, seeded_rng},
    OdeBuilder, OdeProblem,
};

/// Seed of the random system matrix and initial state.
pub const MM_LINEAR_SEED: u64 = 100;

/// Number of unknowns.
pub const MM_LINEAR_N: usize = 4;

/// Diagonal entry of the mass matrix.
pub const MM_LINEAR_MASS: f64 = 0.5;

/// The random system matrix `A` and initial state `u0`, drawn in that order from one generator.
pub fn mm_linear_data() -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = seeded_rng(MM_LINEAR_SEED);
    let a = random_matrix(&mut rng, MM_LINEAR_N, MM_LINEAR_N);
    let u0 = random_matrix(&mut rng, MM_LINEAR_N, 1).column(0).into_owned();
    (a, u0)
}

/// `M u' = A u` with `M = 0.5 I` and a random 4x4 `A`, on `[0, 1]`.
///
/// The analytic solution is `u(t) = exp(M^-1 A t) u0`.
pub fn mm_linear_problem() -> OdeProblem<DVector<f64>, ()> {
    let (a, u0) = mm_linear_data();
    let mass = DMatrix::from_diagonal_element(MM_LINEAR_N, MM_LINEAR_N, MM_LINEAR_MASS);
    let mass_inv = DMatrix::from_diagonal(&mass.diagonal().map(|m| 1.0 / m));
    let mass_inv_a = &mass_inv * &a;
    let rhs_a = a.clone();
    OdeBuilder::new(ProblemName::MmLinear.as_str())
        .u0(u0)
        .tspan(0.0, 1.0)
        .rhs_inplace(move |u: &DVector<f64>, _p: &(), _t, du: &mut DVector<f64>| {
            rhs_a.mul_to(u, du)
        })
        .jacobian(move |_u: &DVector<f64>, _p: &(), _t, jac: &mut DMatrix<f64>| {
            jac.copy_from(&a)
        })
        .analytic(move |u0: &DVector<f64>, _p: &(), t: f64| (&mass_inv_a * t).exp() * u0)
        .mass(mass)
        .build()
        .expect("mm_linear problem is valid")
}
