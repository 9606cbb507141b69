//! Linear growth `u' = p u` with the closed form `u(t) = u0 exp(p t)`, as a scalar and as a matrix
//! of independent components, in `f64` and [BigFloat].

use nalgebra::DMatrix;

use crate::{
    catalog::ProblemName,
    problems::{random_matrix, seeded_rng},
    scalar::{big, BigFloat},
    OdeBuilder, OdeProblem, Scalar, State,
};

/// Growth rate of every linear problem.
pub const LINEAR_RATE: f64 = 1.01;

/// Initial value of the scalar linear problems.
pub const LINEAR_U0: f64 = 0.5;

/// Seed of the random initial states of the matrix problems.
pub const LINEAR_2D_SEED: u64 = 1;
pub const LARGE_LINEAR_2D_SEED: u64 = 2;

/// Shape of the small matrix problems.
pub const LINEAR_2D_SHAPE: (usize, usize) = (4, 2);
pub const LARGE_LINEAR_2D_SHAPE: (usize, usize) = (100, 128);

fn linear<T: Scalar>(u: &T, p: &T, _t: T) -> T {
    p.clone() * u.clone()
}

fn linear_analytic<T: Scalar>(u0: &T, p: &T, t: T) -> T {
    u0.clone() * (p.clone() * t).exp()
}

fn linear_jacobian<T: Scalar>(_u: &T, p: &T, _t: T, jac: &mut T) {
    *jac = p.clone();
}

fn linear_2d<T: Scalar>(u: &DMatrix<T>, p: &T, _t: T, du: &mut DMatrix<T>) {
    for (d, x) in du.iter_mut().zip(u.iter()) {
        *d = p.clone() * x.clone();
    }
}

fn linear_2d_analytic<T: Scalar>(u0: &DMatrix<T>, p: &T, t: T) -> DMatrix<T> {
    let growth = (p.clone() * t).exp();
    u0.map(|x| x * growth.clone())
}

fn scalar_linear_problem<T>(name: ProblemName) -> OdeProblem<T, T>
where
    T: Scalar + State<T = T, Jacobian = T>,
{
    OdeBuilder::new(name.as_str())
        .p(T::from_f64(LINEAR_RATE))
        .u0(T::from_f64(LINEAR_U0))
        .tspan(T::zero(), T::one())
        .rhs(linear)
        .analytic(linear_analytic)
        .jacobian(linear_jacobian)
        .build()
        .expect("linear problem is valid")
}

fn matrix_linear_problem<T: Scalar>(
    name: ProblemName,
    u0: DMatrix<T>,
) -> OdeProblem<DMatrix<T>, T> {
    OdeBuilder::new(name.as_str())
        .p(T::from_f64(LINEAR_RATE))
        .u0(u0)
        .tspan(T::zero(), T::one())
        .rhs_inplace(linear_2d)
        .analytic(linear_2d_analytic)
        .build()
        .expect("linear problem is valid")
}

/// `u' = 1.01 u`, `u(0) = 0.5` on `[0, 1]`, out-of-place.
pub fn linear_problem() -> OdeProblem<f64, f64> {
    scalar_linear_problem(ProblemName::Linear)
}

/// [linear_problem] in [BigFloat] arithmetic.
pub fn bigfloat_linear_problem() -> OdeProblem<BigFloat, BigFloat> {
    scalar_linear_problem(ProblemName::BigfloatLinear)
}

/// Elementwise `u' = 1.01 u` on a random 4x2 matrix, in-place.
pub fn linear_2d_problem() -> OdeProblem<DMatrix<f64>, f64> {
    let (nrows, ncols) = LINEAR_2D_SHAPE;
    let u0 = random_matrix(&mut seeded_rng(LINEAR_2D_SEED), nrows, ncols);
    matrix_linear_problem(ProblemName::Linear2d, u0)
}

/// [linear_2d_problem] with an out-of-place right-hand side and the same initial state.
pub fn linear_2d_notinplace_problem() -> OdeProblem<DMatrix<f64>, f64> {
    let (nrows, ncols) = LINEAR_2D_SHAPE;
    let u0 = random_matrix(&mut seeded_rng(LINEAR_2D_SEED), nrows, ncols);
    OdeBuilder::new(ProblemName::Linear2dNotinplace.as_str())
        .p(LINEAR_RATE)
        .u0(u0)
        .tspan(0.0, 1.0)
        .rhs(|u: &DMatrix<f64>, p: &f64, _t| u * *p)
        .analytic(linear_2d_analytic)
        .build()
        .expect("linear problem is valid")
}

/// Elementwise `u' = 1.01 u` on a random 100x128 matrix, in-place.
pub fn large_linear_2d_problem() -> OdeProblem<DMatrix<f64>, f64> {
    let (nrows, ncols) = LARGE_LINEAR_2D_SHAPE;
    let u0 = random_matrix(&mut seeded_rng(LARGE_LINEAR_2D_SEED), nrows, ncols);
    matrix_linear_problem(ProblemName::LargeLinear2d, u0)
}

/// [linear_2d_problem] in [BigFloat] arithmetic, starting from half of a random 4x2 matrix.
pub fn bigfloat_linear_2d_problem() -> OdeProblem<DMatrix<BigFloat>, BigFloat> {
    let (nrows, ncols) = LINEAR_2D_SHAPE;
    let u0 =
        random_matrix(&mut seeded_rng(LINEAR_2D_SEED), nrows, ncols).map(|x| big(x) / big(2.0));
    matrix_linear_problem(ProblemName::BigfloatLinear2d, u0)
}
