use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// Growth and interaction rates of the predator-prey model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotkaVolterraParams {
    /// prey growth
    pub a: f64,
    /// predation
    pub b: f64,
    /// predator death
    pub c: f64,
    /// predator growth per prey eaten
    pub d: f64,
}

impl Default for LotkaVolterraParams {
    fn default() -> Self {
        Self {
            a: 1.5,
            b: 1.0,
            c: 3.0,
            d: 1.0,
        }
    }
}

fn lotka_volterra(u: &DVector<f64>, p: &LotkaVolterraParams, _t: f64, du: &mut DVector<f64>) {
    let (x, y) = (u[0], u[1]);
    du[0] = p.a * x - p.b * x * y;
    du[1] = -p.c * y + p.d * x * y;
}

fn lotka_volterra_jacobian(
    u: &DVector<f64>,
    p: &LotkaVolterraParams,
    _t: f64,
    jac: &mut DMatrix<f64>,
) {
    let (x, y) = (u[0], u[1]);
    jac[(0, 0)] = p.a - p.b * y;
    jac[(0, 1)] = -p.b * x;
    jac[(1, 0)] = p.d * y;
    jac[(1, 1)] = -p.c + p.d * x;
}

/// Predator-prey model on `[0, 1]` starting from `[1, 1]`, with the default parameters.
pub fn lotka_volterra_problem() -> OdeProblem<DVector<f64>, LotkaVolterraParams> {
    lotka_volterra_problem_with(LotkaVolterraParams::default())
}

/// Predator-prey model
///
/// ```text
/// dx/dt = a x - b x y
/// dy/dt = -c y + d x y
/// ```
///
/// with `x` the prey and `y` the predator population, on `[0, 1]` starting from `[1, 1]`.
pub fn lotka_volterra_problem_with(
    p: LotkaVolterraParams,
) -> OdeProblem<DVector<f64>, LotkaVolterraParams> {
    OdeBuilder::new(ProblemName::LotkaVolterra.as_str())
        .p(p)
        .u0(DVector::from_vec(vec![1.0, 1.0]))
        .tspan(0.0, 1.0)
        .rhs_inplace(lotka_volterra)
        .jacobian(lotka_volterra_jacobian)
        .build()
        .expect("lotka_volterra problem is valid")
}
