//! Van der Pol oscillator in first-order form. The state is ordered `[y, x]` with `y = dx/dt`.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// Index of the velocity `y` in the state.
pub const Y: usize = 0;
/// Index of the position `x` in the state.
pub const X: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VanDerPolParams {
    /// damping strength
    pub mu: f64,
}

impl VanDerPolParams {
    pub const NON_STIFF: Self = Self { mu: 1.0 };
    pub const STIFF: Self = Self { mu: 1e6 };
}

impl Default for VanDerPolParams {
    fn default() -> Self {
        Self::NON_STIFF
    }
}

fn van_der_pol(u: &DVector<f64>, p: &VanDerPolParams, _t: f64, du: &mut DVector<f64>) {
    let (y, x) = (u[Y], u[X]);
    du[Y] = p.mu * ((1.0 - x * x) * y - x);
    du[X] = y;
}

fn van_der_pol_jacobian(u: &DVector<f64>, p: &VanDerPolParams, _t: f64, jac: &mut DMatrix<f64>) {
    let (y, x) = (u[Y], u[X]);
    jac[(Y, Y)] = p.mu * (1.0 - x * x);
    jac[(Y, X)] = p.mu * (-2.0 * x * y - 1.0);
    jac[(X, Y)] = 1.0;
    jac[(X, X)] = 0.0;
}

fn van_der_pol_with(
    name: ProblemName,
    p: VanDerPolParams,
    stiff: bool,
) -> OdeProblem<DVector<f64>, VanDerPolParams> {
    OdeBuilder::new(name.as_str())
        .p(p)
        .u0(DVector::from_vec(vec![0.0, 2.0]))
        .tspan(0.0, 1.0)
        // dy/dt = mu ((1 - x^2) y - x)
        // dx/dt = y
        .rhs_inplace(van_der_pol)
        .jacobian(van_der_pol_jacobian)
        .stiff(stiff)
        .build()
        .expect("van_der_pol problem is valid")
}

/// Van der Pol with `mu = 1` on `[0, 1]` starting from `[y, x] = [0, 2]`.
pub fn van_der_pol_problem() -> OdeProblem<DVector<f64>, VanDerPolParams> {
    van_der_pol_with(ProblemName::VanDerPol, VanDerPolParams::NON_STIFF, false)
}

/// Van der Pol with `mu = 1e6`, a classic stiff test, on `[0, 1]` starting from `[y, x] = [0, 2]`.
pub fn van_der_pol_stiff_problem() -> OdeProblem<DVector<f64>, VanDerPolParams> {
    van_der_pol_with(ProblemName::VanDerPolStiff, VanDerPolParams::STIFF, true)
}
