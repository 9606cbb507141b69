use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

/// Rate constants of the Oregonator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OregoParams {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
}

impl Default for OregoParams {
    fn default() -> Self {
        Self {
            p1: 77.27,
            p2: 8.375e-6,
            p3: 0.161,
        }
    }
}

fn orego(u: &DVector<f64>, p: &OregoParams, _t: f64, du: &mut DVector<f64>) {
    let (y1, y2, y3) = (u[0], u[1], u[2]);
    du[0] = p.p1 * (y2 + y1 * (1.0 - p.p2 * y1 - y2));
    du[1] = (y3 - (1.0 + y1) * y2) / p.p1;
    du[2] = p.p3 * (y1 - y3);
}

fn orego_jacobian(u: &DVector<f64>, p: &OregoParams, _t: f64, jac: &mut DMatrix<f64>) {
    let (y1, y2) = (u[0], u[1]);
    jac[(0, 0)] = p.p1 * (1.0 - 2.0 * p.p2 * y1 - y2);
    jac[(0, 1)] = p.p1 * (1.0 - y1);
    jac[(0, 2)] = 0.0;
    jac[(1, 0)] = -y2 / p.p1;
    jac[(1, 1)] = -(1.0 + y1) / p.p1;
    jac[(1, 2)] = 1.0 / p.p1;
    jac[(2, 0)] = p.p3;
    jac[(2, 1)] = 0.0;
    jac[(2, 2)] = -p.p3;
}

/// The Oregonator, a stiff model of the Belousov-Zhabotinsky reaction, on `[0, 30]` starting from
/// `[1, 2, 3]`.
pub fn orego_problem() -> OdeProblem<DVector<f64>, OregoParams> {
    OdeBuilder::new(ProblemName::Orego.as_str())
        .p(OregoParams::default())
        .u0(DVector::from_vec(vec![1.0, 2.0, 3.0]))
        .tspan(0.0, 30.0)
        .rhs_inplace(orego)
        .jacobian(orego_jacobian)
        .stiff(true)
        .build()
        .expect("orego problem is valid")
}
