use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::{catalog::ProblemName, OdeBuilder, OdeProblem};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitzhughNagumoParams {
    pub a: f64,
    pub b: f64,
    /// time scale separation between the voltage and the recovery variable
    pub c: f64,
}

impl Default for FitzhughNagumoParams {
    fn default() -> Self {
        Self {
            a: 0.7,
            b: 0.8,
            c: 3.0,
        }
    }
}

fn fitzhugh_nagumo(u: &DVector<f64>, p: &FitzhughNagumoParams, _t: f64, du: &mut DVector<f64>) {
    let (v, r) = (u[0], u[1]);
    du[0] = p.c * (v - v * v * v / 3.0 + r);
    du[1] = -(1.0 / p.c) * (v - p.a - p.b * r);
}

/// FitzHugh-Nagumo neuron model
///
/// ```text
/// dV/dt = c (V - V^3 / 3 + R)
/// dR/dt = -(1 / c) (V - a - b R)
/// ```
///
/// on `[0, 1]` starting from `[V, R] = [-1, 1]`.
pub fn fitzhugh_nagumo_problem() -> OdeProblem<DVector<f64>, FitzhughNagumoParams> {
    OdeBuilder::new(ProblemName::FitzhughNagumo.as_str())
        .p(FitzhughNagumoParams::default())
        .u0(DVector::from_vec(vec![-1.0, 1.0]))
        .tspan(0.0, 1.0)
        .rhs_inplace(fitzhugh_nagumo)
        .build()
        .expect("fitzhugh_nagumo problem is valid")
}
