//! Restricted three-body problem (Arenstorf orbit) in [BigFloat] arithmetic.
//!
//! The state is `[y1, y2, y1', y2']`: the position of a light body in the rotating frame of two
//! heavy bodies with mass ratio `mu`, followed by its velocity. The time span is one period of the
//! orbit, so the exact solution returns to `u0` at `t1`.

use nalgebra::DVector;

use crate::{
    catalog::ProblemName,
    scalar::{big, BigFloat},
    OdeBuilder, OdeProblem, Scalar,
};

/// Mass ratio of the two heavy bodies.
pub const THREE_BODY_MU: f64 = 0.012277471;

/// Initial velocity `y2'(0)` of the periodic orbit.
pub const THREE_BODY_DY2: f64 = -2.00158510637908252240537862224;

/// Period of the orbit.
pub const THREE_BODY_PERIOD: f64 = 17.0652165601579625588917206249;

/// Right-hand side for masses `mu` and `mu_prime = 1 - mu`.
pub fn three_body<T: Scalar>(u: &DVector<T>, mu: &T, mu_prime: &T, du: &mut DVector<T>) {
    let (y1, y2, dy1, dy2) = (u[0].clone(), u[1].clone(), u[2].clone(), u[3].clone());
    let two = T::from_f64(2.0);

    let r1 = y1.clone() + mu.clone();
    let r2 = y1.clone() - mu_prime.clone();
    let y2_sq = y2.clone() * y2.clone();
    let d1 = (r1.clone() * r1.clone() + y2_sq.clone()).pow3_2();
    let d2 = (r2.clone() * r2.clone() + y2_sq).pow3_2();

    du[0] = dy1.clone();
    du[1] = dy2.clone();
    du[2] = y1 + two.clone() * dy2
        - mu_prime.clone() * r1 / d1.clone()
        - mu.clone() * r2 / d2.clone();
    du[3] = y2.clone() - two * dy1 - mu_prime.clone() * y2.clone() / d1 - mu.clone() * y2 / d2;
}

/// The Arenstorf orbit over one period, in [BigFloat].
pub fn three_body_problem() -> OdeProblem<DVector<BigFloat>, ()> {
    let mu = big(THREE_BODY_MU);
    let mu_prime = big(1.0) - mu.clone();
    OdeBuilder::new(ProblemName::ThreeBody.as_str())
        .u0(DVector::from_vec(vec![
            big(0.994),
            big(0.0),
            big(0.0),
            big(THREE_BODY_DY2),
        ]))
        .tspan(big(0.0), big(THREE_BODY_PERIOD))
        .rhs_inplace(move |u: &DVector<BigFloat>, _p: &(), _t, du: &mut DVector<BigFloat>| {
            three_body(u, &mu, &mu_prime, du)
        })
        .build()
        .expect("three_body problem is valid")
}
