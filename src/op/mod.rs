use std::fmt::Display;

use serde::Serialize;

use crate::State;

pub mod analytic;
pub mod closure;
pub mod jacobian;

pub use analytic::Analytic;
pub use closure::Rhs;
pub use jacobian::Jacobian;

/// In-place right-hand side `f(u, p, t, du)`, writing the derivative into `du`.
pub type InPlaceFn<U, P> = Box<dyn Fn(&U, &P, <U as State>::T, &mut U) + Send + Sync>;

/// Out-of-place right-hand side `f(u, p, t) -> du`.
pub type OutOfPlaceFn<U, P> = Box<dyn Fn(&U, &P, <U as State>::T) -> U + Send + Sync>;

/// Analytic solution `u(t)` given `(u0, p, t)`.
pub type AnalyticFn<U, P> = Box<dyn Fn(&U, &P, <U as State>::T) -> U + Send + Sync>;

/// Jacobian `df/du` written into a preallocated matrix.
pub type JacobianFn<U, P> =
    Box<dyn Fn(&U, &P, <U as State>::T, &mut <U as State>::Jacobian) + Send + Sync>;

/// Calling convention of a right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RhsShape {
    InPlace,
    OutOfPlace,
}

impl Display for RhsShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RhsShape::InPlace => write!(f, "in-place"),
            RhsShape::OutOfPlace => write!(f, "out-of-place"),
        }
    }
}
