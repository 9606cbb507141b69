use thiserror::Error;

use crate::op::RhsShape;

/// Custom error type for OdeProblems
///
/// Building a problem, calling its right-hand side with the wrong calling convention, or a failed
/// self-consistency check all report through this type.
#[derive(Error, Debug)]
pub enum OdeProblemError {
    #[error("Right-hand side is {found} and cannot be called {requested}")]
    RhsShapeMismatch {
        requested: RhsShape,
        found: RhsShape,
    },
    #[error("No right-hand side was given to the builder")]
    MissingRhs,
    #[error("No initial state was given to the builder")]
    MissingInitialState,
    #[error("No time span was given to the builder")]
    MissingTimeSpan,
    #[error("Time span must satisfy t0 < t1, got t0 = {t0}, t1 = {t1}")]
    InvalidTimeSpan { t0: f64, t1: f64 },
    #[error("Mass matrix has shape {found:?}, expected {expected:?}")]
    MassMatrixShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("Derivative of problem {name} has shape {found:?}, expected {expected:?}")]
    DerivativeShape {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("Derivative of problem {name} at the initial state is not finite")]
    NonFiniteDerivative { name: &'static str },
    #[error("Analytic solution of problem {name} does not reproduce u0 at t0")]
    AnalyticMismatch { name: &'static str },
    #[error("Unknown problem: {0}")]
    UnknownProblem(String),
    #[error("Error: {0}")]
    Other(String),
}

#[macro_export]
macro_rules! problem_error {
    ($variant:ident) => {
        $crate::OdeProblemError::$variant
    };
    ($variant:ident, $($arg:tt)*) => {
        $crate::OdeProblemError::$variant($($arg)*.to_string())
    };
}

#[macro_export]
macro_rules! other_error {
    ($msg:expr) => {
        $crate::OdeProblemError::Other($msg.to_string())
    };
}
