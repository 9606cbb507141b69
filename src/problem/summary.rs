use serde::Serialize;

use crate::{op::RhsShape, OdeProblemError};

/// A closure-free description of a problem, e.g. for listing the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemSummary {
    pub name: &'static str,
    /// Scalar type of the state and time, `"f64"` or `"BigFloat"`.
    pub scalar: &'static str,
    pub shape: (usize, usize),
    pub nstates: usize,
    /// Time span rounded to `f64`.
    pub tspan: (f64, f64),
    pub rhs: RhsShape,
    pub stiff: bool,
    pub has_analytic: bool,
    pub has_jacobian: bool,
    pub has_mass_matrix: bool,
}

/// Object-safe view of a problem, so that problems with different state and parameter types can be
/// enumerated together.
pub trait CatalogEntry: Send + Sync {
    fn name(&self) -> &'static str;
    fn summary(&self) -> ProblemSummary;
    fn verify(&self) -> Result<(), OdeProblemError>;
}
