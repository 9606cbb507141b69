//! # OdeProblems
//!
//! OdeProblems is a catalog of benchmark initial value problems for testing and benchmarking ODE
//! solvers. It does not solve anything: each problem bundles a right-hand side, an initial state,
//! parameters and a time span, plus a closed-form solution, a Jacobian or a mass matrix where one is
//! known.
//!
//! ## Using the catalog
//!
//! Every problem is available as a lazily built `static` in the [catalog] module (e.g.
//! [catalog::PROB_ODE_ROBER]) and as a constructor function in the [problems] module (e.g.
//! [problems::rober::rober_problem]) that returns a fresh [OdeProblem]. Problems can also be looked
//! up by [ProblemName] with [catalog::entry], which returns an object-safe [CatalogEntry] for
//! listing ([CatalogEntry::summary]) and checking ([CatalogEntry::verify]) the whole catalog.
//!
//! ## Problems
//!
//! A problem is an [OdeProblem], generic over its state type and its parameter type. States are
//! `f64`, [BigFloat], [nalgebra::DVector] or [nalgebra::DMatrix]; see [State]. The right-hand side
//! is either in-place (`f(u, p, t, du)`) or out-of-place (`f(u, p, t) -> du`) and the problem
//! records which, see [Rhs]. Calling it the wrong way is an error, while
//! [OdeProblem::evaluate_derivative] and [OdeProblem::evaluate_analytic] work for either.
//!
//! ## Custom problems
//!
//! The [OdeBuilder] struct builds new problems from closures, in the same way the catalog does.
//! Use [OdeProblem::with_p] to run a catalog problem with different parameter values.
//!
//! ## Arbitrary precision
//!
//! The problems that are sensitive to rounding are defined in [BigFloat], a 256-bit binary float.
//! Their constants are `f64` literals widened exactly with [big].

pub mod catalog;
pub mod error;
pub mod op;
pub mod problem;
pub mod problems;
pub mod scalar;
pub mod state;

pub use catalog::{entries, entry, verify_all, ProblemName};
pub use error::OdeProblemError;
pub use op::{Analytic, Jacobian, Rhs, RhsShape};
pub use problem::{CatalogEntry, OdeBuilder, OdeProblem, ProblemSummary};
pub use scalar::{big, BigFloat, Scalar, BIGFLOAT_PRECISION};
pub use state::State;
