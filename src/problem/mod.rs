use crate::{
    op::{Analytic, Jacobian, Rhs},
    other_error, OdeProblemError, Scalar, State,
};

pub mod builder;
pub mod summary;

pub use builder::OdeBuilder;
pub use summary::{CatalogEntry, ProblemSummary};

/// A benchmark initial value problem `M u' = f(u, p, t)`, `u(t0) = u0`, `t` in `[t0, t1]`.
///
/// Problems are created with an [OdeBuilder] and are immutable afterwards. The state type `U` is a
/// scalar, a [nalgebra::DVector] or a [nalgebra::DMatrix]; `P` is the parameter type, `()` when
/// the constants are baked into the equations.
pub struct OdeProblem<U: State, P> {
    name: &'static str,
    rhs: Rhs<U, P>,
    analytic: Option<Analytic<U, P>>,
    jacobian: Option<Jacobian<U, P>>,
    mass: Option<U::Jacobian>,
    u0: U,
    p: P,
    t0: U::T,
    t1: U::T,
    stiff: bool,
}

impl<U: State, P> OdeProblem<U, P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rhs(&self) -> &Rhs<U, P> {
        &self.rhs
    }

    pub fn u0(&self) -> &U {
        &self.u0
    }

    pub fn p(&self) -> &P {
        &self.p
    }

    pub fn t0(&self) -> &U::T {
        &self.t0
    }

    pub fn t1(&self) -> &U::T {
        &self.t1
    }

    pub fn tspan(&self) -> (&U::T, &U::T) {
        (&self.t0, &self.t1)
    }

    pub fn nstates(&self) -> usize {
        self.u0.nstates()
    }

    pub fn is_stiff(&self) -> bool {
        self.stiff
    }

    pub fn is_inplace(&self) -> bool {
        self.rhs.is_inplace()
    }

    pub fn has_analytic(&self) -> bool {
        self.analytic.is_some()
    }

    pub fn has_jacobian(&self) -> bool {
        self.jacobian.is_some()
    }

    /// The mass matrix `M`, `None` meaning the identity.
    pub fn mass_matrix(&self) -> Option<&U::Jacobian> {
        self.mass.as_ref()
    }

    /// Evaluate `f(u, p, t)` with the problem's parameters, honouring its calling convention.
    pub fn evaluate_derivative(&self, u: &U, t: U::T) -> U {
        self.rhs.evaluate(u, &self.p, t)
    }

    /// Evaluate `f(u, p, t)` into `du`. Fails if the problem declares an out-of-place right-hand side.
    pub fn evaluate_derivative_inplace(
        &self,
        u: &U,
        t: U::T,
        du: &mut U,
    ) -> Result<(), OdeProblemError> {
        self.rhs.call_inplace(u, &self.p, t, du)
    }

    /// The analytic solution at `t` starting from the problem's own `u0`, or `None` if no closed
    /// form is known.
    pub fn evaluate_analytic(&self, t: U::T) -> Option<U> {
        self.evaluate_analytic_from(&self.u0, t)
    }

    /// The analytic solution at `t` starting from `u0` at `t0`.
    pub fn evaluate_analytic_from(&self, u0: &U, t: U::T) -> Option<U> {
        self.analytic
            .as_ref()
            .map(|analytic| analytic.call(u0, &self.p, t))
    }

    /// The Jacobian `df/du` at `(u, t)`, if the problem provides one.
    pub fn evaluate_jacobian(&self, u: &U, t: U::T) -> Option<U::Jacobian> {
        self.jacobian
            .as_ref()
            .map(|jacobian| jacobian.call(u, &self.p, t))
    }

    /// The same problem with different parameter values.
    pub fn with_p(self, p: P) -> Self {
        Self { p, ..self }
    }

    /// Describe the problem without its closures.
    pub fn summary(&self) -> ProblemSummary {
        ProblemSummary {
            name: self.name,
            scalar: <U::T as Scalar>::NAME,
            shape: self.u0.shape(),
            nstates: self.nstates(),
            tspan: (self.t0.to_f64(), self.t1.to_f64()),
            rhs: self.rhs.shape(),
            stiff: self.stiff,
            has_analytic: self.has_analytic(),
            has_jacobian: self.has_jacobian(),
            has_mass_matrix: self.mass.is_some(),
        }
    }

    /// Check the problem against its own definition: the derivative at `(u0, p, t0)` is finite and
    /// shaped like `u0`, an analytic solution reproduces `u0` exactly at `t0`, and a mass matrix or
    /// Jacobian is square in the number of unknowns.
    pub fn verify(&self) -> Result<(), OdeProblemError> {
        let result = self.check_consistency();
        if let Err(err) = &result {
            log::warn!("problem {} failed verification: {}", self.name, err);
        }
        result
    }

    fn check_consistency(&self) -> Result<(), OdeProblemError> {
        let expected = self.u0.shape();
        let du = self.evaluate_derivative(&self.u0, self.t0.clone());
        if du.shape() != expected {
            return Err(OdeProblemError::DerivativeShape {
                name: self.name,
                expected,
                found: du.shape(),
            });
        }
        if !du.all_finite() {
            return Err(OdeProblemError::NonFiniteDerivative { name: self.name });
        }
        if let Some(u) = self.evaluate_analytic(self.t0.clone()) {
            if u != self.u0 {
                return Err(OdeProblemError::AnalyticMismatch { name: self.name });
            }
        }
        let n = self.nstates();
        if let Some(mass) = &self.mass {
            let found = U::jacobian_shape(mass);
            if found != (n, n) {
                return Err(OdeProblemError::MassMatrixShape {
                    expected: (n, n),
                    found,
                });
            }
        }
        if let Some(jac) = self.evaluate_jacobian(&self.u0, self.t0.clone()) {
            let found = U::jacobian_shape(&jac);
            if found != (n, n) {
                return Err(other_error!(format!(
                    "Jacobian of problem {} has shape {:?}, expected {:?}",
                    self.name,
                    found,
                    (n, n)
                )));
            }
        }
        Ok(())
    }
}

impl<U: State, P: Send + Sync> CatalogEntry for OdeProblem<U, P> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn summary(&self) -> ProblemSummary {
        OdeProblem::summary(self)
    }

    fn verify(&self) -> Result<(), OdeProblemError> {
        OdeProblem::verify(self)
    }
}
