use crate::{
    op::{Analytic, Jacobian, Rhs},
    problem_error, OdeProblem, OdeProblemError, Scalar, State,
};

/// Builder for catalog problems. Use methods to set the parts of the problem and then call
/// [OdeBuilder::build] when done.
///
/// # Example
///
/// ```rust
/// use odeproblems::OdeBuilder;
/// use nalgebra::DVector;
///
/// let problem = OdeBuilder::new("decay")
///     .p(0.1)
///     .u0(DVector::from_vec(vec![1.0, 2.0]))
///     .tspan(0.0, 10.0)
///     // dy/dt = -ay
///     .rhs_inplace(|u: &DVector<f64>, p: &f64, _t, du: &mut DVector<f64>| {
///         du.copy_from(&(u * -*p));
///     })
///     // y(t) = y0 exp(-at)
///     .analytic(|u0: &DVector<f64>, p: &f64, t: f64| u0 * (-p * t).exp())
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.evaluate_analytic(0.0).unwrap(), *problem.u0());
/// ```
pub struct OdeBuilder<U: State, P = ()> {
    name: &'static str,
    p: P,
    u0: Option<U>,
    tspan: Option<(U::T, U::T)>,
    rhs: Option<Rhs<U, P>>,
    analytic: Option<Analytic<U, P>>,
    jacobian: Option<Jacobian<U, P>>,
    mass: Option<U::Jacobian>,
    stiff: bool,
}

impl<U: State> OdeBuilder<U, ()> {
    /// Create a new builder for the problem `name`, with no parameters and no stiffness flag.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            p: (),
            u0: None,
            tspan: None,
            rhs: None,
            analytic: None,
            jacobian: None,
            mass: None,
            stiff: false,
        }
    }

    /// Set the parameters passed to every closure of the problem.
    ///
    /// Closures already given to the builder were written against `()` and keep ignoring the
    /// parameters.
    pub fn p<P: Send + Sync + 'static>(self, p: P) -> OdeBuilder<U, P> {
        let rhs = self.rhs.map(|rhs| match rhs {
            Rhs::InPlace(f) => Rhs::inplace(move |u: &U, _p: &P, t, du: &mut U| f(u, &(), t, du)),
            Rhs::OutOfPlace(f) => Rhs::out_of_place(move |u: &U, _p: &P, t| f(u, &(), t)),
        });
        let analytic = self
            .analytic
            .map(|a| Analytic::new(move |u0: &U, _p: &P, t| a.call(u0, &(), t)));
        let jacobian = self.jacobian.map(|j| {
            Jacobian::new(move |u: &U, _p: &P, t, jac: &mut U::Jacobian| {
                j.call_inplace(u, &(), t, jac)
            })
        });
        OdeBuilder {
            name: self.name,
            p,
            u0: self.u0,
            tspan: self.tspan,
            rhs,
            analytic,
            jacobian,
            mass: self.mass,
            stiff: self.stiff,
        }
    }
}

impl<U: State, P> OdeBuilder<U, P> {
    /// Set the initial state `u0`.
    pub fn u0(mut self, u0: U) -> Self {
        self.u0 = Some(u0);
        self
    }

    /// Set the time span `(t0, t1)`.
    pub fn tspan(mut self, t0: U::T, t1: U::T) -> Self {
        self.tspan = Some((t0, t1));
        self
    }

    /// Set an out-of-place right-hand side.
    ///
    /// # Arguments
    ///
    /// - `rhs`: Function of type Fn(u: &U, p: &P, t: T) -> U returning the derivative.
    pub fn rhs<F>(mut self, rhs: F) -> Self
    where
        F: Fn(&U, &P, U::T) -> U + Send + Sync + 'static,
    {
        self.rhs = Some(Rhs::out_of_place(rhs));
        self
    }

    /// Set an in-place right-hand side.
    ///
    /// # Arguments
    ///
    /// - `rhs`: Function of type Fn(u: &U, p: &P, t: T, du: &mut U) that overwrites `du` with the derivative.
    pub fn rhs_inplace<F>(mut self, rhs: F) -> Self
    where
        F: Fn(&U, &P, U::T, &mut U) + Send + Sync + 'static,
    {
        self.rhs = Some(Rhs::inplace(rhs));
        self
    }

    /// Set the closed-form solution `u(t)` as a function of `(u0, p, t)`.
    pub fn analytic<F>(mut self, analytic: F) -> Self
    where
        F: Fn(&U, &P, U::T) -> U + Send + Sync + 'static,
    {
        self.analytic = Some(Analytic::new(analytic));
        self
    }

    /// Set the Jacobian `df/du`, written into a preallocated `nstates x nstates` matrix.
    pub fn jacobian<F>(mut self, jacobian: F) -> Self
    where
        F: Fn(&U, &P, U::T, &mut U::Jacobian) + Send + Sync + 'static,
    {
        self.jacobian = Some(Jacobian::new(jacobian));
        self
    }

    /// Set a constant mass matrix `M` so that the problem reads `M u' = f(u, p, t)`.
    pub fn mass(mut self, mass: U::Jacobian) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Flag the problem as stiff.
    pub fn stiff(mut self, stiff: bool) -> Self {
        self.stiff = stiff;
        self
    }

    pub fn build(self) -> Result<OdeProblem<U, P>, OdeProblemError> {
        let rhs = self.rhs.ok_or(problem_error!(MissingRhs))?;
        let u0 = self.u0.ok_or(problem_error!(MissingInitialState))?;
        let (t0, t1) = self.tspan.ok_or(problem_error!(MissingTimeSpan))?;
        if !(t0 < t1) {
            return Err(OdeProblemError::InvalidTimeSpan {
                t0: t0.to_f64(),
                t1: t1.to_f64(),
            });
        }
        let n = u0.nstates();
        if let Some(mass) = &self.mass {
            let found = U::jacobian_shape(mass);
            if found != (n, n) {
                return Err(OdeProblemError::MassMatrixShape {
                    expected: (n, n),
                    found,
                });
            }
        }
        log::debug!(
            "built problem {} with {} states ({})",
            self.name,
            n,
            rhs.shape()
        );
        Ok(OdeProblem {
            name: self.name,
            rhs,
            analytic: self.analytic,
            jacobian: self.jacobian,
            mass: self.mass,
            u0,
            p: self.p,
            t0,
            t1,
            stiff: self.stiff,
        })
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{DMatrix, DVector};

    use super::*;

    fn growth(u: &DVector<f64>, _p: &(), _t: f64, du: &mut DVector<f64>) {
        du.copy_from(u);
    }

    #[test]
    fn test_build_errors() {
        let missing_rhs = OdeBuilder::<f64>::new("x").u0(1.0).tspan(0.0, 1.0).build();
        assert!(matches!(missing_rhs, Err(OdeProblemError::MissingRhs)));

        let missing_u0 = OdeBuilder::<f64>::new("x")
            .tspan(0.0, 1.0)
            .rhs(|u, _p, _t| *u)
            .build();
        assert!(matches!(missing_u0, Err(OdeProblemError::MissingInitialState)));

        let missing_tspan = OdeBuilder::<f64>::new("x")
            .u0(1.0)
            .rhs(|u, _p, _t| *u)
            .build();
        assert!(matches!(missing_tspan, Err(OdeProblemError::MissingTimeSpan)));

        let reversed = OdeBuilder::<f64>::new("x")
            .u0(1.0)
            .tspan(1.0, 0.0)
            .rhs(|u, _p, _t| *u)
            .build();
        assert!(matches!(
            reversed,
            Err(OdeProblemError::InvalidTimeSpan { t0, t1 }) if t0 == 1.0 && t1 == 0.0
        ));
    }

    #[test]
    fn test_build_checks_mass_shape() {
        let result = OdeBuilder::new("x")
            .u0(DVector::from_element(2, 1.0))
            .tspan(0.0, 1.0)
            .rhs_inplace(growth)
            .mass(DMatrix::identity(3, 3))
            .build();
        assert!(matches!(
            result,
            Err(OdeProblemError::MassMatrixShape {
                expected: (2, 2),
                found: (3, 3)
            })
        ));
    }

    #[test]
    fn test_p_after_closures_keeps_them() {
        let problem = OdeBuilder::new("x")
            .u0(DVector::from_element(2, 1.0))
            .tspan(0.0, 1.0)
            .rhs_inplace(growth)
            .analytic(|u0: &DVector<f64>, _p: &(), t: f64| u0 * t.exp())
            .stiff(true)
            .p(42.0)
            .build()
            .unwrap();
        assert_eq!(*problem.p(), 42.0);
        assert!(problem.is_stiff());
        assert_eq!(
            problem.evaluate_derivative(problem.u0(), 0.0),
            DVector::from_element(2, 1.0)
        );
        assert_eq!(problem.evaluate_analytic(0.0).unwrap(), *problem.u0());
    }
}
