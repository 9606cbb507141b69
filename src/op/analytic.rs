use crate::State;

use super::AnalyticFn;

/// Closed-form solution `u(t)` of a problem, given its initial state and parameters.
pub struct Analytic<U: State, P> {
    func: AnalyticFn<U, P>,
}

impl<U: State, P> Analytic<U, P> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&U, &P, U::T) -> U + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    pub fn call(&self, u0: &U, p: &P, t: U::T) -> U {
        (self.func)(u0, p, t)
    }
}
