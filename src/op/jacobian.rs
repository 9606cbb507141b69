use crate::State;

use super::JacobianFn;

/// Hand-derived Jacobian `df/du` of a right-hand side.
pub struct Jacobian<U: State, P> {
    func: JacobianFn<U, P>,
}

impl<U: State, P> Jacobian<U, P> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&U, &P, U::T, &mut U::Jacobian) + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    /// Compute the Jacobian into `jac`, which must already have shape `nstates x nstates`.
    /// Every entry is overwritten.
    pub fn call_inplace(&self, u: &U, p: &P, t: U::T, jac: &mut U::Jacobian) {
        (self.func)(u, p, t, jac)
    }

    /// Compute the Jacobian and return it.
    /// Use [Self::call_inplace] for a non-allocating version.
    pub fn call(&self, u: &U, p: &P, t: U::T) -> U::Jacobian {
        let mut jac = u.zeros_jacobian();
        self.call_inplace(u, p, t, &mut jac);
        jac
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{DMatrix, DVector};

    use super::*;

    #[test]
    fn test_jacobian() {
        let jac = Jacobian::<DVector<f64>, f64>::new(|u, p, _t, j| {
            j.fill(0.0);
            j[(0, 0)] = *p;
            j[(1, 1)] = 2.0 * u[1];
        });
        let u = DVector::from_vec(vec![1.0, 3.0]);
        let j = jac.call(&u, &0.5, 0.0);
        assert_eq!(j, DMatrix::from_row_slice(2, 2, &[0.5, 0.0, 0.0, 6.0]));
    }
}
