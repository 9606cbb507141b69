use std::fmt::Debug;

use nalgebra::{DMatrix, DVector};

use crate::{scalar::BigFloat, Scalar};

/// The state `u` of a problem: a scalar, a vector or a matrix.
///
/// A matrix state is treated as a column-major vector of `nrows * ncols` unknowns, so its Jacobian
/// (and mass matrix) is square in that number of unknowns.
pub trait State: Clone + Debug + PartialEq + Send + Sync + 'static {
    type T: Scalar;
    type Jacobian: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// `(nrows, ncols)` of the state; scalars are `(1, 1)`, vectors `(n, 1)`.
    fn shape(&self) -> (usize, usize);

    /// Total number of unknowns.
    fn nstates(&self) -> usize {
        let (nrows, ncols) = self.shape();
        nrows * ncols
    }

    /// A state of the same shape with every entry zero.
    fn zeros_like(&self) -> Self;

    fn all_finite(&self) -> bool;

    /// A zero Jacobian for this state.
    fn zeros_jacobian(&self) -> Self::Jacobian;

    fn jacobian_shape(jac: &Self::Jacobian) -> (usize, usize);
}

macro_rules! impl_scalar_state {
    ($t:ty) => {
        impl State for $t {
            type T = $t;
            type Jacobian = $t;

            fn shape(&self) -> (usize, usize) {
                (1, 1)
            }
            fn zeros_like(&self) -> Self {
                <$t as Scalar>::zero()
            }
            fn all_finite(&self) -> bool {
                Scalar::is_finite(self)
            }
            fn zeros_jacobian(&self) -> Self::Jacobian {
                <$t as Scalar>::zero()
            }
            fn jacobian_shape(_jac: &Self::Jacobian) -> (usize, usize) {
                (1, 1)
            }
        }
    };
}

impl_scalar_state!(f64);
impl_scalar_state!(BigFloat);

impl<T: Scalar> State for DVector<T> {
    type T = T;
    type Jacobian = DMatrix<T>;

    fn shape(&self) -> (usize, usize) {
        (self.len(), 1)
    }
    fn zeros_like(&self) -> Self {
        DVector::from_element(self.len(), T::zero())
    }
    fn all_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
    fn zeros_jacobian(&self) -> Self::Jacobian {
        DMatrix::from_element(self.len(), self.len(), T::zero())
    }
    fn jacobian_shape(jac: &Self::Jacobian) -> (usize, usize) {
        (jac.nrows(), jac.ncols())
    }
}

impl<T: Scalar> State for DMatrix<T> {
    type T = T;
    type Jacobian = DMatrix<T>;

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn zeros_like(&self) -> Self {
        DMatrix::from_element(self.nrows(), self.ncols(), T::zero())
    }
    fn all_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
    fn zeros_jacobian(&self) -> Self::Jacobian {
        let n = self.len();
        DMatrix::from_element(n, n, T::zero())
    }
    fn jacobian_shape(jac: &Self::Jacobian) -> (usize, usize) {
        (jac.nrows(), jac.ncols())
    }
}
