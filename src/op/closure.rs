use crate::{OdeProblemError, State};

use super::{InPlaceFn, OutOfPlaceFn, RhsShape};

/// The right-hand side `f(u, p, t)` of a problem.
///
/// A problem declares exactly one calling convention. [Rhs::call] and [Rhs::call_inplace] are strict
/// and fail with [OdeProblemError::RhsShapeMismatch] when used with the other convention, while
/// [Rhs::evaluate] works for both by allocating the output when needed.
pub enum Rhs<U: State, P> {
    InPlace(InPlaceFn<U, P>),
    OutOfPlace(OutOfPlaceFn<U, P>),
}

impl<U: State, P> Rhs<U, P> {
    pub fn inplace<F>(func: F) -> Self
    where
        F: Fn(&U, &P, U::T, &mut U) + Send + Sync + 'static,
    {
        Rhs::InPlace(Box::new(func))
    }

    pub fn out_of_place<F>(func: F) -> Self
    where
        F: Fn(&U, &P, U::T) -> U + Send + Sync + 'static,
    {
        Rhs::OutOfPlace(Box::new(func))
    }

    pub fn shape(&self) -> RhsShape {
        match self {
            Rhs::InPlace(_) => RhsShape::InPlace,
            Rhs::OutOfPlace(_) => RhsShape::OutOfPlace,
        }
    }

    pub fn is_inplace(&self) -> bool {
        matches!(self, Rhs::InPlace(_))
    }

    /// Evaluate an out-of-place right-hand side and return the derivative.
    pub fn call(&self, u: &U, p: &P, t: U::T) -> Result<U, OdeProblemError> {
        match self {
            Rhs::OutOfPlace(func) => Ok(func(u, p, t)),
            Rhs::InPlace(_) => Err(OdeProblemError::RhsShapeMismatch {
                requested: RhsShape::OutOfPlace,
                found: RhsShape::InPlace,
            }),
        }
    }

    /// Evaluate an in-place right-hand side, overwriting every entry of `du`.
    pub fn call_inplace(&self, u: &U, p: &P, t: U::T, du: &mut U) -> Result<(), OdeProblemError> {
        match self {
            Rhs::InPlace(func) => {
                func(u, p, t, du);
                Ok(())
            }
            Rhs::OutOfPlace(_) => Err(OdeProblemError::RhsShapeMismatch {
                requested: RhsShape::InPlace,
                found: RhsShape::OutOfPlace,
            }),
        }
    }

    /// Evaluate the right-hand side with whichever convention it declares.
    pub fn evaluate(&self, u: &U, p: &P, t: U::T) -> U {
        match self {
            Rhs::InPlace(func) => {
                let mut du = u.zeros_like();
                func(u, p, t, &mut du);
                du
            }
            Rhs::OutOfPlace(func) => func(u, p, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::DVector;

    use super::*;

    fn double(u: &DVector<f64>, _p: &(), _t: f64, du: &mut DVector<f64>) {
        du.copy_from(&(u * 2.0));
    }

    #[test]
    fn test_inplace_rhs() {
        let rhs = Rhs::<DVector<f64>, ()>::inplace(double);
        let u = DVector::from_vec(vec![1.0, 2.0]);
        let mut du = DVector::from_element(2, f64::NAN);
        rhs.call_inplace(&u, &(), 0.0, &mut du).unwrap();
        assert_eq!(du, DVector::from_vec(vec![2.0, 4.0]));
        assert_eq!(rhs.evaluate(&u, &(), 0.0), du);
        assert!(rhs.is_inplace());
        assert!(matches!(
            rhs.call(&u, &(), 0.0),
            Err(OdeProblemError::RhsShapeMismatch {
                requested: RhsShape::OutOfPlace,
                found: RhsShape::InPlace
            })
        ));
    }

    #[test]
    fn test_out_of_place_rhs() {
        let rhs = Rhs::<f64, f64>::out_of_place(|u, p, _t| p * u);
        assert_eq!(rhs.call(&2.0, &3.0, 0.0).unwrap(), 6.0);
        assert_eq!(rhs.evaluate(&2.0, &3.0, 0.0), 6.0);
        assert_eq!(rhs.shape(), RhsShape::OutOfPlace);
        let mut du = 0.0;
        assert!(rhs.call_inplace(&2.0, &3.0, 0.0, &mut du).is_err());
    }
}
