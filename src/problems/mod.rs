//! The benchmark problems, one module per family.
//!
//! Every module exposes plain constructor functions (e.g. [lotka_volterra::lotka_volterra_problem])
//! that build a fresh [crate::OdeProblem]; the [crate::catalog] module keeps one shared instance of
//! each.

use nalgebra::DMatrix;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub mod fitzhugh_nagumo;
pub mod hires;
pub mod linear;
pub mod lotka_volterra;
pub mod mass_matrix;
pub mod orego;
pub mod pleiades;
pub mod rigid_body;
pub mod rober;
pub mod three_body;
pub mod van_der_pol;

/// Deterministic generator used for the random initial states and matrices of the catalog.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A matrix of uniform `[0, 1)` draws, filled column by column.
pub fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize) -> DMatrix<f64> {
    DMatrix::from_fn(nrows, ncols, |_, _| rng.random::<f64>())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = random_matrix(&mut seeded_rng(7), 3, 2);
        let b = random_matrix(&mut seeded_rng(7), 3, 2);
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (0.0..1.0).contains(&x)));
        assert_ne!(a, random_matrix(&mut seeded_rng(8), 3, 2));
    }
}
