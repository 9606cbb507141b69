//! Named, shared instances of every benchmark problem.
//!
//! Each problem is a lazily built `static`, so a consumer can pick a problem by name and hand it to
//! any solver without rebuilding it. [entry] and [entries] give an object-safe view for listing and
//! checking the whole catalog.

use std::{fmt, str::FromStr, sync::LazyLock};

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{
    problems::{
        fitzhugh_nagumo::{fitzhugh_nagumo_problem, FitzhughNagumoParams},
        hires::hires_problem,
        linear::{
            bigfloat_linear_2d_problem, bigfloat_linear_problem, large_linear_2d_problem,
            linear_2d_notinplace_problem, linear_2d_problem, linear_problem,
        },
        lotka_volterra::{lotka_volterra_problem, LotkaVolterraParams},
        mass_matrix::mm_linear_problem,
        orego::{orego_problem, OregoParams},
        pleiades::pleiades_problem,
        rigid_body::{rigid_body_problem, RigidBodyParams},
        rober::{rober_problem, RoberParams},
        three_body::three_body_problem,
        van_der_pol::{van_der_pol_problem, van_der_pol_stiff_problem, VanDerPolParams},
    },
    scalar::BigFloat,
    problem_error, CatalogEntry, OdeProblem, OdeProblemError, ProblemSummary,
};

/// The name of a catalog problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemName {
    Linear,
    BigfloatLinear,
    #[serde(rename = "linear_2d")]
    Linear2d,
    #[serde(rename = "linear_2d_notinplace")]
    Linear2dNotinplace,
    #[serde(rename = "large_linear_2d")]
    LargeLinear2d,
    #[serde(rename = "bigfloat_linear_2d")]
    BigfloatLinear2d,
    LotkaVolterra,
    FitzhughNagumo,
    VanDerPol,
    VanDerPolStiff,
    Rober,
    ThreeBody,
    RigidBody,
    Pleiades,
    MmLinear,
    Hires,
    Orego,
}

impl ProblemName {
    pub const ALL: [ProblemName; 17] = [
        ProblemName::Linear,
        ProblemName::BigfloatLinear,
        ProblemName::Linear2d,
        ProblemName::Linear2dNotinplace,
        ProblemName::LargeLinear2d,
        ProblemName::BigfloatLinear2d,
        ProblemName::LotkaVolterra,
        ProblemName::FitzhughNagumo,
        ProblemName::VanDerPol,
        ProblemName::VanDerPolStiff,
        ProblemName::Rober,
        ProblemName::ThreeBody,
        ProblemName::RigidBody,
        ProblemName::Pleiades,
        ProblemName::MmLinear,
        ProblemName::Hires,
        ProblemName::Orego,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProblemName::Linear => "linear",
            ProblemName::BigfloatLinear => "bigfloat_linear",
            ProblemName::Linear2d => "linear_2d",
            ProblemName::Linear2dNotinplace => "linear_2d_notinplace",
            ProblemName::LargeLinear2d => "large_linear_2d",
            ProblemName::BigfloatLinear2d => "bigfloat_linear_2d",
            ProblemName::LotkaVolterra => "lotka_volterra",
            ProblemName::FitzhughNagumo => "fitzhugh_nagumo",
            ProblemName::VanDerPol => "van_der_pol",
            ProblemName::VanDerPolStiff => "van_der_pol_stiff",
            ProblemName::Rober => "rober",
            ProblemName::ThreeBody => "three_body",
            ProblemName::RigidBody => "rigid_body",
            ProblemName::Pleiades => "pleiades",
            ProblemName::MmLinear => "mm_linear",
            ProblemName::Hires => "hires",
            ProblemName::Orego => "orego",
        }
    }
}

impl fmt::Display for ProblemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemName {
    type Err = OdeProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| problem_error!(UnknownProblem, s))
    }
}

fn load<U: crate::State, P>(
    name: ProblemName,
    build: fn() -> OdeProblem<U, P>,
) -> OdeProblem<U, P> {
    log::trace!("building catalog problem {name}");
    build()
}

pub static PROB_ODE_LINEAR: LazyLock<OdeProblem<f64, f64>> =
    LazyLock::new(|| load(ProblemName::Linear, linear_problem));
pub static PROB_ODE_BIGFLOAT_LINEAR: LazyLock<OdeProblem<BigFloat, BigFloat>> =
    LazyLock::new(|| load(ProblemName::BigfloatLinear, bigfloat_linear_problem));
pub static PROB_ODE_2DLINEAR: LazyLock<OdeProblem<DMatrix<f64>, f64>> =
    LazyLock::new(|| load(ProblemName::Linear2d, linear_2d_problem));
pub static PROB_ODE_2DLINEAR_NOTINPLACE: LazyLock<OdeProblem<DMatrix<f64>, f64>> =
    LazyLock::new(|| load(ProblemName::Linear2dNotinplace, linear_2d_notinplace_problem));
pub static PROB_ODE_LARGE2DLINEAR: LazyLock<OdeProblem<DMatrix<f64>, f64>> =
    LazyLock::new(|| load(ProblemName::LargeLinear2d, large_linear_2d_problem));
pub static PROB_ODE_BIGFLOAT_2DLINEAR: LazyLock<OdeProblem<DMatrix<BigFloat>, BigFloat>> =
    LazyLock::new(|| load(ProblemName::BigfloatLinear2d, bigfloat_linear_2d_problem));
pub static PROB_ODE_LOTKAVOLTERRA: LazyLock<OdeProblem<DVector<f64>, LotkaVolterraParams>> =
    LazyLock::new(|| load(ProblemName::LotkaVolterra, lotka_volterra_problem));
pub static PROB_ODE_FITZHUGHNAGUMO: LazyLock<OdeProblem<DVector<f64>, FitzhughNagumoParams>> =
    LazyLock::new(|| load(ProblemName::FitzhughNagumo, fitzhugh_nagumo_problem));
pub static PROB_ODE_VANDERPOL: LazyLock<OdeProblem<DVector<f64>, VanDerPolParams>> =
    LazyLock::new(|| load(ProblemName::VanDerPol, van_der_pol_problem));
pub static PROB_ODE_VANDERPOL_STIFF: LazyLock<OdeProblem<DVector<f64>, VanDerPolParams>> =
    LazyLock::new(|| load(ProblemName::VanDerPolStiff, van_der_pol_stiff_problem));
pub static PROB_ODE_ROBER: LazyLock<OdeProblem<DVector<f64>, RoberParams>> =
    LazyLock::new(|| load(ProblemName::Rober, rober_problem));
pub static PROB_ODE_THREEBODY: LazyLock<OdeProblem<DVector<BigFloat>, ()>> =
    LazyLock::new(|| load(ProblemName::ThreeBody, three_body_problem));
pub static PROB_ODE_RIGIDBODY: LazyLock<OdeProblem<DVector<f64>, RigidBodyParams>> =
    LazyLock::new(|| load(ProblemName::RigidBody, rigid_body_problem));
pub static PROB_ODE_PLEIADES: LazyLock<OdeProblem<DVector<f64>, ()>> =
    LazyLock::new(|| load(ProblemName::Pleiades, pleiades_problem));
pub static PROB_ODE_MM_LINEAR: LazyLock<OdeProblem<DVector<f64>, ()>> =
    LazyLock::new(|| load(ProblemName::MmLinear, mm_linear_problem));
pub static PROB_ODE_HIRES: LazyLock<OdeProblem<DVector<f64>, ()>> =
    LazyLock::new(|| load(ProblemName::Hires, hires_problem));
pub static PROB_ODE_OREGO: LazyLock<OdeProblem<DVector<f64>, OregoParams>> =
    LazyLock::new(|| load(ProblemName::Orego, orego_problem));

/// The shared instance of problem `name`, building it on first use.
pub fn entry(name: ProblemName) -> &'static dyn CatalogEntry {
    match name {
        ProblemName::Linear => &*PROB_ODE_LINEAR,
        ProblemName::BigfloatLinear => &*PROB_ODE_BIGFLOAT_LINEAR,
        ProblemName::Linear2d => &*PROB_ODE_2DLINEAR,
        ProblemName::Linear2dNotinplace => &*PROB_ODE_2DLINEAR_NOTINPLACE,
        ProblemName::LargeLinear2d => &*PROB_ODE_LARGE2DLINEAR,
        ProblemName::BigfloatLinear2d => &*PROB_ODE_BIGFLOAT_2DLINEAR,
        ProblemName::LotkaVolterra => &*PROB_ODE_LOTKAVOLTERRA,
        ProblemName::FitzhughNagumo => &*PROB_ODE_FITZHUGHNAGUMO,
        ProblemName::VanDerPol => &*PROB_ODE_VANDERPOL,
        ProblemName::VanDerPolStiff => &*PROB_ODE_VANDERPOL_STIFF,
        ProblemName::Rober => &*PROB_ODE_ROBER,
        ProblemName::ThreeBody => &*PROB_ODE_THREEBODY,
        ProblemName::RigidBody => &*PROB_ODE_RIGIDBODY,
        ProblemName::Pleiades => &*PROB_ODE_PLEIADES,
        ProblemName::MmLinear => &*PROB_ODE_MM_LINEAR,
        ProblemName::Hires => &*PROB_ODE_HIRES,
        ProblemName::Orego => &*PROB_ODE_OREGO,
    }
}

/// Look a problem up by its string name.
pub fn get(name: &str) -> Result<&'static dyn CatalogEntry, OdeProblemError> {
    Ok(entry(name.parse()?))
}

/// Every catalog problem, in the order of [ProblemName::ALL].
pub fn entries() -> impl Iterator<Item = &'static dyn CatalogEntry> {
    ProblemName::ALL.into_iter().map(entry)
}

pub fn summaries() -> Vec<ProblemSummary> {
    entries().map(|e| e.summary()).collect()
}

/// Verify every problem of the catalog, stopping at the first failure.
pub fn verify_all() -> Result<(), OdeProblemError> {
    for e in entries() {
        e.verify()?;
        log::debug!("verified catalog problem {}", e.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        insta::assert_yaml_snapshot!(ProblemName::ALL.to_vec(), @r###"
        - linear
        - bigfloat_linear
        - linear_2d
        - linear_2d_notinplace
        - large_linear_2d
        - bigfloat_linear_2d
        - lotka_volterra
        - fitzhugh_nagumo
        - van_der_pol
        - van_der_pol_stiff
        - rober
        - three_body
        - rigid_body
        - pleiades
        - mm_linear
        - hires
        - orego
        "###);
    }

    #[test]
    fn test_name_round_trip() {
        for name in ProblemName::ALL {
            assert_eq!(name.to_string().parse::<ProblemName>().unwrap(), name);
            assert_eq!(entry(name).name(), name.as_str());
        }
        assert!(matches!(
            "robertson".parse::<ProblemName>(),
            Err(OdeProblemError::UnknownProblem(s)) if s == "robertson"
        ));
    }

    #[test]
    fn test_statics_are_shared() {
        assert_eq!(PROB_ODE_ROBER.u0(), rober_problem().u0());
        assert_eq!(get("rober").unwrap().summary(), PROB_ODE_ROBER.summary());
        assert!(get("nope").is_err());
    }

    #[test]
    fn test_summaries() {
        let summaries = summaries();
        assert_eq!(summaries.len(), ProblemName::ALL.len());
        let stiff: Vec<&str> = summaries.iter().filter(|s| s.stiff).map(|s| s.name).collect();
        assert_eq!(stiff, vec!["van_der_pol_stiff", "rober", "hires", "orego"]);
        let bigfloat: Vec<&str> = summaries
            .iter()
            .filter(|s| s.scalar == "BigFloat")
            .map(|s| s.name)
            .collect();
        assert_eq!(bigfloat, vec!["bigfloat_linear", "bigfloat_linear_2d", "three_body"]);
    }

    #[test]
    fn test_verify_all() {
        verify_all().unwrap();
    }
}
