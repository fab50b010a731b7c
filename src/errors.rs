use std::{error::Error, fmt::Display};

use crate::physical_quantities::{Primitive, State};

/// Errors reported by the `solve` entry point of the Riemann solvers.
///
/// Input validation failures are unrecoverable for the offending call, but
/// never terminate the process: the caller decides how to present them.
#[derive(Debug, Clone, PartialEq)]
pub enum RiemannSolverError {
    /// The initial states generate a vacuum: the no-vacuum condition
    /// 2 / (gamma - 1) * (a_l + a_r) > u_r - u_l does not hold. Carries the
    /// full input and the (non-positive) margin of the inequality.
    VacuumGenerated {
        left: State<Primitive>,
        right: State<Primitive>,
        a_l: f64,
        a_r: f64,
        margin: f64,
    },
    /// A density, pressure or sound speed that must be strictly positive
    /// (and finite) is not.
    NonPositiveQuantity { name: &'static str, value: f64 },
    /// The adiabatic index must satisfy gamma > 1.
    InvalidAdiabaticIndex(f64),
    /// A caller-supplied sound speed is inconsistent with sqrt(gamma p / rho).
    InconsistentSoundSpeed {
        side: &'static str,
        given: f64,
        expected: f64,
    },
}

impl Display for RiemannSolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiemannSolverError::VacuumGenerated {
                left,
                right,
                a_l,
                a_r,
                margin,
            } => {
                write!(
                    f,
                    "Vacuum is generated by the given data: rho_l = {}, rho_r = {}, \
                     u_l = {}, u_r = {}, p_l = {}, p_r = {}, a_l = {}, a_r = {}, \
                     margin = {}",
                    left.density(),
                    right.density(),
                    left.velocity(),
                    right.velocity(),
                    left.pressure(),
                    right.pressure(),
                    a_l,
                    a_r,
                    margin
                )
            }
            RiemannSolverError::NonPositiveQuantity { name, value } => {
                write!(f, "{} must be strictly positive, but is {}", name, value)
            }
            RiemannSolverError::InvalidAdiabaticIndex(gamma) => {
                write!(f, "The adiabatic index must be > 1, but is {}", gamma)
            }
            RiemannSolverError::InconsistentSoundSpeed {
                side,
                given,
                expected,
            } => {
                write!(
                    f,
                    "The {} sound speed ({}) is inconsistent with sqrt(gamma p / rho) ({})",
                    side, given, expected
                )
            }
        }
    }
}

impl Error for RiemannSolverError {}
