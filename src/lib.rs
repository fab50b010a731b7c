//! An exact Riemann solver for the 1D compressible Euler equations with an
//! ideal gas law.
//!
//! Given two uniform gas states separated by a discontinuity, the solver
//! computes the star-region pressure and velocity of the self-similar wave
//! pattern (Newton-Raphson on the pressure equation) and samples the exact
//! density, velocity and pressure at any similarity coordinate s = x / t.
//! The library also provides the classic non-iterative approximations
//! (primitive-variable, two-rarefaction and two-shock solvers).

pub use errors::RiemannSolverError;
pub use riemann_solver::{
    ExactRiemannSolver, PVRiemannSolver, RiemannStarSolver, RiemannStarValues, SolverConfig,
    StarSolution, TRRiemannSolver, TSRiemannSolver, WaveRegion,
};

mod errors;
pub mod gas_law;
pub mod physical_quantities;
pub mod riemann_solver;
