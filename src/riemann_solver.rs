//! Riemann solvers for the 1D compressible Euler equations.
//!
//! All solvers in this module compute the state of the star region (the zone
//! between the left- and right-facing waves) of a Riemann problem. The exact
//! solution at any similarity coordinate s = x / t can then be sampled from
//! the star state, reusing it for as many points as needed.

pub use exact::ExactRiemannSolver;
pub use pvrs::PVRiemannSolver;
pub use trrs::TRRiemannSolver;
pub use tsrs::TSRiemannSolver;

use crate::{
    errors::RiemannSolverError,
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

mod exact;
mod pvrs;
mod trrs;
mod tsrs;

/// Relative tolerance used to check caller-supplied sound speeds against
/// sqrt(gamma p / rho).
const SOUND_SPEED_REL_TOL: f64 = 1e-4;

/// The pressure, velocity and left/right densities of the star region.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RiemannStarValues {
    pub rho_l: f64,
    pub rho_r: f64,
    pub u: f64,
    pub p: f64,
}

/// The outcome of a successful solve.
///
/// `converged` is false when an iterative solver exhausted its iteration
/// budget; the star state then holds the last iterate and the caller decides
/// whether to accept the approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSolution {
    pub star: RiemannStarValues,
    pub converged: bool,
    pub n_iter: usize,
}

/// Configuration of the iterative solvers.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
        }
    }
}

/// The five regions of the self-similar wave pattern, plus the unperturbed
/// initial states on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveRegion {
    LeftState,
    LeftFan,
    LeftStar,
    RightStar,
    RightFan,
    RightState,
}

/// Classify the wave region containing the similarity coordinate `s`.
///
/// The regions are mutually exclusive by construction: the head of a fan
/// always lies outside its tail and shock speeds always lie outside the
/// contact, so the nested comparisons below cannot overlap.
pub fn classify(
    star: &RiemannStarValues,
    left: &State<Primitive>,
    right: &State<Primitive>,
    a_l: f64,
    a_r: f64,
    s: f64,
    eos: &AdiabaticIndex,
) -> WaveRegion {
    if s < star.u {
        if star.p <= left.pressure() {
            // Left rarefaction
            if s < left.velocity() - a_l {
                WaveRegion::LeftState
            } else {
                let tail = star.u - a_l * (star.p / left.pressure()).powf(eos.gm1d2g());
                if s > tail {
                    WaveRegion::LeftStar
                } else {
                    WaveRegion::LeftFan
                }
            }
        } else {
            // Left shock
            let pdps = star.p / left.pressure();
            let s_shock = left.velocity() - a_l * (eos.gp1d2g() * pdps + eos.gm1d2g()).sqrt();
            if s < s_shock {
                WaveRegion::LeftState
            } else {
                WaveRegion::LeftStar
            }
        }
    } else if star.p > right.pressure() {
        // Right shock
        let pdps = star.p / right.pressure();
        let s_shock = right.velocity() + a_r * (eos.gp1d2g() * pdps + eos.gm1d2g()).sqrt();
        if s > s_shock {
            WaveRegion::RightState
        } else {
            WaveRegion::RightStar
        }
    } else {
        // Right rarefaction
        if s > right.velocity() + a_r {
            WaveRegion::RightState
        } else {
            let tail = star.u + a_r * (star.p / right.pressure()).powf(eos.gm1d2g());
            if s < tail {
                WaveRegion::RightStar
            } else {
                WaveRegion::RightFan
            }
        }
    }
}

/// Sample the self-similar solution inside a rarefaction fan.
///
/// `a` is the signed sound speed of the state at the head of the fan:
/// positive for the left fan, negative for the right fan.
fn sample_rarefaction_fan(
    state: &State<Primitive>,
    a: f64,
    s: f64,
    eos: &AdiabaticIndex,
) -> State<Primitive> {
    let v = state.velocity();
    let base = eos.tdgp1() + eos.gm1dgp1() * (v - s) / a;
    State::<Primitive>::new(
        state.density() * base.powf(eos.tdgm1()),
        eos.tdgp1() * (a + eos.gm1d2() * v + s),
        state.pressure() * base.powf(eos.tgdgm1()),
    )
}

/// Validate a Riemann problem's input states.
///
/// Checks positivity of densities, pressures and sound speeds, gamma > 1,
/// consistency of the caller-supplied sound speeds with the gas law and the
/// no-vacuum condition.
pub fn validate_input(
    left: &State<Primitive>,
    right: &State<Primitive>,
    a_l: f64,
    a_r: f64,
    eos: &AdiabaticIndex,
) -> Result<(), RiemannSolverError> {
    if !(eos.gamma() > 1.) || !eos.gamma().is_finite() {
        return Err(RiemannSolverError::InvalidAdiabaticIndex(eos.gamma()));
    }
    let quantities = [
        ("left density", left.density()),
        ("right density", right.density()),
        ("left pressure", left.pressure()),
        ("right pressure", right.pressure()),
        ("left sound speed", a_l),
        ("right sound speed", a_r),
    ];
    for (name, value) in quantities {
        if !(value > 0.) || !value.is_finite() {
            return Err(RiemannSolverError::NonPositiveQuantity { name, value });
        }
    }
    for (side, given, state) in [("left", a_l, left), ("right", a_r, right)] {
        let expected = eos.sound_speed(state.pressure(), 1. / state.density());
        if (given - expected).abs() > SOUND_SPEED_REL_TOL * expected {
            return Err(RiemannSolverError::InconsistentSoundSpeed {
                side,
                given,
                expected,
            });
        }
    }
    let margin = eos.tdgm1() * (a_l + a_r) - (right.velocity() - left.velocity());
    if !(margin > 0.) {
        return Err(RiemannSolverError::VacuumGenerated {
            left: *left,
            right: *right,
            a_l,
            a_r,
            margin,
        });
    }
    Ok(())
}

/// A Riemann solver that computes the star state of a Riemann problem.
///
/// The two initial states are given as 1D primitive states together with
/// their sound speeds (the host keeps those consistent with the gas law; they
/// are validated, not re-derived). Solvers carry no mutable state, so one
/// solver value can serve many problems, also concurrently.
pub trait RiemannStarSolver {
    /// Compute the star state. The input is assumed to be valid (see
    /// [`validate_input`]); use [`RiemannStarSolver::solve`] for untrusted
    /// input.
    fn star_state(
        &self,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        eos: &AdiabaticIndex,
    ) -> StarSolution;

    /// Validate the input states and compute the star state.
    fn solve(
        &self,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        eos: &AdiabaticIndex,
    ) -> Result<StarSolution, RiemannSolverError> {
        validate_input(left, right, a_l, a_r, eos)?;
        Ok(self.star_state(left, right, a_l, a_r, eos))
    }

    /// Sample the self-similar solution at the similarity coordinate
    /// `s` = x / t, given a previously computed star state.
    fn sample(
        &self,
        star: &RiemannStarValues,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        s: f64,
        eos: &AdiabaticIndex,
    ) -> State<Primitive> {
        match classify(star, left, right, a_l, a_r, s, eos) {
            WaveRegion::LeftState => *left,
            WaveRegion::LeftFan => sample_rarefaction_fan(left, a_l, s, eos),
            WaveRegion::LeftStar => State::<Primitive>::new(star.rho_l, star.u, star.p),
            WaveRegion::RightStar => State::<Primitive>::new(star.rho_r, star.u, star.p),
            WaveRegion::RightFan => sample_rarefaction_fan(right, -a_r, s, eos),
            WaveRegion::RightState => *right,
        }
    }
}
