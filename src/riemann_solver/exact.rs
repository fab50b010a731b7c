use crate::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::{RiemannStarSolver, RiemannStarValues, SolverConfig, StarSolution};

/// The exact Riemann solver.
///
/// The star-region pressure is the root of a nonlinear algebraic equation,
/// found by Newton-Raphson iteration from a carefully selected starting
/// guess (Toro, chapter 4). When the iteration budget runs out before the
/// relative change drops below the tolerance, the last iterate is returned
/// with the `converged` flag cleared instead of failing.
pub struct ExactRiemannSolver {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for ExactRiemannSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl ExactRiemannSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }

    /// One side's contribution to the pressure equation and its derivative
    /// with respect to p (functions (4.6), (4.7) and (4.37) in Toro).
    ///
    /// For p below the side's pressure the wave is a rarefaction and the
    /// isentropic relation applies; otherwise the Rankine-Hugoniot shock
    /// relation is used.
    pub(super) fn pressure_function(
        p: f64,
        state: &State<Primitive>,
        a: f64,
        eos: &AdiabaticIndex,
    ) -> (f64, f64) {
        if p < state.pressure() {
            let p_rat = p / state.pressure();
            (
                eos.tdgm1() * a * (p_rat.powf(eos.gm1d2g()) - 1.),
                1. / (state.density() * a) * p_rat.powf(-eos.gp1d2g()),
            )
        } else {
            let cap_a = eos.tdgp1() / state.density();
            let cap_b = eos.gm1dgp1() * state.pressure();
            let qrt = (cap_a / (cap_b + p)).sqrt();
            (
                (p - state.pressure()) * qrt,
                (1. - 0.5 * (p - state.pressure()) / (cap_b + p)) * qrt,
            )
        }
    }

    /// Bottom function of (4.48) in Toro.
    fn gb(p: f64, state: &State<Primitive>, eos: &AdiabaticIndex) -> f64 {
        let cap_a = eos.tdgp1() / state.density();
        let cap_b = eos.gm1dgp1() * state.pressure();
        (cap_a / (p + cap_b)).sqrt()
    }

    /// Select a starting pressure for the Newton-Raphson iteration.
    ///
    /// Three-way policy based on (4.47) and (4.48) in Toro: the linearized
    /// (acoustic) estimate when the waves are weak, the two-rarefaction
    /// closed form when it undershoots both pressures and a two-shock
    /// approximation otherwise.
    fn guess_p(
        &self,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        eos: &AdiabaticIndex,
    ) -> f64 {
        let du = right.velocity() - left.velocity();
        let p_min = left.pressure().min(right.pressure());
        let p_max = left.pressure().max(right.pressure());
        let q_rat = p_max / p_min;
        let ppv = 0.5 * (left.pressure() + right.pressure())
            - 0.125 * du * (left.density() + right.density()) * (a_l + a_r);

        if q_rat < 2. && p_min < ppv && ppv < p_max {
            ppv.max(self.tolerance)
        } else if ppv < p_min {
            // Two rarefactions
            let num = a_l + a_r - eos.gm1d2() * du;
            let denom = a_l / left.pressure().powf(eos.gm1d2g())
                + a_r / right.pressure().powf(eos.gm1d2g());
            (num / denom).powf(eos.tgdgm1())
        } else {
            // Two shocks
            let p0 = ppv.max(self.tolerance);
            let g_l = Self::gb(p0, left, eos);
            let g_r = Self::gb(p0, right, eos);
            let p = (g_l * left.pressure() + g_r * right.pressure() - du) / (g_l + g_r);
            p.max(self.tolerance)
        }
    }

    fn shock_middle_density(pdps: f64, state: &State<Primitive>, eos: &AdiabaticIndex) -> f64 {
        state.density() * (pdps + eos.gm1dgp1()) / (eos.gm1dgp1() * pdps + 1.)
    }

    fn rarefaction_middle_density(
        pdps: f64,
        state: &State<Primitive>,
        eos: &AdiabaticIndex,
    ) -> f64 {
        state.density() * pdps.powf(eos.gamma_inv())
    }

    fn middle_density(p: f64, state: &State<Primitive>, eos: &AdiabaticIndex) -> f64 {
        let pdps = p / state.pressure();
        if pdps > 1. {
            Self::shock_middle_density(pdps, state, eos)
        } else {
            Self::rarefaction_middle_density(pdps, state, eos)
        }
    }

    /// Complete the star state from a known star pressure.
    ///
    /// Also used by the non-iterative solvers once they have their pressure
    /// estimate.
    pub(super) fn star_state_from_pstar(
        pstar: f64,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        eos: &AdiabaticIndex,
    ) -> RiemannStarValues {
        let (f_l, _) = Self::pressure_function(pstar, left, a_l, eos);
        let (f_r, _) = Self::pressure_function(pstar, right, a_r, eos);
        RiemannStarValues {
            rho_l: Self::middle_density(pstar, left, eos),
            rho_r: Self::middle_density(pstar, right, eos),
            u: 0.5 * (left.velocity() + right.velocity()) + 0.5 * (f_r - f_l),
            p: pstar,
        }
    }
}

impl RiemannStarSolver for ExactRiemannSolver {
    fn star_state(
        &self,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        eos: &AdiabaticIndex,
    ) -> StarSolution {
        let du = right.velocity() - left.velocity();

        let mut p = self.guess_p(left, right, a_l, a_r, eos);
        let mut p_old = p;
        let mut f_l = 0.;
        let mut f_r = 0.;
        let mut cha = 2. * self.tolerance;
        let mut n_iter = 0;

        while cha > self.tolerance && n_iter < self.max_iterations {
            let (fl, fld) = Self::pressure_function(p, left, a_l, eos);
            let (fr, frd) = Self::pressure_function(p, right, a_r, eos);
            f_l = fl;
            f_r = fr;

            p -= (fl + fr + du) / (fld + frd);
            cha = 2. * ((p - p_old) / (p + p_old)).abs();

            // The pressure function is undefined for non-positive pressures.
            if p <= 0. {
                p = self.tolerance;
            }
            p_old = p;
            n_iter += 1;
        }

        let star = RiemannStarValues {
            rho_l: Self::middle_density(p, left, eos),
            rho_r: Self::middle_density(p, right, eos),
            u: 0.5 * (left.velocity() + right.velocity()) + 0.5 * (f_r - f_l),
            p,
        };
        StarSolution {
            star,
            converged: cha <= self.tolerance,
            n_iter,
        }
    }
}
