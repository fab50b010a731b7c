use crate::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::{RiemannStarSolver, RiemannStarValues, StarSolution};

/// Primitive-variable Riemann solver.
///
/// Linearizes the Euler equations around the average of the two states
/// (Toro, section 9.3). Only adequate for weak waves; the exact solver also
/// uses this estimate as its starting guess in the weak-wave regime.
pub struct PVRiemannSolver;

impl PVRiemannSolver {
    pub(super) fn rho_bar(rho_l: f64, rho_r: f64) -> f64 {
        0.5 * (rho_l + rho_r)
    }

    pub(super) fn p_bar(p_l: f64, p_r: f64) -> f64 {
        0.5 * (p_l + p_r)
    }

    pub(super) fn a_bar(a_l: f64, a_r: f64) -> f64 {
        0.5 * (a_l + a_r)
    }

    pub(super) fn p_star(rho_bar: f64, p_bar: f64, a_bar: f64, v_l: f64, v_r: f64) -> f64 {
        p_bar + 0.5 * (v_l - v_r) * rho_bar * a_bar
    }
}

impl RiemannStarSolver for PVRiemannSolver {
    fn star_state(
        &self,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        _eos: &AdiabaticIndex,
    ) -> StarSolution {
        let v_l = left.velocity();
        let v_r = right.velocity();
        let rho_bar = Self::rho_bar(left.density(), right.density());
        let p_bar = Self::p_bar(left.pressure(), right.pressure());
        let a_bar = Self::a_bar(a_l, a_r);

        let p = Self::p_star(rho_bar, p_bar, a_bar, v_l, v_r);
        let u = 0.5 * ((v_l + v_r) + (left.pressure() - right.pressure()) / (rho_bar * a_bar));
        let rho_l = left.density() + (v_l - u) * rho_bar / a_bar;
        let rho_r = right.density() + (u - v_r) * rho_bar / a_bar;

        StarSolution {
            star: RiemannStarValues { rho_l, rho_r, u, p },
            converged: true,
            n_iter: 0,
        }
    }
}
