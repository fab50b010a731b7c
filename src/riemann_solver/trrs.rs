use crate::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::{ExactRiemannSolver, RiemannStarSolver, StarSolution};

/// Two-rarefaction Riemann solver.
///
/// Computes the star pressure from the closed-form solution obtained by
/// assuming both waves are rarefactions (Toro, section 9.4.1), then completes
/// the star state with the relations of the exact solver. The estimate is
/// exact when both waves really are rarefactions.
pub struct TRRiemannSolver;

impl RiemannStarSolver for TRRiemannSolver {
    fn star_state(
        &self,
        left: &State<Primitive>,
        right: &State<Primitive>,
        a_l: f64,
        a_r: f64,
        eos: &AdiabaticIndex,
    ) -> StarSolution {
        let du = right.velocity() - left.velocity();
        let num = a_l + a_r - eos.gm1d2() * du;
        let denom =
            a_l / left.pressure().powf(eos.gm1d2g()) + a_r / right.pressure().powf(eos.gm1d2g());
        let pstar = (num / denom).powf(eos.tgdgm1());

        StarSolution {
            star: ExactRiemannSolver::star_state_from_pstar(pstar, left, right, a_l, a_r, eos),
            converged: true,
            n_iter: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;

    const GAMMA: f64 = 1.4;

    #[test]
    fn test_exact_for_two_rarefactions() {
        // Diverging flows produce two rarefaction waves, for which the
        // two-rarefaction pressure is the exact star pressure.
        let eos: AdiabaticIndex = GAMMA.into();
        let left = State::<Primitive>::new(1., -2., 0.4);
        let right = State::<Primitive>::new(1., 2., 0.4);
        let a = eos.sound_speed(0.4, 1.);

        let approximate = TRRiemannSolver.solve(&left, &right, a, a, &eos).unwrap();
        let exact = ExactRiemannSolver::default()
            .solve(&left, &right, a, a, &eos)
            .unwrap();

        assert!(approximate.star.p < left.pressure());
        assert_approx_eq!(f64, approximate.star.p, exact.star.p, epsilon = 1e-6);
        assert_approx_eq!(f64, approximate.star.u, exact.star.u, epsilon = 1e-6);
    }
}
