use exact_riemann::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
    ExactRiemannSolver, RiemannSolverError, RiemannStarSolver,
};
use float_cmp::assert_approx_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

const GAMMA: f64 = 1.4;

fn sound_speed(state: &State<Primitive>, eos: &AdiabaticIndex) -> f64 {
    eos.sound_speed(state.pressure(), 1. / state.density())
}

fn sod() -> (AdiabaticIndex, State<Primitive>, State<Primitive>, f64, f64) {
    let eos: AdiabaticIndex = GAMMA.into();
    let left = State::<Primitive>::new(1., 0., 1.);
    let right = State::<Primitive>::new(0.125, 0., 0.1);
    let a_l = sound_speed(&left, &eos);
    let a_r = sound_speed(&right, &eos);
    (eos, left, right, a_l, a_r)
}

#[test]
fn test_sod_shock_tube() {
    let (eos, left, right, a_l, a_r) = sod();
    let solver = ExactRiemannSolver::default();

    let solution = solver.solve(&left, &right, a_l, a_r, &eos).unwrap();
    assert!(solution.converged);
    assert_approx_eq!(f64, solution.star.p, 0.30313, epsilon = 1e-4);
    assert_approx_eq!(f64, solution.star.u, 0.92745, epsilon = 1e-4);

    // At s = 0 the solution sits between the left rarefaction and the
    // contact and carries the left star state.
    let w = solver.sample(&solution.star, &left, &right, a_l, a_r, 0., &eos);
    assert_approx_eq!(f64, w.density(), 0.426, epsilon = 1e-3);
    assert_approx_eq!(f64, w.velocity(), 0.927, epsilon = 1e-3);
    assert_approx_eq!(f64, w.pressure(), 0.303, epsilon = 1e-3);
}

#[test]
fn test_rankine_hugoniot_consistency() {
    // The Sod problem has a right-facing shock: sampling immediately ahead
    // of the shock returns the unperturbed right state, immediately behind
    // it the post-shock star state, both exactly.
    let (eos, left, right, a_l, a_r) = sod();
    let solver = ExactRiemannSolver::default();
    let star = solver.solve(&left, &right, a_l, a_r, &eos).unwrap().star;

    assert!(star.p > right.pressure());
    let s_shock =
        right.velocity() + a_r * (eos.gp1d2g() * star.p / right.pressure() + eos.gm1d2g()).sqrt();

    let ahead = solver.sample(&star, &left, &right, a_l, a_r, s_shock + 1e-6, &eos);
    assert_eq!(ahead, right);

    let behind = solver.sample(&star, &left, &right, a_l, a_r, s_shock - 1e-6, &eos);
    assert_eq!(
        behind,
        State::<Primitive>::new(star.rho_r, star.u, star.p)
    );
}

#[test]
fn test_contact_consistency() {
    // Pressure and velocity are continuous across the contact; only the
    // density may jump.
    let (eos, left, right, a_l, a_r) = sod();
    let solver = ExactRiemannSolver::default();
    let star = solver.solve(&left, &right, a_l, a_r, &eos).unwrap().star;

    let left_limit = solver.sample(&star, &left, &right, a_l, a_r, star.u - 1e-12, &eos);
    let right_limit = solver.sample(&star, &left, &right, a_l, a_r, star.u, &eos);
    assert_eq!(left_limit.pressure(), star.p);
    assert_eq!(right_limit.pressure(), star.p);
    assert_eq!(left_limit.velocity(), star.u);
    assert_eq!(right_limit.velocity(), star.u);
    assert_eq!(left_limit.density(), star.rho_l);
    assert_eq!(right_limit.density(), star.rho_r);
}

#[test]
fn test_determinism() {
    // Identical inputs give bit-identical star states.
    let (eos, left, right, a_l, a_r) = sod();
    let solver = ExactRiemannSolver::default();

    let first = solver.solve(&left, &right, a_l, a_r, &eos).unwrap();
    let second = solver.solve(&left, &right, a_l, a_r, &eos).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_degenerate_sampling() {
    // Equal states on both sides: every similarity coordinate returns the
    // common state.
    let eos: AdiabaticIndex = GAMMA.into();
    let state = State::<Primitive>::new(0.75, 0.3, 0.8);
    let a = sound_speed(&state, &eos);
    let solver = ExactRiemannSolver::default();

    let solution = solver.solve(&state, &state, a, a, &eos).unwrap();
    assert_eq!(solution.star.p, state.pressure());
    assert_eq!(solution.star.u, state.velocity());
    for s in [-3., -1., -0.3, 0., 0.3, 1., 3.] {
        let w = solver.sample(&solution.star, &state, &state, a, a, s, &eos);
        assert_eq!(w, state);
    }
}

#[test]
fn test_mirror_symmetry() {
    // Swapping the states, negating the velocities and negating s leaves
    // density and pressure unchanged and negates the velocity.
    let eos: AdiabaticIndex = GAMMA.into();
    let solver = ExactRiemannSolver::default();
    let mut rng = StdRng::seed_from_u64(42);

    let mut tested = 0;
    while tested < 50 {
        let left = State::<Primitive>::new(
            rng.gen_range(0.1..10.),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.1..10.),
        );
        let right = State::<Primitive>::new(
            rng.gen_range(0.1..10.),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.1..10.),
        );
        let a_l = sound_speed(&left, &eos);
        let a_r = sound_speed(&right, &eos);

        let solution = match solver.solve(&left, &right, a_l, a_r, &eos) {
            Ok(solution) => solution,
            Err(RiemannSolverError::VacuumGenerated { .. }) => continue,
            Err(err) => panic!("Unexpected error: {}", err),
        };
        let mirrored = solver
            .solve(&right.reflect(), &left.reflect(), a_r, a_l, &eos)
            .unwrap();

        assert_approx_eq!(f64, solution.star.p, mirrored.star.p);
        assert_approx_eq!(f64, solution.star.u, -mirrored.star.u);
        assert_approx_eq!(f64, solution.star.rho_l, mirrored.star.rho_r);
        assert_approx_eq!(f64, solution.star.rho_r, mirrored.star.rho_l);

        for _ in 0..10 {
            let s = rng.gen_range(-3.0..3.0);
            let w = solver.sample(&solution.star, &left, &right, a_l, a_r, s, &eos);
            let w_mirrored = solver.sample(
                &mirrored.star,
                &right.reflect(),
                &left.reflect(),
                a_r,
                a_l,
                -s,
                &eos,
            );
            assert_approx_eq!(f64, w.density(), w_mirrored.density());
            assert_approx_eq!(f64, w.velocity(), -w_mirrored.velocity());
            assert_approx_eq!(f64, w.pressure(), w_mirrored.pressure());
        }
        tested += 1;
    }
}

#[test]
fn test_vacuum_generation() {
    let eos: AdiabaticIndex = GAMMA.into();
    let left = State::<Primitive>::new(1., -5., 0.01);
    let right = State::<Primitive>::new(1., 5., 0.01);
    let a_l = sound_speed(&left, &eos);
    let a_r = sound_speed(&right, &eos);
    let solver = ExactRiemannSolver::default();

    match solver.solve(&left, &right, a_l, a_r, &eos) {
        Err(RiemannSolverError::VacuumGenerated { margin, .. }) => assert!(margin <= 0.),
        other => panic!("Expected a vacuum error, got {:?}", other),
    }
}

#[test]
fn test_invalid_input() {
    let eos: AdiabaticIndex = GAMMA.into();
    let state = State::<Primitive>::new(1., 0., 1.);
    let a = sound_speed(&state, &eos);
    let solver = ExactRiemannSolver::default();

    let negative_pressure = State::<Primitive>::new(1., 0., -1.);
    assert!(matches!(
        solver.solve(&state, &negative_pressure, a, a, &eos),
        Err(RiemannSolverError::NonPositiveQuantity { .. })
    ));

    let isothermal: AdiabaticIndex = 1.0.into();
    assert!(matches!(
        solver.solve(&state, &state, a, a, &isothermal),
        Err(RiemannSolverError::InvalidAdiabaticIndex(_))
    ));

    assert!(matches!(
        solver.solve(&state, &state, a, 0.5 * a, &eos),
        Err(RiemannSolverError::InconsistentSoundSpeed { .. })
    ));
}
