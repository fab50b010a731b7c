use std::marker::PhantomData;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Primitive;

/// A 1D gas state.
///
/// The marker type selects the interpretation of the three fields. For
/// `State<Primitive>` they are (density, velocity, pressure).
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct State<T>(f64, f64, f64, PhantomData<T>);

impl State<Primitive> {
    pub fn new(density: f64, velocity: f64, pressure: f64) -> Self {
        Self(density, velocity, pressure, PhantomData)
    }

    pub fn density(&self) -> f64 {
        self.0
    }

    pub fn velocity(&self) -> f64 {
        self.1
    }

    pub fn pressure(&self) -> f64 {
        self.2
    }

    /// Shift this state's velocity by the given amount (Galilean boost).
    pub fn boost(&self, velocity: f64) -> Self {
        Self::new(self.density(), self.velocity() + velocity, self.pressure())
    }

    /// Mirror this state through the origin: the velocity changes sign.
    pub fn reflect(&self) -> Self {
        Self::new(self.density(), -self.velocity(), self.pressure())
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::{Primitive, State};

    #[test]
    fn test_boost_and_reflect() {
        let state = State::<Primitive>::new(0.75, 0.4, 0.8);

        let boosted = state.boost(-0.4);
        assert_approx_eq!(f64, boosted.density(), 0.75);
        assert_approx_eq!(f64, boosted.velocity(), 0.);
        assert_approx_eq!(f64, boosted.pressure(), 0.8);

        let reflected = state.reflect();
        assert_approx_eq!(f64, reflected.density(), 0.75);
        assert_approx_eq!(f64, reflected.velocity(), -0.4);
        assert_approx_eq!(f64, reflected.pressure(), 0.8);
    }
}
