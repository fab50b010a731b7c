//! The ideal gas law and the adiabatic-index coefficients derived from it.

/// The adiabatic index of an ideal gas, together with the coefficients
/// derived from it that appear throughout the Riemann problem relations.
///
/// The coefficients are pure functions of gamma and are derived once per
/// solve; nothing in this crate caches them in shared mutable state, so a
/// value of this type can be shared freely between concurrent solves.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdiabaticIndex {
    gamma: f64,
    gamma_inv: f64,
    odgm1: f64,
    odgp1: f64,
}

impl From<f64> for AdiabaticIndex {
    fn from(value: f64) -> Self {
        AdiabaticIndex {
            gamma: value,
            gamma_inv: 1. / value,
            odgm1: 1. / (value - 1.),
            odgp1: 1. / (value + 1.),
        }
    }
}

impl From<AdiabaticIndex> for f64 {
    fn from(value: AdiabaticIndex) -> Self {
        value.gamma
    }
}

impl AdiabaticIndex {
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// 1 / gamma
    pub fn gamma_inv(&self) -> f64 {
        self.gamma_inv
    }

    /// gamma - 1
    pub fn gm1(&self) -> f64 {
        self.gamma - 1.
    }

    /// (gamma - 1) / 2
    pub fn gm1d2(&self) -> f64 {
        0.5 * (self.gamma - 1.)
    }

    /// (gamma - 1) / (2 gamma)
    pub fn gm1d2g(&self) -> f64 {
        0.5 * (self.gamma - 1.) * self.gamma_inv
    }

    /// (gamma + 1) / (2 gamma)
    pub fn gp1d2g(&self) -> f64 {
        0.5 * (self.gamma + 1.) * self.gamma_inv
    }

    /// 2 gamma / (gamma - 1)
    pub fn tgdgm1(&self) -> f64 {
        2. * self.gamma * self.odgm1
    }

    /// (gamma - 1) / (gamma + 1)
    pub fn gm1dgp1(&self) -> f64 {
        (self.gamma - 1.) * self.odgp1
    }

    /// 1 / (gamma - 1)
    pub fn odgm1(&self) -> f64 {
        self.odgm1
    }

    /// 2 / (gamma - 1)
    pub fn tdgm1(&self) -> f64 {
        2. * self.odgm1
    }

    /// 2 / (gamma + 1)
    pub fn tdgp1(&self) -> f64 {
        2. * self.odgp1
    }

    /// Sound speed of an ideal gas: sqrt(gamma p / rho).
    pub fn sound_speed(&self, pressure: f64, density_inv: f64) -> f64 {
        (self.gamma * pressure * density_inv).sqrt()
    }
}
