use crate::constants::FOUR_PI_SQUARED;
use crate::math::Vec3;
use crate::potentials::potential::PairPotential;

/// Newtonian attraction in astronomical units, `G = 4 pi^2`.
pub struct Gravity {
    rcut: f64,
}

impl Gravity {
    pub fn new(rcut: f64) -> Self {
        Self { rcut }
    }
}

impl PairPotential for Gravity {
    fn compute_potential(&self, rij: &Vec3, mass_i: f64, mass_j: f64) -> (f64, Vec3) {
        let r = rij.norm();
        let gmm = FOUR_PI_SQUARED * mass_i * mass_j;

        (-gmm / r, -gmm / r.powi(3) * rij)
    }

    fn get_rcut(&self) -> f64 {
        self.rcut
    }
}
