use crate::math::Vec3;
use crate::potentials::{gravity::Gravity, lennard_jones::LennardJones, potential::PairPotential};

pub enum PairPotentialKind {
    LennardJones(LennardJones),
    Gravity(Gravity),
}

impl PairPotentialKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LennardJones(_) => "lennard-jones",
            Self::Gravity(_) => "gravity",
        }
    }
}

impl PairPotential for PairPotentialKind {
    fn compute_potential(&self, rij: &Vec3, mass_i: f64, mass_j: f64) -> (f64, Vec3) {
        match self {
            PairPotentialKind::LennardJones(lj) => lj.compute_potential(rij, mass_i, mass_j),
            PairPotentialKind::Gravity(g) => g.compute_potential(rij, mass_i, mass_j),
        }
    }

    fn get_rcut(&self) -> f64 {
        match self {
            PairPotentialKind::LennardJones(lj) => lj.get_rcut(),
            PairPotentialKind::Gravity(g) => g.get_rcut(),
        }
    }
}
