use crate::math::Vec3;
use crate::potentials::potential::PairPotential;

pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
    rcut: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64, rcut: f64) -> Self {
        Self {
            epsilon,
            sigma,
            rcut,
        }
    }
}

impl PairPotential for LennardJones {
    fn compute_potential(&self, rij: &Vec3, _mass_i: f64, _mass_j: f64) -> (f64, Vec3) {
        let inv_rij2 = 1.0 / rij.norm_squared();
        let vanderwaals_attraction = (self.sigma.powi(2) * inv_rij2).powi(3);
        let lj_repulsion = vanderwaals_attraction.powi(2);

        let potential_energy = 4.0 * self.epsilon * (lj_repulsion - vanderwaals_attraction);

        // 24 eps / r^2 * t (1 - 2t) is the magnitude along rij acting on i
        let force =
            24.0 * self.epsilon * (2.0 * lj_repulsion - vanderwaals_attraction) * inv_rij2 * rij;

        (potential_energy, force)
    }

    fn get_rcut(&self) -> f64 {
        self.rcut
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn force_vanishes_at_the_minimum() {
        let lj = LennardJones::new(5.0, 1.0, 2.5);
        let r_min = 2f64.powf(1.0 / 6.0);
        let (u, f) = lj.compute_potential(&Vec3::new(r_min, 0.0, 0.0), 1.0, 1.0);

        assert_relative_eq!(u, -5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn close_pairs_repel() {
        let lj = LennardJones::new(5.0, 1.0, 2.5);
        let rij = Vec3::new(0.0, 0.9, 0.0);
        let (_, f) = lj.compute_potential(&rij, 1.0, 1.0);

        // j is pushed further along rij
        assert!(f.dot(&rij) > 0.0);
        let t = (1.0f64 / 0.9).powi(6);
        assert_relative_eq!(
            f.y,
            -24.0 * 5.0 / 0.81 * t * (1.0 - 2.0 * t) * 0.9,
            max_relative = 1e-12
        );
    }

    #[test]
    fn distant_pairs_attract() {
        let lj = LennardJones::new(1.0, 1.0, 2.5);
        let rij = Vec3::new(1.5, 0.0, 0.0);
        let (u, f) = lj.compute_potential(&rij, 1.0, 1.0);
        assert!(u < 0.0);
        assert!(f.x < 0.0);
        assert!(!lj.in_range(2.5));
    }
}
