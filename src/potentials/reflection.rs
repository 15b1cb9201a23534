use crate::math::Vec3;
use crate::simulation_box::{minimum_image, SimulationBox};

/// Soft repulsive wall on every face of the domain.
///
/// A particle at distance `d` from a wall interacts with its mirror image at `2d` through a
/// Lennard-Jones repulsion. Only walls closer than the reflection cut-off act.
pub struct WallReflection {
    epsilon: f64,
    sigma: f64,
    rcut: f64,
}

impl WallReflection {
    pub fn new(epsilon: f64, sigma: f64, rcut: f64) -> Self {
        Self {
            epsilon,
            sigma,
            rcut,
        }
    }

    /// Energy and force of the walls on a particle at `position` in the internal frame.
    pub fn compute_potential(&self, position: &Vec3, sim_box: &SimulationBox) -> (f64, Vec3) {
        let mut energy = 0.0;
        let mut force = Vec3::zeros();

        for i in 0..3 {
            if sim_box.ld[i] == 0.0 {
                continue;
            }
            // signed distance to the nearest wall: positive near 0, negative near ld
            let d = minimum_image(position[i], sim_box.ld[i]);
            if d == 0.0 || d.abs() >= self.rcut {
                continue;
            }
            let s = (self.sigma / (2.0 * d)).powi(6);
            force[i] += -24.0 * self.epsilon * (1.0 / (2.0 * d)) * s * (1.0 - 2.0 * s);
            energy += 2.0 * self.epsilon * (s * s - s);
        }

        (energy, force)
    }
}
