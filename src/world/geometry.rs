use log::warn;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::math::Vec3;
use crate::particles::Particle;
use crate::world::World;

impl World {
    /// Moves `particle` into the internal frame and stores it. Returns its arena index.
    ///
    /// The particle is not bucketed until `fill_cells` runs.
    pub fn add_particle(&mut self, mut particle: Particle) -> usize {
        if particle.mass <= 0.0 {
            warn!(
                "particle {} has non-positive mass {}",
                particle.id, particle.mass
            );
        }
        particle.translate(&self.sim_box.half_lengths());
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// Adds `n` particles at rest, spread uniformly over the domain.
    pub fn add_random_particles<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        let half = self.sim_box.half_lengths();
        let axes: Vec<Option<Uniform<f64>>> = (0..3)
            .map(|i| (half[i] > 0.0).then(|| Uniform::new(-half[i], half[i])))
            .collect();

        for _ in 0..n {
            let mut position = Vec3::zeros();
            for (i, dist) in axes.iter().enumerate() {
                if let Some(dist) = dist {
                    position[i] = dist.sample(rng);
                }
            }
            self.add_particle(Particle::new(position));
        }
    }

    /// Vector from particle `from` to particle `to`, minimum image under periodic boundaries.
    pub fn direction_vector(&self, from: usize, to: usize) -> Vec3 {
        self.sim_box
            .direction(&self.particles[from].position, &self.particles[to].position)
    }

    pub fn move_particle(&mut self, index: usize, delta: &Vec3) {
        let moved = self.sim_box.displace(&self.particles[index].position, delta);
        self.particles[index].position = moved;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::simulation_box::BoundaryCondition;

    fn world(ld: Vec3, boundary: BoundaryCondition) -> World {
        World::new(ld, 1.0, 1.0, boundary).unwrap()
    }

    #[test]
    fn particles_are_shifted_into_the_first_octant() {
        let mut world = world(Vec3::new(10.0, 10.0, 10.0), BoundaryCondition::Absorption);
        let i = world.add_particle(Particle::new(Vec3::new(-2.0, 1.0, 3.0)));
        assert_eq!(world.particle(i).position, Vec3::new(3.0, 6.0, 8.0));
        assert_eq!(world.origin_position(world.particle(i)), Vec3::new(-2.0, 1.0, 3.0));
    }

    #[test]
    fn periodic_direction_uses_the_nearest_image() {
        let mut world = world(Vec3::new(10.0, 10.0, 10.0), BoundaryCondition::Periodic);
        let a = world.add_particle(Particle::new(Vec3::new(-4.0, -3.0, 0.0)));
        let b = world.add_particle(Particle::new(Vec3::new(4.0, 3.0, 4.0)));

        let d = world.direction_vector(a, b);
        assert_relative_eq!(d, Vec3::new(-2.0, -4.0, 4.0));
        assert_relative_eq!(d.norm(), 6.0);
    }

    #[test]
    fn absorbing_direction_is_the_plain_difference() {
        let mut world = world(Vec3::new(10.0, 10.0, 10.0), BoundaryCondition::Absorption);
        let a = world.add_particle(Particle::new(Vec3::new(-1.0, 1.0, 0.5)));
        let b = world.add_particle(Particle::new(Vec3::new(2.0, 4.0, 2.0)));

        let d = world.direction_vector(a, b);
        assert_relative_eq!(d, Vec3::new(3.0, 3.0, 1.5));
        assert_relative_eq!(d.norm(), 4.5);
    }

    #[test]
    fn moves_wrap_only_when_periodic() {
        let delta = Vec3::new(-7.0, 6.0, 1.0);

        let mut periodic = world(Vec3::new(10.0, 10.0, 10.0), BoundaryCondition::Periodic);
        let p = periodic.add_particle(Particle::new(Vec3::new(-2.0, 1.0, 3.0)));
        periodic.move_particle(p, &delta);
        assert_eq!(periodic.particle(p).position, Vec3::new(6.0, 2.0, 9.0));

        let mut open = world(Vec3::new(10.0, 10.0, 10.0), BoundaryCondition::Absorption);
        let p = open.add_particle(Particle::new(Vec3::new(-2.0, 1.0, 3.0)));
        open.move_particle(p, &delta);
        assert_eq!(open.particle(p).position, Vec3::new(-4.0, 12.0, 9.0));
    }

    #[test]
    fn non_positive_mass_is_kept() {
        let mut world = world(Vec3::new(4.0, 4.0, 0.0), BoundaryCondition::Absorption);
        let i = world.add_particle(Particle::with_state("X", Vec3::zeros(), Vec3::zeros(), -1.0));
        assert_eq!(world.particle(i).mass, -1.0);
    }

    #[test]
    fn random_particles_land_inside_the_grid() {
        let mut world = world(Vec3::new(6.0, 4.0, 0.0), BoundaryCondition::Absorption);
        let mut rng = SmallRng::seed_from_u64(7);
        world.add_random_particles(50, &mut rng);
        world.fill_cells().unwrap();

        assert_eq!(world.particles().len(), 50);
        assert_eq!(world.resident_count(), 50);
        for p in world.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 6.0);
            assert!(p.position.y >= 0.0 && p.position.y < 4.0);
            assert_eq!(p.position.z, 0.0);
        }
    }
}
