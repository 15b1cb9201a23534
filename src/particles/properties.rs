use std::cmp::Ordering;
use std::fmt;

use crate::math::Vec3;
use crate::particles::new::Particle;

impl Particle {
    pub fn translate(&mut self, delta: &Vec3) {
        self.position += delta;
    }

    pub fn accelerate(&mut self, delta: &Vec3) {
        self.velocity += delta;
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

// Particles are identified by id alone, which gives containers a deterministic order.
impl PartialEq for Particle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Particle {}

impl PartialOrd for Particle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Particle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {}] x=({}, {}, {}) v=({}, {}, {}) f=({}, {}, {}) m={}",
            self.id,
            self.category,
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            self.force.x,
            self.force.y,
            self.force.z,
            self.mass
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::particles::IdAllocator;

    #[test]
    fn translate_and_accelerate_accumulate() {
        let mut p = Particle::new(Vec3::new(1.0, 1.0, 1.0));
        p.translate(&Vec3::new(0.5, -1.0, 2.0));
        p.accelerate(&Vec3::new(1.0, 0.0, 0.0));
        p.accelerate(&Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p.position, Vec3::new(1.5, 0.0, 3.0));
        assert_eq!(p.velocity, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn kinetic_energy_of_a_moving_particle() {
        let p = Particle::with_state("A", Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0), 2.0);
        assert_eq!(p.kinetic_energy(), 25.0);
    }

    #[test]
    fn ordering_uses_ids_only() {
        let ids = IdAllocator::new();
        let first = Particle::new_with_ids(&ids, Vec3::new(9.0, 9.0, 9.0));
        let second = Particle::new_with_ids(&ids, Vec3::zeros());
        assert!(first < second);

        let mut copy = first.clone();
        copy.position = Vec3::new(-1.0, -1.0, -1.0);
        assert_eq!(copy, first);

        let set: BTreeSet<Particle> = [second.clone(), first.clone(), copy].into_iter().collect();
        let order: Vec<u64> = set.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![first.id, second.id]);
    }
}
