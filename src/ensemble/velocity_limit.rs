use crate::particles::Particle;

/// Caps the kinetic energy of the system by rescaling velocities.
///
/// Unlike a thermostat it never heats the system: velocities are only scaled down, by
/// `sqrt(target / KE)`, when the kinetic energy exceeds the target.
pub struct VelocityLimiter {
    pub target_energy: f64,
}

impl VelocityLimiter {
    pub fn new(target_energy: f64) -> Self {
        Self { target_energy }
    }

    /// Scaling factor to apply for a system of kinetic energy `kinetic_energy`, if any.
    pub fn scale_factor(&self, kinetic_energy: f64) -> Option<f64> {
        if kinetic_energy > self.target_energy {
            Some((self.target_energy / kinetic_energy).sqrt())
        } else {
            None
        }
    }

    /// Rescales the velocities of the particles at `indices`. Returns the factor used.
    pub fn apply(&self, particles: &mut [Particle], indices: &[usize]) -> Option<f64> {
        let kinetic_energy: f64 = indices.iter().map(|&i| particles[i].kinetic_energy()).sum();
        let scale = self.scale_factor(kinetic_energy)?;

        for &i in indices {
            particles[i].velocity *= scale;
        }
        Some(scale)
    }
}
