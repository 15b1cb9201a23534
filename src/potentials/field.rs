use crate::math::Vec3;

/// Constant gravitational field along y: every particle feels `(0, m G, 0)`.
pub struct UniformField {
    g: f64,
}

impl UniformField {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Energy of a particle of `mass` at `position` and the force acting on it.
    pub fn compute_potential(&self, position: &Vec3, mass: f64) -> (f64, Vec3) {
        (-mass * self.g * position.y, Vec3::new(0.0, mass * self.g, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_scales_with_mass() {
        let field = UniformField::new(-12.0);
        let (u, f) = field.compute_potential(&Vec3::new(1.0, 2.0, 3.0), 2.0);
        assert_eq!(f, Vec3::new(0.0, -24.0, 0.0));
        assert_eq!(u, 48.0);
    }
}
