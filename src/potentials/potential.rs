use crate::math::Vec3;

/// Interaction between two particles `i` and `j`.
///
/// `rij` points from `i` to `j`. The returned force is the one acting on `j`; the force on `i` is
/// its opposite.
pub trait PairPotential: Send + Sync {
    fn compute_potential(&self, rij: &Vec3, mass_i: f64, mass_j: f64) -> (f64, Vec3);
    fn get_rcut(&self) -> f64;

    /// Whether a pair at `distance` interacts. Coincident particles never do.
    fn in_range(&self, distance: f64) -> bool {
        distance != 0.0 && distance < self.get_rcut()
    }
}
