use na::Vector3;

/// Physical vectors: positions, velocities and forces
pub type Vec3 = Vector3<f64>;

/// Signed cell coordinates, as computed from a position before bounds checks
pub type CellCoords = [i64; 3];

pub const AXES: [char; 3] = ['x', 'y', 'z'];

pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    (b - a).norm()
}
