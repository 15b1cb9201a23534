/// Default cut-off radius for pair interactions
pub const DEFAULT_R_CUT: f64 = 2.5;
/// Default LJ well depth
pub const DEFAULT_EPSILON: f64 = 5.0;
/// Default LJ length scale
pub const DEFAULT_SIGMA: f64 = 1.0;
/// Default uniform field constant, negative pulls along -y
pub const DEFAULT_G: f64 = -12.0;
pub const DEFAULT_DELTA: f64 = 0.00005;
pub const DEFAULT_T_FINAL: f64 = 19.5;
/// Default kinetic energy target of the velocity limiter
pub const DEFAULT_TARGET_ENERGY: f64 = 0.005;
/// Steps between two snapshots and between two velocity rescalings
pub const DEFAULT_SNAPSHOT_EVERY: usize = 1000;

/// Gravitational constant in AU^3 / (solar mass * year^2)
pub const FOUR_PI_SQUARED: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;

/// Default reflection cut-off, the position of the LJ minimum for sigma = 1
pub fn default_r_cut_reflection() -> f64 {
    2f64.powf(1.0 / 6.0)
}
