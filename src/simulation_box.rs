use std::fmt;

use crate::math::Vec3;

/// Treatment of particles reaching the edge of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryCondition {
    /// A repulsive wall force keeps particles inside
    Reflection,
    /// Particles leaving the grid are removed
    #[default]
    Absorption,
    /// Positions and neighbourhoods wrap around
    Periodic,
}

impl BoundaryCondition {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "reflection" => Some(Self::Reflection),
            "absorption" => Some(Self::Absorption),
            "periodic" => Some(Self::Periodic),
            _ => None,
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reflection => "reflection",
            Self::Absorption => "absorption",
            Self::Periodic => "periodic",
        };
        f.write_str(name)
    }
}

/// Axis-aligned domain `[0, ld)` with its boundary treatment.
///
/// An axis of length zero is not discretised and never wraps.
#[derive(Debug, Clone)]
pub struct SimulationBox {
    pub ld: Vec3,
    pub boundary: BoundaryCondition,
}

impl SimulationBox {
    pub fn new(ld: Vec3, boundary: BoundaryCondition) -> Self {
        Self { ld, boundary }
    }

    pub fn is_periodic(&self) -> bool {
        self.boundary == BoundaryCondition::Periodic
    }

    /// Shortest vector from `from` to `to`, using the nearest periodic image when the box wraps.
    pub fn direction(&self, from: &Vec3, to: &Vec3) -> Vec3 {
        let mut d = to - from;
        if self.is_periodic() {
            for i in 0..3 {
                d[i] = minimum_image(d[i], self.ld[i]);
            }
        }
        d
    }

    /// Position reached from `position` after a displacement of `delta`.
    ///
    /// Under periodic boundaries a coordinate that leaves `[0, ld)` is wrapped once. A tiny
    /// negative coordinate can round up to `ld` when wrapped, so that case lands on zero.
    pub fn displace(&self, position: &Vec3, delta: &Vec3) -> Vec3 {
        let mut p = position + delta;
        if self.is_periodic() {
            for i in 0..3 {
                let len = self.ld[i];
                if len == 0.0 {
                    continue;
                }
                if p[i] < 0.0 {
                    p[i] += len;
                    if p[i] >= len {
                        p[i] = 0.0;
                    }
                } else if p[i] >= len {
                    p[i] -= len;
                }
            }
        }
        p
    }

    pub fn half_lengths(&self) -> Vec3 {
        self.ld / 2.0
    }
}

/// Folds one component onto its nearest image when it exceeds half the box length.
pub fn minimum_image(d: f64, len: f64) -> f64 {
    if d.abs() > len / 2.0 {
        d - len.copysign(d)
    } else {
        d
    }
}
