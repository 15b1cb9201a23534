use std::sync::atomic::{AtomicU64, Ordering};

use crate::math::Vec3;

pub const DEFAULT_CATEGORY: &str = "N/A";

/// Hands out strictly increasing particle ids, starting at 1.
///
/// The pair loop relies on ids to visit each pair once, so every particle of a world must come
/// from the same allocator. Tests that need predictable ids create their own.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_IDS: IdAllocator = IdAllocator::new();

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u64,
    /// Free-form label, carried along but never interpreted
    pub category: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    /// Force of the previous step, needed by the velocity half of Verlet
    pub previous_force: Vec3,
    pub mass: f64,
    /// Set once the particle has been checked during the current re-bucketing pass
    pub cell_confirmed: bool,
}

impl Particle {
    /// Particle at rest with unit mass.
    pub fn new(position: Vec3) -> Self {
        Self::new_with_ids(&GLOBAL_IDS, position)
    }

    pub fn with_state(category: &str, position: Vec3, velocity: Vec3, mass: f64) -> Self {
        Self::with_state_with_ids(&GLOBAL_IDS, category, position, velocity, mass)
    }

    pub fn new_with_ids(ids: &IdAllocator, position: Vec3) -> Self {
        Self::with_state_with_ids(ids, DEFAULT_CATEGORY, position, Vec3::zeros(), 1.0)
    }

    pub fn with_state_with_ids(
        ids: &IdAllocator,
        category: &str,
        position: Vec3,
        velocity: Vec3,
        mass: f64,
    ) -> Self {
        Self {
            id: ids.next_id(),
            category: category.to_string(),
            position,
            velocity,
            force: Vec3::zeros(),
            previous_force: Vec3::zeros(),
            mass,
            cell_confirmed: false,
        }
    }
}
