//! The linked-cell grid and the particle arena it partitions.
pub mod cells;
pub mod geometry;
pub mod new;

use crate::cell::Cell;
use crate::math::Vec3;
use crate::particles::Particle;
use crate::simulation_box::{BoundaryCondition, SimulationBox};

/// Owns every particle of a run and the grid of cells that buckets them.
///
/// Positions are stored in the internal frame `[0, ld)`: particles are shifted by `+ld/2` when
/// they are added, so inputs centred on the origin land in the first octant.
#[derive(Debug)]
pub struct World {
    grid: Vec<Cell>,
    particles: Vec<Particle>,
    sim_box: SimulationBox,
    nc: [usize; 3],
    r_cut: f64,
    r_cut_reflection: f64,
    resident: usize,
}

impl World {
    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    pub fn cell(&self, x: usize, y: usize, z: usize) -> &Cell {
        &self.grid[self.cell_index(x, y, z)]
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> &Particle {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }

    pub fn sim_box(&self) -> &SimulationBox {
        &self.sim_box
    }

    pub fn ld(&self) -> &Vec3 {
        &self.sim_box.ld
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.sim_box.boundary
    }

    pub fn nc(&self) -> [usize; 3] {
        self.nc
    }

    pub fn r_cut(&self) -> f64 {
        self.r_cut
    }

    pub fn r_cut_reflection(&self) -> f64 {
        self.r_cut_reflection
    }

    /// Number of particles currently bucketed in a cell.
    pub fn resident_count(&self) -> usize {
        self.resident
    }

    /// Arena indices of the resident particles, in grid order then insertion order.
    pub fn resident_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.resident);
        for cell in &self.grid {
            indices.extend_from_slice(cell.particles());
        }
        indices
    }

    /// Position of a particle in the frame it was given in, centred on the origin.
    pub fn origin_position(&self, particle: &Particle) -> Vec3 {
        particle.position - self.sim_box.half_lengths()
    }

    /// Split borrow used by the force loop: cells and geometry read-only, particles mutable.
    pub fn parts_mut(&mut self) -> (&[Cell], &mut [Particle], &SimulationBox) {
        (&self.grid, &mut self.particles, &self.sim_box)
    }
}
