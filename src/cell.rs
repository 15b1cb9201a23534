//! One bucket of the linked-cell grid.
use crate::math::CellCoords;

/// Grid cell holding the arena indices of its resident particles.
///
/// Neighbour cells are stored as indices into the world's flat grid. The list includes the cell
/// itself and, under periodic boundaries, the cells wrapped around from the opposite face.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    indices: [usize; 3],
    boundary: bool,
    neighbours: Vec<usize>,
    particles: Vec<usize>,
}

impl Cell {
    pub fn new(indices: [usize; 3], boundary: bool) -> Self {
        Self {
            indices,
            boundary,
            neighbours: Vec::with_capacity(27),
            particles: Vec::new(),
        }
    }

    pub fn compare_indices(&self, x: i64, y: i64, z: i64) -> bool {
        let [ix, iy, iz] = self.indices;
        ix as i64 == x && iy as i64 == y && iz as i64 == z
    }

    pub fn matches(&self, coords: &CellCoords) -> bool {
        self.compare_indices(coords[0], coords[1], coords[2])
    }

    pub fn add_particle(&mut self, particle: usize) {
        self.particles.push(particle);
    }

    pub fn add_neighbour(&mut self, cell: usize) {
        self.neighbours.push(cell);
    }

    /// Removes the resident at `position` and returns the position of the entry that followed
    /// it, so a scan over the residents can carry on from there.
    pub fn remove_particle(&mut self, position: usize) -> usize {
        self.particles.remove(position);
        position
    }

    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    pub fn is_boundary(&self) -> bool {
        self.boundary
    }

    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }

    pub fn particles(&self) -> &[usize] {
        &self.particles
    }
}
