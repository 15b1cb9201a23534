use log::debug;

use crate::cell::Cell;
use crate::errors::{Result, SimError};
use crate::math::{Vec3, AXES};
use crate::simulation_box::{BoundaryCondition, SimulationBox};
use crate::world::World;

const SHIFT: [isize; 3] = [-1, 0, 1];

impl World {
    /// Builds the grid for a domain of lengths `ld`, with cells of edge at least `r_cut`.
    ///
    /// The topology is fixed here: cell count, boundary flags and neighbour links never change
    /// afterwards.
    pub fn new(
        ld: Vec3,
        r_cut: f64,
        r_cut_reflection: f64,
        boundary: BoundaryCondition,
    ) -> Result<Self> {
        if !(r_cut > 0.0) {
            return Err(SimError::NonPositiveCutoff { r_cut });
        }
        if r_cut < r_cut_reflection {
            return Err(SimError::CutoffOrder {
                r_cut,
                r_cut_reflection,
            });
        }
        if ld.iter().all(|&len| len == 0.0) {
            return Err(SimError::EmptyDomain);
        }

        let nc = Self::divide_into_cells(&ld, r_cut)?;
        let [nx, ny, nz] = nc;

        let mut grid = Vec::with_capacity(nx * ny * nz);
        for x in 0..nx {
            for y in 0..ny {
                for z in 0..nz {
                    let on_edge =
                        |i: usize, n: usize, len: f64| (i == 0 || i == n - 1) && len > 0.0;
                    let boundary_cell =
                        on_edge(x, nx, ld.x) || on_edge(y, ny, ld.y) || on_edge(z, nz, ld.z);
                    grid.push(Cell::new([x, y, z], boundary_cell));
                }
            }
        }

        let mut world = Self {
            grid,
            particles: Vec::new(),
            sim_box: SimulationBox::new(ld, boundary),
            nc,
            r_cut,
            r_cut_reflection,
            resident: 0,
        };
        world.link_neighbours();

        debug!(
            "grid of {}x{}x{} cells, edge {}, {} boundaries",
            nx, ny, nz, r_cut, boundary
        );
        Ok(world)
    }

    /// Cells per axis: `floor(ld / r_cut)`, or a single cell on an axis of length zero.
    pub fn divide_into_cells(ld: &Vec3, r_cut: f64) -> Result<[usize; 3]> {
        let mut ncell = [1usize; 3];

        for i in 0..3 {
            if ld[i] == 0.0 {
                continue;
            }
            let n = (ld[i] / r_cut).floor();
            if !(n >= 1.0) {
                return Err(SimError::AxisShorterThanCutoff {
                    axis: AXES[i],
                    length: ld[i],
                    r_cut,
                });
            }
            ncell[i] = n as usize;
        }

        Ok(ncell)
    }

    pub fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        let [_, ny, nz] = self.nc;
        (x * ny + y) * nz + z
    }

    fn link_neighbours(&mut self) {
        for index in 0..self.grid.len() {
            let [x, y, z] = self.grid[index].indices();
            for neighbour in self.neighbour_indices(x, y, z) {
                self.grid[index].add_neighbour(neighbour);
            }
        }
    }

    fn neighbour_indices(&self, x: usize, y: usize, z: usize) -> Vec<usize> {
        let periodic = self.sim_box.is_periodic();
        let mut neighbours = Vec::with_capacity(27);

        for &dx in &SHIFT {
            for &dy in &SHIFT {
                for &dz in &SHIFT {
                    let shifted = [(x, dx), (y, dy), (z, dz)]
                        .iter()
                        .zip(self.nc.iter())
                        .map(|(&(c, d), &n)| shift_axis(c, d, n, periodic))
                        .collect::<Option<Vec<usize>>>();

                    if let Some(c) = shifted {
                        neighbours.push(self.cell_index(c[0], c[1], c[2]));
                    }
                }
            }
        }
        neighbours
    }
}

/// Neighbour coordinate along one axis, or `None` when the offset must not produce a link.
///
/// A single-cell axis only links to itself. With two cells and wraparound the negative and
/// positive offsets reach the same cell, so only the positive one is kept.
fn shift_axis(c: usize, d: isize, n: usize, periodic: bool) -> Option<usize> {
    if n == 1 && d != 0 {
        return None;
    }
    if n == 2 && d < 0 && periodic {
        return None;
    }
    let shifted = c as isize + d;
    if periodic {
        Some(shifted.rem_euclid(n as isize) as usize)
    } else if shifted >= 0 && shifted < n as isize {
        Some(shifted as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(len: f64, r_cut: f64, boundary: BoundaryCondition) -> World {
        World::new(Vec3::new(len, len, len), r_cut, 1.0, boundary).unwrap()
    }

    #[test]
    fn cell_counts_follow_floor_of_ratio() {
        let world = World::new(
            Vec3::new(10.0, 7.5, 0.0),
            2.5,
            1.0,
            BoundaryCondition::Absorption,
        )
        .unwrap();
        assert_eq!(world.nc(), [4, 3, 1]);
        assert_eq!(world.grid().len(), 12);

        let world = World::new(
            Vec3::new(10.0, 10.0, 10.0),
            3.0,
            1.0,
            BoundaryCondition::Absorption,
        )
        .unwrap();
        assert_eq!(world.nc(), [3, 3, 3]);
        assert_eq!(world.grid().len(), 27);
    }

    #[test]
    fn cells_know_their_indices() {
        let world = cube(3.0, 1.0, BoundaryCondition::Absorption);
        for (i, cell) in world.grid().iter().enumerate() {
            let [x, y, z] = cell.indices();
            assert_eq!(world.cell_index(x, y, z), i);
            assert_eq!(i, x * 9 + y * 3 + z);
        }
    }

    #[test]
    fn neighbour_counts_on_a_closed_grid() {
        let world = cube(3.0, 1.0, BoundaryCondition::Absorption);

        let centre = world.cell(1, 1, 1);
        assert!(!centre.is_boundary());
        assert_eq!(centre.neighbours().len(), 27);
        assert!(centre.neighbours().contains(&world.cell_index(1, 1, 1)));

        assert_eq!(world.cell(0, 1, 1).neighbours().len(), 18);
        assert_eq!(world.cell(0, 0, 1).neighbours().len(), 12);
        assert_eq!(world.cell(2, 0, 2).neighbours().len(), 8);
        assert!(world.cell(2, 0, 2).is_boundary());
    }

    #[test]
    fn periodic_grid_links_every_cell_fully() {
        let world = cube(3.0, 1.0, BoundaryCondition::Periodic);
        for cell in world.grid() {
            let mut links = cell.neighbours().to_vec();
            assert_eq!(links.len(), 27);
            links.sort_unstable();
            links.dedup();
            assert_eq!(links.len(), 27);
        }
        // the corner wraps to the opposite face
        let corner = world.cell(0, 0, 0);
        assert!(corner.neighbours().contains(&world.cell_index(2, 2, 2)));
    }

    #[test]
    fn narrow_axes_never_link_twice() {
        let world = World::new(
            Vec3::new(2.0, 2.0, 0.0),
            1.0,
            1.0,
            BoundaryCondition::Periodic,
        )
        .unwrap();
        assert_eq!(world.nc(), [2, 2, 1]);
        for cell in world.grid() {
            let mut links = cell.neighbours().to_vec();
            links.sort_unstable();
            links.dedup();
            assert_eq!(links.len(), cell.neighbours().len());
            assert_eq!(links.len(), 4);
        }

        let world = World::new(
            Vec3::new(2.0, 2.0, 0.0),
            1.0,
            1.0,
            BoundaryCondition::Absorption,
        )
        .unwrap();
        for cell in world.grid() {
            assert_eq!(cell.neighbours().len(), 4);
        }
    }

    #[test]
    fn boundary_flags_ignore_flat_axes() {
        let world = World::new(
            Vec3::new(3.0, 0.0, 0.0),
            1.0,
            1.0,
            BoundaryCondition::Reflection,
        )
        .unwrap();
        assert!(world.cell(0, 0, 0).is_boundary());
        assert!(!world.cell(1, 0, 0).is_boundary());
        assert!(world.cell(2, 0, 0).is_boundary());
    }

    #[test]
    fn rejects_invalid_geometry() {
        let ld = Vec3::new(10.0, 10.0, 10.0);
        assert!(matches!(
            World::new(ld, 1.0, 1.5, BoundaryCondition::Reflection),
            Err(SimError::CutoffOrder { .. })
        ));
        assert!(matches!(
            World::new(ld, 0.0, 0.0, BoundaryCondition::Absorption),
            Err(SimError::NonPositiveCutoff { .. })
        ));
        assert!(matches!(
            World::new(Vec3::zeros(), 1.0, 1.0, BoundaryCondition::Absorption),
            Err(SimError::EmptyDomain)
        ));
        assert!(matches!(
            World::new(Vec3::new(10.0, 2.0, 0.0), 2.5, 1.0, BoundaryCondition::Absorption),
            Err(SimError::AxisShorterThanCutoff { axis: 'y', .. })
        ));
        assert!(matches!(
            World::new(Vec3::new(10.0, -5.0, 0.0), 2.5, 1.0, BoundaryCondition::Absorption),
            Err(SimError::AxisShorterThanCutoff { axis: 'y', .. })
        ));
    }
}
