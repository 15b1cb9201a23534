use log::{debug, warn};

use crate::errors::{Result, SimError};
use crate::math::{CellCoords, Vec3};
use crate::simulation_box::BoundaryCondition;
use crate::world::World;

impl World {
    /// Raw cell coordinates of a position: `floor(position / r_cut)` on each axis.
    pub fn cell_coords(&self, position: &Vec3) -> CellCoords {
        let mut coords = [0i64; 3];
        for i in 0..3 {
            coords[i] = (position[i] / self.r_cut).floor() as i64;
        }
        coords
    }

    /// Flat index of the cell holding `position`, or `None` when it lies outside the grid.
    ///
    /// When `ld` is not a multiple of `r_cut`, the strip between the last full cell and the
    /// domain edge belongs to the last cell.
    pub fn locate(&self, position: &Vec3) -> Option<usize> {
        let coords = self.cell_coords(position);
        let mut cell = [0usize; 3];

        for i in 0..3 {
            let n = self.nc[i] as i64;
            let c = coords[i];
            cell[i] = if c >= 0 && c < n {
                c as usize
            } else if c >= n && self.sim_box.ld[i] > 0.0 && position[i] < self.sim_box.ld[i] {
                (n - 1) as usize
            } else {
                return None;
            };
        }

        Some(self.cell_index(cell[0], cell[1], cell[2]))
    }

    /// Buckets every particle of the arena into its cell.
    pub fn fill_cells(&mut self) -> Result<()> {
        for index in 0..self.particles.len() {
            match self.locate(&self.particles[index].position) {
                Some(cell) => {
                    self.grid[cell].add_particle(index);
                    self.resident += 1;
                }
                None => self.release(index)?,
            }
        }
        debug!(
            "{} of {} particles placed in cells",
            self.resident,
            self.particles.len()
        );
        Ok(())
    }

    /// Moves the particles whose position left their cell into the right one.
    ///
    /// Particles already confirmed during this pass are skipped, so a particle moved forward in
    /// grid order is not checked twice. Returns how many particles changed cell or left the grid.
    pub fn correct_cells(&mut self) -> Result<usize> {
        let mut reassigned = 0;

        for current in 0..self.grid.len() {
            let mut k = 0;
            while k < self.grid[current].particles().len() {
                let index = self.grid[current].particles()[k];
                if self.particles[index].cell_confirmed {
                    k += 1;
                    continue;
                }

                let position = self.particles[index].position;
                let target = if self.grid[current].matches(&self.cell_coords(&position)) {
                    Some(current)
                } else {
                    // raw coordinates miss the last cell inside the remainder strip
                    self.locate(&position)
                };
                match target {
                    Some(target) if target == current => {
                        self.particles[index].cell_confirmed = true;
                        k += 1;
                        continue;
                    }
                    Some(target) => {
                        self.grid[target].add_particle(index);
                        self.particles[index].cell_confirmed = true;
                    }
                    None => {
                        self.resident -= 1;
                        self.release(index)?;
                    }
                }

                reassigned += 1;
                k = self.grid[current].remove_particle(k);
            }
        }

        Ok(reassigned)
    }

    /// Handles a particle found outside the grid.
    fn release(&self, index: usize) -> Result<()> {
        let particle = &self.particles[index];
        match self.sim_box.boundary {
            BoundaryCondition::Absorption => {
                debug!("particle {} absorbed at {:?}", particle.id, particle.position.as_slice());
                Ok(())
            }
            BoundaryCondition::Reflection => {
                warn!(
                    "particle {} crossed the reflecting wall at {:?} and was removed",
                    particle.id,
                    particle.position.as_slice()
                );
                Ok(())
            }
            BoundaryCondition::Periodic => Err(SimError::ParticleEscaped {
                id: particle.id,
                boundary: BoundaryCondition::Periodic,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::Particle;

    fn world(boundary: BoundaryCondition) -> World {
        World::new(Vec3::new(3.0, 3.0, 3.0), 1.0, 1.0, boundary).unwrap()
    }

    /// Adds a particle given in the internal frame.
    fn add_at(world: &mut World, x: f64, y: f64, z: f64) -> usize {
        world.add_particle(Particle::new(Vec3::new(x - 1.5, y - 1.5, z - 1.5)))
    }

    #[test]
    fn fill_places_particles_by_floor() {
        let mut world = world(BoundaryCondition::Absorption);
        let a = add_at(&mut world, 2.2, 1.5, 0.5);
        let b = add_at(&mut world, 0.0, 0.0, 0.0);
        world.fill_cells().unwrap();

        assert_eq!(world.resident_count(), 2);
        assert_eq!(world.cell(2, 1, 0).particles(), &[a]);
        assert_eq!(world.cell(0, 0, 0).particles(), &[b]);
    }

    #[test]
    fn fill_drops_outsiders_under_absorption() {
        let mut world = world(BoundaryCondition::Absorption);
        add_at(&mut world, 1.0, 1.0, 1.0);
        add_at(&mut world, -0.5, 1.0, 1.0);
        add_at(&mut world, 1.0, 3.0, 1.0);
        world.fill_cells().unwrap();

        assert_eq!(world.resident_count(), 1);
        assert_eq!(world.resident_indices(), vec![0]);
        assert_eq!(world.particles().len(), 3);
    }

    #[test]
    fn remainder_strip_belongs_to_last_cell() {
        let mut world =
            World::new(Vec3::new(10.0, 10.0, 10.0), 3.0, 1.0, BoundaryCondition::Absorption)
                .unwrap();
        let p = world.add_particle(Particle::new(Vec3::new(4.5, -5.0, 0.0)));
        world.fill_cells().unwrap();

        // internal x = 9.5, floor(9.5 / 3) = 3 is past the grid but inside the domain
        assert_eq!(world.cell(2, 0, 1).particles(), &[p]);
        assert_eq!(world.locate(&Vec3::new(10.0, 1.0, 1.0)), None);
    }

    #[test]
    fn remainder_strip_residents_are_not_moved() {
        let mut world =
            World::new(Vec3::new(10.0, 10.0, 10.0), 3.0, 1.0, BoundaryCondition::Absorption)
                .unwrap();
        let p = world.add_particle(Particle::new(Vec3::new(4.5, -5.0, 0.0)));
        let q = world.add_particle(Particle::new(Vec3::new(-5.0, -5.0, -5.0)));
        world.fill_cells().unwrap();

        assert!(!world.cell(2, 0, 1).matches(&world.cell_coords(&world.particle(p).position)));
        assert!(world.cell(0, 0, 0).matches(&world.cell_coords(&world.particle(q).position)));
        assert_eq!(world.correct_cells().unwrap(), 0);
        assert_eq!(world.cell(2, 0, 1).particles(), &[p]);
        assert_eq!(world.cell(0, 0, 0).particles(), &[q]);
    }

    #[test]
    fn correct_cells_moves_a_particle_across_a_face() {
        let mut world = world(BoundaryCondition::Absorption);
        let p = add_at(&mut world, 0.5, 0.5, 0.5);
        let q = add_at(&mut world, 0.7, 0.5, 0.5);
        world.fill_cells().unwrap();
        assert_eq!(world.cell(0, 0, 0).particles(), &[p, q]);

        world.move_particle(p, &Vec3::new(1.0, 0.0, 1.2));
        assert_eq!(world.correct_cells().unwrap(), 1);

        assert_eq!(world.cell(0, 0, 0).particles(), &[q]);
        assert_eq!(world.cell(1, 0, 1).particles(), &[p]);
        let coords = world.cell_coords(&world.particle(p).position);
        assert!(world.cell(1, 0, 1).matches(&coords));
        let holders = world.grid().iter().filter(|c| c.particles().contains(&p)).count();
        assert_eq!(holders, 1);
        assert_eq!(world.resident_count(), 2);
    }

    #[test]
    fn correct_cells_is_idempotent() {
        let mut world = world(BoundaryCondition::Absorption);
        for i in 0..9 {
            let f = i as f64;
            add_at(&mut world, 0.3 * f, 0.31 * f, 2.9 - 0.3 * f);
        }
        world.fill_cells().unwrap();

        assert_eq!(world.correct_cells().unwrap(), 0);
        assert_eq!(world.correct_cells().unwrap(), 0);
        assert!(world.particles().iter().all(|p| p.cell_confirmed));
    }

    #[test]
    fn leaving_particles_are_absorbed() {
        let mut world = world(BoundaryCondition::Absorption);
        let p = add_at(&mut world, 2.5, 1.0, 1.0);
        world.fill_cells().unwrap();

        world.move_particle(p, &Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(world.correct_cells().unwrap(), 1);
        assert_eq!(world.resident_count(), 0);
        assert!(world.resident_indices().is_empty());
    }

    #[test]
    fn reflection_escapes_are_removed() {
        let mut world = world(BoundaryCondition::Reflection);
        let p = add_at(&mut world, 0.2, 1.0, 1.0);
        world.fill_cells().unwrap();

        world.move_particle(p, &Vec3::new(-0.5, 0.0, 0.0));
        assert_eq!(world.correct_cells().unwrap(), 1);
        assert_eq!(world.resident_count(), 0);
    }

    #[test]
    fn wrap_from_just_below_zero_stays_resident() {
        let mut world =
            World::new(Vec3::new(10.0, 10.0, 10.0), 2.5, 1.0, BoundaryCondition::Periodic)
                .unwrap();
        let p = world.add_particle(Particle::new(Vec3::new(-5.0, 0.0, 0.0)));
        world.fill_cells().unwrap();
        assert_eq!(world.particle(p).position.x, 0.0);

        world.particle_mut(p).cell_confirmed = false;
        world.move_particle(p, &Vec3::new(-1e-17, 0.0, 0.0));
        world.correct_cells().unwrap();

        assert_eq!(world.resident_count(), 1);
        let x = world.particle(p).position.x;
        assert!(x >= 0.0 && x < 10.0);
    }

    #[test]
    fn periodic_escape_is_an_error() {
        let mut world = World::new(
            Vec3::new(3.0, 3.0, 0.0),
            1.0,
            1.0,
            BoundaryCondition::Periodic,
        )
        .unwrap();
        // the flat z axis never wraps, so leaving its single cell is a real escape
        let p = world.add_particle(Particle::new(Vec3::new(0.0, 0.0, 0.5)));
        world.fill_cells().unwrap();

        world.move_particle(p, &Vec3::new(0.0, 0.0, 1.0));
        assert!(matches!(
            world.correct_cells(),
            Err(SimError::ParticleEscaped { boundary: BoundaryCondition::Periodic, .. })
        ));
    }
}
