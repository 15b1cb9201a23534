//! Force computation over the cell grid and the velocity Verlet loop.
use log::{debug, info};

use crate::ensemble::velocity_limit::VelocityLimiter;
use crate::errors::Result;
use crate::math::Vec3;
use crate::potentials::{
    field::UniformField, gravity::Gravity, kind::PairPotentialKind, lennard_jones::LennardJones,
    potential::PairPotential, reflection::WallReflection,
};
use crate::readers::simulation_config::SimulationConfig;
use crate::simulation_box::BoundaryCondition;
use crate::world::World;

/// Receives the state of the world every `snapshot_every` steps.
pub trait SnapshotSink {
    fn write_snapshot(&mut self, world: &World, iteration: usize) -> Result<()>;
}

/// Drives a [`World`] forward in time with velocity Verlet.
pub struct Simulation {
    world: World,
    pair_potentials: Vec<PairPotentialKind>,
    field: Option<UniformField>,
    reflection: Option<WallReflection>,
    limiter: Option<VelocityLimiter>,
    delta: f64,
    n_steps: usize,
    snapshot_every: usize,
    steps_done: usize,
}

impl Simulation {
    /// Sets up the force models selected in `config` and buckets the particles of `world`.
    pub fn new(mut world: World, config: &SimulationConfig) -> Result<Self> {
        config.validate_integration()?;

        let mut pair_potentials = Vec::new();
        if config.forces.lennard_jones {
            pair_potentials.push(PairPotentialKind::LennardJones(LennardJones::new(
                config.epsilon,
                config.sigma,
                world.r_cut(),
            )));
        }
        if config.forces.gravity_interaction {
            pair_potentials.push(PairPotentialKind::Gravity(Gravity::new(world.r_cut())));
        }
        let field = config
            .forces
            .gravity_field
            .then(|| UniformField::new(config.g));
        let reflection = (world.boundary() == BoundaryCondition::Reflection).then(|| {
            WallReflection::new(config.epsilon, config.sigma, world.r_cut_reflection())
        });
        let limiter = config
            .limit_velocity
            .then(|| VelocityLimiter::new(config.target_energy));

        let names: Vec<&str> = pair_potentials.iter().map(|p| p.name()).collect();
        debug!("pair potentials: {:?}", names);

        world.fill_cells()?;

        Ok(Self {
            world,
            pair_potentials,
            field,
            reflection,
            limiter,
            delta: config.delta,
            n_steps: config.step_count(),
            snapshot_every: config.snapshot_every,
            steps_done: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_world(self) -> World {
        self.world
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn steps_done(&self) -> usize {
        self.steps_done
    }

    pub fn elapsed_time(&self) -> f64 {
        self.steps_done as f64 * self.delta
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.world
            .resident_indices()
            .iter()
            .map(|&i| self.world.particle(i).kinetic_energy())
            .sum()
    }

    /// Recomputes the force on every resident particle and returns the potential energy.
    pub fn compute_system_forces(&mut self) -> f64 {
        let (grid, particles, sim_box) = self.world.parts_mut();
        let mut potential_energy = 0.0;

        for cell in grid {
            for &i in cell.particles() {
                particles[i].force = Vec3::zeros();
            }
        }

        if let Some(wall) = &self.reflection {
            for cell in grid.iter().filter(|c| c.is_boundary()) {
                for &i in cell.particles() {
                    let (u, f) = wall.compute_potential(&particles[i].position, sim_box);
                    particles[i].force += f;
                    potential_energy += u;
                }
            }
        }

        if let Some(field) = &self.field {
            for cell in grid {
                for &i in cell.particles() {
                    let (u, f) = field.compute_potential(&particles[i].position, particles[i].mass);
                    particles[i].force += f;
                    potential_energy += u;
                }
            }
        }

        if self.pair_potentials.is_empty() {
            return potential_energy;
        }

        for cell in grid {
            for &i in cell.particles() {
                for &neighbour in cell.neighbours() {
                    for &j in grid[neighbour].particles() {
                        // each pair once, from the particle with the larger id
                        if particles[i].id <= particles[j].id {
                            continue;
                        }
                        let rij = sim_box.direction(&particles[i].position, &particles[j].position);
                        let distance = rij.norm();

                        for potential in &self.pair_potentials {
                            if !potential.in_range(distance) {
                                continue;
                            }
                            let (uij, force_ij) = potential.compute_potential(
                                &rij,
                                particles[i].mass,
                                particles[j].mass,
                            );
                            potential_energy += uij;
                            particles[i].force -= force_ij;
                            particles[j].force += force_ij;
                        }
                    }
                }
            }
        }

        potential_energy
    }

    /// Advances the system by one time step. Returns the new potential energy.
    pub fn verlet_step(&mut self) -> Result<f64> {
        let dt = self.delta;

        for i in self.world.resident_indices() {
            let particle = self.world.particle(i);
            let displacement =
                particle.velocity * dt + (0.5 / particle.mass) * particle.force * dt.powi(2);
            self.world.move_particle(i, &displacement);

            let particle = self.world.particle_mut(i);
            particle.previous_force = particle.force;
            particle.cell_confirmed = false;
        }

        let reassigned = self.world.correct_cells()?;
        if reassigned > 0 {
            debug!("{} particles changed cell", reassigned);
        }

        let potential_energy = self.compute_system_forces();

        for i in self.world.resident_indices() {
            let particle = self.world.particle_mut(i);
            let dv = dt * (0.5 / particle.mass) * (particle.force + particle.previous_force);
            particle.accelerate(&dv);
        }

        self.steps_done += 1;
        Ok(potential_energy)
    }

    /// Caps the kinetic energy when velocity limiting is enabled. Returns the factor applied.
    pub fn limit_velocities(&mut self) -> Option<f64> {
        let limiter = self.limiter.as_ref()?;
        let indices = self.world.resident_indices();
        let (_, particles, _) = self.world.parts_mut();
        limiter.apply(particles, &indices)
    }

    /// Runs every step up to the final time.
    ///
    /// Iteration `i` is handed to `sink` before step `i` whenever `i` is a multiple of the
    /// snapshot cadence, so iteration 0 is the initial state. The final state is handed over
    /// as iteration `n_steps` once the loop ends.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<()> {
        let mut potential_energy = self.compute_system_forces();
        info!(
            "running {} steps of {} with {} particles",
            self.n_steps,
            self.delta,
            self.world.resident_count()
        );

        for i in 0..self.n_steps {
            if i % self.snapshot_every == 0 {
                sink.write_snapshot(&self.world, i)?;
                info!(
                    "iteration {} t = {:.6}: kinetic {:.6e} potential {:.6e}, {} particles",
                    i,
                    self.elapsed_time(),
                    self.kinetic_energy(),
                    potential_energy,
                    self.world.resident_count()
                );
            }

            potential_energy = self.verlet_step()?;

            if i % self.snapshot_every == 0 {
                if let Some(scale) = self.limit_velocities() {
                    debug!("velocities scaled by {}", scale);
                }
            }
        }

        sink.write_snapshot(&self.world, self.n_steps)?;
        info!(
            "finished at t = {:.6} with {} particles",
            self.elapsed_time(),
            self.world.resident_count()
        );
        Ok(())
    }
}
