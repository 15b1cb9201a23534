//! The pivotal struct to configure and run a simulation can be found here
use std::path::PathBuf;

use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    errors::Result,
    readers::{
        config_reader::ConfigReader, simulation_config::SimulationConfig, vtu_reader::VtuReader,
    },
    simulation::Simulation,
    world::World,
    writers::SnapshotWriter,
};

/// [`System`] is the basic API for running a particle simulation.
///
/// Its [`System::new`] function takes the path to the configuration file. Reading the system
/// collects and checks the parameters, contextualizing it builds the grid and loads the
/// particles, and running it integrates up to the final time while writing snapshots.
///
/// # Examples
///
/// A typical main then looks like this:
///
/// ```no_run
/// use cellsim::system::System;
///
/// fn main() -> cellsim::errors::Result<()> {
///     System::new(String::from("simulation.conf")).read()?.contextualize()?.run()
/// }
/// ```
pub struct System {
    /// the path to the configuration file
    config_path: String,
    output_dir: Option<PathBuf>,
    config: SimulationConfig,
    simulation: Option<Simulation>,
}

impl System {
    pub fn new(config_path: String) -> Self {
        Self {
            config_path,
            output_dir: None,
            config: SimulationConfig::default(),
            simulation: None,
        }
    }

    /// A system whose parameters are already known, no file to read.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self {
            config_path: String::new(),
            output_dir: None,
            config,
            simulation: None,
        }
    }

    /// Overrides the output directory of the configuration file.
    pub fn with_output_dir(&mut self, dir: PathBuf) -> &mut Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.simulation.as_ref()
    }

    /// Reads the configuration file.
    pub fn read(&mut self) -> Result<&mut Self> {
        self.config = ConfigReader::new(self.config_path.as_str()).read()?;
        info!("configuration read from {}", self.config_path);
        Ok(self)
    }

    /// Builds the world and loads its particles, ready to run.
    pub fn contextualize(&mut self) -> Result<&mut Self> {
        if let Some(dir) = &self.output_dir {
            self.config.output_dir = Some(dir.clone());
        }
        self.config.validate()?;
        self.config.log_parameters();

        let config = &self.config;
        let mut world = World::new(
            config.ld,
            config.r_cut,
            config.r_cut_reflection,
            config.boundary,
        )?;

        if let Some(path) = &config.input_file {
            let particles = VtuReader::new(path.to_string_lossy()).read()?;
            info!("{} particles read from {}", particles.len(), path.display());
            for particle in particles {
                world.add_particle(particle);
            }
        }
        if config.random_particles > 0 {
            let mut rng = SmallRng::seed_from_u64(config.seed);
            world.add_random_particles(config.random_particles, &mut rng);
            info!(
                "{} random particles added with seed {}",
                config.random_particles, config.seed
            );
        }

        self.simulation = Some(Simulation::new(world, config)?);
        Ok(self)
    }

    /// Runs the simulation, contextualizing the system first if needed.
    pub fn run(&mut self) -> Result<()> {
        if self.simulation.is_none() {
            self.contextualize()?;
        }
        let mut writer = SnapshotWriter::new(&self.config.resolved_output_dir())?;
        if let Some(simulation) = self.simulation.as_mut() {
            simulation.run(&mut writer)?;
        }
        Ok(())
    }
}
