use std::path::{Path, PathBuf};

use log::info;

use crate::constants::{
    default_r_cut_reflection, DEFAULT_DELTA, DEFAULT_EPSILON, DEFAULT_G, DEFAULT_R_CUT,
    DEFAULT_SIGMA, DEFAULT_SNAPSHOT_EVERY, DEFAULT_TARGET_ENERGY, DEFAULT_T_FINAL,
};
use crate::errors::{Result, SimError};
use crate::math::Vec3;
use crate::simulation_box::BoundaryCondition;

const DEFAULT_OUTPUT_DIR: &str = "output";

/// Which force models take part in the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceSelection {
    pub lennard_jones: bool,
    pub gravity_interaction: bool,
    pub gravity_field: bool,
}

/// Every parameter of a run, as read from the configuration file.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub input_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub forces: ForceSelection,
    pub ld: Vec3,
    pub r_cut: f64,
    pub r_cut_reflection: f64,
    pub boundary: BoundaryCondition,
    pub limit_velocity: bool,
    pub target_energy: f64,
    pub epsilon: f64,
    pub sigma: f64,
    pub g: f64,
    pub delta: f64,
    pub t_final: f64,
    pub snapshot_every: usize,
    pub random_particles: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input_file: None,
            output_dir: None,
            forces: ForceSelection::default(),
            ld: Vec3::zeros(),
            r_cut: DEFAULT_R_CUT,
            r_cut_reflection: default_r_cut_reflection(),
            boundary: BoundaryCondition::default(),
            limit_velocity: false,
            target_energy: DEFAULT_TARGET_ENERGY,
            epsilon: DEFAULT_EPSILON,
            sigma: DEFAULT_SIGMA,
            g: DEFAULT_G,
            delta: DEFAULT_DELTA,
            t_final: DEFAULT_T_FINAL,
            snapshot_every: DEFAULT_SNAPSHOT_EVERY,
            random_particles: 0,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Checks the parameters that do not depend on the grid geometry.
    pub fn validate(&self) -> Result<()> {
        self.validate_integration()?;
        match &self.input_file {
            Some(path) => {
                if path.extension().and_then(|e| e.to_str()) != Some("vtu") {
                    return Err(SimError::InvalidInputExtension {
                        path: path.display().to_string(),
                    });
                }
            }
            None if self.random_particles == 0 => return Err(SimError::MissingInputFile),
            None => {}
        }
        Ok(())
    }

    pub fn validate_integration(&self) -> Result<()> {
        if !(self.delta > 0.0) {
            return Err(SimError::InvalidTimeStep { delta: self.delta });
        }
        if self.snapshot_every == 0 {
            return Err(SimError::InvalidSnapshotCadence);
        }
        Ok(())
    }

    /// Output directory: the configured one, else the stem of the input file, else `output`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        self.input_file
            .as_deref()
            .and_then(Path::file_stem)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Number of integration steps needed to reach `t_final`.
    pub fn step_count(&self) -> usize {
        let steps = (self.t_final / self.delta - 1e-9).ceil();
        if steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }

    pub fn log_parameters(&self) {
        info!("simulation parameters:");
        info!("  domain lengths: {} {} {}", self.ld.x, self.ld.y, self.ld.z);
        info!("  cut-off radius: {}", self.r_cut);
        info!("  boundary condition: {}", self.boundary);
        if self.boundary == BoundaryCondition::Reflection {
            info!("  reflection cut-off: {}", self.r_cut_reflection);
        }
        info!(
            "  forces: lennard-jones {}, gravity interaction {}, gravity field {}",
            self.forces.lennard_jones, self.forces.gravity_interaction, self.forces.gravity_field
        );
        info!("  epsilon {} sigma {} G {}", self.epsilon, self.sigma, self.g);
        if self.limit_velocity {
            info!("  velocity limited to kinetic energy {}", self.target_energy);
        }
        info!("  time step {} until {}", self.delta, self.t_final);
        info!("  output directory: {}", self.resolved_output_dir().display());
    }
}
