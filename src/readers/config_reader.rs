use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use crate::{
    errors::{Result, SimError},
    extensions::ValueExt,
    readers::simulation_config::SimulationConfig,
    simulation_box::BoundaryCondition,
};

/// Reads `KEY = VALUE` configuration files. `//` starts a comment.
pub struct ConfigReader {
    path: String,
}

impl ConfigReader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<SimulationConfig> {
        let file = File::open(&self.path).map_err(|e| SimError::InputFileError {
            path: self.path.clone(),
            source: e,
        })?;
        self.read_from(BufReader::new(file))
    }

    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line_num = line_num + 1;
            let line = line.map_err(|e| SimError::DataFileError {
                path: self.path.clone(),
                line: line_num,
                source: e,
            })?;
            // Considering only the part of the line that is before the commented part.
            let uncommented = line
                .split_once("//")
                .map(|(before, _)| before)
                .unwrap_or(line.as_str())
                .trim();

            if uncommented.is_empty() {
                continue;
            }
            let (key, value) = uncommented
                .split_once('=')
                .ok_or(SimError::ConfigSyntax { line: line_num })?;
            let (key, value) = (key.trim(), value.trim());

            if value.is_empty() {
                continue;
            }
            apply_option(&mut config, key, value, line_num)?;
        }

        Ok(config)
    }
}

fn apply_option(config: &mut SimulationConfig, key: &str, value: &str, line: usize) -> Result<()> {
    match key {
        "INPUT_FILE" => config.input_file = Some(PathBuf::from(value)),
        "OUTPUT_DIR" => config.output_dir = Some(PathBuf::from(value)),
        "LJ_FORCE" => config.forces.lennard_jones = value.parse_flag(line)?,
        "GRAVITY_INTERACTION" => config.forces.gravity_interaction = value.parse_flag(line)?,
        "GRAVITY_FIELD" => config.forces.gravity_field = value.parse_flag(line)?,
        "LD_X" => config.ld.x = value.parse_float()?,
        "LD_Y" => config.ld.y = value.parse_float()?,
        "LD_Z" => config.ld.z = value.parse_float()?,
        "R_CUT" => config.r_cut = value.parse_float()?,
        "R_CUT_REFLECTION" => config.r_cut_reflection = value.parse_float()?,
        "BOUNDARY" => {
            config.boundary =
                BoundaryCondition::from_str(value).ok_or_else(|| SimError::InvalidBoundary {
                    value: value.to_string(),
                    line,
                })?
        }
        "LIMIT_VELOCITY" => config.limit_velocity = value.parse_flag(line)?,
        "TARGET_ENERGY" => config.target_energy = value.parse_float()?,
        "EPSILON" => config.epsilon = value.parse_float()?,
        "SIGMA" => config.sigma = value.parse_float()?,
        "G" => config.g = value.parse_float()?,
        "DELTA" => config.delta = value.parse_float()?,
        "T_FINAL" => config.t_final = value.parse_float()?,
        "SNAPSHOT_EVERY" => config.snapshot_every = value.parse_count()?,
        "RANDOM_PARTICLES" => config.random_particles = value.parse_count()?,
        "SEED" => config.seed = value.parse_seed()?,
        _ => {
            return Err(SimError::UnknownOption {
                key: key.to_string(),
                line,
            })
        }
    }
    Ok(())
}
