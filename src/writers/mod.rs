//! Snapshot output: one VTU file per snapshot plus a text log of the whole run.
pub mod text_log;
pub mod vtu;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::errors::{Result, SimError};
use crate::simulation::SnapshotSink;
use crate::world::World;
use crate::writers::{text_log::TextLog, vtu::VtuWriter};

pub const TEXT_LOG_NAME: &str = "simulation.txt";

/// Writes every snapshot of a run into an output directory.
pub struct SnapshotWriter {
    dir: PathBuf,
    log: TextLog,
}

impl SnapshotWriter {
    /// Creates `dir` if needed and opens the text log inside it.
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| output_error(dir, e))?;
        let log_path = dir.join(TEXT_LOG_NAME);
        let log = TextLog::new(&log_path).map_err(|e| output_error(&log_path, e))?;
        debug!("writing snapshots to {}", dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            log,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotSink for SnapshotWriter {
    fn write_snapshot(&mut self, world: &World, iteration: usize) -> Result<()> {
        let path = VtuWriter::snapshot_path(&self.dir, iteration);
        VtuWriter::new(&path)
            .and_then(|mut writer| writer.write_world(world))
            .map_err(|e| output_error(&path, e))?;

        self.log
            .write_iteration(world, iteration)
            .map_err(|e| output_error(&self.dir.join(TEXT_LOG_NAME), e))
    }
}

fn output_error(path: &Path, source: std::io::Error) -> SimError {
    SimError::OutputError {
        path: path.display().to_string(),
        source,
    }
}
