use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::world::World;

/// Plain text record of every snapshot, one `Iteration <i> : <particles>` line each.
pub struct TextLog {
    out: BufWriter<File>,
}

impl TextLog {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(TextLog {
            out: BufWriter::new(file),
        })
    }

    pub fn write_iteration(&mut self, world: &World, iteration: usize) -> Result<()> {
        write!(self.out, "Iteration {} :", iteration)?;
        for i in world.resident_indices() {
            write!(self.out, " {}", world.particle(i))?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
