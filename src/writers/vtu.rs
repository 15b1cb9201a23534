use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::{Path, PathBuf},
};

use crate::world::World;

/// Writes one VTK UnstructuredGrid file per snapshot, `Iteration.<i>.vtu`.
///
/// Particles are listed in grid order then insertion order, with positions translated back to
/// the frame they were given in.
pub struct VtuWriter {
    out: BufWriter<File>,
}

impl VtuWriter {
    pub fn snapshot_path(dir: &Path, iteration: usize) -> PathBuf {
        dir.join(format!("Iteration.{}.vtu", iteration))
    }

    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(VtuWriter {
            out: BufWriter::new(file),
        })
    }

    pub fn write_header(&mut self, n_points: usize) -> Result<()> {
        writeln!(
            self.out,
            "<VTKFile type=\"UnstructuredGrid\" version=\"0.1\" byte_order=\"BigEndian\">"
        )?;
        writeln!(self.out, "  <UnstructuredGrid>")?;
        writeln!(
            self.out,
            "    <Piece NumberOfPoints=\"{}\" NumberOfCells=\"0\">",
            n_points
        )?;
        Ok(())
    }

    pub fn write_positions(&mut self, world: &World, indices: &[usize]) -> Result<()> {
        writeln!(self.out, "      <Points>")?;
        writeln!(
            self.out,
            "        <DataArray Name=\"Position\" type=\"Float32\" NumberOfComponents=\"3\" format=\"ascii\">"
        )?;
        write!(self.out, "          ")?;
        for &i in indices {
            let position = world.origin_position(world.particle(i));
            write!(self.out, "{} {} {} ", position.x, position.y, position.z)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "        </DataArray>")?;
        writeln!(self.out, "      </Points>")?;
        Ok(())
    }

    pub fn write_point_data(&mut self, world: &World, indices: &[usize]) -> Result<()> {
        writeln!(self.out, "      <PointData Vectors=\"vector\">")?;
        writeln!(
            self.out,
            "        <DataArray type=\"Float32\" Name=\"Velocity\" NumberOfComponents=\"3\" format=\"ascii\">"
        )?;
        write!(self.out, "          ")?;
        for &i in indices {
            let velocity = world.particle(i).velocity;
            write!(self.out, "{} {} {} ", velocity.x, velocity.y, velocity.z)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "        </DataArray>")?;

        writeln!(
            self.out,
            "        <DataArray type=\"Float32\" Name=\"Mass\" format=\"ascii\">"
        )?;
        write!(self.out, "          ")?;
        for &i in indices {
            write!(self.out, "{} ", world.particle(i).mass)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "        </DataArray>")?;
        writeln!(self.out, "      </PointData>")?;
        Ok(())
    }

    pub fn write_footer(&mut self) -> Result<()> {
        writeln!(self.out, "      <Cells>")?;
        for (name, kind) in [("connectivity", "Int32"), ("offsets", "Int32"), ("types", "UInt8")] {
            writeln!(
                self.out,
                "        <DataArray type=\"{}\" Name=\"{}\" format=\"ascii\">",
                kind, name
            )?;
            writeln!(self.out, "        </DataArray>")?;
        }
        writeln!(self.out, "      </Cells>")?;
        writeln!(self.out, "    </Piece>")?;
        writeln!(self.out, "  </UnstructuredGrid>")?;
        writeln!(self.out, "</VTKFile>")?;
        Ok(())
    }

    pub fn write_world(&mut self, world: &World) -> Result<()> {
        let indices = world.resident_indices();
        self.write_header(indices.len())?;
        self.write_positions(world, &indices)?;
        self.write_point_data(world, &indices)?;
        self.write_footer()?;
        self.out.flush()
    }
}
