use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{
    errors::{Result, SimError},
    extensions::{FloatRunExt, ValueExt},
    math::Vec3,
    particles::{Particle, DEFAULT_CATEGORY},
};

const POSITION: &str = "Position";
const VELOCITY: &str = "Velocity";
const MASS_NAMES: [&str; 2] = ["Mass", "Masse"];

/// Loads particles from the ASCII VTK UnstructuredGrid files written by the snapshot writer.
///
/// Only `NumberOfPoints` and the `Position`, `Velocity` and `Mass` (or `Masse`) data arrays are
/// read. Velocity and mass are optional and default to zero and one.
pub struct VtuReader {
    path: String,
}

impl VtuReader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<Vec<Particle>> {
        let file = File::open(&self.path).map_err(|e| SimError::InputFileError {
            path: self.path.clone(),
            source: e,
        })?;
        self.read_from(BufReader::new(file))
    }

    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<Vec<Particle>> {
        let mut reader = Reader::from_reader(reader);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut n_points: Option<usize> = None;
        let mut arrays: HashMap<String, String> = HashMap::new();
        let mut current: Option<String> = None;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| self.xml_error(e))?;
            let empty = matches!(event, Event::Empty(_));
            match event {
                Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                    b"Piece" if n_points.is_none() => {
                        if let Some(value) = self.attribute(&e, "NumberOfPoints")? {
                            n_points = Some(value.parse_count().map_err(|_| {
                                SimError::PointCountMissing {
                                    path: self.path.clone(),
                                }
                            })?);
                        }
                    }
                    b"DataArray" => {
                        let name = self.attribute(&e, "Name")?.filter(|name| is_tracked(name));
                        if let Some(name) = &name {
                            arrays.entry(name.clone()).or_default();
                        }
                        current = if empty { None } else { name };
                    }
                    _ => {}
                },
                Event::Text(e) => {
                    if let Some(name) = &current {
                        if let Some(text) = arrays.get_mut(name) {
                            text.push(' ');
                            text.push_str(&String::from_utf8_lossy(e.as_ref()));
                        }
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == b"DataArray" {
                        current = None;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        let n_points = n_points.ok_or_else(|| SimError::PointCountMissing {
            path: self.path.clone(),
        })?;

        let positions = self
            .array(&arrays, POSITION, 3 * n_points)?
            .ok_or_else(|| SimError::MissingDataArray {
                field: POSITION.to_string(),
                path: self.path.clone(),
            })?;
        let velocities = self.array(&arrays, VELOCITY, 3 * n_points)?;
        let mut masses = None;
        for name in MASS_NAMES {
            if let Some(values) = self.array(&arrays, name, n_points)? {
                masses = Some(values);
                break;
            }
        }

        let particles = (0..n_points)
            .map(|i| {
                let position = Vec3::from_column_slice(&positions[3 * i..3 * i + 3]);
                let velocity = velocities
                    .as_ref()
                    .map(|v| Vec3::from_column_slice(&v[3 * i..3 * i + 3]))
                    .unwrap_or_else(Vec3::zeros);
                let mass = masses.as_ref().map(|m| m[i]).unwrap_or(1.0);
                Particle::with_state(DEFAULT_CATEGORY, position, velocity, mass)
            })
            .collect();

        Ok(particles)
    }

    /// Value of attribute `key` on element `e`. The key is matched case-insensitively.
    fn attribute(&self, e: &BytesStart, key: &str) -> Result<Option<String>> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err.into()))?;
            if attr.key.as_ref().eq_ignore_ascii_case(key.as_bytes()) {
                return Ok(Some(String::from_utf8_lossy(&attr.value).to_string()));
            }
        }
        Ok(None)
    }

    /// Parses the values of data array `name`, checking it holds `expected` of them.
    fn array(
        &self,
        arrays: &HashMap<String, String>,
        name: &str,
        expected: usize,
    ) -> Result<Option<Vec<f64>>> {
        let text = match arrays.get(name) {
            Some(text) => text,
            None => return Ok(None),
        };
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let values = tokens[..].parse_floats()?;
        if values.len() != expected {
            return Err(SimError::PointCountMismatch {
                field: name.to_string(),
                expected,
                found: values.len(),
            });
        }
        Ok(Some(values))
    }

    fn xml_error(&self, source: quick_xml::Error) -> SimError {
        SimError::XmlError {
            path: self.path.clone(),
            source,
        }
    }
}

fn is_tracked(name: &str) -> bool {
    name == POSITION || name == VELOCITY || MASS_NAMES.contains(&name)
}
