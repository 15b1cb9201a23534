use thiserror::Error;

use crate::simulation_box::BoundaryCondition;

#[derive(Error, Debug)]
pub enum SimError {
    // File I/O Errors
    #[error("Failed to open input file '{path}': {source}")]
    InputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} in file '{path}': {source}")]
    DataFileError {
        path: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Configuration file errors
    #[error("Malformed configuration line {line}: expected KEY = VALUE")]
    ConfigSyntax { line: usize },

    #[error("Unknown option '{key}' on line {line}")]
    UnknownOption { key: String, line: usize },

    #[error("Invalid boundary condition '{value}' on line {line}")]
    InvalidBoundary { value: String, line: usize },

    #[error("Invalid boolean '{value}' on line {line}")]
    BoolParseError { value: String, line: usize },

    #[error("Error parsing floating number from string {string}: {source}")]
    FloatParseError {
        string: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Error parsing integer number from string {string}: {source}")]
    IntParseError {
        string: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("No input file given and no random particles requested")]
    MissingInputFile,

    #[error("Input file '{path}' does not have the .vtu extension")]
    InvalidInputExtension { path: String },

    #[error("Time step must be positive, got {delta}")]
    InvalidTimeStep { delta: f64 },

    #[error("Snapshot cadence must be at least one step")]
    InvalidSnapshotCadence,

    // Grid geometry errors
    #[error("Cut-off radius must be positive, got {r_cut}")]
    NonPositiveCutoff { r_cut: f64 },

    #[error("Reflection cut-off {r_cut_reflection} exceeds the interaction cut-off {r_cut}")]
    CutoffOrder { r_cut: f64, r_cut_reflection: f64 },

    #[error("Domain length {length} on axis {axis} is shorter than the cut-off radius {r_cut}")]
    AxisShorterThanCutoff { axis: char, length: f64, r_cut: f64 },

    #[error("Domain dimensions are (0, 0, 0)")]
    EmptyDomain,

    // Particle file errors
    #[error("NumberOfPoints is missing or malformed in '{path}'")]
    PointCountMissing { path: String },

    #[error("Malformed XML in '{path}': {source}")]
    XmlError {
        path: String,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Data array '{field}' is missing in '{path}'")]
    MissingDataArray { field: String, path: String },

    #[error("Data array '{field}' holds {found} values, expected {expected}")]
    PointCountMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    // Physics errors
    #[error("Particle {id} left the domain under {boundary} boundaries")]
    ParticleEscaped {
        id: u64,
        boundary: BoundaryCondition,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
