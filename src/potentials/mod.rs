//! Force models: pair potentials evaluated over the cell grid and single-particle fields.
pub mod field;
pub mod gravity;
pub mod kind;
pub mod lennard_jones;
pub mod potential;
pub mod reflection;
