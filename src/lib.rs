//! Particle dynamics on a linked-cell grid: Lennard-Jones and gravitational interactions,
//! a uniform field and soft reflecting walls, integrated with velocity Verlet.
extern crate nalgebra as na;

pub mod cell;
pub mod constants;
pub mod ensemble;
pub mod errors;
pub mod extensions;
pub mod math;
pub mod particles;
pub mod potentials;
pub mod readers;
pub mod simulation;
pub mod simulation_box;
pub mod system;
pub mod world;
pub mod writers;
