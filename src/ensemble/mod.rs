//! Thermostats acting on the particle velocities.
pub mod velocity_limit;
