pub mod config_reader;
pub mod simulation_config;
pub mod vtu_reader;
