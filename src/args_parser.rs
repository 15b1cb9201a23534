use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file of the run
    #[arg(short, long, default_value_t = String::from("simulation.conf"))]
    pub config: String,

    /// Output directory, overrides OUTPUT_DIR
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
