use clap::Parser;

mod args_parser;

use cellsim::system::System;

use crate::args_parser::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut system = System::new(args.config);
    if let Some(dir) = args.output {
        system.with_output_dir(dir);
    }
    system.read()?.contextualize()?.run()?;
    Ok(())
}
