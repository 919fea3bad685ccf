use clap::Parser;
use log::debug;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = vidsteg_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");

    match args.command {
        Commands::HideAudio(args) => args.run(),
        Commands::UnveilAudio(args) => args.run(),
        Commands::HideFrames(args) => args.run(),
        Commands::UnveilFrames(args) => args.run(),
        Commands::Detect(args) => args.run(),
    }
}
