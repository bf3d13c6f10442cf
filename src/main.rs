#![forbid(unsafe_code)]

mod cli;
mod commands;
mod dataset;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match &cli.command {
        Command::Generate(args) => commands::generate(args),
        Command::Validate(args) => commands::validate(args),
        Command::Mesh(args) => commands::mesh(args),
        Command::Props(args) => commands::props(args),
    }
}
