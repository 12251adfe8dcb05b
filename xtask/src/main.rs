mod cli;
mod commands;
mod output;

use crate::cli::{Cli, Commands};
use crate::commands::readme::ReadmeCommand;
use anyhow::Result;
use clap::Parser;
use readmegen_core::ReadmegenError;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Readme => {
            let cmd = ReadmeCommand::new();
            use crate::commands::Command as _;
            if let Err(err) = cmd.run() {
                let dirty = err
                    .downcast_ref::<ReadmegenError>()
                    .and_then(ReadmegenError::dirty_path);
                if let Some(path) = dirty {
                    output::print_text(&format!(
                        "File {} is dirty. Refusing to overwrite.",
                        path.display()
                    ))?;
                    // Nothing has been written at this point.
                    std::process::exit(-1);
                }
                return Err(err);
            }
        }
    }

    Ok(())
}
