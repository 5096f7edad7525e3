//! Almag CLI
//!
//! Command menu for an Almag antenna line device

use std::path::PathBuf;

use almag_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "almag")]
#[command(about = "Almag - Antenna line device command menu", long_about = None)]
struct Cli {
    /// Menu configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log profile: development or production
    #[arg(long, global = true, default_value = "development")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read commands from stdin until exit
    Interactive(commands::interactive::InteractiveArgs),
    /// Run the configured predefined commands and/or a script file
    Batch(commands::batch::BatchArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Interactive(args) => commands::interactive::execute(cli.config.as_deref(), args),
        Commands::Batch(args) => commands::batch::execute(cli.config.as_deref(), args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
