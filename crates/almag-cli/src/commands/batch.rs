//! Batch command
//!
//! Usage: almag batch [SCRIPT] [--dump-db]

use std::path::{Path, PathBuf};

use almag_core::tokens::lex_script_file;
use clap::Args;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Script file with one command per line, run after the configured
    /// predefined commands
    pub script: Option<PathBuf>,

    /// Print the final database as JSON to stdout
    #[arg(long)]
    pub dump_db: bool,
}

/// Execute batch command
///
/// Returns the AND of every command result.
pub fn execute(
    config_path: Option<&Path>,
    args: BatchArgs,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (mut menu, config) = super::build_menu("batch", config_path)?;

    let mut commands = config.predefined_commands;
    if let Some(script) = &args.script {
        commands.extend(lex_script_file(script)?);
    }

    let outcome = menu.run_predefined_commands(&commands);

    if args.dump_db {
        println!("{}", menu.database().to_json()?);
    }
    Ok(outcome)
}
