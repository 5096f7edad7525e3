//! Interactive command
//!
//! Usage: almag interactive [--prompt <TEXT>]

use std::io::{self, IsTerminal};
use std::path::Path;

use almag_core::LineLexer;
use clap::Args;

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Prompt printed before each command (omitted when stdin is not a terminal)
    #[arg(long, default_value = "almag> ")]
    pub prompt: String,
}

/// Execute interactive command
///
/// Leaving the menu through `exit` or end of input is a normal outcome, so
/// this only fails on setup errors.
pub fn execute(
    config_path: Option<&Path>,
    args: InteractiveArgs,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (mut menu, _config) = super::build_menu("interactive", config_path)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lexer = LineLexer::new(stdin.lock(), io::stdout());
    if interactive {
        lexer = lexer.with_prompt(args.prompt);
    }

    let outcome = menu.run(&mut lexer);
    tracing::info!(outcome, "Session finished");
    Ok(true)
}
