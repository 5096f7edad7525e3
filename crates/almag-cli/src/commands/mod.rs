pub mod batch;
pub mod interactive;

use std::path::Path;

use almag_core::config::{load_config, MenuConfig};
use almag_core::Database;
use almag_engine::Menu;

/// Load the configuration (stock defaults without a path) and build the menu
pub fn build_menu(
    name: &str,
    config_path: Option<&Path>,
) -> Result<(Menu, MenuConfig), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => MenuConfig::default(),
    };

    let mut menu = Menu::new(name, Database::with_defaults());
    menu.apply_config(&config);
    tracing::debug!(
        database = config.database_commands.len() as u64,
        controller = config.controller_commands.len() as u64,
        "Menu configured"
    );
    Ok((menu, config))
}
