//! Help and usage text

use crate::classifier::{actions, CommandConstraints};

/// One-line usage hint emitted on empty input
pub fn usage_hint() -> String {
    format!(
        "Usage: <command> [arguments...]  (type '{}' for the command list)",
        actions::HELP
    )
}

/// Full help text for the currently configured families
pub fn help_text(constraints: &CommandConstraints) -> String {
    let mut text = String::new();
    text.push_str(&usage_hint());
    text.push('\n');
    text.push_str("Actions:\n");
    text.push_str(&format!("  {:<8} print this help\n", actions::HELP));
    text.push_str(&format!("  {:<8} leave the menu\n", actions::EXIT));

    let families = [
        ("Database commands", constraints.database()),
        ("Controller commands", constraints.controller()),
    ];
    for (title, names) in families {
        text.push_str(title);
        text.push(':');
        if names.is_empty() {
            text.push_str(" (none)");
        } else {
            for name in names {
                text.push(' ');
                text.push_str(name);
            }
        }
        text.push('\n');
    }
    text
}
