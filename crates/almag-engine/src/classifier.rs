//! Command classifier
//!
//! Resolves the first token of an Input Unit to a command family in fixed
//! priority order: database set, controller set, `help`, `exit`, unknown.
//! The two family sets may overlap; the first match wins.

use std::collections::BTreeSet;

/// Built-in actions handled by the menu itself
pub mod actions {
    pub const HELP: &str = "help";
    pub const EXIT: &str = "exit";
    pub const HELP_WHEN_UNKNOWN: &str = " is unknown, did you mean help?";
}

/// Family an Input Unit is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandFamily {
    Database,
    Controller,
    Help,
    Exit,
    Unknown,
}

/// Command-name membership for the two configurable families
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandConstraints {
    database: BTreeSet<String>,
    controller: BTreeSet<String>,
}

fn to_set<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl CommandConstraints {
    pub fn new<D, C, S, T>(database: D, controller: C) -> Self
    where
        D: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            database: to_set(database),
            controller: to_set(controller),
        }
    }

    /// Resolve a command name to its family
    pub fn classify(&self, name: &str) -> CommandFamily {
        if self.database.contains(name) {
            CommandFamily::Database
        } else if self.controller.contains(name) {
            CommandFamily::Controller
        } else if name == actions::HELP {
            CommandFamily::Help
        } else if name == actions::EXIT {
            CommandFamily::Exit
        } else {
            CommandFamily::Unknown
        }
    }

    /// Replace the whole database set, returning the previous one
    pub fn replace_database<I, S>(&mut self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        std::mem::replace(&mut self.database, to_set(names))
    }

    /// Replace the whole controller set, returning the previous one
    pub fn replace_controller<I, S>(&mut self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        std::mem::replace(&mut self.controller, to_set(names))
    }

    pub fn database(&self) -> &BTreeSet<String> {
        &self.database
    }

    pub fn controller(&self) -> &BTreeSet<String> {
        &self.controller
    }
}
