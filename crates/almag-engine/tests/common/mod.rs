use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use almag_core::{Controller, Database, InputUnit, ValidationManager};
use almag_engine::Menu;

/// Build an Input Unit from string literals
#[allow(dead_code)]
pub fn unit(tokens: &[&str]) -> InputUnit {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Validator double: fixed verdict, counts calls
#[derive(Debug, Default)]
pub struct CountingValidator {
    accept: bool,
    calls: Cell<usize>,
}

#[allow(dead_code)]
impl CountingValidator {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: Cell::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ValidationManager for CountingValidator {
    type Validated = String;

    fn perform(&self, _db: &Database, input: &InputUnit) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        if self.accept {
            Some(input.join(" "))
        } else {
            None
        }
    }
}

/// Controller double: records queued commands, replays scripted results
#[derive(Debug, Default)]
pub struct ScriptedController {
    results: RefCell<VecDeque<bool>>,
    pub queued: Vec<String>,
    pub executions: usize,
}

#[allow(dead_code)]
impl ScriptedController {
    /// Each execution pops the next result; `true` once exhausted
    pub fn with_results(results: &[bool]) -> Self {
        Self {
            results: RefCell::new(results.iter().copied().collect()),
            ..Self::default()
        }
    }
}

impl Controller for ScriptedController {
    type Command = String;

    fn add_commands(&mut self, commands: Vec<String>) {
        self.queued.extend(commands);
    }

    fn execute_command(&mut self) -> bool {
        self.executions += 1;
        self.results.borrow_mut().pop_front().unwrap_or(true)
    }
}

pub type TestMenu = Menu<ScriptedController, CountingValidator, CountingValidator>;

/// Menu over test doubles with `getdb`/`shared` in the database set and
/// `SetTilt`/`shared` in the controller set
#[allow(dead_code)]
pub fn test_menu(
    name: &str,
    controller: ScriptedController,
    controller_validator: CountingValidator,
    database_validator: CountingValidator,
) -> TestMenu {
    let mut menu = Menu::with_parts(
        name,
        Database::with_defaults(),
        controller,
        controller_validator,
        database_validator,
    );
    menu.set_database_commands_constraints(["getdb", "listdb", "shared"]);
    menu.set_controller_commands_constraints(["SetTilt", "Calibrate", "shared"]);
    menu
}
