//! Dispatch loop
//!
//! `Menu` owns the session's database, controller and validation managers.
//! Every Input Unit goes through `run_one`, which returns the unit's
//! continuation contribution:
//!
//! | Input                         | Contribution                         |
//! |-------------------------------|--------------------------------------|
//! | empty                         | `false`                              |
//! | database / controller command | executor result, `true` on rejection |
//! | `help`                        | `true`                               |
//! | `exit`                        | `false`                              |
//! | unknown                       | `true`                               |
//!
//! Both entry points AND the contributions together. The interactive loop
//! uses the running result as its loop condition; the batch runner always
//! attempts every unit.

use std::collections::BTreeSet;
use std::time::Instant;

use almag_core::config::MenuConfig;
use almag_core::controller::ControllerCommandValidationManager;
use almag_core::database::DatabaseCommandValidationManager;
use almag_core::tokens::COMMAND_OR_ACTION_NAME;
use almag_core::{
    log_op_end, log_op_start, AlmagController, Controller, Database, DatabaseCommand, InputUnit,
    TokenSource, ValidationManager,
};
use almag_core_types::schema::{
    EVENT_ACCEPTED, EVENT_EMPTY_INPUT, EVENT_EXIT, EVENT_HELP, EVENT_REJECTED, EVENT_START,
    EVENT_UNKNOWN,
};
use almag_core_types::SessionId;

use crate::classifier::{actions, CommandConstraints, CommandFamily};
use crate::help::{help_text, usage_hint};

/// Command menu for one Almag session
pub struct Menu<
    C = AlmagController,
    CV = ControllerCommandValidationManager,
    DV = DatabaseCommandValidationManager,
> {
    name: String,
    db: Database,
    controller: C,
    controller_validator: CV,
    database_validator: DV,
    constraints: CommandConstraints,
}

impl Menu {
    /// Menu over the simulated Almag controller and the stock validators
    ///
    /// Both family sets start empty; install them with the setters or
    /// `apply_config`.
    pub fn new(name: impl Into<String>, db: Database) -> Self {
        Self::with_parts(
            name,
            db,
            AlmagController::new(),
            ControllerCommandValidationManager::new(),
            DatabaseCommandValidationManager::new(),
        )
    }
}

impl<C, CV, DV> Menu<C, CV, DV>
where
    C: Controller,
    CV: ValidationManager<Validated = C::Command>,
    DV: ValidationManager,
{
    pub fn with_parts(
        name: impl Into<String>,
        db: Database,
        controller: C,
        controller_validator: CV,
        database_validator: DV,
    ) -> Self {
        Self {
            name: name.into(),
            db,
            controller,
            controller_validator,
            database_validator,
            constraints: CommandConstraints::default(),
        }
    }

    /// Interactive loop
    ///
    /// Pulls one unit at a time while the running result is `true`. Stops
    /// early when the source is exhausted. Returns the running result.
    pub fn run<S: TokenSource + ?Sized>(&mut self, source: &mut S) -> bool {
        let session = SessionId::new();
        let span = tracing::info_span!("session", session_id = %session, menu = %self.name);
        let _guard = span.enter();

        let mut final_result = true;
        while final_result {
            let Some(user_input) = source.receive_and_lex() else {
                tracing::info!("End of input");
                break;
            };
            final_result &= self.run_one(&user_input);
        }
        final_result
    }

    /// Batch runner over a pre-supplied sequence of units
    ///
    /// Every unit is attempted regardless of earlier results; the return
    /// value is the AND of all contributions (`true` for an empty batch).
    pub fn run_predefined_commands(&mut self, commands: &[InputUnit]) -> bool {
        let session = SessionId::new();
        let span = tracing::info_span!("session", session_id = %session, menu = %self.name);
        let _guard = span.enter();

        let start = Instant::now();
        let menu = self.name.clone();
        log_op_start!(
            "run_predefined_commands",
            menu = menu.as_str(),
            units = commands.len() as u64
        );

        let mut final_result = true;
        for user_input in commands {
            final_result &= self.run_one(user_input);
        }

        log_op_end!(
            "run_predefined_commands",
            duration_ms = start.elapsed().as_millis() as u64,
            menu = menu.as_str(),
            succeeded = final_result
        );
        final_result
    }

    /// Classify, validate and execute a single unit
    pub fn run_one(&mut self, user_input: &InputUnit) -> bool {
        let menu = self.name.as_str();
        let Some(received_cmd) = user_input.get(COMMAND_OR_ACTION_NAME) else {
            tracing::error!(
                op = "dispatch",
                menu,
                event = EVENT_EMPTY_INPUT,
                "Empty user input"
            );
            tracing::debug!(op = "dispatch", menu, "{}", usage_hint());
            return false;
        };

        let family = self.constraints.classify(received_cmd);
        match family {
            CommandFamily::Database | CommandFamily::Controller => {
                tracing::info!(
                    op = "dispatch",
                    menu,
                    command = received_cmd.as_str(),
                    family = ?family,
                    "{}",
                    received_cmd
                );
                if family == CommandFamily::Database {
                    self.interpret_database_command(user_input)
                } else {
                    self.interpret_controller_command(user_input)
                }
            }
            CommandFamily::Help => {
                tracing::info!(
                    op = "dispatch",
                    menu,
                    event = EVENT_HELP,
                    "{}",
                    help_text(&self.constraints)
                );
                true
            }
            CommandFamily::Exit => {
                tracing::info!(op = "dispatch", menu, event = EVENT_EXIT, "Exit requested");
                false
            }
            CommandFamily::Unknown => {
                tracing::info!(
                    op = "dispatch",
                    menu,
                    event = EVENT_UNKNOWN,
                    command = received_cmd.as_str(),
                    "{}{}",
                    received_cmd,
                    actions::HELP_WHEN_UNKNOWN
                );
                true
            }
        }
    }

    fn interpret_controller_command(&mut self, user_input: &InputUnit) -> bool {
        tracing::debug!(op = "interpret_controller_command", event = EVENT_START);
        if let Some(validated) = self.controller_validator.perform(&self.db, user_input) {
            tracing::debug!(op = "interpret_controller_command", event = EVENT_ACCEPTED);
            self.controller.add_commands(vec![validated]);
            return self.controller.execute_command();
        }
        tracing::warn!(
            op = "interpret_controller_command",
            menu = self.name.as_str(),
            event = EVENT_REJECTED,
            "Validation rejected the command"
        );
        true
    }

    fn interpret_database_command(&mut self, user_input: &InputUnit) -> bool {
        tracing::debug!(op = "interpret_database_command", event = EVENT_START);
        if self
            .database_validator
            .perform(&self.db, user_input)
            .is_some()
        {
            tracing::debug!(op = "interpret_database_command", event = EVENT_ACCEPTED);
            let update_database = DatabaseCommand::new(&mut self.db, user_input);
            return update_database.run_command();
        }
        tracing::warn!(
            op = "interpret_database_command",
            menu = self.name.as_str(),
            event = EVENT_REJECTED,
            "Validation rejected the command"
        );
        true
    }

    /// Replace the controller family set, returning the previous set
    pub fn set_controller_commands_constraints<I, S>(&mut self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.replace_controller(names)
    }

    /// Replace the database family set, returning the previous set
    pub fn set_database_commands_constraints<I, S>(&mut self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.replace_database(names)
    }

    /// Install both family sets from a configuration
    pub fn apply_config(&mut self, config: &MenuConfig) {
        self.set_database_commands_constraints(config.database_commands.iter().cloned());
        self.set_controller_commands_constraints(config.controller_commands.iter().cloned());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraints(&self) -> &CommandConstraints {
        &self.constraints
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    pub fn controller_validator(&self) -> &CV {
        &self.controller_validator
    }

    pub fn database_validator(&self) -> &DV {
        &self.database_validator
    }

    pub fn help(&self) -> String {
        help_text(&self.constraints)
    }
}
