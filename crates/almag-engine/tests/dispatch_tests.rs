//! Per-unit dispatch tests
//!
//! ## Scenarios Covered
//!
//! 1. Empty input fails the call without touching any validator
//! 2. Database family wins over an overlapping controller set
//! 3. Validation rejection always contributes success
//! 4. Executor results pass through unchanged
//! 5. Built-in actions and unknown commands
//! 6. Rejections are logged as warnings per family

mod common;

use almag_core::logging_facility::test_capture::{init_test_capture, EventQuery};
use almag_core_types::schema::{EVENT_EMPTY_INPUT, EVENT_HELP, EVENT_REJECTED, EVENT_UNKNOWN};
use tracing::Level;
use almag_engine::CommandFamily;
use common::{test_menu, unit, CountingValidator, ScriptedController};
use proptest::prelude::*;

#[test]
fn test_empty_input_returns_false_without_validation() {
    let capture = init_test_capture();
    let mut menu = test_menu(
        "dispatch-empty",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(!menu.run_one(&Vec::new()));

    assert_eq!(menu.controller().executions, 0);
    let errors = EventQuery::new()
        .level(Level::ERROR)
        .menu("dispatch-empty")
        .event(EVENT_EMPTY_INPUT);
    assert_eq!(capture.count(&errors), 1);
}

#[test]
fn test_empty_input_invokes_no_validator() {
    let mut menu = test_menu(
        "dispatch-empty-counts",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(!menu.run_one(&Vec::new()));
    assert!(!menu.run_one(&Vec::new()));
    assert_eq!(menu.controller_validator().calls(), 0);
    assert_eq!(menu.database_validator().calls(), 0);

    assert!(menu.run_one(&unit(&["SetTilt", "5"])));
    assert_eq!(menu.controller_validator().calls(), 1);
    assert_eq!(menu.database_validator().calls(), 0);
    assert_eq!(menu.controller().queued, vec!["SetTilt 5"]);
}

#[test]
fn test_database_family_has_priority_on_overlap() {
    let mut menu = test_menu(
        "dispatch-overlap",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::rejecting(),
    );

    assert_eq!(menu.constraints().classify("shared"), CommandFamily::Database);
    assert!(menu.run_one(&unit(&["shared"])));

    assert_eq!(menu.database_validator().calls(), 1);
    assert_eq!(menu.controller_validator().calls(), 0);
    assert!(menu.controller().queued.is_empty());
    assert_eq!(menu.controller().executions, 0);
}

#[test]
fn test_controller_result_passes_through() {
    let mut menu = test_menu(
        "dispatch-passthrough",
        ScriptedController::with_results(&[false, true]),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(!menu.run_one(&unit(&["SetTilt", "10"])));
    assert!(menu.run_one(&unit(&["Calibrate"])));
    assert_eq!(menu.controller().queued, vec!["SetTilt 10", "Calibrate"]);
    assert_eq!(menu.controller().executions, 2);
}

#[test]
fn test_database_executor_result_passes_through() {
    // The database validator double accepts anything; the real one-shot
    // command then decides the outcome.
    let mut menu = test_menu(
        "dispatch-db-passthrough",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(menu.run_one(&unit(&["getdb", "max_tilt"])));
    assert!(!menu.run_one(&unit(&["getdb", "no_such_key"])));
}

#[test]
fn test_help_returns_true_and_emits_help() {
    let capture = init_test_capture();
    let mut menu = test_menu(
        "dispatch-help",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(menu.run_one(&unit(&["help"])));

    let help = capture.single(&EventQuery::new().menu("dispatch-help").event(EVENT_HELP));
    let text = help.message();
    assert!(text.contains("Database commands: getdb listdb shared"));
    assert!(text.contains("Controller commands: Calibrate SetTilt shared"));
}

#[test]
fn test_exit_returns_false() {
    let mut menu = test_menu(
        "dispatch-exit",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(!menu.run_one(&unit(&["exit"])));
    assert!(!menu.run_one(&unit(&["exit", "now"])));
}

#[test]
fn test_unknown_command_hints_help() {
    let capture = init_test_capture();
    let mut menu = test_menu(
        "dispatch-unknown",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(menu.run_one(&unit(&["Spin", "3"])));

    let hint = capture.single(&EventQuery::new().menu("dispatch-unknown").event(EVENT_UNKNOWN));
    assert_eq!(hint.command(), Some("Spin"));
    assert_eq!(hint.message(), "Spin is unknown, did you mean help?");
}

#[test]
fn test_rejection_warns_once_per_family() {
    let capture = init_test_capture();
    let mut menu = test_menu(
        "dispatch-rejected-warn",
        ScriptedController::with_results(&[false]),
        CountingValidator::rejecting(),
        CountingValidator::rejecting(),
    );

    assert!(menu.run_one(&unit(&["getdb", "max_tilt"])));
    let rejected = EventQuery::new()
        .level(Level::WARN)
        .menu("dispatch-rejected-warn")
        .event(EVENT_REJECTED);
    let database = capture.single(&rejected.clone().op("interpret_database_command"));
    assert_eq!(database.message(), "Validation rejected the command");

    assert!(menu.run_one(&unit(&["SetTilt", "7"])));
    let controller = capture.single(&rejected.clone().op("interpret_controller_command"));
    assert_eq!(controller.message(), "Validation rejected the command");

    assert_eq!(capture.count(&rejected), 2);
    assert_eq!(menu.controller().executions, 0);
}

#[test]
fn test_accepted_command_logs_no_rejection() {
    let capture = init_test_capture();
    let mut menu = test_menu(
        "dispatch-accepted-quiet",
        ScriptedController::default(),
        CountingValidator::accepting(),
        CountingValidator::accepting(),
    );

    assert!(menu.run_one(&unit(&["Calibrate"])));
    let rejected = EventQuery::new()
        .menu("dispatch-accepted-quiet")
        .event(EVENT_REJECTED);
    assert_eq!(capture.count(&rejected), 0);
}

proptest! {
    #[test]
    fn prop_rejection_never_returns_false(
        name in prop::sample::select(vec!["getdb", "listdb", "shared", "SetTilt", "Calibrate"]),
        args in prop::collection::vec("[a-z0-9]{0,6}", 0..4),
    ) {
        let mut menu = test_menu(
            "dispatch-prop-reject",
            ScriptedController::with_results(&[false]),
            CountingValidator::rejecting(),
            CountingValidator::rejecting(),
        );
        let mut input = vec![name.to_string()];
        input.extend(args);

        prop_assert!(menu.run_one(&input));
        prop_assert_eq!(menu.controller().executions, 0);
    }

    #[test]
    fn prop_database_set_member_never_reaches_controller(
        name in "[a-zA-Z]{1,8}",
        in_controller in any::<bool>(),
    ) {
        let mut menu = test_menu(
            "dispatch-prop-priority",
            ScriptedController::default(),
            CountingValidator::accepting(),
            CountingValidator::rejecting(),
        );
        menu.set_database_commands_constraints([name.clone()]);
        if in_controller {
            menu.set_controller_commands_constraints([name.clone()]);
        }

        prop_assert_eq!(menu.constraints().classify(&name), CommandFamily::Database);
        menu.run_one(&vec![name]);
        prop_assert!(menu.controller().queued.is_empty());
    }
}
