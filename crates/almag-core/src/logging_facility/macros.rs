//! Operation lifecycle macros
//!
//! Each macro emits one event tagged with the calling module as `component`,
//! the operation name as `op` and the lifecycle stage as `event`. Extra
//! `key = value` fields may follow; a format message may not, since the
//! macros supply their own.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event
            $(, $($field)*)?
        )
    };
}

/// Operation started
///
/// ```
/// # use almag_core::log_op_start;
/// log_op_start!("run_command");
/// log_op_start!("run_command", command = "setdb");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            almag_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Operation finished; `duration_ms` is required
///
/// ```
/// # use almag_core::log_op_end;
/// log_op_end!("run_command", duration_ms = 3);
/// log_op_end!("run_command", duration_ms = 3, succeeded = true);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            almag_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Operation failed with anything convertible into `ExError`
///
/// The event carries `err.kind`, `err.code` and the rendered error as its
/// message, with or without extra fields.
///
/// ```
/// # use almag_core::{log_op_error, errors::AlmagError};
/// let err = AlmagError::KeyNotFound { key: "max_tilt".to_string() };
/// log_op_error!("run_command", err.clone(), duration_ms = 1);
/// log_op_error!("run_command", err, duration_ms = 1, command = "getdb");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            almag_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)*,)?
            "{}",
            ex_err
        )
    }};
}
