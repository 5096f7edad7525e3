use thiserror::Error;

/// Result type alias using AlmagError
pub type Result<T> = std::result::Result<T, AlmagError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured log events
/// and in test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input/Validation
    InvalidInput,
    NotFound,
    ReadOnly,
    TypeMismatch,
    OutOfRange,

    // Controller
    NotCalibrated,
    EmptyQueue,

    // Configuration/IO
    InvalidConfig,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ReadOnly => "ERR_READ_ONLY",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::NotCalibrated => "ERR_NOT_CALIBRATED",
            ExErrorKind::EmptyQueue => "ERR_EMPTY_QUEUE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context (operation, command name,
/// database key) for structured logging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command: Option<String>,
    key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add command name context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Add database key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Almag operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlmagError {
    // ===== Input Errors =====
    /// Input unit had no tokens
    #[error("Empty user input")]
    EmptyInput,

    /// Token count does not match what the command expects
    #[error("Command {command} expects {expected} argument(s), got {actual}")]
    WrongArity {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// Command name is not handled by this executor
    #[error("Unsupported command: {command}")]
    UnsupportedCommand { command: String },

    // ===== Database Errors =====
    /// Key not present in the database
    #[error("Database key not found: {key}")]
    KeyNotFound { key: String },

    /// Key exists but cannot be written
    #[error("Database key is read-only: {key}")]
    ReadOnlyKey { key: String },

    /// Value cannot be parsed into the type of the existing entry
    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    // ===== Controller Errors =====
    /// Requested tilt falls outside the configured range or step
    #[error("Tilt {tilt} out of range [{min}, {max}] with step {step}")]
    TiltOutOfRange {
        tilt: i64,
        min: i64,
        max: i64,
        step: i64,
    },

    /// Movement requested before calibration
    #[error("Device not calibrated: {command}")]
    NotCalibrated { command: String },

    /// Execute requested with nothing queued
    #[error("Controller has no pending commands")]
    EmptyQueue,

    // ===== Configuration Errors =====
    /// Configuration file content is invalid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// I/O failure while reading configuration or scripts
    #[error("I/O error during {operation}: {reason}")]
    Io { operation: String, reason: String },

    /// Rendering the database for output failed
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl AlmagError {
    /// Build an I/O error from a std::io::Error
    pub fn io(operation: &str, err: std::io::Error) -> Self {
        AlmagError::Io {
            operation: operation.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<AlmagError> for ExError {
    fn from(err: AlmagError) -> Self {
        let message = err.to_string();
        match err {
            AlmagError::EmptyInput => ExError::new(ExErrorKind::InvalidInput).with_message(message),

            AlmagError::WrongArity { command, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_command(command)
                .with_message(message),

            AlmagError::UnsupportedCommand { command } => ExError::new(ExErrorKind::InvalidInput)
                .with_command(command)
                .with_message(message),

            AlmagError::KeyNotFound { key } => ExError::new(ExErrorKind::NotFound)
                .with_key(key)
                .with_message(message),

            AlmagError::ReadOnlyKey { key } => ExError::new(ExErrorKind::ReadOnly)
                .with_key(key)
                .with_message(message),

            AlmagError::InvalidValue { key, .. } => ExError::new(ExErrorKind::TypeMismatch)
                .with_key(key)
                .with_message(message),

            AlmagError::TiltOutOfRange { .. } => ExError::new(ExErrorKind::OutOfRange)
                .with_command("SetTilt")
                .with_message(message),

            AlmagError::NotCalibrated { command } => ExError::new(ExErrorKind::NotCalibrated)
                .with_command(command)
                .with_message(message),

            AlmagError::EmptyQueue => ExError::new(ExErrorKind::EmptyQueue)
                .with_op("execute_command")
                .with_message(message),

            AlmagError::InvalidConfig { .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(message),

            AlmagError::Io { operation, .. } => ExError::new(ExErrorKind::Io)
                .with_op(operation)
                .with_message(message),

            AlmagError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("to_json")
                .with_message(message),
        }
    }
}
