use thiserror::Error;

/// Result type alias using TreeSnapError
pub type Result<T> = std::result::Result<T, TreeSnapError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing. Malformed report lines are deliberately absent:
/// they are skipped by the codec and never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the operation
/// and path context needed to explain a failed run in one line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
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

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for snapshot and reconciliation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeSnapError {
    /// The directory to scan does not exist
    #[error("Root directory not found: {path}")]
    RootNotFound { path: String },

    /// The path to scan exists but is not a directory
    #[error("Root is not a directory: {path}")]
    RootNotDirectory { path: String },

    /// Filesystem failure (unreadable directory, vanished file, unwritable report)
    #[error("I/O error during {op} on {path}: {message}")]
    Io {
        op: String,
        path: String,
        message: String,
    },

    /// Result encoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TreeSnapError {
    /// Build an `Io` variant from a `std::io::Error`
    pub fn io(op: &str, path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        TreeSnapError::Io {
            op: op.to_string(),
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from TreeSnapError to ExError
impl From<TreeSnapError> for ExError {
    fn from(err: TreeSnapError) -> Self {
        match err {
            TreeSnapError::RootNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_op("scan_root")
                .with_path(path)
                .with_message("Root directory not found"),

            TreeSnapError::RootNotDirectory { path } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("scan_root")
                .with_path(path)
                .with_message("Root is not a directory"),

            TreeSnapError::Io { op, path, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_path(path)
                .with_message(message),

            TreeSnapError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            TreeSnapError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
