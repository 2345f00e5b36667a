use std::fmt;

/// An invocation contract was not honored.
///
/// Errors are raised eagerly at the point of violation and carry a
/// human-readable message alongside the machine-checkable [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The kind of error that occurred
    pub kind: ErrorKind,
    /// Human-readable message explaining the error
    pub message: String,
}

impl Error {
    /// Creates a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A required construction input was not supplied.
    pub(crate) fn missing(parameter: &'static str) -> Self {
        Self::new(
            ErrorKind::InvalidArgument { parameter },
            format!("{parameter} must be provided"),
        )
    }

    /// A structural mutation was attempted on a read-only view.
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        Self::new(
            ErrorKind::UnsupportedOperation { operation },
            format!("{operation} is not supported on an immutable argument list"),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

/// The kind of contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was missing during construction
    InvalidArgument {
        /// Name of the missing input
        parameter: &'static str,
    },
    /// A structural mutation was attempted on the argument view
    UnsupportedOperation {
        /// The rejected mutation
        operation: &'static str,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument { parameter } => {
                write!(f, "Invalid argument '{}'", parameter)
            }
            ErrorKind::UnsupportedOperation { operation } => {
                write!(f, "Unsupported operation '{}'", operation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_the_parameter() {
        let err = Error::missing("operation");
        assert_eq!(
            err.kind,
            ErrorKind::InvalidArgument {
                parameter: "operation"
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid argument 'operation': operation must be provided"
        );
    }

    #[test]
    fn unsupported_names_the_mutation() {
        let err = Error::unsupported("insert");
        assert_eq!(
            err.kind,
            ErrorKind::UnsupportedOperation { operation: "insert" }
        );
        assert!(err.to_string().starts_with("Unsupported operation 'insert'"));
    }
}
