//! Logs the invocation behind each outgoing request.

use tracing::Level;

use super::RequestObserver;
use crate::invocation::Invocation;
use crate::request::{ExtractInvocation, Request};

// `tracing` needs the level at the call site.
macro_rules! event_at {
    ($level:expr, $($rest:tt)+) => {{
        let level = $level;
        if level == Level::ERROR {
            tracing::event!(Level::ERROR, $($rest)+)
        } else if level == Level::WARN {
            tracing::event!(Level::WARN, $($rest)+)
        } else if level == Level::INFO {
            tracing::event!(Level::INFO, $($rest)+)
        } else if level == Level::DEBUG {
            tracing::event!(Level::DEBUG, $($rest)+)
        } else {
            tracing::event!(Level::TRACE, $($rest)+)
        }
    }};
}

/// Configuration for [`InvocationLogger`].
///
/// # Examples
///
/// ```
/// use invocation_core::LoggerConfig;
/// use tracing::Level;
///
/// let config = LoggerConfig::default()
///     .with_level(Level::DEBUG)
///     .with_arguments(false);
///
/// assert_eq!(config.level, Level::DEBUG);
/// assert!(!config.include_arguments);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level of the per-request event
    pub level: Level,
    /// Whether argument values are rendered; otherwise only their count is
    pub include_arguments: bool,
}

impl LoggerConfig {
    /// Sets the event level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets whether argument values appear in the log line.
    pub fn with_arguments(mut self, include: bool) -> Self {
        self.include_arguments = include;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_arguments: true,
        }
    }
}

/// Logs `<SimpleType>.<method> <arguments>` for every tagged request.
///
/// Each event carries structured fields: `operation` (full signature),
/// `argument_count`, and `suspending` (whether an execution context was
/// attached). Untagged requests produce a single trace-level event.
///
/// Argument values are logged with their `Debug` form. Turn
/// [`include_arguments`](LoggerConfig::include_arguments) off when arguments
/// may hold credentials or personal data.
///
/// # Examples
///
/// ```
/// use invocation_core::{
///     Argument, ExtractInvocation, InvocationLogger, Operation, RequestObserver, ServiceMethod,
/// };
///
/// let logger = InvocationLogger::new();
/// let method = ServiceMethod::new(Operation::new("api::Users", "find"), "GET", "users");
///
/// let request = method.to_request("https://example.com", vec![Argument::new(7_u64)], None);
/// logger.observe(&request);
///
/// let invocation = request.invocation().expect("tagged");
/// assert_eq!(logger.render(invocation), "Users.find [7]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvocationLogger {
    config: LoggerConfig,
}

impl InvocationLogger {
    /// Creates a logger with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logger with the given configuration.
    pub fn with_config(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Renders the log line for an invocation.
    pub fn render(&self, invocation: &Invocation) -> String {
        let operation = invocation.operation();
        if self.config.include_arguments {
            format!(
                "{}.{} {:?}",
                operation.simple_type_name(),
                operation.name(),
                invocation.arguments()
            )
        } else {
            format!(
                "{}.{} <{} arguments>",
                operation.simple_type_name(),
                operation.name(),
                invocation.arguments().len()
            )
        }
    }
}

impl RequestObserver for InvocationLogger {
    fn observe(&self, request: &Request) {
        let Some(invocation) = request.invocation() else {
            tracing::trace!(
                method = %request.method(),
                url = %request.url(),
                "request carries no invocation"
            );
            return;
        };

        let line = self.render(invocation);
        event_at!(
            self.config.level,
            operation = %invocation.operation(),
            argument_count = invocation.arguments().len(),
            suspending = invocation.execution_context().is_some(),
            "{}",
            line
        );
    }
}
