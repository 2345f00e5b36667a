use std::fmt;
use std::sync::Arc;

use crate::argument::{Argument, Arguments};
use crate::context::ContextToken;
use crate::error::Error;
use crate::operation::Operation;

/// A single invocation of a service method: which operation was called and
/// with what arguments.
///
/// The dispatch layer creates one `Invocation` per call and attaches it to the
/// outgoing [`Request`](crate::Request) as a tag. Observers read it back with
/// [`ExtractInvocation`](crate::ExtractInvocation) for logging, metrics, or
/// tracing without knowing anything about dispatch.
///
/// An `Invocation` never changes after construction. The argument list is a
/// private copy of what the caller passed in, and it rejects structural
/// mutation. The argument *values* are shared, so types with interior
/// mutability can still change under an observer. Prefer immutable
/// parameter types.
///
/// # Examples
///
/// ```
/// use invocation_core::{Argument, Invocation, Operation};
///
/// let op = Operation::new("api::GitHubService", "contributors")
///     .with_parameters(["String", "String"]);
/// let args = vec![Argument::new("square"), Argument::new("retrofit")];
///
/// let record = Invocation::new(op.clone(), &args);
///
/// assert_eq!(record.operation(), &op);
/// assert_eq!(record.arguments().len(), 2);
/// assert!(record.execution_context().is_none());
/// assert_eq!(
///     record.describe(),
///     r#"api::GitHubService.contributors() ["square", "retrofit"]"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Invocation {
    operation: Arc<Operation>,
    arguments: Arguments,
    execution_context: Option<ContextToken>,
}

impl Invocation {
    /// Creates an invocation of a call made without an execution context.
    ///
    /// `arguments` is copied; later changes to the caller's collection are
    /// not visible through the record.
    pub fn new(operation: impl Into<Arc<Operation>>, arguments: &[Argument]) -> Self {
        Self::with_context(operation, arguments, None)
    }

    /// Creates an invocation with an optional execution-context token.
    pub fn with_context(
        operation: impl Into<Arc<Operation>>,
        arguments: &[Argument],
        execution_context: Option<ContextToken>,
    ) -> Self {
        Self::from_owned(operation.into(), arguments.to_vec(), execution_context)
    }

    /// Trusted constructor: assumes ownership of `arguments` without copying.
    pub(crate) fn from_owned(
        operation: Arc<Operation>,
        arguments: Vec<Argument>,
        execution_context: Option<ContextToken>,
    ) -> Self {
        Self {
            operation,
            arguments: Arguments::from_owned(arguments),
            execution_context,
        }
    }

    /// Starts a builder for callers whose inputs may be missing.
    pub fn builder() -> InvocationBuilder {
        InvocationBuilder::default()
    }

    /// The operation that was invoked.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// The shared descriptor, for callers that want to keep it.
    pub fn operation_arc(&self) -> &Arc<Operation> {
        &self.operation
    }

    /// The call arguments, in declaration order.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The execution-context token, if the call carried one.
    pub fn execution_context(&self) -> Option<&ContextToken> {
        self.execution_context.as_ref()
    }

    /// Renders `<qualified-type>.<method>() [<arguments>]` for logs.
    ///
    /// The format is for humans and may change between versions.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}() {:?}",
            self.operation.declaring_type(),
            self.operation.name(),
            self.arguments
        )
    }
}

/// Builder for an [`Invocation`] whose inputs arrive separately.
///
/// [`build`](Self::build) fails with
/// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) if the
/// operation or the argument list was never supplied. An explicitly empty
/// argument list is valid.
///
/// # Examples
///
/// ```
/// use invocation_core::{Invocation, Operation, ErrorKind};
///
/// let err = Invocation::builder()
///     .arguments(&[])
///     .build()
///     .unwrap_err();
/// assert_eq!(err.kind, ErrorKind::InvalidArgument { parameter: "operation" });
///
/// let record = Invocation::builder()
///     .operation(Operation::new("Health", "ping"))
///     .arguments(&[])
///     .build()
///     .expect("all inputs supplied");
/// assert!(record.arguments().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InvocationBuilder {
    operation: Option<Arc<Operation>>,
    arguments: Option<Vec<Argument>>,
    execution_context: Option<ContextToken>,
}

impl InvocationBuilder {
    /// Sets the invoked operation.
    pub fn operation(mut self, operation: impl Into<Arc<Operation>>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the argument list (copied).
    pub fn arguments(mut self, arguments: &[Argument]) -> Self {
        self.arguments = Some(arguments.to_vec());
        self
    }

    /// Sets the execution-context token.
    pub fn execution_context(mut self, token: ContextToken) -> Self {
        self.execution_context = Some(token);
        self
    }

    /// Builds the invocation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming `operation` or `arguments`, checked in
    /// that order, if either was not supplied.
    pub fn build(self) -> Result<Invocation, Error> {
        let operation = self.operation.ok_or_else(|| Error::missing("operation"))?;
        let arguments = self.arguments.ok_or_else(|| Error::missing("arguments"))?;

        Ok(Invocation::from_owned(
            operation,
            arguments,
            self.execution_context,
        ))
    }
}
