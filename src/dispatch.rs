//! Producer side: turning a service method call into a tagged request.

use std::sync::Arc;

use crate::argument::Argument;
use crate::context::ContextToken;
use crate::invocation::Invocation;
use crate::operation::Operation;
use crate::request::Request;

/// A resolved service method.
///
/// The operation descriptor is built once, when the method is resolved, and
/// shared by every request the method produces. Each call to
/// [`to_request`](Self::to_request) tags the outgoing [`Request`] with a fresh
/// [`Invocation`].
///
/// # Examples
///
/// ```
/// use invocation_core::{Argument, ExtractInvocation, Operation, ServiceMethod};
///
/// let method = ServiceMethod::new(
///     Operation::new("api::GitHubService", "contributors").with_parameters(["String", "String"]),
///     "GET",
///     "repos/contributors",
/// );
///
/// let request = method.to_request(
///     "https://api.github.com/",
///     vec![Argument::new("square"), Argument::new("retrofit")],
///     None,
/// );
///
/// assert_eq!(request.url(), "https://api.github.com/repos/contributors");
/// let invocation = request.invocation().expect("service requests are tagged");
/// assert_eq!(invocation.operation().name(), "contributors");
/// ```
#[derive(Debug, Clone)]
pub struct ServiceMethod {
    operation: Arc<Operation>,
    http_method: String,
    relative_url: String,
}

impl ServiceMethod {
    /// Resolves a service method.
    pub fn new(
        operation: Operation,
        http_method: impl Into<String>,
        relative_url: impl Into<String>,
    ) -> Self {
        Self {
            operation: Arc::new(operation),
            http_method: http_method.into(),
            relative_url: relative_url.into(),
        }
    }

    /// The operation this method invokes.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// The HTTP method used for every request.
    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    /// Builds the outgoing request for one call and tags it with its
    /// invocation.
    ///
    /// `arguments` is moved into the invocation as-is; the caller gives up
    /// the vector, so no copy is taken.
    pub fn to_request(
        &self,
        base_url: &str,
        arguments: Vec<Argument>,
        execution_context: Option<ContextToken>,
    ) -> Request {
        let url = join_url(base_url, &self.relative_url);
        let mut request = Request::new(self.http_method.as_str(), url);

        let invocation =
            Invocation::from_owned(Arc::clone(&self.operation), arguments, execution_context);

        tracing::debug!(
            operation = %self.operation,
            argument_count = invocation.arguments().len(),
            suspending = invocation.execution_context().is_some(),
            method = %request.method(),
            url = %request.url(),
            "tagging request with invocation"
        );

        request.set_tag(invocation);
        request
    }
}

fn join_url(base: &str, relative: &str) -> String {
    match (base.ends_with('/'), relative.starts_with('/')) {
        (true, true) => format!("{}{}", base, &relative[1..]),
        (false, false) if !relative.is_empty() => format!("{}/{}", base, relative),
        _ => format!("{}{}", base, relative),
    }
}
