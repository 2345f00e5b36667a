//! Immutable records of service method invocations, attached to outgoing
//! requests for observers.
//!
//! The dispatch layer creates one [`Invocation`] per call: which
//! [`Operation`] was invoked, with which [`Arguments`], and, for suspending
//! calls, an opaque [`ContextToken`]. The record is attached to the outgoing
//! [`Request`] as a typed tag. Logging, metrics, and tracing observers read it
//! back without depending on how the call was dispatched.
//!
//! # Core Types
//!
//! - [`Invocation`]: the immutable call record
//! - [`Operation`]: descriptor of the declared call signature
//! - [`Argument`] / [`Arguments`]: opaque argument values and their read-only list
//! - [`ContextToken`]: opaque execution-context handle
//! - [`Request`] / [`Tags`]: outgoing request with a typed tag table
//! - [`ServiceMethod`]: produces tagged requests
//! - [`RequestObserver`]: consumer hook, with [`InvocationLogger`] and [`InvocationTrail`]
//!
//! # Examples
//!
//! ```
//! use invocation_core::{
//!     Argument, ExtractInvocation, InvocationTrail, Operation, RequestObserver, ServiceMethod,
//! };
//!
//! let method = ServiceMethod::new(
//!     Operation::new("api::GitHubService", "contributors").with_parameters(["String", "String"]),
//!     "GET",
//!     "repos/contributors",
//! );
//! let request = method.to_request(
//!     "https://api.github.com",
//!     vec![Argument::new("square"), Argument::new("retrofit")],
//!     None,
//! );
//!
//! // Somewhere further down the pipeline:
//! if let Some(invocation) = request.invocation() {
//!     assert_eq!(invocation.operation().simple_type_name(), "GitHubService");
//!     assert_eq!(
//!         invocation.to_string(),
//!         r#"api::GitHubService.contributors() ["square", "retrofit"]"#
//!     );
//! }
//!
//! let trail = InvocationTrail::new();
//! trail.observe(&request);
//! assert_eq!(trail.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod argument;
mod context;
mod dispatch;
mod error;
mod invocation;
pub mod observe;
mod operation;
mod request;
mod tags;

pub use argument::{Argument, ArgumentValue, Arguments};
pub use context::ContextToken;
pub use dispatch::ServiceMethod;
pub use error::{Error, ErrorKind};
pub use invocation::{Invocation, InvocationBuilder};
pub use observe::{InvocationLogger, InvocationTrail, LoggerConfig, RequestObserver};
pub use operation::Operation;
pub use request::{ExtractInvocation, Request};
pub use tags::Tags;
