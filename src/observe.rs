//! Consumer side: observers that read the invocation tagged on a request.
//!
//! This module provides:
//! - `RequestObserver`: the hook an interceptor calls for each outgoing request
//! - `InvocationLogger`: structured logging of call identity through `tracing`
//! - `InvocationTrail`: in-memory recorder of observed invocations
//!
//! Observers only read. They never modify the request or its invocation, and
//! requests that carry no invocation are passed over.

mod logger;
mod trail;

pub use logger::{InvocationLogger, LoggerConfig};
pub use trail::InvocationTrail;

use crate::request::Request;

/// Reads outgoing requests on their way to the transport.
///
/// Implementations may be shared across threads and must not block.
pub trait RequestObserver: Send + Sync {
    /// Inspects one outgoing request.
    fn observe(&self, request: &Request);
}

impl<O: RequestObserver + ?Sized> RequestObserver for std::sync::Arc<O> {
    fn observe(&self, request: &Request) {
        (**self).observe(request);
    }
}
