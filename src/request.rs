use std::any::Any;

use crate::invocation::Invocation;
use crate::tags::Tags;

/// An outgoing request as seen by observers.
///
/// Carries the HTTP method, the resolved URL, ordered headers, and a typed
/// [`Tags`] table. The dispatch layer tags each request with the
/// [`Invocation`] that produced it.
///
/// # Examples
///
/// ```
/// use invocation_core::{Argument, ExtractInvocation, Invocation, Operation, Request};
///
/// let mut request = Request::new("GET", "https://api.example.com/users/7");
/// request.add_header("Accept", "application/json");
/// request.set_tag(Invocation::new(
///     Operation::new("Users", "find"),
///     &[Argument::new(7_u64)],
/// ));
///
/// let invocation = request.invocation().expect("tagged");
/// assert_eq!(invocation.operation().name(), "find");
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    tags: Tags,
}

impl Request {
    /// Creates a request with no headers and no tags.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            tags: Tags::new(),
        }
    }

    /// Appends a header. Repeated names are kept in insertion order.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Attaches a typed tag, replacing any tag of the same type.
    pub fn set_tag<T: Any + Send + Sync>(&mut self, value: T) {
        self.tags.insert(value);
    }

    /// Returns the tag of type `T`, if one was attached.
    pub fn tag<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.tags.get::<T>()
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the resolved URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the first value of the named header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns all headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the tag table.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// Read access to the invocation a request was tagged with.
///
/// Implemented for [`Request`]; other request abstractions can implement it
/// over whatever metadata they carry so observers stay decoupled from the
/// concrete request type.
pub trait ExtractInvocation {
    /// Returns the tagged invocation, or `None` if the request was not
    /// produced by a service method call.
    fn invocation(&self) -> Option<&Invocation>;
}

impl ExtractInvocation for Request {
    fn invocation(&self) -> Option<&Invocation> {
        self.tag::<Invocation>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Argument, Operation};

    #[test]
    fn untagged_request_has_no_invocation() {
        let request = Request::new("GET", "https://example.com/");
        assert!(request.invocation().is_none());
        assert!(request.tags().is_empty());
    }

    #[test]
    fn tagged_request_yields_invocation() {
        let mut request = Request::new("POST", "https://example.com/repos");
        request.set_tag(Invocation::new(
            Operation::new("Repos", "create"),
            &[Argument::new("name")],
        ));

        let invocation = request.invocation().unwrap();
        assert_eq!(invocation.operation().declaring_type(), "Repos");
        assert_eq!(invocation.arguments().len(), 1);
    }

    #[test]
    fn retagging_replaces_previous_invocation() {
        let mut request = Request::new("GET", "https://example.com/");
        request.set_tag(Invocation::new(Operation::new("A", "first"), &[]));
        request.set_tag(Invocation::new(Operation::new("A", "second"), &[]));

        assert_eq!(request.invocation().unwrap().operation().name(), "second");
        assert_eq!(request.tags().len(), 1);
    }

    #[test]
    fn other_tags_do_not_shadow_invocation() {
        let mut request = Request::new("GET", "https://example.com/");
        request.set_tag(3_u8);
        assert!(request.invocation().is_none());
        assert_eq!(request.tag::<u8>(), Some(&3));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut request = Request::new("GET", "https://example.com/");
        request.add_header("Accept", "text/plain");
        request.add_header("accept", "application/json");

        assert_eq!(request.header("ACCEPT"), Some("text/plain"));
        assert_eq!(request.headers().len(), 2);
        assert!(request.header("X-Missing").is_none());
    }

    #[test]
    fn cloned_request_shares_invocation() {
        let mut request = Request::new("GET", "https://example.com/");
        request.set_tag(Invocation::new(Operation::new("A", "get"), &[]));

        let retry = request.clone();
        let a: *const Invocation = request.invocation().unwrap();
        let b: *const Invocation = retry.invocation().unwrap();
        assert_eq!(a, b);
    }
}
