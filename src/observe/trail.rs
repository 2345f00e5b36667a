//! In-memory invocation recorder.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::RequestObserver;
use crate::invocation::Invocation;
use crate::request::{ExtractInvocation, Request};

/// Records the invocation of every tagged request it observes.
///
/// Useful for metrics aggregation and for asserting in tests which calls a
/// client made. Stored invocations share their operation and argument values
/// with the originals; recording never copies argument data.
///
/// # Example
///
/// ```
/// use invocation_core::{Argument, InvocationTrail, Operation, Request, RequestObserver, ServiceMethod};
///
/// let trail = InvocationTrail::new();
/// let method = ServiceMethod::new(Operation::new("Users", "find"), "GET", "users");
///
/// trail.observe(&method.to_request("https://h", vec![Argument::new(1_u64)], None));
/// trail.observe(&Request::new("GET", "https://h/untagged"));
///
/// assert_eq!(trail.len(), 1);
/// assert_eq!(trail.invocations()[0].operation().name(), "find");
/// ```
#[derive(Debug, Default)]
pub struct InvocationTrail {
    invocations: Mutex<Vec<Invocation>>,
}

impl InvocationTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an invocation.
    ///
    /// Invocations are kept in the order they are recorded.
    pub fn record(&self, invocation: Invocation) {
        self.lock().push(invocation);
    }

    /// Returns a snapshot of all recorded invocations.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().clone()
    }

    /// Returns the number of recorded invocations.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded invocations.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Invocation>> {
        // Recording is append-only, so a poisoned list is still consistent.
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl RequestObserver for InvocationTrail {
    fn observe(&self, request: &Request) {
        if let Some(invocation) = request.invocation() {
            self.record(invocation.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Argument, Operation};
    use std::sync::Arc;
    use std::thread;

    fn tagged(name: &str) -> Request {
        let mut request = Request::new("GET", "https://example.com/");
        request.set_tag(Invocation::new(Operation::new("Svc", name), &[]));
        request
    }

    #[test]
    fn trail_starts_empty() {
        let trail = InvocationTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn trail_keeps_observation_order() {
        let trail = InvocationTrail::new();
        trail.observe(&tagged("first"));
        trail.observe(&tagged("second"));

        let names: Vec<_> = trail
            .invocations()
            .iter()
            .map(|i| i.operation().name().to_string())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn trail_ignores_untagged_requests() {
        let trail = InvocationTrail::new();
        trail.observe(&Request::new("GET", "https://example.com/"));
        assert!(trail.is_empty());
    }

    #[test]
    fn recorded_invocation_shares_arguments() {
        let arg = Argument::new(vec![1_u8, 2, 3]);
        let mut request = Request::new("PUT", "https://example.com/blob");
        request.set_tag(Invocation::new(Operation::new("Blobs", "put"), &[arg.clone()]));

        let trail = InvocationTrail::new();
        trail.observe(&request);

        assert!(trail.invocations()[0].arguments()[0].ptr_eq(&arg));
    }

    #[test]
    fn clear_empties_the_trail() {
        let trail = InvocationTrail::new();
        trail.observe(&tagged("a"));
        trail.clear();
        assert!(trail.is_empty());
    }

    #[test]
    fn concurrent_observers_record_everything() {
        let trail = Arc::new(InvocationTrail::new());
        let request = Arc::new(tagged("shared"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let trail = Arc::clone(&trail);
                let request = Arc::clone(&request);
                thread::spawn(move || {
                    for _ in 0..10 {
                        trail.observe(&request);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trail.len(), 80);
    }
}
