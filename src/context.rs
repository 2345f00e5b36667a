use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to the execution context a call was made from.
///
/// Only calls issued from a cooperative (suspending) calling convention carry
/// a token. This crate stores and returns it and never looks inside; the
/// runtime that created it can recover its own type with
/// [`downcast_ref`](Self::downcast_ref).
///
/// Tokens compare by identity only.
///
/// # Examples
///
/// ```
/// use invocation_core::ContextToken;
///
/// #[derive(Debug)]
/// struct TaskId(u64);
///
/// let token = ContextToken::new(TaskId(9));
/// let same = token.clone();
///
/// assert!(token.ptr_eq(&same));
/// assert_eq!(token.downcast_ref::<TaskId>().map(|t| t.0), Some(9));
/// ```
#[derive(Clone)]
pub struct ContextToken {
    inner: Arc<dyn Any + Send + Sync>,
}

impl ContextToken {
    /// Wraps a runtime-specific context value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Wraps an already shared context value without re-allocating it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { inner: value }
    }

    /// Returns the context value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Returns true if both tokens refer to the same context.
    pub fn ptr_eq(&self, other: &ContextToken) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ContextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextToken(..)")
    }
}
