//! Argument values and the read-only argument view.

use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::slice;
use std::sync::Arc;

use crate::error::Error;

/// Any value that can be passed as a call argument.
///
/// Blanket-implemented for every `Debug + Send + Sync + 'static` type, so
/// callers never implement it by hand.
pub trait ArgumentValue: Any + fmt::Debug + Send + Sync {
    /// Upcasts to `Any` for typed downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> ArgumentValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A single positional argument of a call.
///
/// The value is shared, not copied: cloning an `Argument` clones the handle.
/// Two arguments are only "the same" by identity ([`ptr_eq`](Self::ptr_eq)).
///
/// Values with interior mutability can still change after they were passed.
/// Prefer immutable argument types if observers read them concurrently.
///
/// # Examples
///
/// ```
/// use invocation_core::Argument;
///
/// let arg = Argument::new(42_u32);
/// assert_eq!(arg.downcast_ref::<u32>(), Some(&42));
/// assert!(arg.downcast_ref::<i64>().is_none());
/// assert_eq!(format!("{:?}", arg), "42");
/// ```
#[derive(Clone)]
pub struct Argument(Arc<dyn ArgumentValue>);

impl Argument {
    /// Wraps a value as an argument.
    pub fn new<T: ArgumentValue>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wraps an already shared value without re-allocating it.
    pub fn from_arc<T: ArgumentValue>(value: Arc<T>) -> Self {
        Self(value)
    }

    /// Returns the value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        // Deref first; `Arc<dyn ArgumentValue>` is itself an `ArgumentValue`.
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Returns true if the value is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }

    /// Returns true if both arguments share the same value.
    pub fn ptr_eq(&self, other: &Argument) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// The ordered, immutable argument list of an invocation.
///
/// Reads go through slice access (`Deref<Target = [Argument]>`). Structural
/// mutations are rejected with
/// [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation)
/// and leave the list untouched. `to_vec()` gives an independent, mutable
/// copy.
///
/// # Examples
///
/// ```
/// use invocation_core::{Argument, Invocation, Operation, ErrorKind};
///
/// let record = Invocation::new(Operation::new("Users", "find"), &[Argument::new(7_u64)]);
///
/// let mut view = record.arguments().clone();
/// let err = view.try_remove(0).unwrap_err();
/// assert!(matches!(err.kind, ErrorKind::UnsupportedOperation { .. }));
/// assert_eq!(record.arguments().len(), 1);
/// ```
#[derive(Clone)]
pub struct Arguments {
    values: Arc<[Argument]>,
}

impl Arguments {
    /// Takes ownership of `values` without copying.
    pub(crate) fn from_owned(values: Vec<Argument>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Returns the arguments as a slice.
    pub fn as_slice(&self) -> &[Argument] {
        &self.values
    }

    /// Always fails: the list length is fixed.
    pub fn try_insert(&mut self, _index: usize, _value: Argument) -> Result<(), Error> {
        Err(Error::unsupported("insert"))
    }

    /// Always fails: the list length is fixed.
    pub fn try_push(&mut self, _value: Argument) -> Result<(), Error> {
        Err(Error::unsupported("push"))
    }

    /// Always fails: the list length is fixed.
    pub fn try_remove(&mut self, _index: usize) -> Result<Argument, Error> {
        Err(Error::unsupported("remove"))
    }

    /// Always fails: positions are fixed.
    pub fn try_replace(&mut self, _index: usize, _value: Argument) -> Result<Argument, Error> {
        Err(Error::unsupported("replace"))
    }

    /// Always fails: the list length is fixed.
    pub fn try_clear(&mut self) -> Result<(), Error> {
        Err(Error::unsupported("clear"))
    }
}

impl Deref for Arguments {
    type Target = [Argument];

    fn deref(&self) -> &[Argument] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
