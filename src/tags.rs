use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
struct Tag {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// Typed side-table attached to a request.
///
/// Holds at most one value per type. Values are looked up with the type the
/// caller expects; a lookup for a type that was never stored yields `None`.
/// Cloning a `Tags` shares the stored values.
///
/// # Examples
///
/// ```
/// use invocation_core::Tags;
///
/// #[derive(Debug, PartialEq)]
/// struct TraceId(&'static str);
///
/// let mut tags = Tags::new();
/// tags.insert(TraceId("abc"));
///
/// assert_eq!(tags.get::<TraceId>(), Some(&TraceId("abc")));
/// assert!(tags.get::<u32>().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Tags {
    inner: HashMap<TypeId, Tag>,
}

impl Tags {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing any value of the same type.
    ///
    /// Returns true if a previous value was replaced.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> bool {
        let tag = Tag {
            type_name: type_name::<T>(),
            value: Arc::new(value),
        };
        self.inner.insert(TypeId::of::<T>(), tag).is_some()
    }

    /// Returns the stored value of type `T`.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.inner.get(&TypeId::of::<T>())?.value.downcast_ref()
    }

    /// Removes the value of type `T`, returning whether one was stored.
    pub fn remove<T: Any + Send + Sync>(&mut self) -> bool {
        self.inner.remove(&TypeId::of::<T>()).is_some()
    }

    /// Returns true if a value of type `T` is stored.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.inner.contains_key(&TypeId::of::<T>())
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.inner.values().map(|t| t.type_name).collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}
