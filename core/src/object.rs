//! Opaque shared objects.
//!
//! Constructors and constant providers hand back values the registry never
//! looks inside. Both wrappers compare by identity: two handles are equal only
//! when they point at the same allocation.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An object produced by a registered constructor.
#[derive(Clone)]
pub struct Instance {
    class: Arc<str>,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap a freshly constructed object under its class name.
    pub fn new<T: Any + Send + Sync>(class: impl Into<Arc<str>>, object: T) -> Self {
        Self {
            class: class.into(),
            inner: Arc::new(object),
        }
    }

    /// Name of the class that produced this instance.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Borrow the concrete object if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// True if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("class", &self.class).finish_non_exhaustive()
    }
}

/// A pre-built value substituted verbatim wherever its name is referenced.
#[derive(Clone)]
pub struct Constant {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Constant {
    /// Share a value as a constant.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Share an already reference-counted value without re-allocating it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { inner: value }
    }

    /// Borrow the value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// True if both handles refer to the same value.
    pub fn ptr_eq(&self, other: &Constant) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constant").finish_non_exhaustive()
    }
}
