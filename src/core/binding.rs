//! Caller-owned values that components read and write without owning them.
//!
//! Everything here is single-threaded (`Rc`), matching the component tree.

use std::cell::{Ref as CellRef, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared mutable storage. Clones alias the same value.
pub struct Ref<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Ref<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub fn borrow(&self) -> CellRef<'_, T> {
        self.inner.borrow()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> Ref<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Ref<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&*self.inner.borrow()).finish()
    }
}

impl<T> From<T> for Ref<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Read-only view: a constant, a shared `Ref`, or a computed value.
pub enum ConstRef<T> {
    Value(T),
    Shared(Ref<T>),
    Computed(Rc<dyn Fn() -> T>),
}

impl<T: Clone> ConstRef<T> {
    pub fn get(&self) -> T {
        match self {
            ConstRef::Value(v) => v.clone(),
            ConstRef::Shared(r) => r.get(),
            ConstRef::Computed(f) => f(),
        }
    }
}

impl<T> ConstRef<T> {
    pub fn from_fn(f: impl Fn() -> T + 'static) -> Self {
        ConstRef::Computed(Rc::new(f))
    }
}

impl<T: Clone> Clone for ConstRef<T> {
    fn clone(&self) -> Self {
        match self {
            ConstRef::Value(v) => ConstRef::Value(v.clone()),
            ConstRef::Shared(r) => ConstRef::Shared(r.clone()),
            ConstRef::Computed(f) => ConstRef::Computed(Rc::clone(f)),
        }
    }
}

impl<T: Default> Default for ConstRef<T> {
    fn default() -> Self {
        ConstRef::Value(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ConstRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstRef::Value(v) => f.debug_tuple("Value").field(v).finish(),
            ConstRef::Shared(r) => f.debug_tuple("Shared").field(r).finish(),
            ConstRef::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T> From<T> for ConstRef<T> {
    fn from(value: T) -> Self {
        ConstRef::Value(value)
    }
}

impl<T> From<Ref<T>> for ConstRef<T> {
    fn from(value: Ref<T>) -> Self {
        ConstRef::Shared(value)
    }
}

impl<T> From<&Ref<T>> for ConstRef<T> {
    fn from(value: &Ref<T>) -> Self {
        ConstRef::Shared(value.clone())
    }
}

pub type StringRef = Ref<String>;
pub type ConstStringRef = ConstRef<String>;

impl From<&str> for ConstRef<String> {
    fn from(value: &str) -> Self {
        ConstRef::Value(value.to_string())
    }
}

impl From<&str> for Ref<String> {
    fn from(value: &str) -> Self {
        Ref::new(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/binding.rs"]
mod tests;
