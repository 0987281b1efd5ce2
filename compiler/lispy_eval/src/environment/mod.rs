//! Environment for symbol binding in the interpreter.
//!
//! A scope holds ordered `Bindings` and a non-owning link to its parent.
//! The global scope is the only one without a parent; it is owned by the
//! `Interpreter` for the whole session. Call frames are owned by the call
//! that creates them and link back to the caller's scope with a `Weak`
//! reference, so a frame never keeps its caller alive.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use lispy_ir::{Bindings, Value};

use crate::errors;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. Not thread-safe:
/// the interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// A non-owning handle to the same scope.
    #[inline]
    pub fn downgrade(&self) -> WeakScope<T> {
        WeakScope(Rc::downgrade(&self.0))
    }

    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Non-owning counterpart of [`LocalScope`].
#[repr(transparent)]
pub struct WeakScope<T>(Weak<RefCell<T>>);

impl<T> WeakScope<T> {
    /// The scope, if it is still alive.
    #[inline]
    pub fn upgrade(&self) -> Option<LocalScope<T>> {
        self.0.upgrade().map(LocalScope)
    }
}

impl<T> Clone for WeakScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        WeakScope(Weak::clone(&self.0))
    }
}

impl<T> fmt::Debug for WeakScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakScope")
    }
}

/// A single scope: local bindings plus the parent link.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: Bindings,
    /// Absent for the global scope.
    parent: Option<WeakScope<Scope>>,
}

impl Scope {
    /// Create an empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a scope from existing bindings, linked to `parent`.
    pub fn with_parent(bindings: Bindings, parent: &LocalScope<Scope>) -> Self {
        Scope {
            bindings,
            parent: Some(parent.downgrade()),
        }
    }

    #[inline]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// The parent scope, if there is one and it is still alive.
    #[inline]
    pub fn parent(&self) -> Option<LocalScope<Scope>> {
        self.parent.as_ref().and_then(WeakScope::upgrade)
    }
}

/// Handle to one scope in the chain.
///
/// Cloning the handle shares the scope; use [`Environment::copy_env`] for
/// an independent copy of the bindings.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create an empty global scope.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Create a call frame holding `bindings`, linked to `parent`.
    ///
    /// The frame does not keep `parent` alive; it must be dropped before
    /// the caller's scope is.
    pub fn frame(bindings: Bindings, parent: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(bindings, &parent.scope)),
        }
    }

    /// Whether this is the root of its chain.
    pub fn is_global(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    /// The parent environment, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent().map(|scope| Environment { scope })
    }

    /// Look `name` up here, then along the parent chain.
    ///
    /// Returns an owned copy; the stored value is never aliased.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut current = self.scope.clone();
        loop {
            let next = {
                let scope = current.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent()?
            };
            current = next;
        }
    }

    /// Like [`lookup`](Self::lookup), but a miss is an `Unbound Symbol`
    /// error value.
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name)
            .unwrap_or_else(|| errors::unbound_symbol(name))
    }

    /// Bind `name` in this scope only, replacing any local binding.
    pub fn put(&self, name: &str, value: Value) {
        self.scope.borrow_mut().bindings.put(name, value);
    }

    /// Bind `name` in the global scope of this chain.
    pub fn def(&self, name: &str, value: Value) {
        self.global().put(name, value);
    }

    /// The root of this chain.
    pub fn global(&self) -> Environment {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Deep copy of this scope's bindings. The copy shares the same parent.
    #[must_use]
    pub fn copy_env(&self) -> Environment {
        let copy = self.scope.borrow().clone();
        Environment {
            scope: LocalScope::new(copy),
        }
    }

    /// Snapshot of the local bindings in definition order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.scope
            .borrow()
            .bindings
            .iter()
            .map(|(name, value)| (name.to_owned(), value.clone()))
            .collect()
    }

    /// Number of local bindings.
    pub fn len(&self) -> usize {
        self.scope.borrow().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scope.borrow().bindings.is_empty()
    }

    /// Whether both handles refer to the same scope.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
