//! Lexical scopes for closure-captured state.
//!
//! A [`Scope`] holds bindings that are not attached to any record. The only
//! way to reach them is through a `Scope` handle, so a factory that keeps
//! its handle inside the closures it installs on a record gives those
//! closures (and nobody else) access to the private state.

use core_types::{JsError, JsResult, Value};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ScopeData {
    bindings: RefCell<IndexMap<String, Value>>,
    parent: Option<Scope>,
}

/// A shared handle to a lexical environment.
///
/// Cloning the handle shares the environment, the way every closure created
/// in the same function body shares its locals.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use object_model::Scope;
///
/// let outer = Scope::new();
/// outer.declare("privateFoo", Value::string("You can't see me"));
///
/// let inner = outer.child();
/// assert_eq!(inner.get("privateFoo").unwrap(), Value::string("You can't see me"));
/// assert!(inner.get("makeNoise").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scope {
    inner: Rc<ScopeData>,
}

impl Scope {
    /// Create a root scope with no parent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a nested scope whose lookups fall back to `self`
    pub fn child(&self) -> Scope {
        Scope {
            inner: Rc::new(ScopeData {
                bindings: RefCell::new(IndexMap::new()),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Declare (or redeclare) a binding in this scope
    pub fn declare(&self, name: &str, value: Value) {
        self.inner
            .bindings
            .borrow_mut()
            .insert(name.to_string(), value);
    }

    /// Resolve an identifier through this scope and its ancestors.
    ///
    /// Fails with `ReferenceError` when no enclosing scope declares it.
    pub fn get(&self, name: &str) -> JsResult<Value> {
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(value) = scope.inner.bindings.borrow().get(name) {
                return Ok(value.clone());
            }
            current = scope.inner.parent.as_ref();
        }
        Err(JsError::not_defined(name))
    }

    /// Assign to the nearest scope that declares `name`.
    ///
    /// Assigning an undeclared identifier is a `ReferenceError`; it never
    /// creates an implicit global.
    pub fn set(&self, name: &str, value: Value) -> JsResult<()> {
        let mut current = Some(self);
        while let Some(scope) = current {
            let mut bindings = scope.inner.bindings.borrow_mut();
            if let Some(slot) = bindings.get_mut(name) {
                *slot = value;
                return Ok(());
            }
            drop(bindings);
            current = scope.inner.parent.as_ref();
        }
        Err(JsError::not_defined(name))
    }

    /// Returns true if `name` resolves in this scope chain
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Names declared directly in this scope
    pub fn local_names(&self) -> Vec<String> {
        self.inner.bindings.borrow().keys().cloned().collect()
    }

    /// Returns true if both handles refer to the same environment
    pub fn ptr_eq(&self, other: &Scope) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
