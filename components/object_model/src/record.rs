//! Record storage.
//!
//! A record is a field map plus a delegation link fixed at creation time.
//! Sequences and callables are records too; they carry extra payload in
//! [`RecordKind`].

use crate::realm::Realm;
use core_types::{JsResult, ObjectId, Value};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Native body of a callable.
///
/// Receives the realm, the bound receiver (`this`) and the arguments.
/// The returned value is the body's explicit return; `Value::Undefined`
/// stands for "nothing returned".
pub type NativeFn = dyn Fn(&mut Realm, Value, &[Value]) -> JsResult<Value>;

/// Payload of a callable record
#[derive(Clone)]
pub struct CallableData {
    /// Name used in diagnostics
    pub name: String,
    /// Whether construction mode may be applied
    pub constructible: bool,
    /// The function body
    pub body: Rc<NativeFn>,
}

impl fmt::Debug for CallableData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableData")
            .field("name", &self.name)
            .field("constructible", &self.constructible)
            .finish_non_exhaustive()
    }
}

/// What a record is, beyond its fields
#[derive(Debug, Clone)]
pub enum RecordKind {
    /// Plain record
    Ordinary,
    /// Ordered list of values (reference-typed container)
    Sequence(Vec<Value>),
    /// Function record
    Callable(CallableData),
}

/// A record in the realm's arena
#[derive(Debug, Clone)]
pub struct RecordData {
    /// Own fields in insertion order
    pub fields: IndexMap<String, Value>,
    /// Delegation target; `None` ends the chain
    prototype: Option<ObjectId>,
    /// Kind-specific payload
    pub kind: RecordKind,
}

impl RecordData {
    /// Create a record with the given delegation target and kind
    pub fn new(prototype: Option<ObjectId>, kind: RecordKind) -> Self {
        RecordData {
            fields: IndexMap::new(),
            prototype,
            kind,
        }
    }

    /// Delegation target captured at creation. Links never change once a
    /// record exists.
    pub fn prototype(&self) -> Option<ObjectId> {
        self.prototype
    }

    /// Own field value, including virtual fields of sequences
    pub fn own(&self, field: &str) -> Option<Value> {
        if let Some(value) = self.fields.get(field) {
            return Some(value.clone());
        }
        match &self.kind {
            RecordKind::Sequence(elements) => {
                if field == "length" {
                    return Some(Value::Number(elements.len() as f64));
                }
                // Only canonical spellings index: "+0" and "00" are plain fields
                field
                    .parse::<usize>()
                    .ok()
                    .filter(|index| index.to_string() == field)
                    .and_then(|index| elements.get(index).cloned())
            }
            _ => None,
        }
    }

    /// Returns true if the field is an own (possibly virtual) field
    pub fn has_own(&self, field: &str) -> bool {
        self.own(field).is_some()
    }

    /// Callable payload, if this record is a function
    pub fn callable(&self) -> Option<&CallableData> {
        match &self.kind {
            RecordKind::Callable(data) => Some(data),
            _ => None,
        }
    }

    /// Sequence elements, if this record is a sequence
    pub fn elements(&self) -> Option<&[Value]> {
        match &self.kind {
            RecordKind::Sequence(elements) => Some(elements),
            _ => None,
        }
    }
}
