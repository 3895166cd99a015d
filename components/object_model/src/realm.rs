//! The realm: record arena, intrinsic prototypes, global object and global
//! bindings.
//!
//! Records are allocated into a `Vec` and referenced by [`ObjectId`]
//! handles. Nothing is ever freed; a realm lives for one scenario.

use crate::record::{CallableData, NativeFn, RecordData, RecordKind};
use crate::scope::Scope;
use core_types::{JsError, JsResult, ObjectId, Value};
use std::rc::Rc;
use tracing::trace;

/// Handles to the built-in prototype records every realm starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intrinsics {
    /// Root of every chain; has no delegation target
    pub object_prototype: ObjectId,
    /// Delegation target of every callable
    pub function_prototype: ObjectId,
    /// Delegation target of every sequence
    pub sequence_prototype: ObjectId,
}

/// An isolated object world.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use object_model::Realm;
///
/// let mut realm = Realm::new();
/// let record = realm.create_record([("foo", Value::string("Hello World"))]);
///
/// assert_eq!(realm.lookup(record, "foo"), Value::string("Hello World"));
/// assert_eq!(realm.lookup(record, "privateFoo"), Value::Undefined);
/// ```
#[derive(Debug)]
pub struct Realm {
    records: Vec<RecordData>,
    intrinsics: Intrinsics,
    global: ObjectId,
    globals: Scope,
}

impl Realm {
    /// Create a realm with its intrinsics and an empty global object
    pub fn new() -> Self {
        let mut realm = Realm {
            records: Vec::new(),
            // Patched below once the records exist
            intrinsics: Intrinsics {
                object_prototype: ObjectId(0),
                function_prototype: ObjectId(0),
                sequence_prototype: ObjectId(0),
            },
            global: ObjectId(0),
            globals: Scope::new(),
        };

        let object_prototype = realm.alloc(RecordData::new(None, RecordKind::Ordinary));
        let function_prototype =
            realm.alloc(RecordData::new(Some(object_prototype), RecordKind::Ordinary));
        let sequence_prototype =
            realm.alloc(RecordData::new(Some(object_prototype), RecordKind::Ordinary));
        realm.intrinsics = Intrinsics {
            object_prototype,
            function_prototype,
            sequence_prototype,
        };
        realm.global = realm.create_object();

        crate::intrinsics::install(&mut realm);
        realm
    }

    /// Built-in prototypes of this realm
    pub fn intrinsics(&self) -> Intrinsics {
        self.intrinsics
    }

    /// The ambient receiver used by plain-call mode
    pub fn global(&self) -> ObjectId {
        self.global
    }

    /// The outermost lexical scope
    pub fn global_scope(&self) -> &Scope {
        &self.globals
    }

    /// Number of records allocated so far
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn alloc(&mut self, record: RecordData) -> ObjectId {
        let id = ObjectId(self.records.len());
        self.records.push(record);
        id
    }

    /// Borrow a record.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this realm.
    pub fn record(&self, id: ObjectId) -> &RecordData {
        &self.records[id.index()]
    }

    pub(crate) fn record_mut(&mut self, id: ObjectId) -> &mut RecordData {
        &mut self.records[id.index()]
    }

    /// Create an empty record delegating to the root object prototype
    pub fn create_object(&mut self) -> ObjectId {
        let proto = self.intrinsics.object_prototype;
        self.create_object_with_proto(Some(proto))
    }

    /// Create an empty record with an explicit delegation target
    pub fn create_object_with_proto(&mut self, proto: Option<ObjectId>) -> ObjectId {
        self.alloc(RecordData::new(proto, RecordKind::Ordinary))
    }

    /// Create a record literal from `(field, value)` pairs
    pub fn create_record<'a, I>(&mut self, fields: I) -> ObjectId
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let id = self.create_object();
        let record = self.record_mut(id);
        for (name, value) in fields {
            record.fields.insert(name.to_string(), value);
        }
        id
    }

    /// Create a sequence holding `elements`
    pub fn create_sequence(&mut self, elements: Vec<Value>) -> ObjectId {
        let proto = self.intrinsics.sequence_prototype;
        self.alloc(RecordData::new(Some(proto), RecordKind::Sequence(elements)))
    }

    /// Create a constructible function.
    ///
    /// The function gets a fresh template in its `prototype` field, and the
    /// template's `constructor` field points back at the function.
    pub fn create_function<F>(&mut self, name: &str, body: F) -> ObjectId
    where
        F: Fn(&mut Realm, Value, &[Value]) -> JsResult<Value> + 'static,
    {
        let function = self.alloc_callable(name, true, Rc::new(body));
        let template = self.create_object();
        self.record_mut(template)
            .fields
            .insert("constructor".to_string(), Value::Object(function));
        self.record_mut(function)
            .fields
            .insert("prototype".to_string(), Value::Object(template));
        trace!(name, function = %function, template = %template, "created constructible function");
        function
    }

    /// Create a callable that rejects construction mode.
    ///
    /// Such callables have no `prototype` field.
    pub fn create_method<F>(&mut self, name: &str, body: F) -> ObjectId
    where
        F: Fn(&mut Realm, Value, &[Value]) -> JsResult<Value> + 'static,
    {
        self.alloc_callable(name, false, Rc::new(body))
    }

    fn alloc_callable(&mut self, name: &str, constructible: bool, body: Rc<NativeFn>) -> ObjectId {
        let proto = self.intrinsics.function_prototype;
        self.alloc(RecordData::new(
            Some(proto),
            RecordKind::Callable(CallableData {
                name: name.to_string(),
                constructible,
                body,
            }),
        ))
    }

    /// Returns the callable payload if `value` references a function
    pub fn callable(&self, value: &Value) -> Option<&CallableData> {
        value
            .as_object()
            .and_then(|id| self.records.get(id.index()))
            .and_then(RecordData::callable)
    }

    /// Returns true if `value` references a function
    pub fn is_callable(&self, value: &Value) -> bool {
        self.callable(value).is_some()
    }

    /// Returns true if construction mode may be applied to `value`
    pub fn is_constructor(&self, value: &Value) -> bool {
        self.callable(value).map(|c| c.constructible).unwrap_or(false)
    }

    /// The `typeof` tag, distinguishing functions from other records
    pub fn type_of(&self, value: &Value) -> &'static str {
        if self.is_callable(value) {
            "function"
        } else {
            value.primitive_type_of()
        }
    }

    /// Append values to a sequence, returning its new length.
    ///
    /// Fails with `TypeError` if `id` is not a sequence.
    pub fn sequence_push(&mut self, id: ObjectId, values: &[Value]) -> JsResult<usize> {
        match &mut self.record_mut(id).kind {
            RecordKind::Sequence(elements) => {
                elements.extend_from_slice(values);
                Ok(elements.len())
            }
            _ => Err(JsError::type_error(format!("{} is not a sequence", id))),
        }
    }

    /// Elements of a sequence, or `None` for other records
    pub fn sequence_elements(&self, id: ObjectId) -> Option<&[Value]> {
        self.record(id).elements()
    }

    /// Declare a global binding
    pub fn declare_global(&mut self, name: &str, value: Value) {
        self.globals.declare(name, value);
    }

    /// Resolve a global binding; `ReferenceError` if undeclared
    pub fn resolve_binding(&self, name: &str) -> JsResult<Value> {
        self.globals.get(name)
    }

    /// Reassign a declared global binding
    pub fn assign_binding(&mut self, name: &str, value: Value) -> JsResult<()> {
        self.globals.set(name, value)
    }

    /// Diagnostic name of a value: a function's own name, otherwise its
    /// string form
    pub fn describe(&self, value: &Value) -> String {
        match self.callable(value) {
            Some(callable) if !callable.name.is_empty() => callable.name.clone(),
            _ => value.to_string(),
        }
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
