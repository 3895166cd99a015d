//! Prototype chain resolution.
//!
//! Reads walk the delegation links; writes always land on the receiver.

use crate::realm::Realm;
use core_types::{JsError, JsResult, ObjectId, Value};
use tracing::debug;

/// Iterator over a record and every record it delegates to, nearest first
pub struct PrototypeChain<'a> {
    realm: &'a Realm,
    next: Option<ObjectId>,
}

impl<'a> Iterator for PrototypeChain<'a> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        let current = self.next?;
        self.next = self.realm.record(current).prototype();
        Some(current)
    }
}

impl Realm {
    /// Walk `id` and its delegation targets, ending at the sentinel
    pub fn chain(&self, id: ObjectId) -> PrototypeChain<'_> {
        PrototypeChain {
            realm: self,
            next: Some(id),
        }
    }

    /// Find the record in the chain of `id` that owns `field`
    pub fn find_owner(&self, id: ObjectId, field: &str) -> Option<ObjectId> {
        self.chain(id).find(|link| self.record(*link).has_own(field))
    }

    /// Read a field: own fields first, then each delegation target in turn.
    ///
    /// Absent fields read as `Value::Undefined`.
    pub fn lookup(&self, id: ObjectId, field: &str) -> Value {
        self.chain(id)
            .find_map(|link| self.record(link).own(field))
            .unwrap_or(Value::Undefined)
    }

    /// Read a field from an arbitrary value.
    ///
    /// Reading from `undefined` or `null` is a `TypeError`; other primitives
    /// have no fields.
    pub fn get(&self, base: &Value, field: &str) -> JsResult<Value> {
        match base {
            Value::Object(id) => Ok(self.lookup(*id, field)),
            Value::Undefined | Value::Null => Err(JsError::type_error(format!(
                "Cannot read properties of {} (reading '{}')",
                base, field
            ))),
            _ => Ok(Value::Undefined),
        }
    }

    /// Write an own field on `id`, shadowing anything further up the chain.
    ///
    /// The delegation target is never written to.
    pub fn assign(&mut self, id: ObjectId, field: &str, value: Value) {
        if field == "prototype" && self.record(id).callable().is_some() {
            debug!(function = %id, template = %value, "replacing construction template");
        }
        self.record_mut(id).fields.insert(field.to_string(), value);
    }

    /// Write a field on an arbitrary value; `TypeError` for non-records
    pub fn set(&mut self, base: &Value, field: &str, value: Value) -> JsResult<()> {
        match base {
            Value::Object(id) => {
                self.assign(*id, field, value);
                Ok(())
            }
            _ => Err(JsError::type_error(format!(
                "Cannot set properties of {} (setting '{}')",
                base, field
            ))),
        }
    }

    /// Returns true if `field` is an own field of `id`
    pub fn has_own(&self, id: ObjectId, field: &str) -> bool {
        self.record(id).has_own(field)
    }

    /// Returns true if `field` is reachable from `id`
    pub fn has_field(&self, id: ObjectId, field: &str) -> bool {
        self.find_owner(id, field).is_some()
    }

    /// Names of the own (stored) fields of `id` in insertion order
    pub fn own_keys(&self, id: ObjectId) -> Vec<String> {
        self.record(id).fields.keys().cloned().collect()
    }

    /// The delegation target of `id`
    pub fn get_prototype_of(&self, id: ObjectId) -> Option<ObjectId> {
        self.record(id).prototype()
    }

    /// Returns true if `proto` appears strictly above `id` in its chain
    pub fn is_prototype_of(&self, proto: ObjectId, id: ObjectId) -> bool {
        self.chain(id).skip(1).any(|link| link == proto)
    }
}
