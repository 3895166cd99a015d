//! Construction-mode resolution.
//!
//! Every invocation goes through [`Realm::invoke`] with an explicit
//! [`InvocationMode`] that decides what the body sees as its receiver and
//! what the caller gets back.

use crate::realm::Realm;
use core_types::{JsError, JsResult, ObjectId, Value};
use tracing::trace;

/// How a callable is being invoked
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationMode {
    /// `new f()`: fresh receiver linked to `f.prototype`
    Construct,
    /// `f()`: receiver is the global object
    Call,
    /// `obj.f()`: receiver is the given value
    Method(Value),
}

impl Realm {
    /// Invoke `callee` in the given mode.
    ///
    /// Errors name the callee by its function name, or by its string form
    /// for values that are not functions.
    pub fn invoke(&mut self, callee: &Value, mode: InvocationMode, args: &[Value]) -> JsResult<Value> {
        let name = self.describe(callee);
        self.invoke_named(&name, callee, mode, args)
    }

    /// Invoke `callee`, reporting failures under `name`
    pub fn invoke_named(
        &mut self,
        name: &str,
        callee: &Value,
        mode: InvocationMode,
        args: &[Value],
    ) -> JsResult<Value> {
        let Some(callable) = self.callable(callee).cloned() else {
            return Err(match mode {
                InvocationMode::Construct => JsError::not_a_constructor(name),
                _ => JsError::not_a_function(name),
            });
        };

        match mode {
            InvocationMode::Construct => {
                if !callable.constructible {
                    return Err(JsError::not_a_constructor(name));
                }
                let instance = self.allocate_instance(callee);
                trace!(name, instance = %instance, "construct");
                let result = (callable.body)(self, Value::Object(instance), args)?;
                // An explicitly returned record replaces the fresh receiver
                if result.is_object() {
                    Ok(result)
                } else {
                    Ok(Value::Object(instance))
                }
            }
            InvocationMode::Call => {
                trace!(name, "call");
                let receiver = Value::Object(self.global());
                (callable.body)(self, receiver, args)
            }
            InvocationMode::Method(receiver) => {
                trace!(name, receiver = %receiver, "method call");
                (callable.body)(self, receiver, args)
            }
        }
    }

    /// Allocate the receiver for construction mode.
    ///
    /// The link is whatever `callee.prototype` holds right now; later
    /// reassignment of that field does not affect this instance.
    fn allocate_instance(&mut self, callee: &Value) -> ObjectId {
        let template = match self.get(callee, "prototype") {
            Ok(Value::Object(template)) => template,
            _ => self.intrinsics().object_prototype,
        };
        self.create_object_with_proto(Some(template))
    }

    /// `new callee(...args)`
    pub fn construct(&mut self, callee: &Value, args: &[Value]) -> JsResult<Value> {
        self.invoke(callee, InvocationMode::Construct, args)
    }

    /// `callee(...args)` with the global object as receiver
    pub fn call(&mut self, callee: &Value, args: &[Value]) -> JsResult<Value> {
        self.invoke(callee, InvocationMode::Call, args)
    }

    /// `receiver[name](...args)`.
    ///
    /// The method is found through the receiver's chain; a missing or
    /// non-callable field is a `TypeError` naming the field.
    pub fn call_method(&mut self, receiver: &Value, name: &str, args: &[Value]) -> JsResult<Value> {
        let method = self.get(receiver, name)?;
        self.invoke_named(name, &method, InvocationMode::Method(receiver.clone()), args)
    }

    /// `new <binding>(...args)` where the callee is a global binding.
    ///
    /// Undeclared bindings are a `ReferenceError`; declared bindings that
    /// are not constructors fail with `"<binding> is not a constructor"`.
    pub fn construct_binding(&mut self, binding: &str, args: &[Value]) -> JsResult<Value> {
        let callee = self.resolve_binding(binding)?;
        self.invoke_named(binding, &callee, InvocationMode::Construct, args)
    }

    /// `<binding>(...args)` where the callee is a global binding
    pub fn call_binding(&mut self, binding: &str, args: &[Value]) -> JsResult<Value> {
        let callee = self.resolve_binding(binding)?;
        self.invoke_named(binding, &callee, InvocationMode::Call, args)
    }
}
