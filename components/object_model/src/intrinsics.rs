//! Built-in methods installed on the intrinsic prototypes.

use crate::realm::Realm;
use core_types::{JsError, Value};

pub(crate) fn install(realm: &mut Realm) {
    let intrinsics = realm.intrinsics();

    let has_own_property = realm.create_method("hasOwnProperty", |realm, this, args| {
        let field = args.first().cloned().unwrap_or(Value::Undefined).to_string();
        Ok(match this {
            Value::Object(id) => Value::Boolean(realm.has_own(id, &field)),
            _ => Value::Boolean(false),
        })
    });
    realm.assign(
        intrinsics.object_prototype,
        "hasOwnProperty",
        Value::Object(has_own_property),
    );

    let push = realm.create_method("push", |realm, this, args| {
        let id = this
            .as_object()
            .ok_or_else(|| JsError::type_error("push called on non-object"))?;
        let len = realm.sequence_push(id, args)?;
        Ok(Value::Number(len as f64))
    });
    realm.assign(intrinsics.sequence_prototype, "push", Value::Object(push));
}
