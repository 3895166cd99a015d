//! Constructors shared by the inheritance-oriented suites.

use core_types::{JsResult, Value};
use object_model::Realm;

/// `function Dog() { this.sound = "Woof"; this.type = "Mongrel"; }`,
/// optionally also `this.bones = [];`
pub(crate) fn declare_dog(realm: &mut Realm, with_bones: bool) -> Value {
    let dog = realm.create_function("Dog", move |realm, this, _| {
        realm.set(&this, "sound", Value::string("Woof"))?;
        realm.set(&this, "type", Value::string("Mongrel"))?;
        if with_bones {
            let bones = realm.create_sequence(Vec::new());
            realm.set(&this, "bones", Value::Object(bones))?;
        }
        Ok(Value::Undefined)
    });
    let dog = Value::Object(dog);
    realm.declare_global("Dog", dog.clone());
    dog
}

/// A `Dog` that also flips the global `dogHasBeenInstantiated` flag
pub(crate) fn declare_tracked_dog(realm: &mut Realm) -> Value {
    realm.declare_global("dogHasBeenInstantiated", Value::Boolean(false));
    let dog = realm.create_function("Dog", |realm, this, _| {
        realm.set(&this, "sound", Value::string("Woof"))?;
        realm.set(&this, "type", Value::string("Mongrel"))?;
        realm.assign_binding("dogHasBeenInstantiated", Value::Boolean(true))?;
        Ok(Value::Undefined)
    });
    let dog = Value::Object(dog);
    realm.declare_global("Dog", dog.clone());
    dog
}

/// `function Mongrel() {}`
pub(crate) fn declare_mongrel(realm: &mut Realm) -> Value {
    let mongrel = Value::Object(realm.create_function("Mongrel", |_, _, _| Ok(Value::Undefined)));
    realm.declare_global("Mongrel", mongrel.clone());
    mongrel
}

/// `child.prototype = template;` and, when `fix_constructor` is set,
/// `child.prototype.constructor = child;`
pub(crate) fn inherit(
    realm: &mut Realm,
    child: &Value,
    template: Value,
    fix_constructor: bool,
) -> JsResult<()> {
    realm.set(child, "prototype", template.clone())?;
    if fix_constructor {
        realm.set(&template, "constructor", child.clone())?;
    }
    Ok(())
}

/// Dog, Mongrel and `Mongrel.prototype = new Dog()` with the constructor
/// fixed up, returning `(Dog, Mongrel)`
pub(crate) fn dog_and_mongrel(realm: &mut Realm, with_bones: bool) -> JsResult<(Value, Value)> {
    let dog = declare_dog(realm, with_bones);
    let mongrel = declare_mongrel(realm);
    let template = realm.construct(&dog, &[])?;
    inherit(realm, &mongrel, template, true)?;
    Ok((dog, mongrel))
}
