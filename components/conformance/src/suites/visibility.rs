//! Parent and child relationships: what a child instance can and cannot
//! reach of its parent.

use super::fixtures::{declare_mongrel, inherit};
use crate::assert;
use crate::case::{CaseResult, ConformanceCase, NegativeExpectation};
use core_types::{ErrorKind, Value};
use object_model::Realm;

pub(crate) const SUITE: &str = "visibility";

/// `function Dog() { this.sound = "Woof"; var makeNoise = function() {...}; }`
fn declare_noisy_dog(realm: &mut Realm) -> Value {
    let dog = realm.create_function("Dog", |realm, this, _| {
        let locals = realm.global_scope().child();
        realm.set(&this, "sound", Value::string("Woof"))?;
        let make_noise = realm.create_method("makeNoise", |_, _, _| Ok(Value::string("woof, woof")));
        locals.declare("makeNoise", Value::Object(make_noise));
        Ok(Value::Undefined)
    });
    let dog = Value::Object(dog);
    realm.declare_global("Dog", dog.clone());
    dog
}

fn public_members_reachable(realm: &mut Realm) -> CaseResult {
    let dog = declare_noisy_dog(realm);
    let mongrel = declare_mongrel(realm);
    let template = realm.construct(&dog, &[])?;
    inherit(realm, &mongrel, template, true)?;

    let jess = realm.construct(&mongrel, &[])?;
    let sound = realm.get(&jess, "sound")?;
    assert::same_value(&sound, &Value::string("Woof"), "jess.sound")
}

fn private_members_unreachable(realm: &mut Realm) -> CaseResult {
    let dog = declare_noisy_dog(realm);
    // function Mongrel() { this.run = function() { makeNoise(); }; }
    let mongrel = realm.create_function("Mongrel", |realm, this, _| {
        let locals = realm.global_scope().child();
        let run = realm.create_method("run", move |realm, _, _| {
            let make_noise = locals.get("makeNoise")?;
            realm.invoke_named("makeNoise", &make_noise, object_model::InvocationMode::Call, &[])
        });
        realm.set(&this, "run", Value::Object(run))?;
        Ok(Value::Undefined)
    });
    let mongrel = Value::Object(mongrel);
    let template = realm.construct(&dog, &[])?;
    inherit(realm, &mongrel, template, true)?;

    let jess = realm.construct(&mongrel, &[])?;
    realm.call_method(&jess, "run", &[])?;
    Ok(())
}

fn parent_locals_not_fields(realm: &mut Realm) -> CaseResult {
    let dog = declare_noisy_dog(realm);
    let mongrel = declare_mongrel(realm);
    let template = realm.construct(&dog, &[])?;
    inherit(realm, &mongrel, template, true)?;

    let jess = realm.construct(&mongrel, &[])?;
    let noise = realm.get(&jess, "makeNoise")?;
    assert::undefined(&noise, "jess.makeNoise")
}

/// Cases for the visibility suite
pub fn cases() -> Vec<ConformanceCase> {
    vec![
        ConformanceCase::new(SUITE, "child reaches public parent fields", public_members_reachable),
        ConformanceCase::new(SUITE, "child cannot reach private parent helpers", private_members_unreachable)
            .describe("the helper lives in the parent body's scope, not in the child's")
            .expect_error(NegativeExpectation::exact(
                ErrorKind::ReferenceError,
                "makeNoise is not defined",
            )),
        ConformanceCase::new(SUITE, "private parent helpers are not inherited fields", parent_locals_not_fields),
    ]
}
