//! Unit tests for object model components

use core_types::{ErrorKind, Value};
use object_model::{InvocationMode, Realm, Scope};

fn dog_with_bones(realm: &mut Realm) -> Value {
    let dog = realm.create_function("Dog", |realm, this, _| {
        realm.set(&this, "sound", Value::string("Woof"))?;
        realm.set(&this, "type", Value::string("Mongrel"))?;
        let bones = realm.create_sequence(Vec::new());
        realm.set(&this, "bones", Value::Object(bones))?;
        Ok(Value::Undefined)
    });
    Value::Object(dog)
}

fn mongrel_inheriting(realm: &mut Realm, parent: &Value) -> Value {
    let mongrel = Value::Object(realm.create_function("Mongrel", |_, _, _| Ok(Value::Undefined)));
    let template = realm.construct(parent, &[]).unwrap();
    realm.set(&mongrel, "prototype", template.clone()).unwrap();
    realm.set(&template, "constructor", mongrel.clone()).unwrap();
    mongrel
}

// ============================================================================
// Construction mode
// ============================================================================

#[test]
fn test_constructed_instance_is_object() {
    let mut realm = Realm::new();
    let dog = dog_with_bones(&mut realm);
    let boris = realm.construct(&dog, &[]).unwrap();
    assert_eq!(realm.type_of(&boris), "object");
    assert_eq!(realm.type_of(&dog), "function");
}

#[test]
fn test_plain_call_writes_onto_global() {
    let mut realm = Realm::new();
    let new_me_up = realm.create_function("newMeUpBaby", |realm, this, _| {
        realm.set(&this, "foo", Value::string("Hello World"))?;
        realm.set(&this, "bar", this.clone())?;
        Ok(Value::Undefined)
    });
    let result = realm.call(&Value::Object(new_me_up), &[]).unwrap();
    assert_eq!(result, Value::Undefined);

    let global = realm.global();
    assert_eq!(realm.lookup(global, "foo"), Value::string("Hello World"));
    assert_eq!(realm.lookup(global, "bar"), Value::Object(global));
}

#[test]
fn test_self_reference_is_instance() {
    let mut realm = Realm::new();
    let new_me_up = realm.create_function("newMeUpBaby", |realm, this, _| {
        realm.set(&this, "bar", this.clone())?;
        Ok(Value::Undefined)
    });
    let instance = realm.construct(&Value::Object(new_me_up), &[]).unwrap();
    assert!(realm.get(&instance, "bar").unwrap().same_value(&instance));
}

#[test]
fn test_body_error_propagates_from_construct() {
    let mut realm = Realm::new();
    let scope = Scope::new();
    let broken = realm.create_function("Broken", move |_, _, _| scope.get("missing"));
    let err = realm.construct(&Value::Object(broken), &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ReferenceError);
    assert_eq!(err.message, "missing is not defined");
}

#[test]
fn test_method_mode_binds_receiver() {
    let mut realm = Realm::new();
    let who = realm.create_method("who", |_, this, _| Ok(this));
    let record = Value::Object(realm.create_object());
    let result = realm
        .invoke(&Value::Object(who), InvocationMode::Method(record.clone()), &[])
        .unwrap();
    assert_eq!(result, record);
}

#[test]
fn test_constructing_a_plain_record_binding() {
    let mut realm = Realm::new();
    let record = realm.create_record([("foo", Value::string("Hello World"))]);
    realm.declare_global("youngFreeAndSingle", Value::Object(record));
    let err = realm.construct_binding("youngFreeAndSingle", &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert_eq!(err.message, "youngFreeAndSingle is not a constructor");
}

#[test]
fn test_template_that_is_not_an_object_falls_back_to_root() {
    let mut realm = Realm::new();
    let f = realm.create_function("f", |_, _, _| Ok(Value::Undefined));
    realm.assign(f, "prototype", Value::Null);
    let instance = realm.construct(&Value::Object(f), &[]).unwrap();
    assert_eq!(
        realm.get_prototype_of(instance.as_object().unwrap()),
        Some(realm.intrinsics().object_prototype)
    );
}

// ============================================================================
// Prototype chain
// ============================================================================

#[test]
fn test_template_replacement_is_not_retroactive() {
    let mut realm = Realm::new();
    let dog = dog_with_bones(&mut realm);
    let mongrel = realm.create_function("Mongrel", |_, _, _| Ok(Value::Undefined));
    let early = realm.construct(&Value::Object(mongrel), &[]).unwrap();

    let template = realm.construct(&dog, &[]).unwrap();
    realm.assign(mongrel, "prototype", template);
    let late = realm.construct(&Value::Object(mongrel), &[]).unwrap();

    assert_eq!(realm.get(&early, "sound").unwrap(), Value::Undefined);
    assert_eq!(realm.get(&late, "sound").unwrap(), Value::string("Woof"));
}

#[test]
fn test_shared_sequence_then_divergence() {
    let mut realm = Realm::new();
    let dog = dog_with_bones(&mut realm);
    let mongrel = mongrel_inheriting(&mut realm, &dog);

    let max = realm.construct(&mongrel, &[]).unwrap();
    let charlie = realm.construct(&mongrel, &[]).unwrap();
    let max_bones = realm.get(&max, "bones").unwrap();
    realm
        .call_method(&max_bones, "push", &[Value::string("chicken bone")])
        .unwrap();
    let charlie_bones = realm.get(&charlie, "bones").unwrap();
    assert!(max_bones.same_value(&charlie_bones));
    assert_eq!(realm.get(&charlie_bones, "length").unwrap(), Value::Number(1.0));

    let fresh = Value::Object(realm.create_sequence(Vec::new()));
    realm.set(&charlie, "bones", fresh.clone()).unwrap();
    realm
        .call_method(&fresh, "push", &[Value::string("pork bone")])
        .unwrap();

    assert_eq!(realm.get(&max_bones, "length").unwrap(), Value::Number(1.0));
    assert_eq!(realm.get(&fresh, "length").unwrap(), Value::Number(1.0));
    assert!(!realm.get(&charlie, "bones").unwrap().same_value(&max_bones));
}

#[test]
fn test_constructor_field_without_reassignment() {
    let mut realm = Realm::new();
    let dog = dog_with_bones(&mut realm);
    let mongrel = realm.create_function("Mongrel", |_, _, _| Ok(Value::Undefined));
    let template = realm.construct(&dog, &[]).unwrap();
    realm.assign(mongrel, "prototype", template);

    let jack = realm.construct(&Value::Object(mongrel), &[]).unwrap();
    assert_eq!(realm.get(&jack, "constructor").unwrap(), dog);
}

#[test]
fn test_own_keys_insertion_order() {
    let mut realm = Realm::new();
    let dog = dog_with_bones(&mut realm);
    let boris = realm.construct(&dog, &[]).unwrap().as_object().unwrap();
    assert_eq!(realm.own_keys(boris), vec!["sound", "type", "bones"]);
}

// ============================================================================
// Scopes
// ============================================================================

#[test]
fn test_privileged_closures_share_private_state() {
    let mut realm = Realm::new();
    let scope = Scope::new();
    scope.declare("privateFoo", Value::string("You can't see me"));

    let writer_scope = scope.clone();
    let foo = realm.create_method("foo", move |_, _, _| {
        let current = writer_scope.get("privateFoo")?;
        writer_scope.set("privateFoo", Value::string(format!("{} ... but now you can", current)))?;
        Ok(Value::Undefined)
    });
    let reader_scope = scope.clone();
    let bar = realm.create_method("bar", move |_, _, _| reader_scope.get("privateFoo"));
    let record = Value::Object(realm.create_record([
        ("foo", Value::Object(foo)),
        ("bar", Value::Object(bar)),
    ]));

    realm.call_method(&record, "foo", &[]).unwrap();
    assert_eq!(
        realm.call_method(&record, "bar", &[]).unwrap(),
        Value::string("You can't see me ... but now you can")
    );
    assert_eq!(realm.get(&record, "privateFoo").unwrap(), Value::Undefined);
}

#[test]
fn test_global_bindings_round_trip() {
    let mut realm = Realm::new();
    realm.declare_global("dogHasBeenInstantiated", Value::Boolean(false));
    realm
        .assign_binding("dogHasBeenInstantiated", Value::Boolean(true))
        .unwrap();
    assert_eq!(
        realm.resolve_binding("dogHasBeenInstantiated").unwrap(),
        Value::Boolean(true)
    );
    assert!(realm.assign_binding("undeclared", Value::Null).is_err());
}

#[test]
fn test_child_of_global_scope_sees_globals() {
    let mut realm = Realm::new();
    realm.declare_global("window", Value::Object(realm.global()));
    let local = realm.global_scope().child();
    assert_eq!(local.get("window").unwrap(), Value::Object(realm.global()));
}
