//! Contract tests for the object model API
//!
//! These tests pin the observable behaviour callers rely on: which
//! operations fail, with which kind, and with which message.

use core_types::{ErrorKind, Value};
use object_model::{InvocationMode, Realm, RecordKind};

/// Contract: lookup of an absent field is `Undefined`, never an error
#[test]
fn test_lookup_absent_contract() {
    let mut realm = Realm::new();
    let record = realm.create_object();
    assert_eq!(realm.lookup(record, "privateFoo"), Value::Undefined);
}

/// Contract: construction of a non-callable names the binding
#[test]
fn test_not_a_constructor_contract() {
    let mut realm = Realm::new();
    let record = realm.create_record([("foo", Value::string("Hello World"))]);
    realm.declare_global("returnMe", Value::Object(record));
    let err = realm.construct_binding("returnMe", &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert_eq!(err.message, "returnMe is not a constructor");
}

/// Contract: construction of a primitive fails with TypeError
#[test]
fn test_construct_primitive_contract() {
    let mut realm = Realm::new();
    let err = realm
        .invoke(&Value::string("x"), InvocationMode::Construct, &[])
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert_eq!(err.message, "x is not a constructor");
}

/// Contract: the plain-call receiver is the realm's global object
#[test]
fn test_plain_call_receiver_contract() {
    let mut realm = Realm::new();
    let f = realm.create_function("f", |_, this, _| Ok(this));
    let this = realm.invoke(&Value::Object(f), InvocationMode::Call, &[]).unwrap();
    assert_eq!(this, Value::Object(realm.global()));
}

/// Contract: a plain call without explicit return yields Undefined
#[test]
fn test_plain_call_return_contract() {
    let mut realm = Realm::new();
    let f = realm.create_function("f", |_, _, _| Ok(Value::Undefined));
    assert_eq!(realm.call(&Value::Object(f), &[]).unwrap(), Value::Undefined);
}

/// Contract: assign writes own fields only
#[test]
fn test_assign_contract() {
    let mut realm = Realm::new();
    let parent = realm.create_record([("sound", Value::string("Woof"))]);
    let child = realm.create_object_with_proto(Some(parent));
    realm.assign(child, "sound", Value::string("grrr"));
    assert!(realm.has_own(child, "sound"));
    assert_eq!(realm.record(parent).fields["sound"], Value::string("Woof"));
}

/// Contract: the root of every chain has no delegation target
#[test]
fn test_sentinel_contract() {
    let mut realm = Realm::new();
    let record = realm.create_object();
    let last = realm.chain(record).last().unwrap();
    assert_eq!(last, realm.intrinsics().object_prototype);
    assert_eq!(realm.get_prototype_of(last), None);
}

/// Contract: sequences are records with a Sequence payload
#[test]
fn test_sequence_kind_contract() {
    let mut realm = Realm::new();
    let bones = realm.create_sequence(vec![Value::string("chicken bone")]);
    assert!(matches!(realm.record(bones).kind, RecordKind::Sequence(_)));
    assert_eq!(realm.sequence_elements(bones).map(<[Value]>::len), Some(1));
}

/// Contract: referencing an undeclared binding is a ReferenceError
#[test]
fn test_reference_error_contract() {
    let realm = Realm::new();
    let err = realm.resolve_binding("makeNoise").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ReferenceError);
    assert_eq!(err.message, "makeNoise is not defined");
}
