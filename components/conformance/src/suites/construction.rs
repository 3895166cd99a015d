//! Three ways to construct an object: a singleton produced by an
//! immediately-invoked factory, a constructor invoked with `new`, and a
//! function that returns a record literal.

use crate::assert;
use crate::case::{CaseResult, ConformanceCase, NegativeExpectation};
use core_types::{ErrorKind, JsResult, Value};
use object_model::Realm;

pub(crate) const SUITE: &str = "construction";

const HELLO: &str = "Hello World";
const HIDDEN: &str = "You can't see me";
const REVEALED: &str = "You can't see me ... but now you can";

/// `return { foo: "Hello World", bar: this }`, with a private local
fn record_factory(realm: &mut Realm, this: Value, _: &[Value]) -> JsResult<Value> {
    let locals = realm.global_scope().child();
    locals.declare("privateFoo", Value::string(HIDDEN));
    let record = realm.create_record([("foo", Value::string(HELLO)), ("bar", this)]);
    Ok(Value::Object(record))
}

/// `return { foo() { privateFoo += ... }, bar() { return privateFoo } }`
fn privileged_factory(realm: &mut Realm, _: Value, _: &[Value]) -> JsResult<Value> {
    let locals = realm.global_scope().child();
    locals.declare("privateFoo", Value::string(HIDDEN));
    let record = realm.create_object();
    install_privileged(realm, &Value::Object(record), &locals)?;
    Ok(Value::Object(record))
}

/// Install `foo`/`bar` closures over `locals` on `target`
fn install_privileged(realm: &mut Realm, target: &Value, locals: &object_model::Scope) -> JsResult<()> {
    let writer = locals.clone();
    let foo = realm.create_method("foo", move |_, _, _| {
        let current = writer.get("privateFoo")?;
        writer.set(
            "privateFoo",
            Value::string(format!("{} ... but now you can", current)),
        )?;
        Ok(Value::Undefined)
    });
    let reader = locals.clone();
    let bar = realm.create_method("bar", move |_, _, _| reader.get("privateFoo"));
    realm.set(target, "foo", Value::Object(foo))?;
    realm.set(target, "bar", Value::Object(bar))?;
    Ok(())
}

/// `var youngFreeAndSingle = (function() { ... })();`
fn singleton(realm: &mut Realm) -> JsResult<Value> {
    let factory = Value::Object(realm.create_function("", record_factory));
    let single = realm.call(&factory, &[])?;
    realm.declare_global("youngFreeAndSingle", single.clone());
    Ok(single)
}

/// `function newMeUpBaby() { this.foo = "Hello World"; this.bar = this; }`
fn new_me_up_baby(realm: &mut Realm) -> Value {
    let ctor = realm.create_function("newMeUpBaby", |realm, this, _| {
        let locals = realm.global_scope().child();
        locals.declare("privateFoo", Value::string(HIDDEN));
        realm.set(&this, "foo", Value::string(HELLO))?;
        realm.set(&this, "bar", this.clone())?;
        Ok(Value::Undefined)
    });
    let ctor = Value::Object(ctor);
    realm.declare_global("newMeUpBaby", ctor.clone());
    ctor
}

/// `var returnMe = function() { return { foo: "Hello World", bar: this }; };`
fn return_me(realm: &mut Realm) -> Value {
    let f = Value::Object(realm.create_function("returnMe", record_factory));
    realm.declare_global("returnMe", f.clone());
    f
}

fn singleton_is_object(realm: &mut Realm) -> CaseResult {
    let single = singleton(realm)?;
    assert::type_of(realm, &single, "object", "youngFreeAndSingle")
}

fn singleton_this_is_global(realm: &mut Realm) -> CaseResult {
    let single = singleton(realm)?;
    let bar = realm.get(&single, "bar")?;
    assert::same_value(&bar, &Value::Object(realm.global()), "youngFreeAndSingle.bar")
}

fn singleton_rejects_new(realm: &mut Realm) -> CaseResult {
    singleton(realm)?;
    realm.construct_binding("youngFreeAndSingle", &[])?;
    Ok(())
}

fn singleton_public_fields(realm: &mut Realm) -> CaseResult {
    let single = singleton(realm)?;
    let foo = realm.get(&single, "foo")?;
    assert::same_value(&foo, &Value::string(HELLO), "youngFreeAndSingle.foo")
}

fn singleton_private_fields_hidden(realm: &mut Realm) -> CaseResult {
    let single = singleton(realm)?;
    let private = realm.get(&single, "privateFoo")?;
    assert::undefined(&private, "youngFreeAndSingle.privateFoo")?;
    assert::throws(
        realm.resolve_binding("privateFoo"),
        ErrorKind::ReferenceError,
        Some("privateFoo is not defined"),
        "privateFoo",
    )
}

fn singleton_privileged_access(realm: &mut Realm) -> CaseResult {
    let factory = Value::Object(realm.create_function("", privileged_factory));
    let single = realm.call(&factory, &[])?;
    realm.call_method(&single, "foo", &[])?;
    let seen = realm.call_method(&single, "bar", &[])?;
    assert::same_value(&seen, &Value::string(REVEALED), "youngFreeAndSingle.bar()")
}

fn constructor_is_function(realm: &mut Realm) -> CaseResult {
    let ctor = new_me_up_baby(realm);
    assert::type_of(realm, &ctor, "function", "newMeUpBaby")
}

fn constructor_creates_object(realm: &mut Realm) -> CaseResult {
    new_me_up_baby(realm);
    let instance = realm.construct_binding("newMeUpBaby", &[])?;
    assert::type_of(realm, &instance, "object", "new newMeUpBaby()")
}

fn constructor_plain_call_returns_undefined(realm: &mut Realm) -> CaseResult {
    new_me_up_baby(realm);
    let result = realm.call_binding("newMeUpBaby", &[])?;
    assert::undefined(&result, "newMeUpBaby()")?;
    // The body still ran, against the global receiver
    let global = realm.global();
    assert::same_value(&realm.lookup(global, "foo"), &Value::string(HELLO), "window.foo")
}

fn constructor_this_is_instance(realm: &mut Realm) -> CaseResult {
    new_me_up_baby(realm);
    let instance = realm.construct_binding("newMeUpBaby", &[])?;
    let bar = realm.get(&instance, "bar")?;
    assert::same_value(&bar, &instance, "newObject.bar")
}

fn constructor_public_fields(realm: &mut Realm) -> CaseResult {
    new_me_up_baby(realm);
    let instance = realm.construct_binding("newMeUpBaby", &[])?;
    let foo = realm.get(&instance, "foo")?;
    assert::same_value(&foo, &Value::string(HELLO), "newObject.foo")
}

fn constructor_private_fields_hidden(realm: &mut Realm) -> CaseResult {
    new_me_up_baby(realm);
    let instance = realm.construct_binding("newMeUpBaby", &[])?;
    let private = realm.get(&instance, "privateFoo")?;
    assert::undefined(&private, "newObject.privateFoo")
}

fn constructor_privileged_access(realm: &mut Realm) -> CaseResult {
    let ctor = realm.create_function("newMeUpBaby", |realm, this, _| {
        let locals = realm.global_scope().child();
        locals.declare("privateFoo", Value::string(HIDDEN));
        install_privileged(realm, &this, &locals)?;
        Ok(Value::Undefined)
    });
    let instance = realm.construct(&Value::Object(ctor), &[])?;
    realm.call_method(&instance, "foo", &[])?;
    let seen = realm.call_method(&instance, "bar", &[])?;
    assert::same_value(&seen, &Value::string(REVEALED), "newObject.bar()")?;

    // Each construction gets its own locals
    let other = realm.construct(&Value::Object(ctor), &[])?;
    let untouched = realm.call_method(&other, "bar", &[])?;
    assert::same_value(&untouched, &Value::string(HIDDEN), "second instance bar()")
}

fn factory_is_function(realm: &mut Realm) -> CaseResult {
    let f = return_me(realm);
    assert::type_of(realm, &f, "function", "returnMe")
}

fn factory_call_creates_object(realm: &mut Realm) -> CaseResult {
    return_me(realm);
    let returned = realm.call_binding("returnMe", &[])?;
    assert::type_of(realm, &returned, "object", "returnMe()")
}

fn factory_new_returns_explicit_record(realm: &mut Realm) -> CaseResult {
    let f = return_me(realm);
    let constructed = realm.construct_binding("returnMe", &[])?;
    assert::same_value(&realm.get(&constructed, "foo")?, &Value::string(HELLO), "foo")?;

    // The explicit record wins over the fresh receiver, which only shows up
    // as `bar`
    let receiver = realm.get(&constructed, "bar")?;
    assert::not_same_value(&receiver, &constructed, "bar")?;
    assert::not_same_value(&receiver, &Value::Object(realm.global()), "bar")?;
    let template = realm.get(&f, "prototype")?;
    let receiver_link = receiver.as_object().and_then(|id| realm.get_prototype_of(id));
    assert::same_value(
        &receiver_link.map(Value::Object).unwrap_or(Value::Undefined),
        &template,
        "prototype of discarded receiver",
    )
}

fn factory_marked_non_constructible(realm: &mut Realm) -> CaseResult {
    let f = Value::Object(realm.create_method("returnMe", record_factory));
    realm.declare_global("returnMe", f);
    realm.construct_binding("returnMe", &[])?;
    Ok(())
}

fn factory_this_is_global(realm: &mut Realm) -> CaseResult {
    return_me(realm);
    let returned = realm.call_binding("returnMe", &[])?;
    let bar = realm.get(&returned, "bar")?;
    assert::same_value(&bar, &Value::Object(realm.global()), "returnedObject.bar")
}

fn factory_public_fields(realm: &mut Realm) -> CaseResult {
    return_me(realm);
    let returned = realm.call_binding("returnMe", &[])?;
    let foo = realm.get(&returned, "foo")?;
    assert::same_value(&foo, &Value::string(HELLO), "returnedObject.foo")
}

fn factory_private_fields_hidden(realm: &mut Realm) -> CaseResult {
    return_me(realm);
    let returned = realm.call_binding("returnMe", &[])?;
    let private = realm.get(&returned, "privateFoo")?;
    assert::undefined(&private, "returnedObject.privateFoo")
}

fn factory_privileged_access(realm: &mut Realm) -> CaseResult {
    let f = Value::Object(realm.create_function("returnMe", privileged_factory));
    let returned = realm.call(&f, &[])?;
    realm.call_method(&returned, "foo", &[])?;
    let seen = realm.call_method(&returned, "bar", &[])?;
    assert::same_value(&seen, &Value::string(REVEALED), "returnedObject.bar()")
}

/// Cases for the construction suite
pub fn cases() -> Vec<ConformanceCase> {
    vec![
        ConformanceCase::new(SUITE, "singleton is an object", singleton_is_object),
        ConformanceCase::new(SUITE, "singleton has the global object in this", singleton_this_is_global),
        ConformanceCase::new(SUITE, "singleton cannot be instantiated with new", singleton_rejects_new)
            .describe("the factory's result is a plain record, not a constructor")
            .expect_error(NegativeExpectation::exact(
                ErrorKind::TypeError,
                "youngFreeAndSingle is not a constructor",
            )),
        ConformanceCase::new(SUITE, "singleton exposes public fields", singleton_public_fields),
        ConformanceCase::new(SUITE, "singleton hides private locals", singleton_private_fields_hidden),
        ConformanceCase::new(SUITE, "singleton privileged closures reach private locals", singleton_privileged_access),
        ConformanceCase::new(SUITE, "constructor is a function", constructor_is_function),
        ConformanceCase::new(SUITE, "constructor creates an object with new", constructor_creates_object),
        ConformanceCase::new(SUITE, "constructor returns undefined without new", constructor_plain_call_returns_undefined)
            .describe("plain call binds this to the global object"),
        ConformanceCase::new(SUITE, "constructor binds this to the new instance", constructor_this_is_instance),
        ConformanceCase::new(SUITE, "constructor exposes public fields", constructor_public_fields),
        ConformanceCase::new(SUITE, "constructor hides private locals", constructor_private_fields_hidden),
        ConformanceCase::new(SUITE, "constructor privileged closures reach private locals", constructor_privileged_access),
        ConformanceCase::new(SUITE, "returning factory is a function", factory_is_function),
        ConformanceCase::new(SUITE, "returning factory creates an object when called", factory_call_creates_object),
        ConformanceCase::new(SUITE, "returning factory with new yields the explicit record", factory_new_returns_explicit_record),
        ConformanceCase::new(SUITE, "non-constructible returning factory rejects new", factory_marked_non_constructible)
            .expect_error(NegativeExpectation::exact(
                ErrorKind::TypeError,
                "returnMe is not a constructor",
            )),
        ConformanceCase::new(SUITE, "returning factory has the global object in this", factory_this_is_global),
        ConformanceCase::new(SUITE, "returning factory exposes public fields", factory_public_fields),
        ConformanceCase::new(SUITE, "returning factory hides private locals", factory_private_fields_hidden),
        ConformanceCase::new(SUITE, "returning factory privileged closures reach private locals", factory_privileged_access),
    ]
}
