//! Assertion helpers for case bodies.
//!
//! Each helper returns `Err(CaseError::Assertion)` instead of panicking so
//! the harness can record the failure and move on.

use crate::case::{CaseError, CaseResult};
use core_types::{ErrorKind, JsResult, Value};
use object_model::Realm;

fn fail(message: String) -> CaseResult {
    Err(CaseError::Assertion(message))
}

/// Same value: identity for records, value equality otherwise
pub fn same_value(actual: &Value, expected: &Value, context: &str) -> CaseResult {
    if actual.same_value(expected) {
        Ok(())
    } else {
        fail(format!("{}: expected {} but got {}", context, expected, actual))
    }
}

/// Not the same value
pub fn not_same_value(actual: &Value, other: &Value, context: &str) -> CaseResult {
    if actual.same_value(other) {
        fail(format!("{}: expected something other than {}", context, other))
    } else {
        Ok(())
    }
}

/// Value is undefined
pub fn undefined(actual: &Value, context: &str) -> CaseResult {
    same_value(actual, &Value::Undefined, context)
}

/// Value is anything but undefined
pub fn defined(actual: &Value, context: &str) -> CaseResult {
    if actual.is_undefined() {
        fail(format!("{}: expected a defined value", context))
    } else {
        Ok(())
    }
}

/// Value is truthy
pub fn truthy(actual: &Value, context: &str) -> CaseResult {
    if actual.is_truthy() {
        Ok(())
    } else {
        fail(format!("{}: expected truthy but got {}", context, actual))
    }
}

/// Value is falsy
pub fn falsy(actual: &Value, context: &str) -> CaseResult {
    if actual.is_truthy() {
        fail(format!("{}: expected falsy but got {}", context, actual))
    } else {
        Ok(())
    }
}

/// `typeof` of the value equals `expected`
pub fn type_of(realm: &Realm, actual: &Value, expected: &str, context: &str) -> CaseResult {
    let tag = realm.type_of(actual);
    if tag == expected {
        Ok(())
    } else {
        fail(format!("{}: expected typeof {} but got {}", context, expected, tag))
    }
}

/// The operation must fail with `kind` (and `message`, when given).
///
/// Used inside positive cases that go on asserting after the failure.
pub fn throws<T>(
    result: JsResult<T>,
    kind: ErrorKind,
    message: Option<&str>,
    context: &str,
) -> CaseResult {
    match result {
        Ok(_) => fail(format!("{}: expected {} but nothing was raised", context, kind)),
        Err(err) if err.kind != kind => fail(format!(
            "{}: expected {} but got {}",
            context, kind, err
        )),
        Err(err) => match message {
            Some(expected) if expected != err.message => fail(format!(
                "{}: expected message {:?} but got {:?}",
                context, expected, err.message
            )),
            _ => Ok(()),
        },
    }
}
