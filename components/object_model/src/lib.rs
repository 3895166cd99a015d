//! Object model with prototype delegation.
//!
//! This crate provides a small realm in which records, constructors and
//! closures behave the way a prototype-based object model prescribes:
//!
//! - [`Realm`] - record arena, intrinsics, global object and bindings
//! - [`InvocationMode`] - construction, plain call, or method call
//! - [`Scope`] - closure-captured private state
//! - [`PrototypeChain`] - iterator over a record's delegation path
//!
//! # Examples
//!
//! ```
//! use core_types::Value;
//! use object_model::Realm;
//!
//! let mut realm = Realm::new();
//! let dog = realm.create_function("Dog", |realm, this, _| {
//!     realm.set(&this, "sound", Value::string("Woof"))?;
//!     Ok(Value::Undefined)
//! });
//! let mongrel = realm.create_function("Mongrel", |_, _, _| Ok(Value::Undefined));
//!
//! let template = realm.construct(&Value::Object(dog), &[]).unwrap();
//! realm.assign(mongrel, "prototype", template.clone());
//! realm.set(&template, "constructor", Value::Object(mongrel)).unwrap();
//!
//! let jess = realm.construct(&Value::Object(mongrel), &[]).unwrap();
//! assert_eq!(realm.get(&jess, "sound").unwrap(), Value::string("Woof"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod chain;
mod intrinsics;
mod invoke;
mod realm;
mod record;
mod scope;

pub use chain::PrototypeChain;
pub use invoke::InvocationMode;
pub use realm::{Intrinsics, Realm};
pub use record::{CallableData, NativeFn, RecordData, RecordKind};
pub use scope::Scope;
