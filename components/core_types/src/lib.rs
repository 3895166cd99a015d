//! Core value types and error handling for the object model.
//!
//! This crate provides the vocabulary shared by the realm and the
//! conformance harness.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of values
//! - [`ObjectId`] - Handle to a record in a realm's arena
//! - [`JsError`] - Errors raised by realm operations
//! - [`ErrorKind`] - Types of errors
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, JsError, Value};
//!
//! let num = Value::Number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.primitive_type_of(), "number");
//!
//! let error = JsError::not_defined("privateFoo");
//! assert_eq!(error.kind, ErrorKind::ReferenceError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::{ErrorKind, JsError, JsResult};
pub use value::{ObjectId, Value};
