//! Object-model error types.
//!
//! Only the failure kinds the object model can actually raise are modelled:
//! construction of something that is not a constructor, calls of something
//! that is not a function, and references to identifiers outside every
//! enclosing scope.

use thiserror::Error;

/// The kind of object-model error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Type error (e.g., constructing a non-constructor)
    TypeError,
    /// Reference to an identifier that is not in scope
    ReferenceError,
}

impl ErrorKind {
    /// Returns the error name as it would appear on a thrown error's `name`
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An error raised synchronously by a realm operation.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, JsError};
///
/// let error = JsError::not_a_constructor("returnMe");
///
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.message, "returnMe is not a constructor");
/// assert_eq!(error.to_string(), "TypeError: returnMe is not a constructor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a ReferenceError
    pub fn reference_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::ReferenceError, message)
    }

    /// `<name> is not a constructor`
    pub fn not_a_constructor(name: &str) -> Self {
        JsError::type_error(format!("{} is not a constructor", name))
    }

    /// `<name> is not a function`
    pub fn not_a_function(name: &str) -> Self {
        JsError::type_error(format!("{} is not a function", name))
    }

    /// `<name> is not defined`
    pub fn not_defined(name: &str) -> Self {
        JsError::reference_error(format!("{} is not defined", name))
    }
}

/// Result type for object-model operations
pub type JsResult<T> = Result<T, JsError>;
