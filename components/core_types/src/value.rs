//! Value representation for the object model.
//!
//! Primitive values are stored inline, while records are referenced by an
//! [`ObjectId`] handle into the owning realm's arena.

use std::fmt;

/// Handle to a record living in a realm's arena.
///
/// Handles are plain indices: two handles are the same object exactly when
/// they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl ObjectId {
    /// Returns the arena slot this handle refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents any value a record field, binding, or call can hold.
///
/// # Examples
///
/// ```
/// use core_types::{ObjectId, Value};
///
/// let undefined = Value::Undefined;
/// let number = Value::Number(42.0);
/// let record = Value::Object(ObjectId(0));
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert!(record.is_object());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Undefined,
    /// Explicit empty value
    Null,
    /// Boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision number
    Number(f64),
    /// String value
    String(String),
    /// Reference to a record (plain, sequence, or callable)
    Object(ObjectId),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a number value
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Returns whether this value is truthy.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; every record is truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{ObjectId, Value};
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Number(f64::NAN).is_truthy());
    /// assert!(!Value::string("").is_truthy());
    /// assert!(Value::Object(ObjectId(3)).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// Returns true for `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true for record references
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the record handle, if this value references one
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Value::Object(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the string contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Records compare by handle, primitives by value. `NaN` is the same
    /// value as itself, unlike `==` on `f64`.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self == other,
        }
    }

    /// Returns the primitive type tag of this value.
    ///
    /// Records report `"object"` here; whether a record is callable is
    /// only known to the realm, which refines the answer to `"function"`.
    pub fn primitive_type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Object(id)
    }
}

/// String conversion for diagnostics and assertion messages.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Null.to_string(), "null");
/// assert_eq!(Value::Boolean(true).to_string(), "true");
/// assert_eq!(Value::Number(42.0).to_string(), "42");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    // Integer-valued doubles display without decimal point
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Object(id) => write!(f, "[object {}]", id),
        }
    }
}
