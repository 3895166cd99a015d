//! Unit tests for Value enum

use core_types::{ObjectId, Value};

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_undefined() {
        let val = Value::Undefined;
        assert!(val.is_undefined());
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(1.5), Value::Number(1.5));
        assert_eq!(Value::from("Woof"), Value::String("Woof".to_string()));
        assert_eq!(Value::from(ObjectId(7)), Value::Object(ObjectId(7)));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::string("grrr").as_str(), Some("grrr"));
        assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Value::Object(ObjectId(4)).as_object(), Some(ObjectId(4)));
        assert_eq!(Value::Null.as_object(), None);
    }
}

#[cfg(test)]
mod value_truthiness_tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(-0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::string("").is_truthy());
    }

    #[test]
    fn test_truthy_values() {
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(Value::string("Hello World").is_truthy());
        assert!(Value::Object(ObjectId(0)).is_truthy());
    }
}

#[cfg(test)]
mod value_display_tests {
    use super::*;

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_display_object_handle() {
        assert_eq!(Value::Object(ObjectId(12)).to_string(), "[object #12]");
    }
}
