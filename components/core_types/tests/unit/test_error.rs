//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError, JsResult};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_type_error() {
        let kind = ErrorKind::TypeError;
        assert!(matches!(kind, ErrorKind::TypeError));
        assert_eq!(kind.to_string(), "TypeError");
    }

    #[test]
    fn test_error_kind_reference_error() {
        let kind = ErrorKind::ReferenceError;
        assert!(matches!(kind, ErrorKind::ReferenceError));
        assert_eq!(kind.to_string(), "ReferenceError");
    }

    #[test]
    fn test_error_kind_is_copy() {
        let kind1 = ErrorKind::TypeError;
        let kind2 = kind1;
        assert_eq!(kind1, kind2);
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_not_a_constructor_uses_binding_name() {
        let error = JsError::not_a_constructor("youngFreeAndSingle");
        assert_eq!(error.kind, ErrorKind::TypeError);
        assert_eq!(error.message, "youngFreeAndSingle is not a constructor");
    }

    #[test]
    fn test_not_a_function_message() {
        let error = JsError::not_a_function("bark");
        assert_eq!(error.kind, ErrorKind::TypeError);
        assert_eq!(error.message, "bark is not a function");
    }

    #[test]
    fn test_not_defined_is_reference_error() {
        let error = JsError::not_defined("makeNoise");
        assert_eq!(error.kind, ErrorKind::ReferenceError);
        assert_eq!(error.to_string(), "ReferenceError: makeNoise is not defined");
    }

    #[test]
    fn test_error_propagates_through_question_mark() {
        fn inner() -> JsResult<()> {
            Err(JsError::type_error("boom"))
        }
        fn outer() -> JsResult<u32> {
            inner()?;
            Ok(1)
        }
        let err = outer().unwrap_err();
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(JsError::type_error("x"));
        assert_eq!(error.to_string(), "TypeError: x");
    }
}
