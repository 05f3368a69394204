use std::fmt;

use crate::error::{Error, FaultedMessage};
use crate::hook;

/// Builds an [`Error::Internal`] unconditionally. Callers raise it themselves,
/// which lets an unreachable branch end in `return Err(internal_error(..))`.
pub fn internal_error(message: impl fmt::Display) -> Error {
    Error::Internal {
        message: message.to_string(),
    }
}

/// Checks an invariant the calling code assumes always holds.
///
/// A failure signals a defect in the caller, not bad input. Before the error
/// is returned the installed debug hook (if any) fires with the formatted
/// message; the hook never changes the outcome.
pub fn verify_internal(condition: bool, message: impl fmt::Display) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    let message = message.to_string();
    hook::fire_debug_hook(&message);
    tracing::debug!(category = "internal", %message, "invariant check failed");
    Err(Error::Internal { message })
}

/// Checks that an operation is valid given current object or process state.
pub fn verify_operation(condition: bool, message: impl fmt::Display) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    Err(Error::InvalidOperation {
        message: message.to_string(),
    })
}

/// Checks that wire-level input honors the protocol.
pub fn verify_protocol(condition: bool, message: impl fmt::Display) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    Err(Error::Protocol {
        message: message.to_string(),
        source: None,
        faulted: None,
    })
}

/// Like [`verify_protocol`], but attaches the message under processing to the
/// error for diagnostics. The reference is shared, never consumed; on the
/// success path `faulted` is dropped without effect.
pub fn verify_protocol_with(
    condition: bool,
    faulted: FaultedMessage,
    message: impl fmt::Display,
) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    Err(Error::Protocol {
        message: message.to_string(),
        source: None,
        faulted: Some(faulted),
    })
}

/// Builds an [`Error::Protocol`] unconditionally, with no chained cause and no
/// faulted-message reference. The expression-form counterpart of
/// [`verify_protocol`].
pub fn protocol_error(message: impl fmt::Display) -> Error {
    Error::Protocol {
        message: message.to_string(),
        source: None,
        faulted: None,
    }
}

/// Checks a caller-supplied input value.
pub fn verify_argument(condition: bool, message: impl fmt::Display) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    Err(Error::Argument {
        message: message.to_string(),
    })
}

/// Checks that a required value is present. Only `None` fails; a present but
/// empty or default value passes.
pub fn verify_argument_not_null<T: ?Sized>(value: Option<&T>, param: &str) -> Result<(), Error> {
    if value.is_some() {
        return Ok(());
    }
    Err(Error::ArgumentNull {
        param: param.to_string(),
    })
}

/// Checks that a required string is present and non-empty.
///
/// The null check fires first and keeps its own category, so "argument
/// absence" stays independently catchable from "argument empty".
pub fn verify_non_zero_length(value: Option<&str>, param: &str) -> Result<(), Error> {
    verify_argument_not_null(value, param)?;
    verify_argument(
        value.is_some_and(|s| !s.is_empty()),
        format_args!("unexpected empty string: {param}"),
    )
}

/// Re-categorizes a lower-level failure as a protocol violation, chaining it
/// as the cause. Construct-only: the caller raises the result explicitly, so
/// the original diagnostic is never lost along the way.
pub fn wrap(
    inner: impl std::error::Error + Send + Sync + 'static,
    message: impl fmt::Display,
) -> Error {
    Error::Protocol {
        message: message.to_string(),
        source: Some(Box::new(inner)),
        faulted: None,
    }
}

/// [`verify_internal`] with inline formatting.
#[macro_export]
macro_rules! verify_internal {
    ($cond:expr, $($arg:tt)+) => {
        $crate::guard::verify_internal($cond, ::core::format_args!($($arg)+))
    };
}

/// [`verify_operation`] with inline formatting.
#[macro_export]
macro_rules! verify_operation {
    ($cond:expr, $($arg:tt)+) => {
        $crate::guard::verify_operation($cond, ::core::format_args!($($arg)+))
    };
}

/// [`verify_protocol`] with inline formatting.
#[macro_export]
macro_rules! verify_protocol {
    ($cond:expr, $($arg:tt)+) => {
        $crate::guard::verify_protocol($cond, ::core::format_args!($($arg)+))
    };
}

/// [`verify_argument`] with inline formatting.
#[macro_export]
macro_rules! verify_argument {
    ($cond:expr, $($arg:tt)+) => {
        $crate::guard::verify_argument($cond, ::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Category;
    use std::sync::Arc;

    fn category_of(result: Result<(), Error>) -> Option<Category> {
        result.err().map(|e| e.category())
    }

    #[test]
    fn true_conditions_return_ok() {
        assert!(verify_internal(true, "unused").is_ok());
        assert!(verify_operation(true, "unused").is_ok());
        assert!(verify_protocol(true, "unused").is_ok());
        assert!(verify_argument(true, "unused").is_ok());
        let faulted: FaultedMessage = Arc::new("frame");
        assert!(verify_protocol_with(true, faulted, "unused").is_ok());
    }

    #[test]
    fn false_conditions_map_to_the_right_category() {
        assert_eq!(
            category_of(verify_internal(false, "a")),
            Some(Category::Internal)
        );
        assert_eq!(
            category_of(verify_operation(false, "b")),
            Some(Category::InvalidOperation)
        );
        assert_eq!(
            category_of(verify_protocol(false, "c")),
            Some(Category::Protocol)
        );
        assert_eq!(
            category_of(verify_argument(false, "d")),
            Some(Category::Argument)
        );
    }

    #[test]
    fn messages_are_formatted_positionally() {
        let err = verify_protocol(false, format_args!("bad value {}", 42)).err();
        assert_eq!(err.map(|e| e.to_string()), Some("bad value 42".to_string()));

        let channel = 7;
        let err = verify_operation!(false, "channel {channel} already closed").err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("channel 7 already closed".to_string())
        );
    }

    #[test]
    fn unconditional_constructors_never_check_anything() {
        assert_eq!(internal_error("boom").category(), Category::Internal);
        assert_eq!(protocol_error("boom").category(), Category::Protocol);
        assert_eq!(protocol_error("boom").to_string(), "boom");
    }

    #[test]
    fn verify_protocol_with_attaches_the_faulted_reference() {
        let faulted: FaultedMessage = Arc::new(("transfer", 42u32));
        let err = verify_protocol_with(false, faulted.clone(), format_args!("bad value {}", 42))
            .err();
        let err = match err {
            Some(e) => e,
            None => unreachable!("condition was false"),
        };
        assert_eq!(err.to_string(), "bad value 42");
        assert!(err
            .faulted_message()
            .is_some_and(|a| Arc::ptr_eq(a, &faulted)));
    }

    #[test]
    fn not_null_fails_only_on_absence() {
        let err = verify_argument_not_null::<str>(None, "foo").err();
        assert_eq!(err.as_ref().map(Error::category), Some(Category::ArgumentNull));
        assert_eq!(err.as_ref().and_then(|e| e.param()), Some("foo"));

        assert!(verify_argument_not_null(Some(""), "foo").is_ok());
        assert!(verify_argument_not_null(Some(&0u64), "foo").is_ok());
    }

    #[test]
    fn non_zero_length_checks_null_before_empty() {
        let err = verify_non_zero_length(None, "bar").err();
        assert_eq!(err.map(|e| e.category()), Some(Category::ArgumentNull));

        let err = verify_non_zero_length(Some(""), "bar").err();
        let err = match err {
            Some(e) => e,
            None => unreachable!("empty string must fail"),
        };
        assert_eq!(err.category(), Category::Argument);
        assert_eq!(err.to_string(), "unexpected empty string: bar");

        assert!(verify_non_zero_length(Some("x"), "bar").is_ok());
    }

    #[test]
    fn wrap_chains_the_inner_cause() {
        let inner = "{".parse::<serde_json::Value>().err();
        let inner = match inner {
            Some(e) => e,
            None => unreachable!("truncated json must not parse"),
        };
        let err = wrap(inner, format_args!("X {}", "Y"));
        assert_eq!(err.category(), Category::Protocol);
        assert_eq!(err.to_string(), "X Y");

        let source = std::error::Error::source(&err);
        assert!(source.is_some_and(|s| s.is::<serde_json::Error>()));
    }
}
