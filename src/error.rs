use std::fmt;
use std::sync::Arc;

/// Shared diagnostic handle to the protocol message that was being processed
/// when a violation was detected.
///
/// Attached to [`Error::Protocol`] by reference only; the error never owns the
/// message exclusively and never mutates it. Identity is preserved, so callers
/// can relate the error back to the exact in-flight message with
/// [`Arc::ptr_eq`].
pub type FaultedMessage = Arc<dyn fmt::Debug + Send + Sync>;

/// The kind of failure a guard check signals. Chosen by which checking
/// function was invoked, never by runtime inspection of the condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Internal,
    InvalidOperation,
    Argument,
    ArgumentNull,
    Protocol,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An invariant the codebase assumes always holds was violated. Signals a
    /// defect in the calling code itself, not bad input.
    #[error("{message}")]
    Internal { message: String },

    /// The operation is not valid given current object or process state.
    #[error("{message}")]
    InvalidOperation { message: String },

    /// The caller supplied an invalid input value.
    #[error("{message}")]
    Argument { message: String },

    /// The caller supplied a nil value where one is required.
    #[error("unexpected null argument: {param}")]
    ArgumentNull { param: String },

    /// A remote peer or wire-level input violated the expected protocol.
    #[error("{message}")]
    Protocol {
        message: String,
        /// Lower-level failure re-categorized as a protocol violation, e.g. a
        /// parsing or cryptographic error. Never discarded.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// The message under processing when the violation was detected.
        faulted: Option<FaultedMessage>,
    },
}

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Self::Internal { .. } => Category::Internal,
            Self::InvalidOperation { .. } => Category::InvalidOperation,
            Self::Argument { .. } => Category::Argument,
            Self::ArgumentNull { .. } => Category::ArgumentNull,
            Self::Protocol { .. } => Category::Protocol,
        }
    }

    /// The faulted-message reference carried by a protocol error, if any.
    /// `None` for every other category.
    pub fn faulted_message(&self) -> Option<&FaultedMessage> {
        match self {
            Self::Protocol { faulted, .. } => faulted.as_ref(),
            _ => None,
        }
    }

    /// The offending parameter name for an [`Error::ArgumentNull`].
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::ArgumentNull { param } => Some(param),
            _ => None,
        }
    }
}
