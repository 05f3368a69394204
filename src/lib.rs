#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod guard;
pub mod hook;

pub use error::{Category, Error, FaultedMessage};
pub use guard::{
    internal_error, protocol_error, verify_argument, verify_argument_not_null, verify_internal,
    verify_non_zero_length, verify_operation, verify_protocol, verify_protocol_with, wrap,
};
pub use hook::set_debug_hook;
