//! Boundary validation errors

use thiserror::Error;

/// Input rejected before it reaches the analyzers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown content type '{0}' (expected blog, short_form or general)")]
    UnknownContentType(String),

    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("argument '{name}' must be {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },
}
