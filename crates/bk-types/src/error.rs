use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected a {expected} value, got {actual}")]
    UnexpectedKind {
        expected: &'static str,
        actual: &'static str,
    },
}
