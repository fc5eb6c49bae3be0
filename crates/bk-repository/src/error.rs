use bk_types::Pk;

/// Errors from repository operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// `add` was called on an object that already carries a primary key.
    #[error("cannot add object with primary key {0} already set")]
    AlreadyPersisted(Pk),

    /// `update` was called on an object that was never added.
    #[error("cannot update object without a primary key")]
    NotPersisted,

    /// No object is stored under the given key.
    #[error("no object with primary key {0}")]
    NotFound(Pk),

    /// A filter named a field the model does not expose.
    #[error("unknown field: {field} (expected one of: {})", .expected.join(", "))]
    UnknownField {
        field: String,
        expected: &'static [&'static str],
    },

    /// A pattern filter targeted a field that is not text.
    #[error("field {field} does not support pattern matching (found {found})")]
    TypeMismatch { field: String, found: &'static str },

    /// The key counter cannot advance any further.
    #[error("primary key space exhausted")]
    KeySpaceExhausted,

    /// Configuration text could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RepositoryError {
    /// Returns `true` for misuse of an object's persistence state: adding an
    /// already persisted object or updating one that never was.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::AlreadyPersisted(_) | Self::NotPersisted)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_grouping() {
        assert!(RepositoryError::AlreadyPersisted(Pk::new(1)).is_invalid_state());
        assert!(RepositoryError::NotPersisted.is_invalid_state());
        assert!(!RepositoryError::NotFound(Pk::new(1)).is_invalid_state());
        assert!(RepositoryError::NotFound(Pk::new(1)).is_not_found());
    }

    #[test]
    fn unknown_field_lists_valid_names() {
        let err = RepositoryError::UnknownField {
            field: "merchant".into(),
            expected: &["pk", "amount", "comment"],
        };
        assert_eq!(
            err.to_string(),
            "unknown field: merchant (expected one of: pk, amount, comment)"
        );
    }

    #[test]
    fn messages_name_the_key() {
        let err = RepositoryError::NotFound(Pk::new(42));
        assert_eq!(err.to_string(), "no object with primary key 42");
        let err = RepositoryError::TypeMismatch {
            field: "amount".into(),
            found: "int",
        };
        assert_eq!(
            err.to_string(),
            "field amount does not support pattern matching (found int)"
        );
    }
}
