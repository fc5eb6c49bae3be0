//! Field filters for repository queries.
//!
//! [`Where`] matches fields by exact equality, [`Patterns`] by substring
//! containment. Both are conjunctions over their pairs, and both are keyed by
//! field name: setting the same field twice keeps the last value.

use std::collections::BTreeMap;

use bk_types::{FieldValue, Model};

use crate::error::{RepositoryError, RepositoryResult};

/// Equality filter: every named field must equal its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Where {
    fields: BTreeMap<String, FieldValue>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field == value` condition.
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if `obj` satisfies every condition.
    ///
    /// Every condition is resolved even after a mismatch, so an unknown field
    /// is reported regardless of the order in which conditions were added.
    pub fn matches<T: Model>(&self, obj: &T) -> RepositoryResult<bool> {
        let mut all = true;
        for (name, expected) in &self.fields {
            let actual = resolve(obj, name)?;
            if actual != *expected {
                all = false;
            }
        }
        Ok(all)
    }
}

impl<K, V> FromIterator<(K, V)> for Where
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Containment filter: every named text field must contain its substring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Patterns {
    fields: BTreeMap<String, String>,
}

impl Patterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field contains substring` condition.
    pub fn contains(mut self, field: impl Into<String>, substring: impl Into<String>) -> Self {
        self.fields.insert(field.into(), substring.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if `obj` satisfies every condition.
    ///
    /// Fails with [`RepositoryError::TypeMismatch`] when a targeted field is
    /// not text.
    pub fn matches<T: Model>(&self, obj: &T) -> RepositoryResult<bool> {
        let mut all = true;
        for (name, pattern) in &self.fields {
            let actual = resolve(obj, name)?;
            let hit = actual
                .contains(pattern)
                .map_err(|_| RepositoryError::TypeMismatch {
                    field: name.clone(),
                    found: actual.kind(),
                })?;
            if !hit {
                all = false;
            }
        }
        Ok(all)
    }
}

impl<K, V> FromIterator<(K, V)> for Patterns
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn resolve<T: Model>(obj: &T, name: &str) -> RepositoryResult<FieldValue> {
    obj.field(name).ok_or_else(|| RepositoryError::UnknownField {
        field: name.to_string(),
        expected: obj.field_names(),
    })
}
