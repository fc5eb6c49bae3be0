use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::pk::Pk;

/// Typed value of a named model field.
///
/// Repositories compare these when evaluating filters. Values of different
/// variants never compare equal, with one exception: a `Key` equals a
/// non-negative `Int` holding the same number, so keys can be matched with
/// plain integers. `Int(3)` never matches `Text("3")` or `Float(3.0)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Reference to another stored object (e.g. an expense's category).
    Key(Pk),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Key(_) => "key",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Substring containment test.
    ///
    /// Only text values support containment; every other variant (including
    /// `Null`) yields [`TypeError::UnexpectedKind`].
    pub fn contains(&self, pattern: &str) -> Result<bool, TypeError> {
        match self {
            Self::Text(s) => Ok(s.contains(pattern)),
            other => Err(TypeError::UnexpectedKind {
                expected: "text",
                actual: other.kind(),
            }),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Key(a), Self::Key(b)) => a == b,
            (Self::Key(k), Self::Int(i)) | (Self::Int(i), Self::Key(k)) => {
                u64::try_from(*i).is_ok_and(|i| i == k.get())
            }
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Key(pk) => write!(f, "#{pk}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Pk> for FieldValue {
    fn from(pk: Pk) -> Self {
        Self::Key(pk)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equality_does_not_coerce_across_kinds() {
        assert_eq!(FieldValue::from(3i64), FieldValue::Int(3));
        assert_ne!(FieldValue::Int(3), FieldValue::from("3"));
        assert_ne!(FieldValue::Int(3), FieldValue::Float(3.0));
        assert_ne!(FieldValue::Int(1), FieldValue::Bool(true));
        assert_ne!(FieldValue::Key(Pk::new(3)), FieldValue::from("3"));
    }

    #[test]
    fn key_equals_matching_integer() {
        let key = FieldValue::Key(Pk::new(3));
        assert_eq!(key, FieldValue::Int(3));
        assert_eq!(FieldValue::Int(3), key);
        assert_ne!(key, FieldValue::Int(4));
        assert_ne!(FieldValue::Key(Pk::UNSET), FieldValue::Int(-1));
        assert_ne!(FieldValue::Key(Pk::new(u64::MAX)), FieldValue::Int(-1));
        assert_eq!(FieldValue::Key(Pk::new(i64::MAX as u64)), FieldValue::Int(i64::MAX));
    }

    #[test]
    fn option_none_is_null() {
        let none: Option<Pk> = None;
        assert!(FieldValue::from(none).is_null());
        assert_eq!(
            FieldValue::from(Some(Pk::new(4))),
            FieldValue::Key(Pk::new(4))
        );
    }

    #[test]
    fn contains_on_text() {
        let v = FieldValue::from("groceries and snacks");
        assert!(v.contains("snack").unwrap());
        assert!(v.contains("").unwrap());
        assert!(!v.contains("rent").unwrap());
    }

    #[test]
    fn contains_rejects_non_text() {
        let err = FieldValue::Int(100).contains("1").unwrap_err();
        assert_eq!(
            err,
            TypeError::UnexpectedKind {
                expected: "text",
                actual: "int"
            }
        );
        assert!(FieldValue::Null.contains("x").is_err());
    }

    #[test]
    fn display_formats() {
        assert_eq!(FieldValue::Key(Pk::new(2)).to_string(), "#2");
        assert_eq!(FieldValue::from("a").to_string(), "\"a\"");
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(FieldValue::from(d).to_string(), "2024-03-01");
    }

    #[test]
    fn serde_is_tagged_by_kind() {
        let json = serde_json::to_string(&FieldValue::Int(7)).unwrap();
        assert_eq!(json, r#"{"int":7}"#);
        let parsed: FieldValue = serde_json::from_str(r#"{"text":"food"}"#).unwrap();
        assert_eq!(parsed, FieldValue::from("food"));
        let null: FieldValue = serde_json::from_str(r#""null""#).unwrap();
        assert!(null.is_null());
    }

    proptest! {
        #[test]
        fn text_contains_any_of_its_substrings(s in ".{0,24}", start in 0usize..24, len in 0usize..24) {
            let chars: Vec<char> = s.chars().collect();
            let start = start.min(chars.len());
            let end = (start + len).min(chars.len());
            let sub: String = chars[start..end].iter().collect();
            prop_assert!(FieldValue::from(s.as_str()).contains(&sub).unwrap());
        }
    }
}
