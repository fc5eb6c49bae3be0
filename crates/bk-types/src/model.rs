//! The [`Model`] capability trait.
//!
//! A repository stores any type that can report and accept a primary key and
//! can project its fields by name. The projection is an explicit accessor
//! mapping, usually a `match` on the field name.

use std::fmt::Debug;

use crate::field::FieldValue;
use crate::pk::Pk;

/// A storable domain object.
///
/// # Example
///
/// ```
/// use bk_types::{FieldValue, Model, Pk};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Category {
///     pk: Pk,
///     name: String,
///     parent: Option<Pk>,
/// }
///
/// impl Model for Category {
///     fn pk(&self) -> Pk {
///         self.pk
///     }
///
///     fn set_pk(&mut self, pk: Pk) {
///         self.pk = pk;
///     }
///
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         match name {
///             "pk" => Some(self.pk.into()),
///             "name" => Some(self.name.clone().into()),
///             "parent" => Some(self.parent.into()),
///             _ => None,
///         }
///     }
///
///     fn field_names(&self) -> &'static [&'static str] {
///         &["pk", "name", "parent"]
///     }
/// }
///
/// let food = Category { pk: Pk::UNSET, name: "food".into(), parent: None };
/// assert!(!food.is_persisted());
/// assert_eq!(food.field("parent"), Some(FieldValue::Null));
/// ```
pub trait Model: Clone + Debug {
    /// The object's primary key; [`Pk::UNSET`] until a repository assigns one.
    fn pk(&self) -> Pk;

    /// Overwrite the primary key. Called by repositories on `add`.
    fn set_pk(&mut self, pk: Pk);

    /// Project the field called `name`, or `None` if the model has no such
    /// field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Names accepted by [`Model::field`]. Repositories list these when a
    /// filter names a field the model does not have.
    fn field_names(&self) -> &'static [&'static str];

    /// Returns `true` once a repository has assigned a key.
    fn is_persisted(&self) -> bool {
        self.pk().is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Budget {
        pk: Pk,
        period: String,
        limit: i64,
    }

    impl Model for Budget {
        fn pk(&self) -> Pk {
            self.pk
        }

        fn set_pk(&mut self, pk: Pk) {
            self.pk = pk;
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "period" => Some(self.period.clone().into()),
                "limit" => Some(self.limit.into()),
                _ => None,
            }
        }

        fn field_names(&self) -> &'static [&'static str] {
            &["period", "limit"]
        }
    }

    #[test]
    fn persisted_follows_pk() {
        let mut b = Budget {
            pk: Pk::UNSET,
            period: "month".into(),
            limit: 30_000,
        };
        assert!(!b.is_persisted());
        b.set_pk(Pk::new(3));
        assert!(b.is_persisted());
        assert_eq!(b.pk(), Pk::new(3));
    }

    #[test]
    fn field_projection() {
        let b = Budget {
            pk: Pk::UNSET,
            period: "week".into(),
            limit: 7_000,
        };
        assert_eq!(b.field("period"), Some(FieldValue::from("week")));
        assert_eq!(b.field("limit"), Some(FieldValue::Int(7_000)));
        assert_eq!(b.field("missing"), None);
        for name in b.field_names() {
            assert!(b.field(name).is_some(), "{name} should be projected");
        }
    }
}
