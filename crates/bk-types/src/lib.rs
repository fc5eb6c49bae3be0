//! Foundation types for the bookkeeper repository.
//!
//! Every storable bookkeeping object (categories, expenses, budgets) is
//! described to the storage layer through the types in this crate. The
//! repository never sees concrete domain structs; it only talks to them
//! through the [`Model`] capability trait.
//!
//! # Key Types
//!
//! - [`Pk`] — Integer primary key; [`Pk::UNSET`] marks an unpersisted object
//! - [`FieldValue`] — Typed projection of a named field, used for filtering
//! - [`Model`] — Capability trait: mutable primary key plus named field access

pub mod error;
pub mod field;
pub mod model;
pub mod pk;

pub use error::TypeError;
pub use field::FieldValue;
pub use model::Model;
pub use pk::Pk;
