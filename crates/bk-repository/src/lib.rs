//! Repository abstraction and in-memory storage for bookkeeper objects.
//!
//! A repository keeps domain objects (anything implementing
//! [`bk_types::Model`]) under integer primary keys and answers filtered
//! queries over their named fields.
//!
//! # Storage Backends
//!
//! All backends implement the [`Repository`] trait:
//!
//! - [`MemoryRepository`] -- ordered-map store living only in process memory
//!
//! # Design Rules
//!
//! 1. Keys are handed out by the repository, starting at 1, and are never
//!    reused within one repository instance, even after deletion.
//! 2. A key of zero means "not persisted": `add` requires it, `update`
//!    rejects it.
//! 3. `get` reports absence as `Ok(None)`; `delete` of an absent key is an
//!    error.
//! 4. Filters are conjunctions: every pair in a [`Where`] or [`Patterns`]
//!    must hold.
//! 5. A failing call leaves the repository unchanged.

pub mod config;
pub mod error;
pub mod filter;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{RepositoryConfig, UpdatePolicy};
pub use error::{RepositoryError, RepositoryResult};
pub use filter::{Patterns, Where};
pub use memory::MemoryRepository;
pub use traits::Repository;
