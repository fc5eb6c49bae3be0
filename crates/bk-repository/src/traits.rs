use bk_types::{Model, Pk};

use crate::error::{RepositoryError, RepositoryResult};
use crate::filter::{Patterns, Where};

/// Storage backend for domain objects of type `T`.
///
/// All implementations must satisfy these invariants:
/// - `add` only accepts objects whose key is [`Pk::UNSET`], and assigns
///   keys that are never reused by the same repository.
/// - `update` only accepts objects that carry a key.
/// - Reads of an absent key return `Ok(None)`; deletes of an absent key fail
///   with [`RepositoryError::NotFound`].
/// - Returned collections are in a deterministic order that does not change
///   between calls unless the repository is mutated.
///
/// Mutating methods take `&mut self`. Implementations perform no internal
/// locking; share a repository across threads by wrapping it in a lock.
pub trait Repository<T: Model> {
    /// Persist a new object, assign its primary key, and return the key.
    ///
    /// `obj.pk()` is set to the assigned key on success. Fails with
    /// [`RepositoryError::AlreadyPersisted`] if the object already has one.
    fn add(&mut self, obj: &mut T) -> RepositoryResult<Pk>;

    /// Read an object by primary key.
    ///
    /// Returns `Ok(None)` if no object is stored under `pk`.
    fn get(&self, pk: Pk) -> RepositoryResult<Option<T>>;

    /// Read all objects, optionally restricted to those whose fields equal
    /// every value in `filter`.
    fn get_all(&self, filter: Option<&Where>) -> RepositoryResult<Vec<T>>;

    /// Read all objects whose text fields contain every substring in
    /// `patterns`.
    fn get_all_by_pattern(&self, patterns: &Patterns) -> RepositoryResult<Vec<T>>;

    /// Replace the stored object under `obj.pk()` with `obj`.
    ///
    /// Fails with [`RepositoryError::NotPersisted`] if the object has no key.
    fn update(&mut self, obj: &T) -> RepositoryResult<()>;

    /// Remove the object stored under `pk`.
    fn delete(&mut self, pk: Pk) -> RepositoryResult<()>;

    /// Read an object that must exist.
    ///
    /// Default implementation maps `get`'s `None` to
    /// [`RepositoryError::NotFound`].
    fn get_required(&self, pk: Pk) -> RepositoryResult<T> {
        self.get(pk)?.ok_or(RepositoryError::NotFound(pk))
    }

    /// Check whether an object is stored under `pk`.
    fn contains(&self, pk: Pk) -> RepositoryResult<bool> {
        Ok(self.get(pk)?.is_some())
    }

    /// Number of stored objects.
    ///
    /// Default implementation materializes every object. Backends may
    /// override with a cheaper count.
    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.get_all(None)?.len())
    }
}
