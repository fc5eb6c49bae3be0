use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer primary key of a stored object.
///
/// Keys are assigned by a repository when an object is first added. The
/// zero key ([`Pk::UNSET`]) is reserved: it marks an object that has not
/// been persisted yet, so every assigned key is strictly positive.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Pk(u64);

impl Pk {
    /// The "not yet persisted" key.
    pub const UNSET: Pk = Pk(0);

    /// The first key a fresh repository hands out.
    pub const FIRST: Pk = Pk(1);

    /// Wrap a raw key value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw key value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is [`Pk::UNSET`].
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if a repository has assigned this key.
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    /// The key following this one, or `None` on overflow.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Debug for Pk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            write!(f, "Pk(unset)")
        } else {
            write!(f, "Pk({})", self.0)
        }
    }
}

impl fmt::Display for Pk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Pk {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Pk> for u64 {
    fn from(pk: Pk) -> Self {
        pk.0
    }
}
