//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Ids are positive, assigned by the store from a monotonically increasing
/// counter, and never reused within a process run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first id handed out by a fresh store.
    pub const FIRST: ItemId = ItemId(1);

    /// Wrap a raw id. Returns `None` for `0`, which is never a valid id.
    pub fn new(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// A signed id as it arrives from the outside world.
///
/// No item ever carries a non-positive id, so looking one up is `NotFound`.
impl TryFrom<i64> for ItemId {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u64::try_from(raw)
            .ok()
            .and_then(Self::new)
            .ok_or_else(DomainError::not_found)
    }
}
