//! Positional item identifier.

use core::num::NonZeroUsize;
use core::str::FromStr;

use crate::error::DomainError;

/// 1-based position of an item in the current inventory listing.
///
/// This is a view-order index, not a stable key: deleting an item shifts
/// the id of every item after it down by one. Never persist it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(NonZeroUsize);

impl ItemId {
    /// Id of the item stored at the 0-based `index`.
    pub fn from_index(index: usize) -> Self {
        // index + 1 is never zero; saturate instead of wrapping at usize::MAX.
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// The 1-based position.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based position in the store.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }

    /// Reject ids that do not address one of `len` items.
    pub fn checked(self, len: usize) -> Result<Self, DomainError> {
        if self.get() > len {
            return Err(DomainError::invalid_id(format!(
                "item id {} is out of range (1..={len})",
                self.get()
            )));
        }
        Ok(self)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for ItemId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(format!("item id must be at least 1, got {value}")))
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Self::try_from(value)
    }
}
