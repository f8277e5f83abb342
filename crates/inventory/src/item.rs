use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// A single inventory record.
///
/// Field names are the on-disk contract. Decoding goes through
/// [`Item::new`], so stored records obey the same rules as typed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    name: String,
    stock: i64,
}

/// Unvalidated on-disk shape of an [`Item`].
#[derive(Deserialize)]
struct RawItem {
    name: String,
    stock: i64,
}

impl TryFrom<RawItem> for Item {
    type Error = DomainError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.name, raw.stock)
    }
}

impl Item {
    /// Build an item, rejecting an empty name.
    ///
    /// Stock is unconstrained: zero and negative quantities are valid.
    pub fn new(name: impl Into<String>, stock: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { name, stock })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }
}
