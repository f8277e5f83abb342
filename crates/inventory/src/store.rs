//! The inventory store: owns the item list and its persisted mirror.

use std::io;

use thiserror::Error;

use stockroom_core::ItemId;

use crate::backend::Backend;
use crate::codec::{self, DecodePolicy};
use crate::item::Item;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read inventory from {location}: {source}")]
    StorageUnreadable {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("inventory at {location} is not valid: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory: {0}")]
    EncodeFailure(#[source] serde_json::Error),

    #[error("failed to write inventory to {location}: {source}")]
    WriteFailure {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid index {index} (inventory has {len} items)")]
    InvalidIndex { index: usize, len: usize },
}

/// Ordered inventory with write-through persistence.
///
/// - Loaded once from the backend when opened
/// - Every successful mutation is followed by a full rewrite of the backend
/// - A failed rewrite leaves the mutation in memory; the backend goes stale
#[derive(Debug)]
pub struct InventoryStore<B> {
    backend: B,
    policy: DecodePolicy,
    items: Vec<Item>,
}

impl<B: Backend> InventoryStore<B> {
    /// Open the store and load its content from `backend`.
    pub fn open(backend: B, policy: DecodePolicy) -> Result<Self, StoreError> {
        let mut store = Self {
            backend,
            policy,
            items: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory sequence with the backend's content.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let location = self.backend.location();
        let bytes = self
            .backend
            .read_all()
            .map_err(|source| StoreError::StorageUnreadable {
                location: location.clone(),
                source,
            })?;

        self.items = match codec::decode(&bytes) {
            Ok(items) => items,
            Err(source) => match self.policy {
                DecodePolicy::Strict => return Err(StoreError::Decode { location, source }),
                DecodePolicy::Lenient => {
                    tracing::warn!(%location, error = %source, "inventory is not valid; starting empty");
                    Vec::new()
                }
            },
        };

        tracing::info!(%location, items = self.items.len(), "inventory loaded");
        Ok(())
    }

    /// Rewrite the backend with the full current sequence.
    pub fn save(&self) -> Result<(), StoreError> {
        let bytes = codec::encode(&self.items).map_err(StoreError::EncodeFailure)?;
        self.backend
            .write_all(&bytes)
            .map_err(|source| StoreError::WriteFailure {
                location: self.backend.location(),
                source,
            })?;

        tracing::debug!(items = self.items.len(), bytes = bytes.len(), "inventory saved");
        Ok(())
    }

    /// Append `item` at the end and save.
    ///
    /// Returns the id the item is listed under.
    pub fn append(&mut self, item: Item) -> Result<ItemId, StoreError> {
        tracing::info!(name = item.name(), stock = item.stock(), "appending item");
        self.items.push(item);
        let id = ItemId::from_index(self.items.len() - 1);
        self.save()?;
        Ok(id)
    }

    /// Remove the item at the 0-based `index` and save.
    ///
    /// Items after `index` move one position earlier. An out-of-range index
    /// changes nothing and writes nothing.
    pub fn delete_at(&mut self, index: usize) -> Result<Item, StoreError> {
        let len = self.items.len();
        if index >= len {
            tracing::warn!(index, len, "invalid index");
            return Err(StoreError::InvalidIndex { index, len });
        }

        let removed = self.items.remove(index);
        tracing::info!(index, name = removed.name(), "deleted item");
        self.save()?;
        Ok(removed)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
