//! Inventory domain module.
//!
//! An ordered list of [`Item`] records owned by an [`InventoryStore`] that
//! rewrites its [`Backend`] in full after every mutation.

pub mod backend;
pub mod codec;
pub mod item;
pub mod store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use codec::DecodePolicy;
pub use item::Item;
pub use store::{InventoryStore, StoreError};
