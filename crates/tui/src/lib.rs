//! `stockroom-tui`
//!
//! **Responsibility:** terminal front end for the inventory store.
//!
//! This crate provides:
//! - Environment-based configuration
//! - Form state and boundary validation (the store never sees raw text)
//! - The app controller that turns form actions into store calls
//! - Key mapping and ratatui rendering
//!
//! The UI is a **thin shell** around [`stockroom_inventory::InventoryStore`].

pub mod app;
pub mod config;
pub mod form;
pub mod input;
pub mod session;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use form::{FormError, InventoryForm};
pub use input::Action;
pub use session::TerminalSession;
