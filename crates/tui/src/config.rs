//! Process configuration read from the environment at startup.

use std::path::PathBuf;

use stockroom_inventory::DecodePolicy;

pub const INVENTORY_FILE_VAR: &str = "STOCKROOM_INVENTORY_FILE";
pub const LENIENT_DECODE_VAR: &str = "STOCKROOM_LENIENT_DECODE";
pub const LOG_FILE_VAR: &str = "STOCKROOM_LOG_FILE";

const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub inventory_file: PathBuf,
    pub log_file: PathBuf,
    pub decode_policy: DecodePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            log_file: default_log_file(),
            decode_policy: DecodePolicy::Strict,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup (unset or empty
    /// values fall back to defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let decode_policy = match get(LENIENT_DECODE_VAR) {
            Some(value) if is_truthy(&value) => DecodePolicy::Lenient,
            _ => DecodePolicy::Strict,
        };

        Self {
            inventory_file: get(INVENTORY_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.inventory_file),
            log_file: get(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            decode_policy,
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from(".stockroom").join("logs").join("stockroom.log")
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
