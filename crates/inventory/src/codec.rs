//! On-disk encoding of the inventory: an indented JSON array of items.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::item::Item;

/// One space per nesting level, matching existing inventory files.
const INDENT: &[u8] = b" ";

/// What to do when stored content is present but is not a valid inventory.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Report the content as undecodable.
    #[default]
    Strict,
    /// Start with an empty inventory and log a warning.
    Lenient,
}

/// Encode the full inventory.
///
/// Output is deterministic for a given sequence and has no trailing newline.
pub fn encode(items: &[Item]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(64 * items.len().max(1));
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    items.serialize(&mut ser)?;
    Ok(buf)
}

/// Decode stored bytes into an ordered sequence of items.
///
/// Blank content and the `null` literal decode to an empty inventory.
pub fn decode(bytes: &[u8]) -> Result<Vec<Item>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let items: Option<Vec<Item>> = serde_json::from_slice(bytes)?;
    Ok(items.unwrap_or_default())
}
