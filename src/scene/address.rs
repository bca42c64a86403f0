//! Key addresses
//!
//!     Every line of a scene file sits under a chain of keys, and that chain is what
//!     the rest of the tokenizer reasons about: classification, grammar switching and
//!     click targets are all keyed by it. The chain is carried around as a single
//!     delimiter-joined string, the "address", so it can be compared, truncated and
//!     handed to the document model without walking any tree.
//!
//!     The delimiter is reserved: key names never contain it, so splitting an address
//!     always recovers the original key sequence. One degenerate case is load-bearing:
//!     splitting the empty address yields a single empty key. The inline-flow parser
//!     relies on that quirk (its key stack starts at the empty key, so flow addresses
//!     carry a leading delimiter) and downstream joins must keep reproducing it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved delimiter between key names in an address.
pub const ADDRESS_DELIMITER: char = ':';

/// A delimiter-joined path of key names locating a node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Self {
        Address(raw.into())
    }

    /// Build an address by joining key names with the delimiter.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Self {
        Address(address_from_keys(keys))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key sequence of this address. The empty address yields one empty key.
    pub fn keys(&self) -> Vec<String> {
        keys_from_address(&self.0)
    }

    /// An address keeping only the first `level` keys of this one.
    pub fn truncate(&self, level: usize) -> Address {
        Address(truncate_address(&self.0, level))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Address(raw.to_string())
    }
}

/// Split an address into its key names.
///
/// Total: any string is a valid address. Splitting the empty address yields a
/// one-element sequence containing the empty key, and callers depend on that.
pub fn keys_from_address(address: &str) -> Vec<String> {
    address
        .split(ADDRESS_DELIMITER)
        .map(|key| key.to_string())
        .collect()
}

/// Join key names into an address string.
pub fn address_from_keys<S: AsRef<str>>(keys: &[S]) -> String {
    keys.iter()
        .map(|key| key.as_ref())
        .collect::<Vec<_>>()
        .join(&ADDRESS_DELIMITER.to_string())
}

/// Keep the first `level` keys of an address.
pub fn truncate_address(address: &str, level: usize) -> String {
    let keys = keys_from_address(address);
    address_from_keys(&keys[..level.min(keys.len())])
}
