//! Document-model collaborator
//!
//! Classifying a value as a function literal needs the current textual content at
//! an address, and that content belongs to the host application's document model,
//! not to this crate. The seam is the [`ContentLookup`] trait: a synchronous,
//! side-effect-free read that may fail for any reason, in which case classification
//! simply answers "not embedded".
//!
//! Two implementations ship here. [`NoDocument`] never resolves anything and is the
//! right collaborator when only addressing is wanted. [`YamlDocument`] walks a
//! parsed YAML tree by address keys; tests and the command-line tool use it, and a
//! live editor can substitute its own model behind the same trait. A lookup backed
//! by a mutable live model may lag an edit by one tokenize cycle; that staleness is
//! tolerated rather than synchronized away.

use super::address::Address;

/// Synchronous read of the value text at an address.
pub trait ContentLookup {
    /// The textual content at `address`, or `None` if the address cannot be
    /// resolved. Failures are never fatal to the caller.
    fn lookup(&self, address: &Address) -> Option<String>;
}

/// A lookup that resolves nothing. Addressing still works; embedded-script
/// detection stays off.
#[derive(Debug, Default)]
pub struct NoDocument;

impl ContentLookup for NoDocument {
    fn lookup(&self, _address: &Address) -> Option<String> {
        None
    }
}

/// A content lookup backed by a parsed YAML document.
#[derive(Debug)]
pub struct YamlDocument {
    root: serde_yaml::Value,
}

impl YamlDocument {
    /// Parse a source text into a lookup. A scene file is valid YAML, so this is
    /// the whole-document counterpart of the line tokenizer's view of it.
    pub fn from_source(source: &str) -> Result<Self, serde_yaml::Error> {
        let root = serde_yaml::from_str(source)?;
        Ok(YamlDocument { root })
    }

    pub fn from_value(root: serde_yaml::Value) -> Self {
        YamlDocument { root }
    }
}

impl ContentLookup for YamlDocument {
    fn lookup(&self, address: &Address) -> Option<String> {
        let mut value = &self.root;
        for key in address.keys() {
            // Empty keys come from the leading-empty-key join quirk; they do not
            // name mapping entries.
            if key.is_empty() {
                continue;
            }
            value = value.get(key.as_str())?;
        }
        match value {
            serde_yaml::Value::String(text) => Some(text.clone()),
            serde_yaml::Value::Number(number) => Some(number.to_string()),
            serde_yaml::Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}
