//! Addressed node data model
//!
//! A node is one key/value unit found on a line, together with the address that
//! locates it in the document tree and the source range it spans. The host editor
//! consumes ranges for click-to-navigate targets and folding; multiple nodes exist
//! per line when the line carries an inline-flow structure.

use serde::{Deserialize, Serialize};

use super::address::Address;

/// A zero-based (line, character) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub character: usize,
}

/// A start/end pair of positions marking a node's span.
///
/// Character offsets count `char`s from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Pos,
    pub end: Pos,
}

impl Range {
    /// A range confined to a single line, from `start` to `end` character offsets.
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Range {
            start: Pos { line, character: start },
            end: Pos { line, character: end },
        }
    }
}

/// One addressed unit of content on a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Address of this node: the enclosing key chain joined with the delimiter,
    /// including the node's own key when the line introduces one.
    pub address: Address,
    /// The key token, empty for continuation lines that fall through to the
    /// enclosing address.
    pub key: String,
    /// The raw value text, with any anchor marker already stripped. Empty for
    /// pure container keys.
    pub value: String,
    /// Name of the reference-definition marker preceding the value, without its
    /// sigil. Empty when the value defines no anchor.
    pub anchor: String,
    /// Span of the key and value on the source line.
    pub range: Range,
    /// Position of this node within its line's node list.
    pub index: usize,
}
