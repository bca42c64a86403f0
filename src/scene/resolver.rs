//! Line address resolution
//!
//!     This is the stateful heart of the tokenizer. Given one raw line and the state
//!     accumulated from the lines above it, it decides where in the key tree the line
//!     sits, records the addressed nodes the line contributes, and advances the
//!     state for the next line.
//!
//!     Indentation is the only structure: a key at depth `d` stays in scope while an
//!     ancestor chain at depths `0..d-1` remains open from previous lines. The key
//!     stack mirrors that directly. Reconciling the stack against a new line's level
//!     is a single operation: drop everything at the new depth and deeper, pad any
//!     skipped levels with empty keys, then push the new key. A deeper line pushes, a
//!     sibling replaces, a shallower line pops the abandoned chain.
//!
//!     Lines that do not look like `key: value` at all (blank lines, comments,
//!     continuation content of block strings) still produce a node: addressing falls
//!     through to the nearest enclosing key chain. That fall-through is what keeps
//!     embedded grammar spans addressed while their content lines carry no keys.
//!
//! Line shape
//!
//!     The accepted key/value shape is scanned by hand and pinned by the fixtures in
//!     the test module: optional leading whitespace, a key of ASCII alphanumerics
//!     plus `_ - / .`, optional spaces, a `:` separator, optional spaces, then the
//!     raw value to end of line. Tabs in the leading run count one indent unit each.

use super::address::{address_from_keys, Address};
use super::flow;
use super::node::{Node, Range};
use super::state::ParserState;

/// Characters permitted in a key token.
pub(crate) fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/' | '.')
}

/// A successful match of the key/value line shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyMatch {
    /// Expanded width of the leading whitespace run, tabs counting one unit.
    pub indent_width: usize,
    /// Character column where the key starts.
    pub key_start: usize,
    /// Byte offset where the key starts.
    pub key_start_byte: usize,
    /// Character column one past the key.
    pub key_end: usize,
    /// Character column where the value starts (content end when empty).
    pub value_start: usize,
    /// Byte offset where the value starts.
    pub value_start_byte: usize,
    /// Character column one past the trimmed value.
    pub value_end: usize,
    pub key: String,
    /// Raw value text, trailing whitespace trimmed.
    pub value: String,
}

/// Scan one line against the key/value shape. `None` means the line does not
/// introduce a key and addressing falls through.
pub(crate) fn scan_key_line(line: &str, indent_unit: usize) -> Option<KeyMatch> {
    let mut iter = line.char_indices().peekable();
    let mut col = 0;
    let mut width = 0;

    while let Some(&(_, c)) = iter.peek() {
        match c {
            ' ' => width += 1,
            '\t' => width += indent_unit,
            _ => break,
        }
        iter.next();
        col += 1;
    }

    let key_start = col;
    let key_start_byte = iter.peek().map(|&(i, _)| i).unwrap_or(line.len());
    let mut key = String::new();
    while let Some(&(_, c)) = iter.peek() {
        if !is_key_char(c) {
            break;
        }
        key.push(c);
        iter.next();
        col += 1;
    }
    if key.is_empty() {
        return None;
    }
    let key_end = col;

    while let Some(&(_, c)) = iter.peek() {
        if c != ' ' && c != '\t' {
            break;
        }
        iter.next();
        col += 1;
    }
    match iter.peek() {
        Some(&(_, ':')) => {
            iter.next();
            col += 1;
        }
        _ => return None,
    }
    while let Some(&(_, c)) = iter.peek() {
        if c != ' ' && c != '\t' {
            break;
        }
        iter.next();
        col += 1;
    }

    let value_start = col;
    let value_start_byte = iter.peek().map(|&(i, _)| i).unwrap_or(line.len());
    let value = line[value_start_byte..].trim_end();
    let value_end = value_start + value.chars().count();

    Some(KeyMatch {
        indent_width: width,
        key_start,
        key_start_byte,
        key_end,
        value_start,
        value_start_byte,
        value_end,
        key,
        value: value.to_string(),
    })
}

/// Per-line scan summary handed to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineProfile {
    /// Expanded leading-whitespace width of the line.
    pub indent_width: usize,
    /// Byte offset where the value begins, when the line matched the key shape.
    pub value_start: Option<usize>,
    /// Whether the line holds no content at all.
    pub blank: bool,
}

/// Expanded width of a line's leading whitespace run.
fn leading_indent_width(line: &str, indent_unit: usize) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += indent_unit,
            _ => break,
        }
    }
    width
}

/// Drop stack entries at `level` and deeper, pad skipped levels with empty keys,
/// and install `key` at `level`.
fn set_key(stack: &mut Vec<String>, level: usize, key: String) {
    stack.truncate(level);
    while stack.len() < level {
        stack.push(String::new());
    }
    stack.push(key);
}

/// Resolve one raw line against `state`, refreshing the key stack, emitting the
/// line's nodes into `state.nodes`, and advancing the line counter. The counter
/// advances on every call, blank lines included.
pub fn resolve_line(raw_line: &str, state: &mut ParserState, indent_unit: usize) -> LineProfile {
    let line = raw_line.trim_end_matches(|c| c == '\n' || c == '\r');
    let unit = indent_unit.max(1);
    let line_no = state.line;

    let profile = match scan_key_line(line, unit) {
        None => {
            let node = Node {
                address: state.address(),
                key: String::new(),
                value: String::new(),
                anchor: String::new(),
                range: Range::on_line(line_no, 0, line.chars().count()),
                index: 0,
            };
            state.nodes = vec![node];
            LineProfile {
                indent_width: leading_indent_width(line, unit),
                value_start: None,
                blank: line.trim().is_empty(),
            }
        }
        Some(m) => {
            let level = m.indent_width / unit;
            set_key(&mut state.key_stack, level, m.key.clone());
            state.key_level = level;

            if m.value.starts_with('{') {
                // The flow parser re-reads the key so it can address the whole
                // structure; shift its relative columns out to line columns and
                // prefix the ancestor chain.
                let outer = address_from_keys(&state.key_stack[..level]);
                let mut nodes = flow::parse_flow(&line[m.key_start_byte..], line_no);
                for (index, node) in nodes.iter_mut().enumerate() {
                    node.address = Address::new(format!("{}{}", outer, node.address.as_str()));
                    node.range.start.character += m.key_start;
                    node.range.end.character += m.key_start;
                    node.index = index;
                }
                state.nodes = nodes;
            } else {
                let (anchor, value) = split_anchor(&m.value);
                let node = Node {
                    address: state.address(),
                    key: m.key.clone(),
                    value,
                    anchor,
                    range: Range::on_line(line_no, m.key_start, m.value_end),
                    index: 0,
                };
                state.nodes = vec![node];
            }
            LineProfile {
                indent_width: m.indent_width,
                value_start: Some(m.value_start_byte),
                blank: false,
            }
        }
    };

    state.line += 1;
    profile
}

/// Split a reference-definition marker off the start of a value. The marker is
/// only recognized at the very start and is excluded from the stored value.
fn split_anchor(value: &str) -> (String, String) {
    if let Some(stripped) = value.strip_prefix('&') {
        let name_len = stripped
            .find(|c: char| c.is_whitespace())
            .unwrap_or(stripped.len());
        if name_len > 0 {
            let name = stripped[..name_len].to_string();
            let rest = stripped[name_len..].trim_start().to_string();
            return (name, rest);
        }
    }
    (String::new(), value.to_string())
}
