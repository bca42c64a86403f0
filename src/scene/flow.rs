//! Inline-flow structures
//!
//!     A value can pack a whole nested mapping onto one line: `draw: {lines: {order:
//!     3, color: red}}`. The resolver hands such lines to this module, which walks
//!     the text once and emits one addressed node per key encountered, in source
//!     order.
//!
//!     Only the flat and shallow forms the configuration format actually uses are
//!     handled here; this is not a general flow-collection grammar. Opening braces
//!     push the pending key onto the flow stack, closing braces pop the most recently
//!     opened key, and the stack starts at the empty key so every flow address
//!     carries a leading delimiter. The caller owns prefixing the enclosing address
//!     and shifting columns to absolute line positions.
//!
//!     Malformed input never raises: scanning stops at the first shape it does not
//!     recognize and whatever nodes were parsed up to that point are returned.

use super::address::Address;
use super::node::{Node, Range};
use super::resolver::is_key_char;

/// Parse the content of a single-line flow structure into a flat node list.
///
/// `content` is the line text from the owning key onward; `line` is the owning
/// line number stamped into every range. Ranges are column offsets relative to
/// the start of `content`.
pub fn parse_flow(content: &str, line: usize) -> Vec<Node> {
    let chars: Vec<char> = content.chars().collect();
    let mut nodes: Vec<Node> = Vec::new();
    let mut stack: Vec<String> = vec![String::new()];
    let mut i = 0;

    loop {
        while i < chars.len() && (chars[i].is_whitespace() || chars[i] == ',') {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }
        if chars[i] == '}' {
            // Closing markers pop the most recently opened key; the floor is the
            // synthetic empty root key.
            if stack.len() > 1 {
                stack.pop();
            }
            i += 1;
            continue;
        }

        let key_start = i;
        while i < chars.len() && is_key_char(chars[i]) {
            i += 1;
        }
        if i == key_start {
            break;
        }
        let key: String = chars[key_start..i].iter().collect();
        let key_end = i;

        while i < chars.len() && chars[i] == ' ' {
            i += 1;
        }
        if i >= chars.len() || chars[i] != ':' {
            break;
        }
        i += 1;
        while i < chars.len() && chars[i] == ' ' {
            i += 1;
        }

        if i < chars.len() && chars[i] == '{' {
            nodes.push(Node {
                address: flow_address(&stack, &key),
                key: key.clone(),
                value: String::new(),
                anchor: String::new(),
                range: Range::on_line(line, key_start, key_end),
                index: nodes.len(),
            });
            stack.push(key);
            i += 1;
            continue;
        }

        let value_start = i;
        if i < chars.len() && chars[i] == '[' {
            // Bracketed numeric lists (vector literals) are captured whole; their
            // commas are not pair separators.
            i += 1;
            while i < chars.len() && chars[i] != ']' {
                i += 1;
            }
            if i < chars.len() {
                i += 1;
            }
        } else {
            while i < chars.len() && chars[i] != ',' && chars[i] != '}' {
                i += 1;
            }
        }
        let mut value_end = i;
        while value_end > value_start && chars[value_end - 1] == ' ' {
            value_end -= 1;
        }
        let value: String = chars[value_start..value_end].iter().collect();
        nodes.push(Node {
            address: flow_address(&stack, &key),
            key,
            value,
            anchor: String::new(),
            range: Range::on_line(line, key_start, value_end),
            index: nodes.len(),
        });
    }

    nodes
}

/// Join the flow-stack keys down to one node's own key.
fn flow_address(stack: &[String], key: &str) -> Address {
    let mut keys: Vec<&str> = stack.iter().map(|k| k.as_str()).collect();
    keys.push(key);
    Address::from_keys(&keys)
}

/// Whether a captured value has the 3-vector literal shape: a bracketed list of
/// exactly three comma-separated numerics.
pub fn is_vector_value(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return false;
    };
    let parts: Vec<&str> = inner.split(',').collect();
    parts.len() == 3 && parts.iter().all(|part| part.trim().parse::<f64>().is_ok())
}
