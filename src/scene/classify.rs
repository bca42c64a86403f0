//! Semantic classification of addresses
//!
//!     Grammar switching is keyed on what an address *means*, not on what the line
//!     looks like. Shader blocks live at a fixed structural position: under the
//!     top-level `styles` key, beneath a `shaders:blocks` path, named by one of six
//!     reserved block names. Script values can appear anywhere a value is a function
//!     literal, so that classification has to read the current content through the
//!     document-model collaborator.
//!
//!     All predicates here are total. A lookup that fails, an address that resolves
//!     to nothing, a value that is not text: every failure mode classifies as "not
//!     embedded" and tokenization carries on in the host grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use super::address::{keys_from_address, Address};
use super::document::ContentLookup;

/// The top-level key under which shader blocks live.
pub const SHADER_ROOT_KEY: &str = "styles";

/// The six reserved shader block names.
pub const SHADER_BLOCK_NAMES: [&str; 6] =
    ["global", "width", "position", "normal", "color", "filter"];

/// Opening shape of a scripting function literal, tolerant of a leading
/// block-string marker and surrounding whitespace.
static SCRIPT_OPENING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\|\s*)?function\s*\([^)]*\)\s*\{").expect("script opening pattern compiles")
});

/// True iff `address` names a shader block: `styles:<name>:shaders:blocks:<block>`
/// with `<block>` one of the six reserved names.
pub fn is_shader_block(address: &str) -> bool {
    let keys = keys_from_address(address);
    keys.len() == 5
        && keys[0] == SHADER_ROOT_KEY
        && keys[2] == "shaders"
        && keys[3] == "blocks"
        && SHADER_BLOCK_NAMES.contains(&keys[4].as_str())
}

fn is_named_block(address: &str, name: &str) -> bool {
    is_shader_block(address) && address.ends_with(name)
}

pub fn is_global_block(address: &str) -> bool {
    is_named_block(address, "global")
}

pub fn is_width_block(address: &str) -> bool {
    is_named_block(address, "width")
}

pub fn is_position_block(address: &str) -> bool {
    is_named_block(address, "position")
}

pub fn is_normal_block(address: &str) -> bool {
    is_named_block(address, "normal")
}

pub fn is_color_block(address: &str) -> bool {
    is_named_block(address, "color")
}

pub fn is_filter_block(address: &str) -> bool {
    is_named_block(address, "filter")
}

/// True iff the current content at `address` opens a scripting function literal.
///
/// Reads the value through the document-model collaborator; an unresolvable
/// address is never an error, it is a negative classification.
pub fn is_script_value<L: ContentLookup + ?Sized>(address: &str, lookup: &L) -> bool {
    match lookup.lookup(&Address::new(address)) {
        Some(content) => SCRIPT_OPENING.is_match(&content),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::document::NoDocument;
    use rstest::rstest;

    #[rstest]
    #[case("styles:foo:shaders:blocks:color", true)]
    #[case("styles:foo:shaders:blocks:global", true)]
    #[case("styles:foo:shaders:blocks:filter", true)]
    #[case("styles:foo:bar:color", false)]
    #[case("layers:foo:shaders:blocks:color", false)]
    #[case("styles:foo:shaders:blocks:fragment", false)]
    #[case("styles:foo:shaders:blocks:color:extra", false)]
    #[case("", false)]
    fn test_shader_block_classification(#[case] address: &str, #[case] expected: bool) {
        assert_eq!(is_shader_block(address), expected);
    }

    #[test]
    fn test_suffix_variants_test_one_block_each() {
        let address = "styles:foo:shaders:blocks:normal";
        assert!(is_normal_block(address));
        assert!(!is_color_block(address));
        assert!(!is_global_block(address));
        assert!(!is_width_block(address));
        assert!(!is_position_block(address));
        assert!(!is_filter_block(address));
    }

    struct FixedContent(&'static str);

    impl ContentLookup for FixedContent {
        fn lookup(&self, _address: &Address) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[rstest]
    #[case("function () { return 1; }", true)]
    #[case("|\n    function (feature) { return feature.name; }", true)]
    #[case("  function(a, b) {", true)]
    #[case("function", false)]
    #[case("global.lighten(color)", false)]
    #[case("", false)]
    fn test_script_opening_pattern(#[case] content: &'static str, #[case] expected: bool) {
        assert_eq!(is_script_value("layers:roads:draw:color", &FixedContent(content)), expected);
    }

    #[test]
    fn test_lookup_failure_is_negative() {
        assert!(!is_script_value("layers:roads:draw:color", &NoDocument));
    }
}
