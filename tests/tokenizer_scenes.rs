//! Integration tests driving whole scene documents through the tokenizer
//!
//! These exercise the full pipeline on a realistic sample file: addressing from
//! indentation, inline-flow nodes, anchors, and grammar switching into and out of
//! shader blocks and script values.

use std::fs;

use scenelex::scene::flow::is_vector_value;
use scenelex::scene::{
    Address, GrammarMode, Node, ParserState, Token, Tokenizer, YamlDocument,
};

fn read_sample() -> String {
    fs::read_to_string("docs/samples/sample-scene.yaml").expect("Failed to read sample document")
}

struct DrivenScene {
    tokens: Vec<Vec<(Token, std::ops::Range<usize>)>>,
    nodes: Vec<Vec<Node>>,
    state: ParserState,
}

/// Drive the sample line by line, keeping each line's tokens and nodes.
fn drive(source: &str, document: &YamlDocument) -> DrivenScene {
    let tokenizer = Tokenizer::new(document);
    let mut state = tokenizer.start_state();
    let mut tokens = Vec::new();
    let mut nodes = Vec::new();
    for line in source.lines() {
        tokens.push(tokenizer.tokenize_line(line, &mut state));
        nodes.push(state.nodes.clone());
    }
    DrivenScene { tokens, nodes, state }
}

fn line_of(source: &str, needle: &str) -> usize {
    source
        .lines()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("sample contains {:?}", needle))
}

#[test]
fn test_shader_block_lines_are_shader_owned() {
    let source = read_sample();
    let document = YamlDocument::from_source(&source).expect("sample is valid");
    let scene = drive(&source, &document);

    let line = line_of(&source, "color.rgb = vec3(0.5, 0.2, 0.1);");
    assert!(!scene.tokens[line].is_empty());
    assert!(scene.tokens[line]
        .iter()
        .all(|(token, _)| matches!(token, Token::Shader(_))));

    // Content lines fall through to the enclosing block address
    assert_eq!(
        scene.nodes[line][0].address,
        Address::new("styles:rainbow:shaders:blocks:color")
    );
    assert_eq!(scene.nodes[line][0].key, "");
}

#[test]
fn test_script_value_lines_are_script_owned() {
    let source = read_sample();
    let document = YamlDocument::from_source(&source).expect("sample is valid");
    let scene = drive(&source, &document);

    let line = line_of(&source, "return feature.kind");
    assert!(scene.tokens[line]
        .iter()
        .all(|(token, _)| matches!(token, Token::Script(_))));
    assert_eq!(scene.nodes[line][0].address, Address::new("layers:roads:filter"));

    // The entering line keeps its key in the host grammar
    let entering = line_of(&source, "filter: |");
    assert!(matches!(scene.tokens[entering][0], (Token::Host(_), _)));
    assert!(matches!(scene.tokens[entering].last(), Some((Token::Script(_), _))));
}

#[test]
fn test_plain_lines_are_host_owned_after_blocks() {
    let source = read_sample();
    let document = YamlDocument::from_source(&source).expect("sample is valid");
    let scene = drive(&source, &document);

    let line = line_of(&source, "width: 2px");
    assert!(scene.tokens[line]
        .iter()
        .all(|(token, _)| matches!(token, Token::Host(_))));
    assert_eq!(
        scene.nodes[line][0].address,
        Address::new("layers:roads:draw:lines:width")
    );
    assert_eq!(scene.state.mode, GrammarMode::Host);
    assert_eq!(scene.state.line, source.lines().count());
}

#[test]
fn test_inline_flow_line_emits_addressed_nodes() {
    let source = read_sample();
    let document = YamlDocument::from_source(&source).expect("sample is valid");
    let scene = drive(&source, &document);

    let line = line_of(&source, "draw: {polygons:");
    let addresses: Vec<&str> = scene.nodes[line]
        .iter()
        .map(|node| node.address.as_str())
        .collect();
    assert_eq!(
        addresses,
        vec![
            "layers:earth:draw",
            "layers:earth:draw:polygons",
            "layers:earth:draw:polygons:order",
            "layers:earth:draw:polygons:color",
        ]
    );

    let color = &scene.nodes[line][3];
    assert_eq!(color.value, "[0.175, 0.175, 0.175]");
    assert!(is_vector_value(&color.value));

    // Ranges are absolute line columns in source order
    for pair in scene.nodes[line].windows(2) {
        assert!(pair[0].range.start.character < pair[1].range.start.character);
    }
    assert!(scene.nodes[line].iter().all(|node| node.range.start.line == line));
}

#[test]
fn test_anchor_definition_is_captured() {
    let source = read_sample();
    let document = YamlDocument::from_source(&source).expect("sample is valid");
    let scene = drive(&source, &document);

    let line = line_of(&source, "&road-color");
    let node = &scene.nodes[line][0];
    assert_eq!(node.key, "color");
    assert_eq!(node.anchor, "road-color");
    assert_eq!(node.value, "'#88f'");
}

#[test]
fn test_comment_and_blank_lines_keep_addressing() {
    let source = read_sample();
    let document = YamlDocument::from_source(&source).expect("sample is valid");
    let scene = drive(&source, &document);

    // The leading comment falls through to the empty root address
    assert_eq!(scene.nodes[0][0].address, Address::new(""));
    assert!(scene.tokens[0]
        .iter()
        .all(|(token, _)| matches!(token, Token::Host(_))));
}
