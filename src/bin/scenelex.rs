//! Command-line interface for scenelex
//! This binary is used to inspect how a scene file tokenizes and addresses.
//!
//! Usage:
//!   scenelex tokenize `<path>` [--indent-unit `<n>`]   - Print per-line tokens as JSON
//!   scenelex addresses `<path>` [--indent-unit `<n>`]  - Print per-line addressed nodes as JSON

use clap::{Arg, Command};

use scenelex::scene::{ContentLookup, NoDocument, Tokenizer, TokenizerConfig, YamlDocument};

fn main() {
    let matches = Command::new("scenelex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting how scene files tokenize and address")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a scene file and print per-line tokens as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the scene file")
                        .required(true)
                        .index(1),
                )
                .arg(indent_unit_arg()),
        )
        .subcommand(
            Command::new("addresses")
                .about("Resolve a scene file and print per-line addressed nodes as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the scene file")
                        .required(true)
                        .index(1),
                )
                .arg(indent_unit_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokenize", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let indent_unit = *sub.get_one::<usize>("indent-unit").unwrap();
            handle_tokenize_command(path, indent_unit);
        }
        Some(("addresses", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let indent_unit = *sub.get_one::<usize>("indent-unit").unwrap();
            handle_addresses_command(path, indent_unit);
        }
        _ => unreachable!(),
    }
}

fn indent_unit_arg() -> Arg {
    Arg::new("indent-unit")
        .long("indent-unit")
        .help("Columns per indentation level")
        .value_parser(clap::value_parser!(usize))
        .default_value("4")
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(path: &str, indent_unit: usize) {
    let source = read_source(path);
    // An unparseable document only disables script-value detection; tokenization
    // itself never needs the parsed tree.
    let document = YamlDocument::from_source(&source).ok();
    let lookup: &dyn ContentLookup = match &document {
        Some(document) => document,
        None => &NoDocument,
    };
    let tokenizer = Tokenizer::with_config(lookup, TokenizerConfig { indent_unit });

    let (lines, _) = tokenizer.tokenize_document(&source);
    let output: Vec<serde_json::Value> = lines
        .iter()
        .enumerate()
        .map(|(line, tokens)| {
            serde_json::json!({
                "line": line,
                "tokens": tokens
                    .iter()
                    .map(|(token, span)| {
                        serde_json::json!({ "token": token, "start": span.start, "end": span.end })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    print_json(&output);
}

/// Handle the addresses command
fn handle_addresses_command(path: &str, indent_unit: usize) {
    let source = read_source(path);
    let document = YamlDocument::from_source(&source).ok();
    let lookup: &dyn ContentLookup = match &document {
        Some(document) => document,
        None => &NoDocument,
    };
    let tokenizer = Tokenizer::with_config(lookup, TokenizerConfig { indent_unit });

    let mut state = tokenizer.start_state();
    let mut output: Vec<serde_json::Value> = Vec::new();
    for line in source.lines() {
        tokenizer.tokenize_line(line, &mut state);
        output.push(serde_json::json!({
            "line": state.line - 1,
            "nodes": state.nodes,
        }));
    }
    print_json(&output);
}

fn print_json(output: &[serde_json::Value]) {
    match serde_json::to_string_pretty(output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}
