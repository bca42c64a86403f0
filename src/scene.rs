//! Addressed tokenization of scene configuration files
//!
//! Scene files are YAML-like declarative documents that embed two sub-languages as
//! values: shader source at fixed structural positions under `styles`, and
//! scripting function literals wherever the document model says a value is one.
//! This module is the engine an editor drives once per line: it keeps the
//! hierarchical key address current from indentation alone, emits addressed nodes
//! for folding and click targets, and swaps the active grammar mid-document
//! without a full re-parse.
//!
//! The pieces, leaf-first:
//!
//! - [`address`]: the delimiter-joined key-path representation.
//! - [`node`]: the addressed node and source-range data model.
//! - [`state`]: the per-document incremental state the host editor clones.
//! - [`document`]: the content-lookup collaborator seam.
//! - [`classify`]: semantic predicates over addresses.
//! - [`flow`]: the single-line `{...}` structure parser.
//! - [`resolver`]: the per-line key-stack and addressing machine.
//! - [`grammars`]: the host, shader and script line lexers.
//! - [`dispatch`]: the grammar-switching entry point.

pub mod address;
pub mod classify;
pub mod dispatch;
pub mod document;
pub mod flow;
pub mod grammars;
pub mod node;
pub mod resolver;
pub mod state;

pub use address::Address;
pub use dispatch::{Token, Tokenizer, TokenizerConfig};
pub use document::{ContentLookup, NoDocument, YamlDocument};
pub use node::{Node, Pos, Range};
pub use state::{EmbeddedState, GrammarMode, ParserState};
