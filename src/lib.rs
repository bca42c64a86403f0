//! # scenelex
//!
//! An addressed tokenizer for scene configuration files.
//!
//! The format being tokenized is line- and indentation-based: `key: value` pairs
//! nest by indentation multiples of a configurable unit, values may be one-line
//! flow blocks `{key: value, key: value}`, and two embedded sub-languages appear
//! as values: shader source under a six-name block vocabulary beneath `styles`,
//! and scripting function literals anywhere the document model reports one.
//!
//! The crate is built to sit inside an editor's incremental re-highlighting loop.
//! State is cheap to clone, every call is synchronous and total, and a malformed
//! line can never take the tokenizer down. See the [`scene`] module for the
//! component layout.

pub mod scene;
