//! The three line grammars
//!
//! One grammar tokenizes the scene file itself; two more tokenize the embedded
//! sub-languages that appear as values. Each is a plain logos lexer over a single
//! line of text, with no state of its own: line boundaries, addressing and grammar
//! choice all belong to the dispatcher.

pub mod host;
pub mod script;
pub mod shader;

pub use host::HostToken;
pub use script::ScriptToken;
pub use shader::ShaderToken;
