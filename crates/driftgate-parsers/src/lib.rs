//! Static Python discovery for driftgate.
//!
//! Decomposes a code unit (a `.py` file or in-memory source text) into an
//! ordered collection of callable definitions without executing any of its
//! top-level statements. Parsing is tree-sitter based, which keeps the
//! arbitrary-code-execution risk of runtime introspection out of the gate.

pub mod python;
pub mod treesitter;

pub use python::{load_unit, parse_unit};
pub use treesitter::LoadError;
