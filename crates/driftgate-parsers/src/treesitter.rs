use tree_sitter::{Node, Parser, Tree};

/// Thin wrapper around a tree-sitter parser configured for Python.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self, LoadError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| LoadError::Language(format!("{e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree, LoadError> {
        self.parser
            .parse(source.as_bytes(), None)
            .ok_or(LoadError::ParseFailed)
    }
}

/// Errors raised while resolving a code unit. All variants are fatal: a unit
/// that cannot be read or parsed aborts the whole verification run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("syntax error in `{unit}` at line {line}")]
    Syntax { unit: String, line: u32 },
}

/// Find the first ERROR or MISSING node in document order and return its
/// 1-based line.
pub(crate) fn first_error_line(root: Node<'_>) -> u32 {
    let mut cursor = root.walk();
    let mut line = root.start_position().row as u32 + 1;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            line = node.start_position().row as u32 + 1;
            break;
        }
        // Preorder: children pushed reversed so the leftmost pops first.
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    line
}
