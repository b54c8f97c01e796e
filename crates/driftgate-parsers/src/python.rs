//! Discovery: decompose Python source into ordered callable definitions.
//!
//! Covers every top-level `def` and every method of every top-level class,
//! one container level deep. Nested functions and nested classes are not
//! recursed into. Decorated definitions unwrap to the inner `def`.

use std::path::Path;

use tree_sitter::Node;

use driftgate_core::types::{CallableDefinition, CallableKind, CodeUnit, Parameter};

use crate::treesitter::{first_error_line, LoadError, PythonParser};

/// Read a `.py` file and decompose it into a code unit.
pub fn load_unit(path: &Path) -> Result<CodeUnit, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    parse_unit(&name, &source)
}

/// Decompose in-memory Python source into a code unit.
///
/// Sources with syntax errors are rejected: a unit the interpreter could not
/// load is not comparable, and failing closed is the point of the gate.
pub fn parse_unit(name: &str, source: &str) -> Result<CodeUnit, LoadError> {
    let mut parser = PythonParser::new()?;
    let tree = parser.parse(source)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(LoadError::Syntax {
            unit: name.to_string(),
            line: first_error_line(root),
        });
    }

    let bytes = source.as_bytes();
    let lines: Vec<&str> = source.lines().collect();
    let mut callables = Vec::new();

    for i in 0..root.named_child_count() {
        let Some(item) = root.named_child(i) else { continue };
        let item = unwrap_decorated(item);
        match item.kind() {
            "function_definition" => {
                if let Some(def) = extract_callable(item, None, bytes, &lines) {
                    callables.push(def);
                }
            }
            "class_definition" => {
                let class_name = item
                    .child_by_field_name("name")
                    .map(|n| node_text(n, bytes).to_string());
                let Some(class_name) = class_name else { continue };
                let Some(body) = item.child_by_field_name("body") else { continue };
                for j in 0..body.named_child_count() {
                    let Some(member) = body.named_child(j) else { continue };
                    let member = unwrap_decorated(member);
                    if member.kind() == "function_definition" {
                        if let Some(def) =
                            extract_callable(member, Some(class_name.as_str()), bytes, &lines)
                        {
                            callables.push(def);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(CodeUnit {
        name: name.to_string(),
        callables,
    })
}

/// Peel a `decorated_definition` down to its inner definition node.
fn unwrap_decorated(node: Node<'_>) -> Node<'_> {
    if node.kind() == "decorated_definition" {
        if let Some(inner) = node.child_by_field_name("definition") {
            return inner;
        }
    }
    node
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Collapse whitespace runs so formatting differences in annotations and
/// default expressions don't register as drift.
fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_callable(
    node: Node<'_>,
    container: Option<&str>,
    source: &[u8],
    lines: &[&str],
) -> Option<CallableDefinition> {
    let name = node_text(node.child_by_field_name("name")?, source).to_string();
    let (qualified_name, kind) = match container {
        Some(class) => (format!("{class}.{name}"), CallableKind::Method),
        None => (name, CallableKind::Function),
    };

    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| extract_parameters(p, source))
        .unwrap_or_default();

    let body = node.child_by_field_name("body")?;
    let (docstring, body_lines) = extract_body(body, source, lines);

    Some(CallableDefinition {
        qualified_name,
        kind,
        container: container.map(str::to_string),
        parameters,
        body_lines,
        docstring,
        line_start: node.start_position().row as u32 + 1,
        line_end: node.end_position().row as u32 + 1,
    })
}

fn extract_parameters(params: Node<'_>, source: &[u8]) -> Vec<Parameter> {
    let mut out = Vec::new();
    for i in 0..params.named_child_count() {
        let Some(child) = params.named_child(i) else { continue };
        match child.kind() {
            "identifier" => out.push(Parameter::new(node_text(child, source))),
            "typed_parameter" => {
                // Name is the first named child (identifier or splat pattern),
                // the annotation sits in the `type` field.
                let name = child
                    .named_child(0)
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                let annotation = child
                    .child_by_field_name("type")
                    .map(|t| collapse_ws(node_text(t, source)));
                out.push(Parameter {
                    name,
                    annotation,
                    default: None,
                });
            }
            "default_parameter" => {
                let name = child
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                let default = child
                    .child_by_field_name("value")
                    .map(|v| collapse_ws(node_text(v, source)));
                out.push(Parameter {
                    name,
                    annotation: None,
                    default,
                });
            }
            "typed_default_parameter" => {
                let name = child
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                let annotation = child
                    .child_by_field_name("type")
                    .map(|t| collapse_ws(node_text(t, source)));
                let default = child
                    .child_by_field_name("value")
                    .map(|v| collapse_ws(node_text(v, source)));
                out.push(Parameter {
                    name,
                    annotation,
                    default,
                });
            }
            "comment" => {}
            // *args, **kwargs, bare * and / markers: the raw text is the
            // positional identity we compare against.
            _ => out.push(Parameter::new(node_text(child, source))),
        }
    }
    out
}

/// Split a function body into an optional leading docstring and raw body lines.
///
/// The docstring is a first statement that is a bare string expression. Body
/// lines run from the first real statement to the end of the block, taken
/// verbatim from the source so the comparator sees exactly what was written.
fn extract_body(body: Node<'_>, source: &[u8], lines: &[&str]) -> (Option<String>, Vec<String>) {
    let mut docstring = None;
    let mut first_stmt: Option<Node<'_>> = None;

    for i in 0..body.named_child_count() {
        let Some(stmt) = body.named_child(i) else { continue };
        if stmt.kind() == "comment" {
            continue;
        }
        if docstring.is_none() && first_stmt.is_none() && is_docstring(stmt) {
            docstring = Some(node_text(stmt, source).to_string());
            continue;
        }
        first_stmt = Some(stmt);
        break;
    }

    let body_lines = match first_stmt {
        Some(stmt) => {
            let start = stmt.start_position().row;
            let end = (body.end_position().row).min(lines.len().saturating_sub(1));
            if start <= end {
                lines[start..=end].iter().map(|l| l.to_string()).collect()
            } else {
                Vec::new()
            }
        }
        None => Vec::new(),
    };

    (docstring, body_lines)
}

fn is_docstring(stmt: Node<'_>) -> bool {
    stmt.kind() == "expression_statement"
        && stmt.named_child_count() == 1
        && stmt
            .named_child(0)
            .map(|n| n.kind() == "string")
            .unwrap_or(false)
}
