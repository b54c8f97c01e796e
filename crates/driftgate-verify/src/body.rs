//! Body comparator: line-oriented equality after comment/blank stripping.

use driftgate_core::types::{CallableDefinition, Drift};

/// Outcome of comparing two statement bodies.
#[derive(Debug, Clone)]
pub struct BodyComparison {
    pub matched: bool,
    pub drift: Option<Drift>,
}

/// Drop every line that trims to empty or starts a `#` comment. The surviving
/// lines keep their original text (indentation included), in order.
pub fn normalize_body(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .cloned()
        .collect()
}

/// Compare normalized bodies element-wise.
///
/// Strict by design: no token-level or AST-level fuzziness. The generator is
/// only permitted to add documentation lines, so anything beyond comment and
/// blank insertions is drift. This also means pure reformatting fails the
/// gate — the tool is a safety gate, not a style linter.
pub fn compare_bodies(before: &CallableDefinition, after: &CallableDefinition) -> BodyComparison {
    let before_lines = normalize_body(&before.body_lines);
    let after_lines = normalize_body(&after.body_lines);

    if before_lines == after_lines {
        BodyComparison {
            matched: true,
            drift: None,
        }
    } else {
        BodyComparison {
            matched: false,
            drift: Some(Drift::Body {
                callable: before.qualified_name.clone(),
                before_lines,
                after_lines,
            }),
        }
    }
}
