use serde::{Deserialize, Serialize};

/// The flavour of a callable definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallableKind {
    Function,
    Method,
}

impl CallableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallableKind::Function => "function",
            CallableKind::Method => "method",
        }
    }
}

impl std::fmt::Display for CallableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single formal parameter of a callable.
///
/// `annotation` and `default` hold whitespace-normalized source text of the
/// respective expressions. Defaults compare by value (text) equality; any
/// difference is behavior-changing for callers that omit the argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub annotation: Option<String>,
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        if let Some(ann) = &self.annotation {
            write!(f, ": {ann}")?;
        }
        if let Some(def) = &self.default {
            write!(f, "={def}")?;
        }
        Ok(())
    }
}

/// A function or method extracted from a code unit — structural signature
/// plus raw body lines, independent of any runtime binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallableDefinition {
    /// Fully qualified name within the unit (e.g. "add" or "Account.deposit").
    pub qualified_name: String,
    pub kind: CallableKind,
    /// Containing class name for methods, `None` for top-level functions.
    pub container: Option<String>,
    /// Ordered parameter list — order encodes positional-call semantics.
    pub parameters: Vec<Parameter>,
    /// Raw source lines of the body, excluding a leading docstring.
    pub body_lines: Vec<String>,
    /// Leading docstring, kept apart from the body so documentation passes
    /// can add one without registering as a body edit.
    pub docstring: Option<String>,
    /// First line of the definition (1-based).
    pub line_start: u32,
    /// Last line of the definition (1-based, inclusive).
    pub line_end: u32,
}

impl CallableDefinition {
    /// Render the signature as `name(a, b: int=1)` for display and hashing.
    pub fn render_signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        format!("{}({})", self.qualified_name, params.join(", "))
    }
}

/// A named collection of callable definitions, in source order.
///
/// Transient: built fresh per verification run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeUnit {
    pub name: String,
    pub callables: Vec<CallableDefinition>,
}

impl CodeUnit {
    pub fn find(&self, qualified_name: &str) -> Option<&CallableDefinition> {
        self.callables
            .iter()
            .find(|c| c.qualified_name == qualified_name)
    }
}

/// A single hard-drift violation — a behavior-changing edit that blocks
/// acceptance of the generated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drift {
    /// D001: a default value changed on an otherwise-identical signature.
    DefaultValue {
        callable: String,
        param: String,
        before: Option<String>,
        after: Option<String>,
    },
    /// D002: normalized body lines differ.
    Body {
        callable: String,
        before_lines: Vec<String>,
        after_lines: Vec<String>,
    },
    /// D003: a callable present before is missing after.
    Removed { callable: String },
}

impl Drift {
    pub fn code(&self) -> &'static str {
        match self {
            Drift::DefaultValue { .. } => "D001",
            Drift::Body { .. } => "D002",
            Drift::Removed { .. } => "D003",
        }
    }

    pub fn callable(&self) -> &str {
        match self {
            Drift::DefaultValue { callable, .. } => callable,
            Drift::Body { callable, .. } => callable,
            Drift::Removed { callable } => callable,
        }
    }
}

impl std::fmt::Display for Drift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Drift::DefaultValue {
                callable,
                param,
                before,
                after,
            } => write!(
                f,
                "default value mismatch for parameter `{param}` of `{callable}`: {} vs {}",
                render_default(before),
                render_default(after),
            ),
            Drift::Body { callable, .. } => {
                write!(f, "body mismatch for `{callable}`")
            }
            Drift::Removed { callable } => {
                write!(f, "callable `{callable}` was removed")
            }
        }
    }
}

fn render_default(value: &Option<String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => "<none>".to_string(),
    }
}

/// Composite hard-drift error raised once per run, after every callable has
/// been checked, so a single pass reports all affected callables.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{} hard drift violation(s) in `{unit}`", .violations.len())]
pub struct AlteredCodeError {
    pub unit: String,
    pub violations: Vec<Drift>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callable(name: &str, params: Vec<Parameter>) -> CallableDefinition {
        CallableDefinition {
            qualified_name: name.to_string(),
            kind: CallableKind::Function,
            container: None,
            parameters: params,
            body_lines: vec![],
            docstring: None,
            line_start: 1,
            line_end: 1,
        }
    }

    #[test]
    fn render_signature_with_annotation_and_default() {
        let def = callable(
            "add",
            vec![
                Parameter::new("a"),
                Parameter {
                    name: "b".to_string(),
                    annotation: Some("int".to_string()),
                    default: Some("1".to_string()),
                },
            ],
        );
        assert_eq!(def.render_signature(), "add(a, b: int=1)");
    }

    #[test]
    fn drift_codes_and_callable() {
        let d = Drift::DefaultValue {
            callable: "add".to_string(),
            param: "b".to_string(),
            before: Some("1".to_string()),
            after: Some("2".to_string()),
        };
        assert_eq!(d.code(), "D001");
        assert_eq!(d.callable(), "add");
        assert!(d.to_string().contains("`b`"));
        assert!(d.to_string().contains("1 vs 2"));
    }

    #[test]
    fn drift_default_renders_missing_side() {
        let d = Drift::DefaultValue {
            callable: "f".to_string(),
            param: "x".to_string(),
            before: Some("1".to_string()),
            after: None,
        };
        assert!(d.to_string().contains("1 vs <none>"));
    }

    #[test]
    fn altered_code_error_counts_violations() {
        let err = AlteredCodeError {
            unit: "app".to_string(),
            violations: vec![
                Drift::Removed {
                    callable: "gone".to_string(),
                },
                Drift::Body {
                    callable: "f".to_string(),
                    before_lines: vec!["return 1".to_string()],
                    after_lines: vec!["return 2".to_string()],
                },
            ],
        };
        assert_eq!(err.to_string(), "2 hard drift violation(s) in `app`");
    }

    #[test]
    fn code_unit_find_by_qualified_name() {
        let unit = CodeUnit {
            name: "app".to_string(),
            callables: vec![callable("Account.deposit", vec![])],
        };
        assert!(unit.find("Account.deposit").is_some());
        assert!(unit.find("deposit").is_none());
    }
}
