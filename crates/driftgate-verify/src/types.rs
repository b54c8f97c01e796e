use serde::{Deserialize, Serialize};

/// Aggregated outcome of verifying one code unit against its generated twin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "warning"
    pub unit: String,
    pub callables_checked: u32,
    pub outcomes: Vec<ComparisonOutcome>,
    pub soft_findings: Vec<SoftFinding>,
}

/// Per-callable comparison outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub qualified_name: String,
    pub signature_match: bool,
    pub annotation_mismatches: Vec<AnnotationMismatch>,
    pub body_match: bool,
}

/// A type annotation difference on a shape-identical parameter pair.
/// Logged, never fatal — annotations are exactly what the documentation
/// pass is asked to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMismatch {
    pub param: String,
    pub before: Option<String>,
    pub after: Option<String>,
}

/// A soft finding: reported in the success result, never aborts the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftFinding {
    pub code: String, // "S001" | "S002" | "S003"
    pub callable: String,
    pub message: String,
}
