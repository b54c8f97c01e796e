//! Signature comparator: parameter names, order, annotations, defaults.

use driftgate_core::types::{CallableDefinition, Drift};

use crate::types::AnnotationMismatch;

/// Outcome of comparing two parameter lists. The comparator never raises;
/// a default-value drift is carried as a value for the aggregator to report.
#[derive(Debug, Clone)]
pub struct SignatureComparison {
    pub matched: bool,
    pub annotation_mismatches: Vec<AnnotationMismatch>,
    pub default_drift: Option<Drift>,
}

/// Compare the parameter lists of `before` and `after`.
///
/// A wholesale shape change (count, names, or order) returns `matched =
/// false` with no further checks: changing a signature outright is ambiguous
/// from the source alone and may be an intentional edit, so the caller
/// decides. A changed default on an *unchanged* shape is different — callers
/// that omit the argument silently get new behavior — and is always hard
/// drift. This asymmetry is a deliberate policy, not an inconsistency.
pub fn compare_signatures(
    before: &CallableDefinition,
    after: &CallableDefinition,
) -> SignatureComparison {
    let before_names: Vec<&str> = before.parameters.iter().map(|p| p.name.as_str()).collect();
    let after_names: Vec<&str> = after.parameters.iter().map(|p| p.name.as_str()).collect();

    if before_names != after_names {
        return SignatureComparison {
            matched: false,
            annotation_mismatches: Vec::new(),
            default_drift: None,
        };
    }

    let mut annotation_mismatches = Vec::new();
    for (pb, pa) in before.parameters.iter().zip(after.parameters.iter()) {
        if pb.annotation != pa.annotation {
            annotation_mismatches.push(AnnotationMismatch {
                param: pb.name.clone(),
                before: pb.annotation.clone(),
                after: pa.annotation.clone(),
            });
        }

        if pb.default != pa.default {
            // Stop at the first changed default; one is enough to fail the pair.
            return SignatureComparison {
                matched: false,
                annotation_mismatches,
                default_drift: Some(Drift::DefaultValue {
                    callable: before.qualified_name.clone(),
                    param: pb.name.clone(),
                    before: pb.default.clone(),
                    after: pa.default.clone(),
                }),
            };
        }
    }

    SignatureComparison {
        matched: true,
        annotation_mismatches,
        default_drift: None,
    }
}
