use std::collections::HashMap;

use driftgate_core::hash::fingerprint;
use driftgate_core::types::{AlteredCodeError, CodeUnit, Drift};

use crate::body::compare_bodies;
use crate::signature::compare_signatures;
use crate::types::{ComparisonOutcome, SoftFinding, VerifyResult};

/// Drift reporter. Pairs callables by qualified name, runs both comparators
/// per pair, and aggregates the findings for a whole code unit.
pub struct VerifyEngine {
    fingerprint_fast_path: bool,
}

impl VerifyEngine {
    pub fn new() -> Self {
        Self {
            fingerprint_fast_path: true,
        }
    }

    /// Disable the fingerprint short-circuit so every pair runs through the
    /// full comparators.
    pub fn without_fast_path() -> Self {
        Self {
            fingerprint_fast_path: false,
        }
    }

    /// Verify `after` (untrusted generated output) against `before`.
    ///
    /// Soft findings never interrupt processing. Hard drift is collected
    /// across *all* callables and raised once as a composite error, so a
    /// generation pass that corrupts several functions is reported in full
    /// in a single run. Fails closed: any hard drift means the caller must
    /// reject the entire generated output.
    pub fn verify_units(
        &self,
        before: &CodeUnit,
        after: &CodeUnit,
    ) -> Result<VerifyResult, AlteredCodeError> {
        let mut outcomes = Vec::new();
        let mut soft_findings = Vec::new();
        let mut violations = Vec::new();

        let after_by_name: HashMap<&str, &driftgate_core::types::CallableDefinition> = after
            .callables
            .iter()
            .map(|c| (c.qualified_name.as_str(), c))
            .collect();

        for before_def in &before.callables {
            let Some(after_def) = after_by_name.get(before_def.qualified_name.as_str()) else {
                violations.push(Drift::Removed {
                    callable: before_def.qualified_name.clone(),
                });
                continue;
            };

            if self.fingerprint_fast_path && fingerprint(before_def) == fingerprint(after_def) {
                outcomes.push(ComparisonOutcome {
                    qualified_name: before_def.qualified_name.clone(),
                    signature_match: true,
                    annotation_mismatches: Vec::new(),
                    body_match: true,
                });
                continue;
            }

            let sig = compare_signatures(before_def, after_def);
            if !sig.matched && sig.default_drift.is_none() {
                soft_findings.push(SoftFinding {
                    code: "S001".to_string(),
                    callable: before_def.qualified_name.clone(),
                    message: format!(
                        "signature shape changed: `{}` vs `{}`",
                        before_def.render_signature(),
                        after_def.render_signature(),
                    ),
                });
            }
            for m in &sig.annotation_mismatches {
                soft_findings.push(SoftFinding {
                    code: "S002".to_string(),
                    callable: before_def.qualified_name.clone(),
                    message: format!(
                        "annotation mismatch for parameter `{}`: {} vs {}",
                        m.param,
                        m.before.as_deref().unwrap_or("<none>"),
                        m.after.as_deref().unwrap_or("<none>"),
                    ),
                });
            }
            if let Some(drift) = sig.default_drift.clone() {
                violations.push(drift);
            }

            let body = compare_bodies(before_def, after_def);
            if let Some(drift) = body.drift {
                violations.push(drift);
            }

            outcomes.push(ComparisonOutcome {
                qualified_name: before_def.qualified_name.clone(),
                signature_match: sig.matched,
                annotation_mismatches: sig.annotation_mismatches,
                body_match: body.matched,
            });
        }

        // Callables only present in the generated output
        for after_def in &after.callables {
            if before.find(&after_def.qualified_name).is_none() {
                soft_findings.push(SoftFinding {
                    code: "S003".to_string(),
                    callable: after_def.qualified_name.clone(),
                    message: format!(
                        "callable `{}` appears only in the generated output",
                        after_def.qualified_name,
                    ),
                });
            }
        }

        if !violations.is_empty() {
            return Err(AlteredCodeError {
                unit: before.name.clone(),
                violations,
            });
        }

        let status = if soft_findings.is_empty() {
            "ok"
        } else {
            "warning"
        };

        Ok(VerifyResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "verify".to_string(),
            status: status.to_string(),
            unit: before.name.clone(),
            callables_checked: outcomes.len() as u32,
            outcomes,
            soft_findings,
        })
    }
}

impl Default for VerifyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
