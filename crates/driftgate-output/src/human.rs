use crate::OutputFormatter;
use driftgate_core::types::{AlteredCodeError, Drift};
use driftgate_verify::types::VerifyResult;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_verify(&self, result: &VerifyResult) -> String {
        let mut out = String::new();

        for f in &result.soft_findings {
            out.push_str(&format!("{} [{}] {}\n", f.code, f.callable, f.message));
        }

        out.push_str(&format!(
            "verify `{}`: {} — {} callable(s) checked, {} soft finding(s)\n",
            result.unit,
            result.status,
            result.callables_checked,
            result.soft_findings.len(),
        ));

        out
    }

    fn format_drift(&self, error: &AlteredCodeError) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "ALTERED CODE: {} hard drift violation(s) in `{}`\n",
            error.violations.len(),
            error.unit,
        ));

        for v in &error.violations {
            out.push_str(&format!("{} [{}] {}\n", v.code(), v.callable(), v));
            if let Drift::Body {
                before_lines,
                after_lines,
                ..
            } = v
            {
                out.push_str("  before:\n");
                for line in before_lines {
                    out.push_str(&format!("    | {line}\n"));
                }
                out.push_str("  after:\n");
                for line in after_lines {
                    out.push_str(&format!("    | {line}\n"));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftgate_verify::types::SoftFinding;

    #[test]
    fn test_format_verify_summary() {
        let result = VerifyResult {
            version: "0.1.0".to_string(),
            command: "verify".to_string(),
            status: "warning".to_string(),
            unit: "app".to_string(),
            callables_checked: 3,
            outcomes: vec![],
            soft_findings: vec![SoftFinding {
                code: "S002".to_string(),
                callable: "f".to_string(),
                message: "annotation mismatch for parameter `x`: <none> vs int".to_string(),
            }],
        };
        let out = HumanFormatter.format_verify(&result);
        assert!(out.contains("S002 [f]"));
        assert!(out.contains("3 callable(s) checked"));
        assert!(out.contains("warning"));
    }

    #[test]
    fn test_format_drift_includes_body_diff() {
        let err = AlteredCodeError {
            unit: "app".to_string(),
            violations: vec![Drift::Body {
                callable: "add".to_string(),
                before_lines: vec!["    return a + b".to_string()],
                after_lines: vec!["    return a + b + 1".to_string()],
            }],
        };
        let out = HumanFormatter.format_drift(&err);
        assert!(out.contains("ALTERED CODE: 1 hard drift violation(s)"));
        assert!(out.contains("D002 [add]"));
        // Each diff line is "    | " plus the line's own indentation.
        assert!(out.contains("    |     return a + b\n"));
        assert!(out.contains("    |     return a + b + 1\n"));
    }
}
