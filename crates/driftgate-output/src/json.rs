use crate::OutputFormatter;
use driftgate_core::types::AlteredCodeError;
use driftgate_verify::types::VerifyResult;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_verify(&self, result: &VerifyResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_drift(&self, error: &AlteredCodeError) -> String {
        serde_json::to_string_pretty(error).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftgate_core::types::Drift;

    #[test]
    fn test_drift_json_is_tagged() {
        let err = AlteredCodeError {
            unit: "app".to_string(),
            violations: vec![Drift::DefaultValue {
                callable: "add".to_string(),
                param: "b".to_string(),
                before: Some("1".to_string()),
                after: Some("2".to_string()),
            }],
        };
        let out = JsonFormatter.format_drift(&err);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["unit"], "app");
        assert_eq!(value["violations"][0]["kind"], "default_value");
        assert_eq!(value["violations"][0]["param"], "b");
    }
}
