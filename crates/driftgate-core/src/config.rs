//! Configuration file loading for driftgate.
//!
//! Reads `.driftgate/driftgate.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level driftgate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftgateConfig {
    pub version: String,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
}

/// Generation backend settings (Ollama-style HTTP API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; 0 keeps the documentation pass deterministic.
    #[serde(default)]
    pub temperature: f64,
    /// Override for the built-in system prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Verification tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Exit non-zero when soft findings are present.
    #[serde(default)]
    pub strict: bool,
    /// Skip detailed comparison for pairs with equal fingerprints.
    #[serde(default = "default_true")]
    pub fingerprint_fast_path: bool,
}

fn default_base_url() -> String {
    "http://localhost:11434/api".to_string()
}
fn default_model() -> String {
    "codellama:13b-instruct".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: 0.0,
            system_prompt: None,
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            strict: false,
            fingerprint_fast_path: true,
        }
    }
}

impl Default for DriftgateConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            generator: GeneratorConfig::default(),
            verify: VerifyConfig::default(),
        }
    }
}

impl DriftgateConfig {
    /// Load configuration from `driftgate.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join("driftgate.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "driftgate: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let cfg = DriftgateConfig::default();
        assert_eq!(cfg.version, "0.1.0");
        assert_eq!(cfg.generator.base_url, "http://localhost:11434/api");
        assert_eq!(cfg.generator.model, "codellama:13b-instruct");
        assert_eq!(cfg.generator.temperature, 0.0);
        assert!(!cfg.verify.strict);
        assert!(cfg.verify.fingerprint_fast_path);
    }

    #[test]
    fn test_load_missing_file() {
        let cfg = DriftgateConfig::load(Path::new("/nonexistent"));
        assert_eq!(cfg.generator.model, "codellama:13b-instruct");
    }

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = serde_json::json!({
            "version": "0.2.0",
            "generator": { "base_url": "http://10.0.0.2:11434/api", "model": "wizardcoder:7b-python" },
            "verify": { "strict": true }
        });
        fs::write(dir.path().join("driftgate.json"), config.to_string()).unwrap();
        let cfg = DriftgateConfig::load(dir.path());
        assert_eq!(cfg.version, "0.2.0");
        assert_eq!(cfg.generator.base_url, "http://10.0.0.2:11434/api");
        assert_eq!(cfg.generator.model, "wizardcoder:7b-python");
        assert!(cfg.verify.strict);
        assert!(cfg.verify.fingerprint_fast_path); // default
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = serde_json::json!({
            "version": "0.1.0"
        });
        fs::write(dir.path().join("driftgate.json"), config.to_string()).unwrap();
        let cfg = DriftgateConfig::load(dir.path());
        assert_eq!(cfg.generator.model, "codellama:13b-instruct"); // default
        assert_eq!(cfg.generator.temperature, 0.0); // default
        assert!(!cfg.verify.strict); // default
    }
}
