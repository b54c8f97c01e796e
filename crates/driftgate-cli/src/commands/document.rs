use std::fs;
use std::path::{Path, PathBuf};

use driftgate_core::config::DriftgateConfig;
use driftgate_generate::GenerateClient;
use driftgate_output::OutputFormatter;
use driftgate_parsers::parse_unit;

use super::verify::engine_for;

/// Generate documentation for `file`, verify the result against the original,
/// and write it out only when verification passes. Fail-closed: hard drift
/// means nothing durable is written, and under `verify.strict` the same goes
/// for soft findings.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    file: &str,
    inline: bool,
    out: Option<&str>,
) -> i32 {
    let config = DriftgateConfig::load(Path::new(".driftgate"));
    let path = Path::new(file);

    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("driftgate: error: failed to read {file}: {e}");
            return 2;
        }
    };
    let unit_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string());

    let before_unit = match parse_unit(&unit_name, &source) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("driftgate: error: {e}");
            return 2;
        }
    };

    let client = GenerateClient::from_config(&config.generator);
    if verbose {
        eprintln!(
            "driftgate: requesting documentation for `{unit_name}` from {}",
            config.generator.model,
        );
    }
    let documented = match client.generate_comments(&source, inline) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("driftgate: error: {e}");
            return 2;
        }
    };

    // Generated text that doesn't even parse is rejected outright.
    let after_unit = match parse_unit(&unit_name, &documented) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("driftgate: error: generated output rejected: {e}");
            return 2;
        }
    };

    match engine_for(&config).verify_units(&before_unit, &after_unit) {
        Ok(result) => {
            if !accept_result(config.verify.strict, &result.status) {
                print!("{}", formatter.format_verify(&result));
                eprintln!("driftgate: soft findings rejected under strict mode, nothing written");
                return 1;
            }
            let out_path = output_path(path, out);
            if let Err(e) = fs::write(&out_path, &documented) {
                eprintln!(
                    "driftgate: error: failed to write {}: {e}",
                    out_path.display()
                );
                return 2;
            }
            print!("{}", formatter.format_verify(&result));
            eprintln!("driftgate: wrote {}", out_path.display());
            0
        }
        Err(err) => {
            print!("{}", formatter.format_drift(&err));
            eprintln!("driftgate: generated output rejected, nothing written");
            1
        }
    }
}

/// Whether a successful verification is accepted for writing. Strict mode
/// treats soft findings as a rejection.
fn accept_result(strict: bool, status: &str) -> bool {
    !(strict && status == "warning")
}

fn output_path(input: &Path, out: Option<&str>) -> PathBuf {
    match out {
        Some(p) => PathBuf::from(p),
        None => {
            let file_name = input
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "out.py".to_string());
            input.with_file_name(format!("doc_{file_name}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_prefixes_name() {
        let out = output_path(Path::new("data/app_2.py"), None);
        assert_eq!(out, PathBuf::from("data/doc_app_2.py"));
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let out = output_path(Path::new("data/app.py"), Some("annotated/app.py"));
        assert_eq!(out, PathBuf::from("annotated/app.py"));
    }

    #[test]
    fn test_strict_mode_rejects_soft_findings() {
        assert!(accept_result(false, "ok"));
        assert!(accept_result(false, "warning"));
        assert!(accept_result(true, "ok"));
        assert!(!accept_result(true, "warning"));
    }
}
