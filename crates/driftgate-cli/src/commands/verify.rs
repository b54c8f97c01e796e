use std::path::Path;

use driftgate_core::config::DriftgateConfig;
use driftgate_output::OutputFormatter;
use driftgate_parsers::load_unit;
use driftgate_verify::VerifyEngine;

pub(crate) fn engine_for(config: &DriftgateConfig) -> VerifyEngine {
    if config.verify.fingerprint_fast_path {
        VerifyEngine::new()
    } else {
        VerifyEngine::without_fast_path()
    }
}

pub fn run(formatter: &dyn OutputFormatter, verbose: bool, before: &str, after: &str) -> i32 {
    let config = DriftgateConfig::load(Path::new(".driftgate"));

    let before_unit = match load_unit(Path::new(before)) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("driftgate: error: {e}");
            return 2;
        }
    };
    let after_unit = match load_unit(Path::new(after)) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("driftgate: error: {e}");
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "driftgate: comparing {} callable(s) in `{}` against `{}`",
            before_unit.callables.len(),
            before_unit.name,
            after_unit.name,
        );
    }

    match engine_for(&config).verify_units(&before_unit, &after_unit) {
        Ok(result) => {
            print!("{}", formatter.format_verify(&result));
            if config.verify.strict && result.status == "warning" {
                1
            } else {
                0
            }
        }
        Err(err) => {
            print!("{}", formatter.format_drift(&err));
            1
        }
    }
}
