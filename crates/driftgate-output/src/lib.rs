//! Output formatters for driftgate command results.
//!
//! Two output modes:
//! - **Human** (default): terse terminal output with a summary line
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use driftgate_core::types::AlteredCodeError;
use driftgate_verify::types::VerifyResult;

pub trait OutputFormatter {
    fn format_verify(&self, result: &VerifyResult) -> String;
    fn format_drift(&self, error: &AlteredCodeError) -> String;
}
