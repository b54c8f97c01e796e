//! Verification engine for driftgate.
//!
//! Compares callable definitions before and after an LLM documentation pass
//! and produces findings:
//! - S001: signature shape mismatch (names/order/count differ) — soft
//! - S002: annotation mismatch on an otherwise-equal shape — soft
//! - S003: callable added in the generated output — soft
//! - D001: default value changed on an otherwise-equal shape — hard
//! - D002: normalized body lines differ — hard
//! - D003: callable removed from the generated output — hard
//!
//! Soft findings are returned as data for the caller to log. Hard drift is
//! collected across all callables and raised once as a composite
//! [`AlteredCodeError`](driftgate_core::types::AlteredCodeError).

pub mod body;
pub mod engine;
pub mod signature;
pub mod types;

pub use engine::VerifyEngine;
