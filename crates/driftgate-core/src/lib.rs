//! Core types, drift taxonomy, fingerprinting, and configuration for driftgate.
//!
//! This crate provides the foundational data structures used across all driftgate crates:
//! - [`types`] — Code units, callable definitions, parameters, and drift errors
//! - [`hash`] — Deterministic callable fingerprints (base62 of xxhash64)
//! - [`config`] — Configuration loading from `.driftgate/driftgate.json`

pub mod config;
pub mod hash;
pub mod types;
