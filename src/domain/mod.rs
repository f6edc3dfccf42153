//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — run configuration, outcome and JSON envelope structs.
//! - `constants.rs` — compiled-in defaults (target secret, per-attempt delay).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/terminal side effects.
//!
//! ## Compatibility note
//! `ScanOutcome` is serialized verbatim by `--json`; field renames are schema changes.

pub mod constants;
pub mod models;
