//! Service layer containing the scan pipeline and its side-effect helpers.
//!
//! ## Service map
//! - `wordlist.rs` — candidate loading (Latin-1 decode, line split).
//! - `scanner.rs` — the sequential comparison loop.
//! - `report.rs` — `Reporter` trait plus console/JSON implementations.
//! - `interrupt.rs` — Ctrl-C wiring into a cancellation flag.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON envelope helpers.
//!
//! ## Conventions
//! - The scanner stays free of terminal formatting; it talks to `Reporter` only.
//! - Side effects should be explicit and localized.

pub mod interrupt;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;
pub mod wordlist;
