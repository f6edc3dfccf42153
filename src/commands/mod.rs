//! Command handler layer.
//!
//! Owns CLI-oriented orchestration: picks a reporter, loads the wordlist,
//! runs the scan and maps the result to an exit code. Business logic lives
//! in `services/*`.

pub mod run;

pub use run::handle_run;
