use crate::domain::constants::{DEFAULT_DELAY, DEFAULT_TARGET};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: String,
}

/// Parameters of the comparison loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub target: String,
    /// Blocking pause after every non-matching attempt. Zero skips the sleep.
    pub delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            delay: DEFAULT_DELAY,
        }
    }
}

/// Display-only metadata about a run. Nothing here is ever contacted.
#[derive(Debug, Clone, Serialize)]
pub struct RunInfo {
    pub url: String,
    pub email: String,
    pub wordlist: PathBuf,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    Found {
        password: String,
        attempts: usize,
        #[serde(serialize_with = "as_secs")]
        elapsed: Duration,
    },
    NotFound {
        attempts: usize,
        #[serde(serialize_with = "as_secs")]
        elapsed: Duration,
    },
    Cancelled {
        attempts: usize,
        #[serde(serialize_with = "as_secs")]
        elapsed: Duration,
    },
}

impl ScanOutcome {
    pub fn attempts(&self) -> usize {
        match self {
            ScanOutcome::Found { attempts, .. }
            | ScanOutcome::NotFound { attempts, .. }
            | ScanOutcome::Cancelled { attempts, .. } => *attempts,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ScanOutcome::Found { .. })
    }
}

fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// JSON payload for a finished run: metadata plus outcome.
#[derive(Serialize)]
pub struct RunReport<'a> {
    pub run: &'a RunInfo,
    pub outcome: &'a ScanOutcome,
}
