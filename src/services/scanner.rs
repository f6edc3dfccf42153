use crate::domain::constants::PROGRESS_EVERY;
use crate::domain::models::{ScanConfig, ScanOutcome};
use crate::services::interrupt::CancelFlag;
use crate::services::report::Reporter;
use std::time::Instant;

/// Compares each candidate to `config.target` in order and stops at the first match.
///
/// A progress event fires whenever the attempt count reaches a multiple of
/// [`PROGRESS_EVERY`]. Non-matching attempts are followed by `config.delay`.
/// Cancellation is checked before every attempt.
pub fn scan(
    candidates: &[String],
    config: &ScanConfig,
    reporter: &mut dyn Reporter,
    cancel: &CancelFlag,
) -> ScanOutcome {
    let total = candidates.len();
    let start = Instant::now();
    let mut attempts = 0usize;

    tracing::debug!(total, delay = ?config.delay, "scan started");

    for candidate in candidates {
        if cancel.is_cancelled() {
            return cancelled(reporter, attempts, start);
        }

        attempts += 1;
        tracing::trace!(attempts, candidate = %candidate, "attempt");

        if attempts % PROGRESS_EVERY == 0 {
            reporter.progress(attempts, total, candidate);
        }

        if *candidate == config.target {
            let elapsed = start.elapsed();
            reporter.found(candidate, attempts, elapsed);
            return ScanOutcome::Found {
                password: candidate.clone(),
                attempts,
                elapsed,
            };
        }

        if !config.delay.is_zero() && cancel.sleep(config.delay) {
            return cancelled(reporter, attempts, start);
        }
    }

    // An interrupt that lands after the last comparison still wins over "not found".
    if cancel.is_cancelled() {
        return cancelled(reporter, attempts, start);
    }

    reporter.not_found(attempts);
    ScanOutcome::NotFound {
        attempts,
        elapsed: start.elapsed(),
    }
}

fn cancelled(reporter: &mut dyn Reporter, attempts: usize, start: Instant) -> ScanOutcome {
    tracing::warn!(attempts, "scan cancelled");
    reporter.cancelled();
    ScanOutcome::Cancelled {
        attempts,
        elapsed: start.elapsed(),
    }
}
