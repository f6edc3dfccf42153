use std::time::Duration;

/// Secret the demonstration scans for unless `--target` overrides it.
pub const DEFAULT_TARGET: &str = "Anasbliss";

pub const DEFAULT_DELAY_MS: u64 = 50;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(DEFAULT_DELAY_MS);

/// A progress line is emitted every time the attempt count hits a multiple of this.
pub const PROGRESS_EVERY: usize = 10;
