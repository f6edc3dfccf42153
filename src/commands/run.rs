use crate::cli::Cli;
use crate::domain::models::{RunInfo, ScanConfig, ScanOutcome};
use crate::services::interrupt::CancelFlag;
use crate::services::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::services::scanner::scan;
use crate::services::wordlist::{load_candidates, WordlistError};
use std::process::ExitCode;
use std::time::Duration;

/// Exit status when the wordlist cannot be opened.
const EXIT_WORDLIST: u8 = 1;

pub fn scan_config(cli: &Cli) -> ScanConfig {
    ScanConfig {
        target: cli.target.clone(),
        delay: Duration::from_millis(cli.delay_ms),
    }
}

pub fn handle_run(cli: &Cli, cancel: &CancelFlag) -> anyhow::Result<ExitCode> {
    let mut reporter: Box<dyn Reporter> = if cli.json {
        Box::new(JsonReporter::default())
    } else {
        Box::new(ConsoleReporter)
    };

    reporter.banner();

    match execute(cli, reporter.as_mut(), cancel) {
        Ok(outcome) => {
            tracing::info!(
                found = outcome.is_found(),
                attempts = outcome.attempts(),
                "run finished"
            );
            reporter.finish(&outcome)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, "wordlist unavailable");
            reporter.error(&e.to_string());
            Ok(ExitCode::from(EXIT_WORDLIST))
        }
    }
}

fn execute(
    cli: &Cli,
    reporter: &mut dyn Reporter,
    cancel: &CancelFlag,
) -> Result<ScanOutcome, WordlistError> {
    let candidates = load_candidates(&cli.wordlist)?;

    reporter.started(&RunInfo {
        url: cli.url.clone(),
        email: cli.email.clone(),
        wordlist: cli.wordlist.clone(),
        total: candidates.len(),
    });

    Ok(scan(&candidates, &scan_config(cli), reporter, cancel))
}
