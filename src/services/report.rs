//! Presentation side of a run. The scanner only sees [`Reporter`].

use crate::domain::models::{RunInfo, RunReport, ScanOutcome};
use crate::services::output::{print_err, print_one};
use colored::Colorize;
use std::time::Duration;

pub trait Reporter {
    fn banner(&mut self);
    fn started(&mut self, run: &RunInfo);
    fn progress(&mut self, attempts: usize, total: usize, last_checked: &str);
    fn found(&mut self, password: &str, attempts: usize, elapsed: Duration);
    fn not_found(&mut self, attempts: usize);
    fn cancelled(&mut self);
    fn error(&mut self, message: &str);

    /// Called once with the final outcome, after the matching event above.
    fn finish(&mut self, _outcome: &ScanOutcome) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Colored human-readable output on stdout; errors on stderr.
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn banner(&mut self) {
        println!(
            "{}",
            "⚠️  IMPORTANT: This tool is for EDUCATIONAL PURPOSES ONLY ⚠️"
                .red()
                .bold()
        );
        println!(
            "{}",
            "Do NOT use this tool for unauthorized access to systems!\n".yellow()
        );
    }

    fn started(&mut self, run: &RunInfo) {
        println!("{}", "\n[*] Brute Force Demonstration Started".yellow());
        println!("{}", format!("[*] Target URL: {}", run.url).cyan());
        println!("{}", format!("[*] Target Email: {}", run.email).cyan());
        println!(
            "{}",
            format!("[*] Wordlist: {}", run.wordlist.display()).cyan()
        );
        println!(
            "{}",
            format!("[*] Total Passwords in List: {}\n", run.total).cyan()
        );
    }

    fn progress(&mut self, attempts: usize, total: usize, last_checked: &str) {
        println!(
            "{}",
            format!("\n[+] Attempts: {attempts}/{total} | LastChecked : {last_checked}").blue()
        );
    }

    fn found(&mut self, password: &str, attempts: usize, elapsed: Duration) {
        println!("\n{}", "🎉 PASSWORD FOUND! 🎉".green().bold());
        println!("{}", format!("[+] Password: {password}").green());
        println!("{}", format!("[+] Total Attempts: {attempts}").green());
        println!(
            "{}",
            format!("[+] Time Taken: {:.2} seconds", elapsed.as_secs_f64()).green()
        );
    }

    fn not_found(&mut self, attempts: usize) {
        println!("\n{}", "❌ Password not found in wordlist ❌".red().bold());
        println!("{}", format!("[*] Total Attempts: {attempts}").red());
    }

    fn cancelled(&mut self) {
        println!("{}", "\n\n[!] Operation cancelled by user.".yellow());
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", format!("Error: {message}").red());
    }
}

/// Quiet during the run; prints one JSON envelope when the run ends.
#[derive(Default)]
pub struct JsonReporter {
    run: Option<RunInfo>,
}

impl Reporter for JsonReporter {
    fn banner(&mut self) {}

    fn started(&mut self, run: &RunInfo) {
        self.run = Some(run.clone());
    }

    fn progress(&mut self, _attempts: usize, _total: usize, _last_checked: &str) {}

    fn found(&mut self, _password: &str, _attempts: usize, _elapsed: Duration) {}

    fn not_found(&mut self, _attempts: usize) {}

    fn cancelled(&mut self) {}

    fn error(&mut self, message: &str) {
        if let Err(e) = print_err(message) {
            tracing::warn!(error = %e, "failed to serialize error envelope");
        }
    }

    fn finish(&mut self, outcome: &ScanOutcome) -> anyhow::Result<()> {
        match &self.run {
            Some(run) => print_one(&RunReport { run, outcome }),
            None => print_one(outcome),
        }
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Banner,
    Started { total: usize },
    Progress {
        attempts: usize,
        total: usize,
        last_checked: String,
    },
    Found {
        password: String,
        attempts: usize,
    },
    NotFound { attempts: usize },
    Cancelled,
    Error(String),
}

/// Keeps every event in memory; lets the loop be checked without a terminal.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn progress_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Progress { .. }))
            .collect()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn banner(&mut self) {
        self.events.push(Event::Banner);
    }

    fn started(&mut self, run: &RunInfo) {
        self.events.push(Event::Started { total: run.total });
    }

    fn progress(&mut self, attempts: usize, total: usize, last_checked: &str) {
        self.events.push(Event::Progress {
            attempts,
            total,
            last_checked: last_checked.to_string(),
        });
    }

    fn found(&mut self, password: &str, attempts: usize, _elapsed: Duration) {
        self.events.push(Event::Found {
            password: password.to_string(),
            attempts,
        });
    }

    fn not_found(&mut self, attempts: usize) {
        self.events.push(Event::NotFound { attempts });
    }

    fn cancelled(&mut self) {
        self.events.push(Event::Cancelled);
    }

    fn error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }
}
