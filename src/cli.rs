use crate::domain::constants::{DEFAULT_DELAY_MS, DEFAULT_TARGET};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wordlist-demo",
    version,
    about = "Brute Force Password Demonstration",
    long_about = "Scans a wordlist for a secret compiled into the binary. \
                  No network request is ever made; --url and --email are only displayed."
)]
pub struct Cli {
    #[arg(short, long, help = "Target URL (for demonstration only)")]
    pub url: String,
    #[arg(short, long, help = "Target email (for demonstration only)")]
    pub email: String,
    #[arg(short, long, help = "Path to wordlist file")]
    pub wordlist: PathBuf,
    #[arg(
        long,
        default_value_t = DEFAULT_DELAY_MS,
        help = "Pause after each failed attempt, in milliseconds (0 disables)"
    )]
    pub delay_ms: u64,
    #[arg(long, default_value = DEFAULT_TARGET, hide = true)]
    pub target: String,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
}
