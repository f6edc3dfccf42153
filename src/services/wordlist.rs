use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file '{}' not found.", .path.display())]
    NotFound { path: PathBuf },
    #[error("Wordlist file '{}' could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads `path` as Latin-1 text and returns its lines in file order.
///
/// Every byte maps to the code point with the same value, so arbitrary
/// binary content loads without a decoding error. `\n` and `\r\n`
/// terminators are stripped; duplicates and empty interior lines are kept.
pub fn load_candidates(path: &Path) -> Result<Vec<String>, WordlistError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WordlistError::NotFound {
            path: path.to_path_buf(),
        },
        _ => WordlistError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = decode_latin1(&bytes);
    let candidates: Vec<String> = text.lines().map(str::to_string).collect();

    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        candidates = candidates.len(),
        "wordlist loaded"
    );
    Ok(candidates)
}

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
