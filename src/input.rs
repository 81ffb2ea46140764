//! Input resolution: email list files and API key files.

use std::fs;
use std::path::Path;

use crate::errors::{BreachwatchError, Result};
use crate::lookup::ProgressEnv;

/// Read the emails to check from the first row of a delimited file.
///
/// Cells are comma-separated; surrounding whitespace and double quotes are
/// stripped and empty cells dropped. Only the first row is read.
///
/// An unreadable file fails the whole invocation: the batch driver produces
/// either all outcomes or none.
pub fn read_email_row(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| BreachwatchError::email_list(path.display().to_string(), e))?;
    let first_row = content.lines().next().unwrap_or("");
    Ok(first_row
        .split(',')
        .map(|cell| cell.trim().trim_matches('"').trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect())
}

/// Load the API key as the entire trimmed contents of `path`.
///
/// An empty or whitespace-only file is advisory: a warning is printed and the
/// empty string is returned, leaving the remote service authoritative about
/// rejecting it. A missing or unreadable file is a fatal input error.
pub fn load_api_key<E: ProgressEnv + ?Sized>(path: impl AsRef<Path>, env: &E) -> Result<String> {
    let path = path.as_ref();
    let api_key = fs::read_to_string(path)
        .map_err(|e| BreachwatchError::credential(path.display().to_string(), e))?
        .trim()
        .to_string();
    if api_key.is_empty() {
        if env.error_enabled() {
            eprintln!("API key not found in the specified file.");
        }
    } else if env.progress_enabled() {
        println!("API key loaded successfully.");
    }
    Ok(api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::SilentEnv;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_only_the_first_row() {
        let file = write_temp("a@x.com,b@y.com\nc@z.com,d@w.com\n");
        let emails = read_email_row(file.path()).unwrap();
        assert_eq!(emails, vec!["a@x.com", "b@y.com"]);
    }

    #[test]
    fn strips_quotes_and_whitespace_and_drops_empty_cells() {
        let file = write_temp(" \"a@x.com\" ,  b@y.com ,, \"\" \n");
        let emails = read_email_row(file.path()).unwrap();
        assert_eq!(emails, vec!["a@x.com", "b@y.com"]);
    }

    #[test]
    fn empty_file_yields_no_emails() {
        let file = write_temp("");
        let emails = read_email_row(file.path()).unwrap();
        assert!(emails.is_empty());
    }

    #[test]
    fn missing_list_file_is_fatal() {
        let err = read_email_row("/nonexistent/emails.csv").unwrap_err();
        match err {
            BreachwatchError::EmailList { path, .. } => {
                assert!(path.contains("emails.csv"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn api_key_is_trimmed() {
        let file = write_temp("  abc123\n");
        let key = load_api_key(file.path(), &SilentEnv).unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn whitespace_only_key_file_yields_empty_string_not_an_error() {
        let file = write_temp("   \n\t\n");
        let key = load_api_key(file.path(), &SilentEnv).unwrap();
        assert_eq!(key, "");
    }

    #[test]
    fn missing_key_file_is_fatal() {
        let err = load_api_key("/nonexistent/key.txt", &SilentEnv).unwrap_err();
        assert!(matches!(err, BreachwatchError::Credential { .. }));
    }
}
