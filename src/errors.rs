//! Unified error handling for breachwatch.
//!
//! A `thiserror`-based model with:
//!   * Typed variants for the failure domains of a run (input resolution,
//!     HTTP client construction, report flattening, report I/O)
//!   * A categorization layer (`ErrorCategory`) for reporting
//!   * Helper constructors
//!
//! Per-email lookup failures are deliberately NOT represented here: a failed
//! call is a `LookupOutcome`, reported on the console, and the batch moves on
//! to the next email. Only conditions that abort the whole invocation become
//! errors.

use std::io;

use thiserror::Error;

/// High-level classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Parse,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Network => "network",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum BreachwatchError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Error opening email list file {path}: {source}")]
    EmailList {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error opening API key file {path}: {source}")]
    Credential {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ----------------------------- Network ----------------------------------
    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    // ---------------------------- Reporting ---------------------------------
    #[error("Unexpected breach payload shape for {email}: {reason}")]
    ReportShape { email: String, reason: String },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl BreachwatchError {
    /// Categorize the error for reporting.
    pub fn category(&self) -> ErrorCategory {
        use BreachwatchError::*;
        match self {
            EmailList { .. } | Credential { .. } | Configuration { .. } => ErrorCategory::Input,
            HttpClient { .. } => ErrorCategory::Network,
            ReportShape { .. } => ErrorCategory::Parse,
            Io { .. } => ErrorCategory::Internal,
        }
    }

    // ---------------------------- Constructors -----------------------------

    pub fn email_list(path: impl Into<String>, source: io::Error) -> Self {
        Self::EmailList {
            path: path.into(),
            source,
        }
    }

    pub fn credential(path: impl Into<String>, source: io::Error) -> Self {
        Self::Credential {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn report_shape(email: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReportShape {
            email: email.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, BreachwatchError>;

/// Map standard IO errors into `Io` variant (generic context).
impl From<io::Error> for BreachwatchError {
    fn from(e: io::Error) -> Self {
        BreachwatchError::Io {
            path: "<unknown>".into(),
            operation: "unspecified".into(),
            source: e,
        }
    }
}

/// Extension trait for enriching IO results with path + operation context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| BreachwatchError::io(path.into(), operation.into(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping() {
        assert_eq!(
            BreachwatchError::configuration("bad").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            BreachwatchError::report_shape("a@x.com", "not a list").category(),
            ErrorCategory::Parse
        );
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(
            BreachwatchError::email_list("emails.csv", io_err).category(),
            ErrorCategory::Input
        );
    }

    #[test]
    fn display_snippets() {
        let e = BreachwatchError::report_shape("a@x.com", "expected a sequence");
        let s = e.to_string();
        assert!(s.contains("a@x.com"));
        assert!(s.contains("expected a sequence"));
        let c = BreachwatchError::configuration("boom");
        assert!(c.to_string().contains("Configuration error"));
    }

    #[test]
    fn io_context() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let mapped = res.with_path("/tmp/report.csv", "create");
        match mapped.err().unwrap() {
            BreachwatchError::Io {
                path, operation, ..
            } => {
                assert_eq!(path, "/tmp/report.csv");
                assert_eq!(operation, "create");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
