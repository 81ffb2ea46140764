//! Breachwatch Library
//!
//! A Rust library for checking whether email addresses appear in known data
//! breaches via the BreachDirectory web API. This library provides
//! functionality to:
//!
//! - Look up a single email and classify the service's response
//! - Drive a batch of lookups with the free-tier inter-request delay
//! - Flatten matched breach records into a CSV report
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use breachwatch::lookup::{BreachClient, SilentEnv, DEFAULT_ENDPOINT};
//!
//! # async fn run() -> breachwatch::Result<()> {
//! let client = BreachClient::new(DEFAULT_ENDPOINT, Duration::from_secs(30))?;
//! let outcome = client.lookup("user@example.com", "api-key", &SilentEnv).await;
//! if outcome.is_found() {
//!     println!("breach data returned");
//! }
//! # Ok(())
//! # }
//! ```

// Re-export all modules for library use
pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod lookup;
pub mod records;
pub mod report;
pub mod style;

// Re-export commonly used types and functions for convenience
pub use batch::check_many;
pub use errors::{BreachwatchError, ErrorCategory, Result};
pub use lookup::{BreachClient, ProgressEnv, SilentEnv, DEFAULT_ENDPOINT};
pub use records::{
    BreachRecord, LookupFailure, LookupOutcome, LookupResults, NoDataKind, ReportRow,
};
pub use report::{default_report_path, write_report};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
